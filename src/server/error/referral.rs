use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Errors raised by tier and override administration, bonus resolution and the
/// entity analytics lookups.
#[derive(Error, Debug)]
pub enum ReferralError {
    /// Override or resolution requested for a nonexistent user.
    #[error("User {0} not found")]
    UserNotFound(String),

    /// Bonus percentage outside `0..=100` (or not a finite number).
    #[error("Bonus percentage must be between 0 and 100, got {0}")]
    InvalidPercentage(f64),

    /// Tier bounds that cannot describe a band.
    #[error("Invalid tier bounds: min {min}, max {max:?}")]
    InvalidTierBounds { min: i32, max: Option<i32> },

    /// Campaign window whose end precedes its start.
    #[error("Campaign end date must not be before its start date")]
    InvalidDateRange,

    /// Client override without a justification.
    #[error("Client override reason must not be empty")]
    MissingReason,

    #[error("Tier {0} not found")]
    TierNotFound(String),

    #[error("Global override {0} not found")]
    GlobalOverrideNotFound(String),

    #[error("No client override found for user {0}")]
    ClientOverrideNotFound(String),

    #[error("Game {0} not found")]
    GameNotFound(String),
}

/// Converts referral errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For input validation failures
/// - 404 Not Found - For missing users, tiers, overrides and games
impl IntoResponse for ReferralError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::InvalidPercentage(_)
            | Self::InvalidTierBounds { .. }
            | Self::InvalidDateRange
            | Self::MissingReason => StatusCode::BAD_REQUEST,
            Self::UserNotFound(_)
            | Self::TierNotFound(_)
            | Self::GlobalOverrideNotFound(_)
            | Self::ClientOverrideNotFound(_)
            | Self::GameNotFound(_) => StatusCode::NOT_FOUND,
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
