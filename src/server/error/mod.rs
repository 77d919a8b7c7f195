//! Error types and HTTP response handling.
//!
//! `AppError` is the top-level error type. It wraps the domain errors and implements
//! `IntoResponse` so controllers can return it directly.

pub mod auth;
pub mod config;
pub mod referral;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError, referral::ReferralError},
};

/// Top-level application error type.
///
/// Domain errors (`AuthError`, `ReferralError`) map themselves to status codes;
/// infrastructure errors become a 500 with a generic message.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error.
    ///
    /// Delegates to `AuthError::into_response()` (401 or 403).
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Referral tier, override or analytics lookup error.
    ///
    /// Delegates to `ReferralError::into_response()` (400 or 404).
    #[error(transparent)]
    ReferralErr(#[from] ReferralError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Session store operation error.
    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// Failure binding or serving the HTTP listener.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Internal server error with custom message.
    ///
    /// The message is logged but a generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - Variable - For `AuthErr` and `ReferralErr`, delegated to the domain error
/// - 500 Internal Server Error - For everything else
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::ReferralErr(err) => err.into_response(),
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper converting any displayable error into a 500 response.
///
/// Logs the error and returns a generic message so implementation details never
/// reach the client.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
