use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No authenticated user id is stored in the session.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("No user in session")]
    UserNotInSession,

    /// The session references a user that no longer exists or is deactivated.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(String),

    /// The user is authenticated but lacks a required permission.
    ///
    /// Results in a 403 Forbidden response. The reason is only logged.
    #[error("User {0} denied access: {1}")]
    AccessDenied(String, String),
}

/// Converts authentication errors into HTTP responses.
///
/// Details are logged at debug level; client-facing messages stay generic.
///
/// # Returns
/// - 401 Unauthorized - For missing or unknown session users
/// - 403 Forbidden - For insufficient permissions
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Authentication required".to_string(),
                }),
            )
                .into_response(),
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto {
                    error: "Admin access required".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
