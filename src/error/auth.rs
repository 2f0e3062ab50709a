use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::dto::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user id stored in the session. Results in 401.
    #[error("No authenticated user in session")]
    UserNotInSession,

    /// The session references a user that no longer exists. Results in 401.
    #[error("Session user {0} no longer exists")]
    UserNotInDatabase(i32),

    /// Login attempt with a wrong email or password. Results in 401. The
    /// message never reveals which of the two was wrong.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Authenticated user lacks the required profile. Results in 403.
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),
}

/// Maps authentication errors to HTTP responses. Client-facing messages stay
/// generic; the detailed variants are logged by the caller through tracing.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Not authenticated".to_string(),
                }),
            )
                .into_response(),
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Invalid email or password".to_string(),
                }),
            )
                .into_response(),
            Self::AccessDenied(..) => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto {
                    error: "Access denied".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
