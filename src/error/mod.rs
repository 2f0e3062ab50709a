//! Error types and HTTP response handling.
//!
//! `AppError` is the top-level error type that wraps domain-specific errors
//! and implements `IntoResponse` so handlers can return `Result<_, AppError>`
//! and get the right status code and JSON body for free.

pub mod auth;
pub mod config;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    dto::api::{ErrorDto, ValidationErrorsDto},
    error::{auth::AuthError, config::ConfigError, validation::ValidationErrors},
};

#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error.
    ///
    /// Delegates to `AuthError::into_response()` for status code mapping
    /// (401 Unauthorized, 403 Forbidden).
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Session store operation error.
    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// I/O error while binding or serving.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Record validation failure.
    ///
    /// Results in 422 Unprocessable Entity with the field-keyed message map
    /// in the response body.
    #[error("validation failed")]
    Validation(#[from] ValidationErrors),

    /// Resource not found. Results in 404 with the provided message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request. Results in 400 with the provided message.
    #[error("{0}")]
    BadRequest(String),

    /// Internal server error with custom message. The message is logged but a
    /// generic body is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::Validation(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ValidationErrorsDto::from(errors)),
            )
                .into_response(),
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: msg })).into_response()
            }
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: msg })).into_response()
            }
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

/// Wrapper that converts any displayable error into a 500 response.
///
/// The full error is logged server-side; the client gets a generic message.
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
