//! Error handling - maps failures to `{"message": ...}` responses.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use postboard_core::error::{DomainError, RepoError};
use postboard_core::ports::AuthError;
use postboard_shared::ErrorResponse;
use std::fmt;

/// Application-level error type rendered as an [`ErrorResponse`] body.
///
/// Both kinds answer 500. A failed lookup (unknown or unparsable id) is not
/// logged as a server fault; everything else is.
#[derive(Debug)]
pub enum AppError {
    Lookup(String),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Lookup(msg) => write!(f, "{}", msg),
            AppError::Internal(msg) => write!(f, "{}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::Lookup(message) => {
                tracing::debug!("Lookup failed: {}", message);
            }
            AppError::Internal(message) => {
                tracing::error!("Internal error: {}", message);
            }
        }

        HttpResponse::build(self.status_code()).json(ErrorResponse::new(self.to_string()))
    }
}

// Conversion from domain errors
impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        AppError::Lookup(err.to_string())
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        AppError::Internal(err.to_string())
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
