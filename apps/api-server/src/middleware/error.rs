//! Error handling - maps failures to `{"error": ...}` JSON responses.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use postboard_core::DomainError;
use postboard_shared::ErrorResponse;
use thiserror::Error;

/// Application-level error type rendered as an [`ErrorResponse`].
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse::new(self.to_string()))
    }
}

// Conversion from domain errors
impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound { id } => {
                tracing::debug!(post_id = %id, "Post not found");
                AppError::NotFound(ErrorResponse::post_not_found().error)
            }
            DomainError::Validation(msg) => {
                tracing::debug!(reason = %msg, "Validation failed");
                AppError::BadRequest(msg)
            }
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
