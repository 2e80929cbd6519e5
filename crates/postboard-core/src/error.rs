//! Domain-level error types.

use thiserror::Error;

/// Message carried by a rejected create request.
pub const MISSING_REQUIRED_FIELDS: &str = "Missing required fields";

/// Domain errors - business logic failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("Post not found")]
    NotFound { id: String },

    #[error("{0}")]
    Validation(String),
}

impl DomainError {
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    pub fn missing_required_fields() -> Self {
        Self::Validation(MISSING_REQUIRED_FIELDS.to_string())
    }
}
