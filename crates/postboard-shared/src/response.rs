//! Error body returned by every failing endpoint.

use serde::{Deserialize, Serialize};

/// `{"error": "<message>"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }

    pub fn post_not_found() -> Self {
        Self::new("Post not found")
    }

    pub fn invalid_body() -> Self {
        Self::new("Invalid request body")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_as_error_object() {
        let body = serde_json::to_string(&ErrorResponse::post_not_found()).unwrap();
        assert_eq!(body, r#"{"error":"Post not found"}"#);
    }
}
