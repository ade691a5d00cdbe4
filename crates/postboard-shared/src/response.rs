//! Error body returned by every JSON error response.

use serde::{Deserialize, Serialize};

/// Error body: the underlying error text and nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_shape() {
        let body = serde_json::to_value(ErrorResponse::new("Entity not found")).unwrap();
        assert_eq!(body, serde_json::json!({ "message": "Entity not found" }));
    }
}
