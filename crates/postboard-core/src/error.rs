//! Domain-level error types.

use std::time::Duration;

use bson::oid::ObjectId;
use thiserror::Error;

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound {
        entity_type: &'static str,
        id: ObjectId,
    },

    #[error("Invalid id: {0}")]
    InvalidId(String),
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Operation timed out after {0:?}")]
    Timeout(Duration),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let id = ObjectId::parse_str("65a1f0c2e4b0a1b2c3d4e5f6").unwrap();
        let err = DomainError::NotFound {
            entity_type: "Post",
            id,
        };
        assert_eq!(
            err.to_string(),
            "Entity not found: Post with id 65a1f0c2e4b0a1b2c3d4e5f6"
        );
    }

    #[test]
    fn test_timeout_message() {
        let err = RepoError::Timeout(Duration::from_secs(10));
        assert_eq!(err.to_string(), "Operation timed out after 10s");
    }
}
