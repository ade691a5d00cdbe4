//! Domain entities - the core business objects.

mod user;

mod post;

pub use bson::oid::ObjectId;
pub use post::Post;
pub use user::User;

use crate::error::DomainError;

/// Parse a store identifier from its 24-character hex form.
pub fn parse_object_id(raw: &str) -> Result<ObjectId, DomainError> {
    ObjectId::parse_str(raw).map_err(|_| DomainError::InvalidId(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_object_id_accepts_hex() {
        let id = ObjectId::new();
        assert_eq!(parse_object_id(&id.to_hex()).unwrap(), id);
    }

    #[test]
    fn test_parse_object_id_rejects_garbage() {
        let err = parse_object_id("not-an-id").unwrap_err();
        assert!(matches!(err, DomainError::InvalidId(ref raw) if raw == "not-an-id"));
        assert_eq!(err.to_string(), "Invalid id: not-an-id");
    }
}
