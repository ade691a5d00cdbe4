//! User document for MongoDB.

use serde::{Deserialize, Serialize};

use postboard_core::domain::{ObjectId, User};

use crate::database::mongo_base::StoredDocument;

/// Stored form of a user. Empty strings are omitted on write and read back
/// as empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub email: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub password: String,
}

impl StoredDocument for UserDocument {
    const COLLECTION: &'static str = "users";
}

impl From<UserDocument> for User {
    fn from(document: UserDocument) -> Self {
        Self {
            id: document.id,
            name: document.name,
            email: document.email,
            password: document.password,
        }
    }
}

impl From<User> for UserDocument {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            password: user.password,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::doc;

    #[test]
    fn test_unsaved_user_has_no_id_field() {
        let document = UserDocument::from(User::new(
            "Ada".to_string(),
            "ada@example.com".to_string(),
            "$argon2id$v=19$...".to_string(),
        ));

        let raw = bson::to_document(&document).unwrap();
        assert!(!raw.contains_key("_id"));
        assert_eq!(raw.get_str("name").unwrap(), "Ada");
        assert_eq!(raw.get_str("password").unwrap(), "$argon2id$v=19$...");
    }

    #[test]
    fn test_empty_fields_are_omitted_and_defaulted() {
        let document = UserDocument::from(User::new(String::new(), String::new(), "h".into()));
        let raw = bson::to_document(&document).unwrap();
        assert!(!raw.contains_key("name"));
        assert!(!raw.contains_key("email"));

        let id = ObjectId::new();
        let stored = doc! { "_id": id, "password": "h" };
        let user: User = bson::from_document::<UserDocument>(stored).unwrap().into();
        assert_eq!(user.id, Some(id));
        assert_eq!(user.name, "");
        assert_eq!(user.email, "");
    }
}
