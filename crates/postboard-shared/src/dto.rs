//! Data Transfer Objects - request/response types for the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Request to create a user. Missing fields default to empty strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Request to create a post. A client-supplied `createdDate` is ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CreatePostRequest {
    pub caption: String,
    pub url: String,
}

/// Acknowledgement of an insert: the identifier the store assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsertResponse {
    #[serde(rename = "InsertedID")]
    pub inserted_id: String,
}

/// A stored user. `password` is the stored hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
}

/// A stored post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub caption: String,
    pub url: String,
    #[serde(rename = "createdDate")]
    pub created_date: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_user_missing_fields_default_to_empty() {
        let req: CreateUserRequest = serde_json::from_str(r#"{"name": "Ada"}"#).unwrap();
        assert_eq!(req.name, "Ada");
        assert_eq!(req.email, "");
        assert_eq!(req.password, "");
    }

    #[test]
    fn test_create_post_ignores_unknown_and_client_timestamp() {
        let req: CreatePostRequest = serde_json::from_str(
            r#"{"caption": "hi", "url": "u", "createdDate": "1999-01-01T00:00:00Z", "likes": 3}"#,
        )
        .unwrap();
        assert_eq!(req.caption, "hi");
        assert_eq!(req.url, "u");
    }

    #[test]
    fn test_insert_ack_wire_name() {
        let ack = InsertResponse {
            inserted_id: "65a1f0c2e4b0a1b2c3d4e5f6".to_string(),
        };

        let json = serde_json::to_value(&ack).unwrap();
        assert_eq!(json, serde_json::json!({ "InsertedID": "65a1f0c2e4b0a1b2c3d4e5f6" }));
    }

    #[test]
    fn test_post_response_wire_names() {
        let response = PostResponse {
            id: "65a1f0c2e4b0a1b2c3d4e5f6".to_string(),
            caption: "c".to_string(),
            url: "u".to_string(),
            created_date: DateTime::<Utc>::from_timestamp(0, 0).unwrap(),
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["_id"], "65a1f0c2e4b0a1b2c3d4e5f6");
        assert_eq!(json["createdDate"], "1970-01-01T00:00:00Z");
    }
}
