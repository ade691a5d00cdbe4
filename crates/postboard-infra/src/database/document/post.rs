//! Post document for MongoDB.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use postboard_core::domain::{ObjectId, Post};

use crate::database::mongo_base::StoredDocument;

/// Stored form of a post. `createdDate` is a native BSON datetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub caption: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub url: String,
    #[serde(
        rename = "createdDate",
        default,
        with = "bson::serde_helpers::chrono_datetime_as_bson_datetime"
    )]
    pub created_date: DateTime<Utc>,
}

impl StoredDocument for PostDocument {
    const COLLECTION: &'static str = "posts";
}

impl From<PostDocument> for Post {
    fn from(document: PostDocument) -> Self {
        Self {
            id: document.id,
            caption: document.caption,
            url: document.url,
            created_date: document.created_date,
        }
    }
}

impl From<Post> for PostDocument {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            caption: post.caption,
            url: post.url,
            created_date: post.created_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::{Bson, doc};

    #[test]
    fn test_created_date_stored_as_bson_datetime() {
        let post = Post::new("sunset".to_string(), "https://cdn.example/1.jpg".to_string());
        let raw = bson::to_document(&PostDocument::from(post.clone())).unwrap();

        assert!(matches!(raw.get("createdDate"), Some(Bson::DateTime(_))));
        assert_eq!(raw.get_str("caption").unwrap(), "sunset");
        assert!(!raw.contains_key("_id"));
    }

    #[test]
    fn test_read_back_preserves_fields() {
        let id = ObjectId::new();
        let created = bson::DateTime::from_millis(1_700_000_000_000);
        let stored = doc! {
            "_id": id,
            "caption": "hello",
            "url": "https://cdn.example/2.png",
            "createdDate": created,
        };

        let post: Post = bson::from_document::<PostDocument>(stored).unwrap().into();

        assert_eq!(post.id, Some(id));
        assert_eq!(post.caption, "hello");
        assert_eq!(post.created_date.timestamp_millis(), 1_700_000_000_000);
    }
}
