use bson::oid::ObjectId;
use chrono::{DateTime, Utc};

/// Post entity - a caption plus a media URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: Option<ObjectId>,
    pub caption: String,
    pub url: String,
    pub created_date: DateTime<Utc>,
}

impl Post {
    /// Create a new post stamped with the current server time.
    pub fn new(caption: String, url: String) -> Self {
        Self {
            id: None,
            caption,
            url,
            created_date: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_post_is_stamped_with_server_time() {
        let before = Utc::now();
        let post = Post::new("sunset".to_string(), "https://cdn.example/1.jpg".to_string());
        let after = Utc::now();

        assert!(post.id.is_none());
        assert!(post.created_date >= before && post.created_date <= after);
    }
}
