//! MongoDB repository implementations.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::doc;

use postboard_core::domain::Post;
use postboard_core::error::RepoError;
use postboard_core::ports::{PostRepository, UserRepository};

use super::document::{PostDocument, UserDocument};
use super::mongo_base::{MongoBaseRepository, StoredDocument, bounded};

/// MongoDB user repository.
pub type MongoUserRepository = MongoBaseRepository<UserDocument>;

/// MongoDB post repository.
pub type MongoPostRepository = MongoBaseRepository<PostDocument>;

impl UserRepository for MongoUserRepository {}

#[async_trait]
impl PostRepository for MongoPostRepository {
    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        // One timeout covers the query and the whole cursor drain.
        let drain = async {
            let mut cursor = self.collection.find(doc! {}).await?;
            let mut posts = Vec::new();
            while let Some(document) = cursor.try_next().await? {
                posts.push(Post::from(document));
            }
            Ok::<_, mongodb::error::Error>(posts)
        };

        let posts = bounded(self.timeout, drain).await?;
        tracing::debug!(
            collection = PostDocument::COLLECTION,
            count = posts.len(),
            "Listed documents"
        );

        Ok(posts)
    }
}
