use async_trait::async_trait;
use bson::oid::ObjectId;

use crate::domain::{Post, User};
use crate::error::RepoError;

/// Generic repository trait for insert-only document collections.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Insert a new entity and return the identifier the store assigned.
    async fn insert(&self, entity: T) -> Result<ID, RepoError>;
}

/// User repository.
pub trait UserRepository: BaseRepository<User, ObjectId> {}

/// Post repository.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, ObjectId> {
    /// All posts in store iteration order.
    async fn find_all(&self) -> Result<Vec<Post>, RepoError>;
}
