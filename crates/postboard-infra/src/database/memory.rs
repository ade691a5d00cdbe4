//! In-memory repositories - used when no document store is configured.
//!
//! Works within a single process only. Data is lost on restart.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use postboard_core::domain::{ObjectId, Post, User};
use postboard_core::error::RepoError;
use postboard_core::ports::{BaseRepository, PostRepository, StoreHealth, UserRepository};

/// Entities that carry a store-assigned identifier.
pub trait Keyed: Clone + Send + Sync + 'static {
    fn key(&self) -> Option<ObjectId>;
    fn set_key(&mut self, id: ObjectId);
}

impl Keyed for User {
    fn key(&self) -> Option<ObjectId> {
        self.id
    }

    fn set_key(&mut self, id: ObjectId) {
        self.id = Some(id);
    }
}

impl Keyed for Post {
    fn key(&self) -> Option<ObjectId> {
        self.id
    }

    fn set_key(&mut self, id: ObjectId) {
        self.id = Some(id);
    }
}

/// One collection held in a `Vec`, in insertion order.
pub struct InMemoryRepository<T> {
    rows: RwLock<Vec<T>>,
}

impl<T> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(Vec::new()),
        }
    }
}

impl<T> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Keyed> BaseRepository<T, ObjectId> for InMemoryRepository<T> {
    async fn find_by_id(&self, id: ObjectId) -> Result<Option<T>, RepoError> {
        let rows = self.rows.read().await;
        Ok(rows.iter().find(|row| row.key() == Some(id)).cloned())
    }

    async fn insert(&self, mut entity: T) -> Result<ObjectId, RepoError> {
        let id = entity.key().unwrap_or_else(ObjectId::new);
        entity.set_key(id);

        let mut rows = self.rows.write().await;
        rows.push(entity);

        Ok(id)
    }
}

/// In-memory user repository.
pub type InMemoryUserRepository = InMemoryRepository<User>;

/// In-memory post repository.
pub type InMemoryPostRepository = InMemoryRepository<Post>;

impl UserRepository for InMemoryUserRepository {}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        Ok(self.rows.read().await.clone())
    }
}

/// Both collections of the in-memory backend.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    pub users: Arc<InMemoryUserRepository>,
    pub posts: Arc<InMemoryPostRepository>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StoreHealth for InMemoryStore {
    async fn ping(&self) -> Result<(), RepoError> {
        Ok(())
    }
}
