//! Document store access: MongoDB and in-memory repositories.

mod connections;
mod memory;

#[cfg(feature = "mongodb")]
mod mongo_base;
#[cfg(feature = "mongodb")]
pub mod mongo_repo;

#[cfg(feature = "mongodb")]
pub mod document;

pub use connections::DatabaseConfig;
pub use memory::{InMemoryPostRepository, InMemoryRepository, InMemoryStore, InMemoryUserRepository};

#[cfg(feature = "mongodb")]
pub use connections::MongoStore;
#[cfg(feature = "mongodb")]
pub use mongo_repo::{MongoPostRepository, MongoUserRepository};
