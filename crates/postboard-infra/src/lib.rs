//! # Postboard Infrastructure
//!
//! Concrete implementations of the ports defined in `postboard-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external services, in-memory store only
//! - `mongodb` - MongoDB document store support

pub mod auth;
pub mod database;

// Re-exports
pub use auth::{Argon2PasswordService, HashingConfig};
pub use database::{DatabaseConfig, InMemoryStore};

#[cfg(feature = "mongodb")]
pub use database::MongoStore;
