//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod auth;
mod health;
mod repository;

pub use auth::{AuthError, PasswordService};
pub use health::StoreHealth;
pub use repository::{BaseRepository, PostRepository, UserRepository};
