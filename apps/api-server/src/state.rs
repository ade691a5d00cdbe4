//! Application state - shared across all handlers.

use std::sync::Arc;

use postboard_core::error::RepoError;
use postboard_core::ports::{PasswordService, PostRepository, StoreHealth, UserRepository};
use postboard_infra::{Argon2PasswordService, InMemoryStore};

use crate::config::{AppConfig, StoreBackend};

#[cfg(feature = "mongodb")]
use postboard_infra::MongoStore;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub posts: Arc<dyn PostRepository>,
    pub passwords: Arc<dyn PasswordService>,
    pub store: Arc<dyn StoreHealth>,
}

/// Startup failures. Any of these aborts the process.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error(transparent)]
    Store(#[from] RepoError),

    #[error(transparent)]
    Hashing(#[from] postboard_core::ports::AuthError),

    #[cfg(not(feature = "mongodb"))]
    #[error("MongoDB backend requested but the server was built without the `mongodb` feature")]
    BackendUnavailable,
}

impl AppState {
    pub fn new(
        users: Arc<dyn UserRepository>,
        posts: Arc<dyn PostRepository>,
        passwords: Arc<dyn PasswordService>,
        store: Arc<dyn StoreHealth>,
    ) -> Self {
        Self {
            users,
            posts,
            passwords,
            store,
        }
    }

    /// State backed by the in-memory store.
    pub fn in_memory(passwords: Arc<dyn PasswordService>) -> Self {
        let store = InMemoryStore::new();
        Self::new(
            store.users.clone(),
            store.posts.clone(),
            passwords,
            Arc::new(store),
        )
    }

    /// Build the application state from configuration.
    ///
    /// For the MongoDB backend this connects and pings the server; failure is
    /// returned to the caller, which treats it as fatal.
    pub async fn connect(config: &AppConfig) -> Result<Self, StateError> {
        let passwords: Arc<dyn PasswordService> =
            Arc::new(Argon2PasswordService::from_config(&config.hashing)?);

        let state = match config.backend {
            StoreBackend::Memory => {
                tracing::warn!("Using in-memory store. Data is lost on restart.");
                Self::in_memory(passwords)
            }
            #[cfg(feature = "mongodb")]
            StoreBackend::MongoDb => {
                let store = MongoStore::connect(&config.database).await?;
                Self::new(
                    Arc::new(store.users()),
                    Arc::new(store.posts()),
                    passwords,
                    Arc::new(store),
                )
            }
            #[cfg(not(feature = "mongodb"))]
            StoreBackend::MongoDb => return Err(StateError::BackendUnavailable),
        };

        tracing::info!(backend = ?config.backend, "Application state initialized");
        Ok(state)
    }
}
