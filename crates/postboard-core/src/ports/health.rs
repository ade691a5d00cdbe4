use async_trait::async_trait;

use crate::error::RepoError;

/// Liveness check for the backing store.
#[async_trait]
pub trait StoreHealth: Send + Sync {
    async fn ping(&self) -> Result<(), RepoError>;
}
