use std::future::IntoFuture;
use std::time::Duration;

use async_trait::async_trait;
use mongodb::Collection;
use mongodb::bson::doc;
use mongodb::error::{Error as MongoError, ErrorKind};
use serde::Serialize;
use serde::de::DeserializeOwned;

use postboard_core::domain::ObjectId;
use postboard_core::error::RepoError;
use postboard_core::ports::BaseRepository;

use super::connections::MongoStore;

/// A serde type stored in a named MongoDB collection.
pub trait StoredDocument: Serialize + DeserializeOwned + Send + Sync + Unpin + 'static {
    const COLLECTION: &'static str;
}

/// Generic MongoDB repository implementation.
pub struct MongoBaseRepository<D>
where
    D: StoredDocument,
{
    pub(crate) collection: Collection<D>,
    pub(crate) timeout: Duration,
}

impl<D> MongoBaseRepository<D>
where
    D: StoredDocument,
{
    pub fn new(store: &MongoStore) -> Self {
        Self {
            collection: store.database().collection::<D>(D::COLLECTION),
            timeout: store.operation_timeout(),
        }
    }
}

/// Run one store operation under a fresh timeout.
pub(crate) async fn bounded<F, T>(timeout: Duration, op: F) -> Result<T, RepoError>
where
    F: IntoFuture<Output = Result<T, MongoError>>,
{
    match tokio::time::timeout(timeout, op).await {
        Ok(result) => result.map_err(map_mongo_error),
        Err(_) => Err(RepoError::Timeout(timeout)),
    }
}

fn map_mongo_error(err: MongoError) -> RepoError {
    match err.kind.as_ref() {
        ErrorKind::ServerSelection { .. } | ErrorKind::Io(_) => {
            RepoError::Connection(err.to_string())
        }
        _ => RepoError::Query(err.to_string()),
    }
}

#[async_trait]
impl<D, T> BaseRepository<T, ObjectId> for MongoBaseRepository<D>
where
    D: StoredDocument,
    T: From<D> + Into<D> + Send + Sync + 'static,
{
    async fn find_by_id(&self, id: ObjectId) -> Result<Option<T>, RepoError> {
        tracing::debug!(collection = D::COLLECTION, %id, "Finding document by id");

        let found = bounded(self.timeout, self.collection.find_one(doc! { "_id": id })).await?;

        Ok(found.map(Into::into))
    }

    async fn insert(&self, entity: T) -> Result<ObjectId, RepoError> {
        let document: D = entity.into();
        let result = bounded(self.timeout, self.collection.insert_one(document)).await?;

        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            RepoError::Query(format!(
                "store assigned a non-ObjectId key: {}",
                result.inserted_id
            ))
        })?;

        tracing::debug!(collection = D::COLLECTION, %id, "Document inserted");
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_bounded_reports_timeout() {
        let timeout = Duration::from_millis(10);

        let result = bounded(timeout, std::future::pending::<Result<(), MongoError>>()).await;

        assert!(matches!(result, Err(RepoError::Timeout(t)) if t == timeout));
    }

    #[tokio::test]
    async fn test_bounded_passes_through_success() {
        let result = bounded(Duration::from_secs(1), async { Ok::<_, MongoError>(7) }).await;

        assert_eq!(result.unwrap(), 7);
    }
}
