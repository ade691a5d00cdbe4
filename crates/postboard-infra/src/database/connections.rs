use std::time::Duration;

#[cfg(feature = "mongodb")]
use async_trait::async_trait;
#[cfg(feature = "mongodb")]
use mongodb::{Client, Database, bson::doc, options::ClientOptions};

#[cfg(feature = "mongodb")]
use postboard_core::error::RepoError;
#[cfg(feature = "mongodb")]
use postboard_core::ports::StoreHealth;

#[cfg(feature = "mongodb")]
use super::mongo_base::bounded;
#[cfg(feature = "mongodb")]
use super::mongo_repo::{MongoPostRepository, MongoUserRepository};

/// Configuration for the document store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub uri: String,
    pub database: String,
    /// Bound on establishing the connection and selecting a server.
    pub connect_timeout: Duration,
    /// Bound on each individual store operation.
    pub operation_timeout: Duration,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            uri: "mongodb://localhost:27017".to_string(),
            database: "thegodb".to_string(),
            connect_timeout: Duration::from_secs(10),
            operation_timeout: Duration::from_secs(10),
        }
    }
}

/// Handle to one MongoDB database.
///
/// Cloning is cheap: the driver client is reference-counted and safe to
/// share between workers without extra locking.
///
/// # Example
/// ```ignore
/// let store = MongoStore::connect(&DatabaseConfig::default()).await?;
/// let id = store.users().insert(user).await?;
/// ```
#[cfg(feature = "mongodb")]
#[derive(Clone)]
pub struct MongoStore {
    database: Database,
    operation_timeout: Duration,
}

#[cfg(feature = "mongodb")]
impl MongoStore {
    /// Build the client and confirm the server answers a `ping`.
    ///
    /// Fails if the URI is invalid or no server responds within
    /// `connect_timeout`.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, RepoError> {
        tracing::info!(database = %config.database, "Connecting to MongoDB...");

        let mut options = ClientOptions::parse(&config.uri)
            .await
            .map_err(|e| RepoError::Connection(e.to_string()))?;
        options.connect_timeout = Some(config.connect_timeout);
        options.server_selection_timeout = Some(config.connect_timeout);
        options.app_name = Some("postboard".to_string());

        let client =
            Client::with_options(options).map_err(|e| RepoError::Connection(e.to_string()))?;
        let database = client.database(&config.database);

        bounded(
            config.connect_timeout,
            database.run_command(doc! { "ping": 1 }),
        )
        .await
        .map_err(|e| RepoError::Connection(e.to_string()))?;

        tracing::info!(
            database = %config.database,
            operation_timeout = ?config.operation_timeout,
            "MongoDB connected"
        );

        Ok(Self {
            database,
            operation_timeout: config.operation_timeout,
        })
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn operation_timeout(&self) -> Duration {
        self.operation_timeout
    }

    pub fn users(&self) -> MongoUserRepository {
        MongoUserRepository::new(self)
    }

    pub fn posts(&self) -> MongoPostRepository {
        MongoPostRepository::new(self)
    }
}

#[cfg(feature = "mongodb")]
#[async_trait]
impl StoreHealth for MongoStore {
    async fn ping(&self) -> Result<(), RepoError> {
        bounded(
            self.operation_timeout,
            self.database.run_command(doc! { "ping": 1 }),
        )
        .await
        .map(|_| ())
    }
}
