//! Application configuration loaded from environment variables.

use std::env;
use std::time::Duration;

use postboard_infra::{DatabaseConfig, HashingConfig};

/// Which store implementation backs the repositories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    MongoDb,
    Memory,
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub backend: StoreBackend,
    pub database: DatabaseConfig,
    pub hashing: HashingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    /// Unparsable numbers fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let number = |key: &str| lookup(key).and_then(|s| s.trim().parse::<u64>().ok());
        let database_defaults = DatabaseConfig::default();
        let hashing_defaults = HashingConfig::default();

        let backend = match lookup("DATABASE_BACKEND")
            .map(|v| v.to_lowercase())
            .as_deref()
        {
            Some("memory") => StoreBackend::Memory,
            _ => StoreBackend::MongoDb,
        };

        let database = DatabaseConfig {
            uri: lookup("MONGODB_URI").unwrap_or(database_defaults.uri),
            database: lookup("MONGODB_DATABASE").unwrap_or(database_defaults.database),
            connect_timeout: number("DB_CONNECT_TIMEOUT_SECS")
                .map(Duration::from_secs)
                .unwrap_or(database_defaults.connect_timeout),
            operation_timeout: number("DB_OPERATION_TIMEOUT_SECS")
                .map(Duration::from_secs)
                .unwrap_or(database_defaults.operation_timeout),
        };

        let hashing = HashingConfig {
            memory_kib: lookup("PASSWORD_HASH_MEMORY_KIB")
                .and_then(|s| s.parse().ok())
                .unwrap_or(hashing_defaults.memory_kib),
            iterations: lookup("PASSWORD_HASH_ITERATIONS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(hashing_defaults.iterations),
            parallelism: lookup("PASSWORD_HASH_PARALLELISM")
                .and_then(|s| s.parse().ok())
                .unwrap_or(hashing_defaults.parallelism),
        };

        Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            backend,
            database,
            hashing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.backend, StoreBackend::MongoDb);
        assert_eq!(config.database.uri, "mongodb://localhost:27017");
        assert_eq!(config.database.database, "thegodb");
        assert_eq!(config.database.connect_timeout, Duration::from_secs(10));
        assert_eq!(config.database.operation_timeout, Duration::from_secs(10));
        assert_eq!(config.hashing, HashingConfig::default());
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("PORT", "8081"),
            ("DATABASE_BACKEND", "Memory"),
            ("MONGODB_URI", "mongodb://db:27017"),
            ("MONGODB_DATABASE", "postboard"),
            ("DB_OPERATION_TIMEOUT_SECS", "3"),
            ("PASSWORD_HASH_ITERATIONS", "4"),
        ]);

        assert_eq!(config.port, 8081);
        assert_eq!(config.backend, StoreBackend::Memory);
        assert_eq!(config.database.uri, "mongodb://db:27017");
        assert_eq!(config.database.database, "postboard");
        assert_eq!(config.database.operation_timeout, Duration::from_secs(3));
        assert_eq!(config.hashing.iterations, 4);
    }

    #[test]
    fn test_unparsable_numbers_fall_back() {
        let config = config_from(&[("PORT", "eighty"), ("DB_CONNECT_TIMEOUT_SECS", "soon")]);

        assert_eq!(config.port, 3000);
        assert_eq!(config.database.connect_timeout, Duration::from_secs(10));
    }
}
