//! Document store configuration module

use serde::{Deserialize, Serialize};

/// Configuration for the MongoDB user record store
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Connection URI
    pub url: String,

    /// Database holding the user collection
    pub database: String,

    /// Collection holding user records
    pub user_collection: String,

    /// Connection timeout in seconds
    pub connect_timeout: u64,

    /// Upper bound for a single token upsert, in seconds
    pub operation_timeout: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::from("mongodb://localhost:27017"),
            database: String::from("cluster0"),
            user_collection: String::from("user"),
            connect_timeout: 10,
            operation_timeout: 100,
        }
    }
}

impl DatabaseConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let url = std::env::var("MONGODB_URL")
            .or_else(|_| std::env::var("DATABASE_URL"))
            .unwrap_or(defaults.url);
        let database = std::env::var("MONGODB_DATABASE").unwrap_or(defaults.database);
        let user_collection =
            std::env::var("MONGODB_USER_COLLECTION").unwrap_or(defaults.user_collection);
        let connect_timeout = std::env::var("DATABASE_CONNECT_TIMEOUT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.connect_timeout);
        let operation_timeout = std::env::var("DATABASE_OPERATION_TIMEOUT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.operation_timeout);

        Self {
            url,
            database,
            user_collection,
            connect_timeout,
            operation_timeout,
        }
    }

    /// Create a new database configuration with URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// Set the database name
    pub fn with_database(mut self, database: impl Into<String>) -> Self {
        self.database = database.into();
        self
    }

    /// Set the upsert timeout in seconds
    pub fn with_operation_timeout(mut self, seconds: u64) -> Self {
        self.operation_timeout = seconds;
        self
    }

    /// Connection timeout as a `Duration`
    pub fn connect_timeout_duration(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.connect_timeout)
    }

    /// Upsert timeout as a `Duration`
    pub fn operation_timeout_duration(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.operation_timeout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_config_defaults() {
        let config = DatabaseConfig::default();
        assert_eq!(config.database, "cluster0");
        assert_eq!(config.user_collection, "user");
        assert_eq!(config.connect_timeout_duration().as_secs(), 10);
        assert_eq!(config.operation_timeout_duration().as_secs(), 100);
    }

    #[test]
    fn test_database_config_builder() {
        let config = DatabaseConfig::new("mongodb://db:27017")
            .with_database("auth")
            .with_operation_timeout(5);

        assert_eq!(config.url, "mongodb://db:27017");
        assert_eq!(config.database, "auth");
        assert_eq!(config.operation_timeout, 5);
    }
}
