//! MongoDB client management

use mongodb::bson::{doc, Document};
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection, Database};
use tl_shared::config::DatabaseConfig;

use crate::InfrastructureError;

/// MongoDB client wrapper
///
/// The driver pools connections internally; clones share the same pool.
#[derive(Clone, Debug)]
pub struct DatabaseClient {
    database: Database,
    user_collection: String,
}

impl DatabaseClient {
    /// Connect to MongoDB and verify the server answers
    ///
    /// # Example
    /// ```no_run
    /// use tl_infra::database::DatabaseClient;
    /// use tl_shared::config::DatabaseConfig;
    ///
    /// async fn connect() -> Result<DatabaseClient, Box<dyn std::error::Error>> {
    ///     let client = DatabaseClient::connect(&DatabaseConfig::new("mongodb://localhost:27017")).await?;
    ///     Ok(client)
    /// }
    /// ```
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, InfrastructureError> {
        tracing::info!(database = %config.database, "Connecting to MongoDB");

        let mut options = ClientOptions::parse(&config.url).await.map_err(|e| {
            InfrastructureError::Config(format!("Invalid database URL: {}", e))
        })?;
        options.connect_timeout = Some(config.connect_timeout_duration());
        options.server_selection_timeout = Some(config.connect_timeout_duration());
        options.app_name = Some("tokenlife".to_string());

        let client = Client::with_options(options)?;
        let connection = Self {
            database: client.database(&config.database),
            user_collection: config.user_collection.clone(),
        };

        connection.health_check().await?;
        tracing::info!("Connected to MongoDB");

        Ok(connection)
    }

    /// Ping the server
    pub async fn health_check(&self) -> Result<(), InfrastructureError> {
        tracing::debug!("Performing database health check");

        self.database
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map(|_| ())
            .map_err(|e| {
                tracing::error!(error = %e, "Database health check failed");
                InfrastructureError::Database(e)
            })
    }

    /// Collection holding user records
    pub fn user_collection(&self) -> Collection<Document> {
        self.database.collection(&self.user_collection)
    }
}
