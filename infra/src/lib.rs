//! # Infrastructure Layer
//!
//! Concrete implementations behind the Tokenlife core:
//! - **Database**: MongoDB user record store
//! - **Telemetry**: `tracing` subscriber setup
//! - **Configuration**: loading `AppConfig` from dotenv files and the process environment

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tl_core::errors::DomainError;
use tl_core::services::{TokenService, TokenServiceConfig};
use tl_shared::config::{AppConfig, Environment};

/// Database module - MongoDB client and repository implementations
pub mod database;

/// Telemetry module - tracing subscriber initialisation
pub mod telemetry;

pub use database::{DatabaseClient, MongoUserTokenStore};

/// Infrastructure service container
#[derive(Clone)]
pub struct InfrastructureServices {
    /// Shared database handle
    pub database: DatabaseClient,
    /// Token service writing through the MongoDB user collection
    pub token_service: Arc<TokenService<MongoUserTokenStore>>,
}

/// Initialize infrastructure services
///
/// This function sets up:
/// - The MongoDB client (connect + ping)
/// - The user token store over the configured collection
/// - The token service sharing the configured signing secret
pub async fn initialize(config: &AppConfig) -> Result<InfrastructureServices, InfrastructureError> {
    tracing::info!(environment = %config.environment, "Initializing infrastructure services...");

    validate_config(config)?;

    let database = DatabaseClient::connect(&config.database).await?;
    let store = Arc::new(MongoUserTokenStore::new(database.user_collection()));
    let token_config = TokenServiceConfig::from_shared(&config.jwt, &config.database)?;
    let token_service = Arc::new(TokenService::new(store, token_config));

    tracing::info!("Infrastructure services initialized successfully");

    Ok(InfrastructureServices {
        database,
        token_service,
    })
}

/// Load configuration from dotenv files in the working directory and the process environment
pub fn load_config() -> Result<AppConfig, InfrastructureError> {
    let dir = std::env::current_dir()
        .map_err(|e| InfrastructureError::Config(format!("cannot resolve working directory: {}", e)))?;
    load_env_files(&dir, Environment::from_env());

    let config = AppConfig::from_env();
    validate_config(&config)?;
    Ok(config)
}

/// Load `<dir>/.env.<environment>` then `<dir>/.env`, returning the files read
///
/// Variables already present are never overwritten, so the process
/// environment wins over the environment file, which wins over `.env`.
/// Missing files are skipped.
pub fn load_env_files(dir: &Path, environment: Environment) -> Vec<PathBuf> {
    let candidates = [dir.join(environment.env_file()), dir.join(".env")];

    candidates
        .into_iter()
        .filter(|path| path.is_file())
        .filter(|path| match dotenvy::from_path(path) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Skipping unreadable env file");
                false
            }
        })
        .collect()
}

/// Reject configurations that must never reach a running service
pub fn validate_config(config: &AppConfig) -> Result<(), InfrastructureError> {
    if config.jwt.secret.is_empty() {
        return Err(InfrastructureError::Config(
            "JWT secret must not be empty".to_string(),
        ));
    }
    if config.jwt.is_using_default_secret() {
        if config.environment.is_production() {
            return Err(InfrastructureError::Config(
                "JWT_SECRET must be set in production".to_string(),
            ));
        }
        tracing::warn!("Using the development JWT secret; set JWT_SECRET");
    }
    Ok(())
}

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Tracing subscriber setup error
    #[error("Telemetry error: {0}")]
    Telemetry(String),

    /// Error raised by the core while wiring services
    #[error(transparent)]
    Domain(#[from] DomainError),
}
