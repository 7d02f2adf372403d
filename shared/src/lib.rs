//! Shared configuration types for the Tokenlife workspace
//!
//! This crate provides the configuration used across all layers:
//! - JWT signing configuration
//! - Document store configuration
//! - Environment detection and logging configuration

pub mod config;

// Re-export commonly used items at crate root
pub use config::{AppConfig, DatabaseConfig, Environment, JwtConfig, LogFormat, LoggingConfig};
