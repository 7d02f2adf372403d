//! Token service module for JWT management
//!
//! This module handles all token-related operations:
//! - Access/refresh token generation (HS256)
//! - Signature and expiry validation
//! - Timeout-bounded persistence of the latest pair per user

mod config;
mod generator;
mod persister;
mod service;
mod validator;

#[cfg(test)]
mod tests;

pub use config::{TokenServiceConfig, DEFAULT_PERSIST_TIMEOUT, MAX_TOKEN_LIFETIME_SECS};
pub use generator::TokenGenerator;
pub use persister::TokenPersister;
pub use service::TokenService;
pub use validator::TokenValidator;
