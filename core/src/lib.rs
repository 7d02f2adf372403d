//! # Tokenlife Core
//!
//! Token lifecycle for the Tokenlife backend: claim modeling, access/refresh
//! token generation, signature and expiry validation, and the policy for
//! persisting the latest issued pair against a user record.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::{InMemoryUserTokenStore, UserTokenStore};
pub use services::{TokenGenerator, TokenPersister, TokenService, TokenServiceConfig, TokenValidator};
