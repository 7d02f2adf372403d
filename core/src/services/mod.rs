//! Business services containing the token lifecycle use cases.

pub mod token;

// Re-export commonly used types
pub use token::{TokenGenerator, TokenPersister, TokenService, TokenServiceConfig, TokenValidator};
