//! Domain-specific error types and error handling.

mod types;

#[cfg(test)]
mod tests;

// Re-export all error types
pub use types::{PersistenceError, SigningError, ValidationError};

use thiserror::Error;

/// Core domain errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Signing(#[from] SigningError),

    #[error(transparent)]
    Persistence(#[from] PersistenceError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl DomainError {
    /// The presented credential must be rejected (maps to 401)
    pub fn is_authentication_rejection(&self) -> bool {
        matches!(self, DomainError::Validation(_))
    }

    /// The server failed to complete the operation (maps to 5xx)
    pub fn is_server_failure(&self) -> bool {
        !self.is_authentication_rejection()
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
