//! Error families of the token lifecycle
//!
//! Validation errors reject the credential. Signing and persistence errors
//! are server-side failures. None of them is retried by the core.

use std::time::Duration;

use thiserror::Error;

/// Token signing failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SigningError {
    #[error("Signing secret is unusable")]
    UnusableSecret,

    #[error("Token encoding failed: {message}")]
    Encoding { message: String },
}

/// User record store failures
///
/// Each variant carries the underlying cause.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    #[error("Token persistence timed out after {timeout:?}")]
    Timeout { timeout: Duration },

    #[error("User record store unavailable: {message}")]
    Unavailable { message: String },

    #[error("User record store rejected the write: {message}")]
    Rejected { message: String },
}

/// Reasons a presented token is not accepted
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid signature")]
    InvalidSignature,

    #[error("Token invalid: {reason}")]
    MalformedToken { reason: String },

    #[error("Token expired at {expired_at}")]
    Expired { expired_at: i64 },
}

impl ValidationError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        ValidationError::MalformedToken {
            reason: reason.into(),
        }
    }
}
