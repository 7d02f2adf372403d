//! Unit tests for domain error types

use std::time::Duration;

use crate::errors::{DomainError, PersistenceError, SigningError, ValidationError};

#[test]
fn test_validation_errors_reject_the_credential() {
    let kinds = [
        ValidationError::InvalidSignature,
        ValidationError::MalformedToken {
            reason: "bad".to_string(),
        },
        ValidationError::Expired { expired_at: 1 },
    ];

    for kind in kinds {
        let error: DomainError = kind.into();
        assert!(error.is_authentication_rejection());
        assert!(!error.is_server_failure());
    }
}

#[test]
fn test_signing_and_persistence_errors_are_server_failures() {
    let signing: DomainError = SigningError::UnusableSecret.into();
    let persistence: DomainError = PersistenceError::Timeout {
        timeout: Duration::from_secs(100),
    }
    .into();

    assert!(signing.is_server_failure());
    assert!(persistence.is_server_failure());
    assert!(!persistence.is_authentication_rejection());
}

#[test]
fn test_error_messages() {
    assert_eq!(ValidationError::InvalidSignature.to_string(), "Invalid signature");
    assert_eq!(
        ValidationError::Expired { expired_at: 10 }.to_string(),
        "Token expired at 10"
    );

    let error = PersistenceError::Unavailable {
        message: "connection refused".to_string(),
    };
    assert!(error.to_string().contains("connection refused"));

    let error: DomainError = PersistenceError::Rejected {
        message: "duplicate key".to_string(),
    }
    .into();
    assert!(error.to_string().contains("duplicate key"));
}
