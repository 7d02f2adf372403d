//! Shared fixtures and store doubles for token service tests

mod generator_tests;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use crate::domain::entities::{UserIdentity, UserTokenRecord};
use crate::domain::value_objects::SigningSecret;
use crate::errors::PersistenceError;
use crate::repositories::UserTokenStore;

pub(super) const TEST_SECRET: &str = "test_secret_key_for_testing_purposes_only";

pub(super) fn secret() -> SigningSecret {
    SigningSecret::from(TEST_SECRET)
}

pub(super) fn identity() -> UserIdentity {
    UserIdentity::new("a@x.com", "Ada", "Lovelace", "USER", "u1")
}

pub(super) fn fixed_now() -> DateTime<Utc> {
    Utc.timestamp_opt(1_700_000_000, 0).unwrap()
}

/// Store that never answers within any reasonable deadline
#[derive(Default)]
pub(super) struct SlowStore {
    pub started: AtomicUsize,
    pub completed: AtomicBool,
}

#[async_trait]
impl UserTokenStore for SlowStore {
    async fn upsert_tokens(&self, _record: &UserTokenRecord) -> Result<(), PersistenceError> {
        self.started.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(Duration::from_secs(3600)).await;
        self.completed.store(true, Ordering::SeqCst);
        Ok(())
    }
}

/// Store that rejects every write
pub(super) struct RejectingStore;

#[async_trait]
impl UserTokenStore for RejectingStore {
    async fn upsert_tokens(&self, _record: &UserTokenRecord) -> Result<(), PersistenceError> {
        Err(PersistenceError::Rejected {
            message: "document failed validation".to_string(),
        })
    }
}
