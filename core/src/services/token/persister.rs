//! Timeout-bounded persistence of issued token pairs

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;

use crate::domain::entities::UserTokenRecord;
use crate::errors::PersistenceError;
use crate::repositories::UserTokenStore;

use super::config::DEFAULT_PERSIST_TIMEOUT;

/// Writes the latest token pair onto a user record
///
/// Every call is an independent blind upsert; no client-side locking is done
/// and concurrent logins for one user are last-write-wins at the store.
pub struct TokenPersister<S: UserTokenStore + ?Sized> {
    store: Arc<S>,
    timeout: Duration,
}

impl<S: UserTokenStore + ?Sized> Clone for TokenPersister<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            timeout: self.timeout,
        }
    }
}

impl<S: UserTokenStore + ?Sized> TokenPersister<S> {
    /// Creates a persister with the default 100 second bound
    pub fn new(store: Arc<S>) -> Self {
        Self::with_timeout(store, DEFAULT_PERSIST_TIMEOUT)
    }

    pub fn with_timeout(store: Arc<S>, timeout: Duration) -> Self {
        Self { store, timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Upserts `token`, `refresh_token` and `updated_at` for `user_id`
    ///
    /// The store call is dropped, and with it the in-flight operation, once
    /// the timeout elapses.
    pub async fn persist(
        &self,
        access_token: &str,
        refresh_token: &str,
        user_id: &str,
    ) -> Result<(), PersistenceError> {
        let record = UserTokenRecord::new(user_id, access_token, refresh_token, Utc::now());

        tracing::debug!(user_id = %user_id, "Persisting token pair");

        match tokio::time::timeout(self.timeout, self.store.upsert_tokens(&record)).await {
            Ok(Ok(())) => {
                tracing::info!(user_id = %user_id, "Token pair persisted");
                Ok(())
            }
            Ok(Err(e)) => {
                tracing::error!(user_id = %user_id, error = %e, "Failed to persist token pair");
                Err(e)
            }
            Err(_) => {
                tracing::warn!(
                    user_id = %user_id,
                    timeout_secs = self.timeout.as_secs_f64(),
                    "Token persistence timed out"
                );
                Err(PersistenceError::Timeout {
                    timeout: self.timeout,
                })
            }
        }
    }
}
