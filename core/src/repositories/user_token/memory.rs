//! In-memory implementation of UserTokenStore

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::UserTokenRecord;
use crate::errors::PersistenceError;

use super::UserTokenStore;

/// User token store backed by a map keyed by user id
///
/// Used as the store double in tests and for single-process deployments.
/// Clones share the same records.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserTokenStore {
    records: Arc<RwLock<HashMap<String, UserTokenRecord>>>,
}

impl InMemoryUserTokenStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Current record for a user, if any
    pub async fn get(&self, user_id: &str) -> Option<UserTokenRecord> {
        self.records.read().await.get(user_id).cloned()
    }

    /// Number of user records
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl UserTokenStore for InMemoryUserTokenStore {
    async fn upsert_tokens(&self, record: &UserTokenRecord) -> Result<(), PersistenceError> {
        let mut records = self.records.write().await;
        records.insert(record.user_id.clone(), record.clone());
        Ok(())
    }
}
