//! User token store trait defining the interface the token persister writes through.

use async_trait::async_trait;

use crate::domain::entities::UserTokenRecord;
use crate::errors::PersistenceError;

/// Keyed upsert of the token subset of a user record
///
/// Implementations filter on `user_id`, set `token`, `refresh_token` and
/// `updated_at`, and create the record when it does not exist. The write is a
/// blind overwrite: concurrent upserts for the same user are last-write-wins.
///
/// Callers bound the call with a deadline and may drop the returned future;
/// implementations must tolerate cancellation at any await point.
#[async_trait]
pub trait UserTokenStore: Send + Sync {
    /// Upsert the latest token pair for `record.user_id`
    ///
    /// # Returns
    /// * `Ok(())` - Record created or overwritten
    /// * `Err(PersistenceError)` - Store unreachable or write rejected
    ///
    /// # Example
    /// ```no_run
    /// # use chrono::Utc;
    /// # use tl_core::repositories::UserTokenStore;
    /// # use tl_core::domain::entities::UserTokenRecord;
    /// # async fn example(store: &impl UserTokenStore) -> Result<(), Box<dyn std::error::Error>> {
    /// let record = UserTokenRecord::new("u1", "access.jwt", "refresh.jwt", Utc::now());
    /// store.upsert_tokens(&record).await?;
    /// # Ok(())
    /// # }
    /// ```
    async fn upsert_tokens(&self, record: &UserTokenRecord) -> Result<(), PersistenceError>;
}
