//! Tests for the in-memory user token store

use chrono::{Duration, Utc};
use std::sync::Arc;

use crate::domain::entities::UserTokenRecord;
use crate::repositories::{InMemoryUserTokenStore, UserTokenStore};

#[tokio::test]
async fn test_upsert_creates_missing_record() {
    let store = InMemoryUserTokenStore::new();
    assert!(store.is_empty().await);

    let record = UserTokenRecord::new("u1", "access-1", "refresh-1", Utc::now());
    store.upsert_tokens(&record).await.unwrap();

    assert_eq!(store.len().await, 1);
    assert_eq!(store.get("u1").await, Some(record));
}

#[tokio::test]
async fn test_upsert_overwrites_without_duplicating() {
    let store = InMemoryUserTokenStore::new();
    let first = Utc::now();

    store
        .upsert_tokens(&UserTokenRecord::new("u1", "access-1", "refresh-1", first))
        .await
        .unwrap();
    store
        .upsert_tokens(&UserTokenRecord::new(
            "u1",
            "access-2",
            "refresh-2",
            first + Duration::seconds(5),
        ))
        .await
        .unwrap();

    let stored = store.get("u1").await.unwrap();
    assert_eq!(store.len().await, 1);
    assert_eq!(stored.token, "access-2");
    assert_eq!(stored.refresh_token, "refresh-2");
    assert!(stored.updated_at > first - Duration::seconds(1));
}

#[tokio::test]
async fn test_clones_and_arc_share_records() {
    let store = InMemoryUserTokenStore::new();
    let shared: Arc<dyn UserTokenStore> = Arc::new(store.clone());

    shared
        .upsert_tokens(&UserTokenRecord::new("u2", "a", "r", Utc::now()))
        .await
        .unwrap();

    assert_eq!(store.get("u2").await.map(|r| r.token), Some("a".to_string()));
    assert!(store.get("missing").await.is_none());
}
