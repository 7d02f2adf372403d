//! MongoDB implementation of the UserTokenStore trait.
//!
//! Writes the latest token pair onto the user document with a single
//! `update_one` + `$set` + `upsert: true`.

use async_trait::async_trait;
use mongodb::bson::{doc, DateTime as BsonDateTime, Document};
use mongodb::error::ErrorKind;
use mongodb::options::UpdateOptions;
use mongodb::Collection;

use tl_core::domain::entities::UserTokenRecord;
use tl_core::errors::PersistenceError;
use tl_core::repositories::UserTokenStore;

/// MongoDB implementation of UserTokenStore
#[derive(Clone, Debug)]
pub struct MongoUserTokenStore {
    /// User collection
    collection: Collection<Document>,
}

impl MongoUserTokenStore {
    pub fn new(collection: Collection<Document>) -> Self {
        Self { collection }
    }

    /// Filter selecting the user document
    pub fn filter(record: &UserTokenRecord) -> Document {
        doc! { "user_id": record.user_id.as_str() }
    }

    /// `$set` update touching only the token subset of the document
    pub fn update(record: &UserTokenRecord) -> Document {
        doc! {
            "$set": {
                "token": record.token.as_str(),
                "refresh_token": record.refresh_token.as_str(),
                "updated_at": BsonDateTime::from_millis(record.updated_at.timestamp_millis()),
            }
        }
    }
}

#[async_trait]
impl UserTokenStore for MongoUserTokenStore {
    async fn upsert_tokens(&self, record: &UserTokenRecord) -> Result<(), PersistenceError> {
        let options = UpdateOptions::builder().upsert(true).build();

        let result = self
            .collection
            .update_one(Self::filter(record), Self::update(record), options)
            .await
            .map_err(map_driver_error)?;

        tracing::debug!(
            user_id = %record.user_id,
            matched = result.matched_count,
            upserted = result.upserted_id.is_some(),
            "Upserted user tokens"
        );

        Ok(())
    }
}

fn map_driver_error(error: mongodb::error::Error) -> PersistenceError {
    match error.kind.as_ref() {
        ErrorKind::Write(_) => PersistenceError::Rejected {
            message: error.to_string(),
        },
        _ => PersistenceError::Unavailable {
            message: error.to_string(),
        },
    }
}
