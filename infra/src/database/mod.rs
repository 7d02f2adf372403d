//! Database module - MongoDB implementations
//!
//! - Client bootstrap and health checks
//! - Repository implementations over the user collection

pub mod connection;
pub mod mongo;

// Re-export commonly used types
pub use connection::DatabaseClient;
pub use mongo::MongoUserTokenStore;
