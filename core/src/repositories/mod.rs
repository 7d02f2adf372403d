pub mod user_token;

pub use user_token::{InMemoryUserTokenStore, UserTokenStore};
