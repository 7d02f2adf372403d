pub mod user_token_store_impl;

pub use user_token_store_impl::MongoUserTokenStore;
