#[path = "trait.rs"]
mod store_trait;
pub mod memory;

pub use memory::InMemoryUserTokenStore;
pub use store_trait::UserTokenStore;

#[cfg(test)]
mod tests;
