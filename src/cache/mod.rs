//! Cache Module
//!
//! Provides in-memory result caching with lazy TTL expiration. Expired slots
//! stay in the map until physically overwritten; there is no background
//! sweeper and no space-based eviction.

mod item;
mod key;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use item::CacheItem;
pub use key::derive_key;
pub use store::CacheStore;
