//! Cache Store Module
//!
//! In-memory key to cached-result map with lazy TTL expiration.

use std::collections::HashMap;
use std::time::Duration;

use crate::cache::CacheItem;
use crate::models::Entry;

// == Cache Store ==
/// Key-value storage for fetch results.
///
/// The store itself is a plain map; callers share it behind a single
/// reader/writer lock covering all keys. A miss is a normal outcome, never
/// an error. Expiration is checked at read time only: expired items become
/// invisible to `get` but their slots are reused by the next `set` under
/// the same key.
#[derive(Debug, Default)]
pub struct CacheStore {
    /// Key to cached-result storage
    items: HashMap<String, CacheItem>,
}

impl CacheStore {
    // == Constructor ==
    /// Creates a new, empty CacheStore.
    pub fn new() -> Self {
        Self {
            items: HashMap::new(),
        }
    }

    // == Get ==
    /// Retrieves the cached entries for a key.
    ///
    /// Returns `None` for both unknown and expired keys.
    pub fn get(&self, key: &str) -> Option<Vec<Entry>> {
        let item = self.items.get(key)?;
        if item.is_expired() {
            return None;
        }
        Some(item.content.clone())
    }

    // == Set ==
    /// Stores entries under a key with the given TTL.
    ///
    /// Always a full overwrite: any prior item under the key, expired or
    /// not, is replaced.
    pub fn set(&mut self, key: String, content: Vec<Entry>, ttl: Duration) {
        self.items.insert(key, CacheItem::new(content, ttl));
    }

    // == Length ==
    /// Returns the number of occupied slots, expired ones included.
    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    // == Is Empty ==
    /// Returns true if no slot has ever been written.
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
