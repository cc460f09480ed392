//! Cache Item Module
//!
//! Defines the structure for a cached fetch result with its expiration deadline.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::models::Entry;

// == Cache Item ==
/// A cached result set: the entries produced by one successful fetch plus
/// the absolute deadline after which they are treated as absent.
#[derive(Debug, Clone)]
pub struct CacheItem {
    /// The cached entries, in fetch order (not yet sorted)
    pub content: Vec<Entry>,
    /// Expiration timestamp (Unix milliseconds)
    pub expires_at: u64,
}

impl CacheItem {
    // == Constructor ==
    /// Creates a new cache item expiring `ttl` from now.
    pub fn new(content: Vec<Entry>, ttl: Duration) -> Self {
        Self {
            content,
            expires_at: current_timestamp_ms() + ttl.as_millis() as u64,
        }
    }

    // == Is Expired ==
    /// Checks if the item has expired.
    ///
    /// Boundary condition: an item is expired once the current time is
    /// strictly past the deadline, so a zero TTL keeps the item visible
    /// for the instant it was written.
    pub fn is_expired(&self) -> bool {
        current_timestamp_ms() > self.expires_at
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_millis() as u64
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;

    fn sample_entries() -> Vec<Entry> {
        vec![Entry {
            title: "a".to_string(),
            url: "https://example.com/a".to_string(),
            created_at: chrono::DateTime::parse_from_rfc3339("2020-01-01T00:00:00+00:00")
                .unwrap(),
        }]
    }

    #[test]
    fn test_item_creation() {
        let item = CacheItem::new(sample_entries(), Duration::from_secs(60));

        assert_eq!(item.content.len(), 1);
        assert!(!item.is_expired());
    }

    #[test]
    fn test_item_expiration() {
        let item = CacheItem::new(sample_entries(), Duration::from_millis(20));

        assert!(!item.is_expired());

        sleep(Duration::from_millis(40));

        assert!(item.is_expired());
    }

    #[test]
    fn test_expiration_boundary_condition() {
        let now = current_timestamp_ms();
        let item = CacheItem {
            content: sample_entries(),
            expires_at: now.saturating_sub(1),
        };

        // Deadline already passed, so strictly-greater comparison flags it
        assert!(item.is_expired(), "Item should be expired past the deadline");
    }
}
