//! Property-Based Tests for Cache Module
//!
//! Uses proptest to verify the store and key-derivation contracts.

use proptest::prelude::*;
use std::thread::sleep;
use std::time::Duration;

use crate::cache::{derive_key, CacheStore};
use crate::models::Entry;

// == Test Configuration ==
const TEST_TTL: Duration = Duration::from_secs(300);

// == Strategies ==
/// Generates cache keys
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_:]{1,64}".prop_map(|s| s)
}

/// Generates request URLs (path plus optional query)
fn url_strategy() -> impl Strategy<Value = String> {
    "/[a-z0-9/]{0,32}(\\?[a-z0-9=&]{0,16})?".prop_map(|s| s)
}

/// Generates entry lists of arbitrary size
fn entries_strategy() -> impl Strategy<Value = Vec<Entry>> {
    prop::collection::vec(
        ("[a-zA-Z0-9 ]{1,32}", "[a-z0-9/]{1,32}", 0i64..2_000_000_000i64).prop_map(
            |(title, path, secs)| Entry {
                title,
                url: format!("https://example.com/{}", path),
                created_at: chrono::DateTime::from_timestamp(secs, 0)
                    .unwrap()
                    .fixed_offset(),
            },
        ),
        0..8,
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // For any key and content, storing the pair and retrieving it before
    // expiration returns exactly the content that was stored.
    #[test]
    fn prop_roundtrip_storage(key in key_strategy(), content in entries_strategy()) {
        let mut store = CacheStore::new();

        store.set(key.clone(), content.clone(), TEST_TTL);

        let retrieved = store.get(&key);
        prop_assert_eq!(retrieved, Some(content), "Round-trip content mismatch");
    }

    // For any two writes under the same key, the second write makes the
    // first content unreachable.
    #[test]
    fn prop_overwrite_semantics(
        key in key_strategy(),
        first in entries_strategy(),
        second in entries_strategy(),
    ) {
        let mut store = CacheStore::new();

        store.set(key.clone(), first, TEST_TTL);
        store.set(key.clone(), second.clone(), TEST_TTL);

        prop_assert_eq!(store.get(&key), Some(second), "Overwrite not observed");
    }

    // A get never returns content whose deadline has passed.
    #[test]
    fn prop_expired_content_invisible(key in key_strategy(), content in entries_strategy()) {
        let mut store = CacheStore::new();

        store.set(key.clone(), content, Duration::from_millis(0));
        sleep(Duration::from_millis(2));

        prop_assert_eq!(store.get(&key), None, "Expired content returned");
    }

    // Key derivation is a pure function of its inputs.
    #[test]
    fn prop_derive_key_stable(url in url_strategy(), source in "[a-z]{0,12}") {
        prop_assert_eq!(derive_key(&url, &source), derive_key(&url, &source));
    }

    // Distinct URLs never collide under the same source tag.
    #[test]
    fn prop_derive_key_distinct_urls(
        a in url_strategy(),
        b in url_strategy(),
        source in "[a-z]{0,12}",
    ) {
        prop_assume!(a != b);
        prop_assert_ne!(derive_key(&a, &source), derive_key(&b, &source));
    }

    // The encoded URL part contains no padding or delimiter characters.
    #[test]
    fn prop_derive_key_url_safe(url in "\\PC{0,64}", source in "[a-z]{0,12}") {
        let key = derive_key(&url, &source);
        let encoded = key.rsplit(':').next().unwrap();

        prop_assert!(encoded.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    }
}
