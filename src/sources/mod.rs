//! Sources Module
//!
//! Upstream entry providers. Each source implements the [`Source`] trait and
//! is registered into the aggregator at startup; the aggregator depends only
//! on this trait, so tests substitute in-memory doubles freely.
//!
//! # Adding a source
//! 1. Create a new file in this directory (e.g. `zenn.rs`).
//! 2. Implement [`Source`] for a struct holding the source's identity
//!    parameters and the shared HTTP client.
//! 3. Add `mod zenn;` below, re-export the struct, and register it from
//!    `main.rs` when its configuration is present.

mod hatena;
mod qiita;

pub use hatena::HatenaSource;
pub use qiita::QiitaSource;

use std::time::Duration;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::Entry;

/// Timeout each source enforces on its own upstream call, independent of
/// any caller-side deadline.
pub const SOURCE_TIMEOUT: Duration = Duration::from_secs(10);

// == Source Trait ==
/// A single upstream provider of feed entries.
#[async_trait]
pub trait Source: Send + Sync {
    /// Stable identifier used as the per-source cache-key tag and in
    /// logs and error messages.
    fn name(&self) -> &'static str;

    /// Fetches the current batch of entries from the upstream.
    ///
    /// Implementations perform their own HTTP I/O and must not block
    /// indefinitely; the shared client's timeout bounds every call.
    async fn fetch(&self) -> Result<Vec<Entry>>;
}

// == Shared Client ==
/// Builds the HTTP client shared by all upstream sources.
pub fn http_client() -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder().timeout(SOURCE_TIMEOUT).build()
}
