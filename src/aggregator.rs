//! Aggregator Module
//!
//! Fans out to every registered source concurrently and merges their
//! results into one unordered sequence.

use std::sync::Arc;

use tokio::task::JoinSet;

use crate::error::{FeedError, Result};
use crate::models::Entry;
use crate::sources::Source;

// == Aggregator ==
/// Owns the registered sources and runs them in parallel.
///
/// Registration happens once at startup, before any traffic is served;
/// afterwards the source list is read-only and safe to share.
#[derive(Default)]
pub struct Aggregator {
    /// Registered sources, in registration order
    sources: Vec<Arc<dyn Source>>,
}

impl Aggregator {
    // == Constructor ==
    /// Creates a new Aggregator with no sources.
    pub fn new() -> Self {
        Self { sources: Vec::new() }
    }

    // == Register ==
    /// Appends a source to the registration list.
    pub fn register(&mut self, source: Arc<dyn Source>) {
        self.sources.push(source);
    }

    // == Sources ==
    /// Read-only view of the registered sources, used by the per-source
    /// cache orchestration path.
    pub fn sources(&self) -> &[Arc<dyn Source>] {
        &self.sources
    }

    /// Number of registered sources.
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Returns true if no source is registered.
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    // == Fetch All ==
    /// Fetches every registered source in parallel and concatenates the
    /// successful batches.
    ///
    /// Fail-fast, all-or-nothing: the first source error aborts the whole
    /// call and no partial content is returned. Sibling fetches that are
    /// still in flight at that point are detached rather than aborted;
    /// they run to completion in the background and their results are
    /// discarded. Output order is unspecified (completion order); the
    /// caller applies the final sort.
    pub async fn fetch_all(&self) -> Result<Vec<Entry>> {
        let mut tasks = JoinSet::new();
        for source in &self.sources {
            let source = Arc::clone(source);
            tasks.spawn(async move { source.fetch().await });
        }

        let mut merged = Vec::new();
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(Ok(batch)) => merged.extend(batch),
                Ok(Err(e)) => {
                    tasks.detach_all();
                    return Err(e);
                }
                Err(e) => {
                    tasks.detach_all();
                    return Err(FeedError::Internal(format!("fetch task failed: {}", e)));
                }
            }
        }

        Ok(merged)
    }
}
