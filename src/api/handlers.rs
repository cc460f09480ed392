//! API Handlers
//!
//! HTTP request handlers and the per-request cache-aside orchestration:
//! derive key(s), consult the cache, fall back to the sources on miss,
//! write back, sort, respond.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::State,
    http::Uri,
    response::{IntoResponse, Redirect},
    Json,
};
use tokio::sync::RwLock;
use tokio::task::JoinSet;
use tokio::time::timeout;
use tracing::info;

use crate::aggregator::Aggregator;
use crate::cache::{derive_key, CacheStore};
use crate::config::{CacheGranularity, Config};
use crate::error::{FeedError, Result};
use crate::models::{EntriesResponse, Entry, HealthResponse};

/// Application state shared across all handlers.
///
/// The cache store is the only shared mutable resource; it sits behind a
/// single reader/writer lock covering all keys. The lock is held for map
/// access only, never across upstream I/O.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe cache store
    pub cache: Arc<RwLock<CacheStore>>,
    /// Aggregation engine holding the registered sources
    pub aggregator: Arc<Aggregator>,
    /// TTL applied on every cache write
    pub cache_ttl: Duration,
    /// Cache key granularity
    pub granularity: CacheGranularity,
    /// Deadline for the populate phase of one request
    pub request_timeout: Duration,
}

impl AppState {
    /// Creates a new AppState from a populated aggregator and configuration.
    pub fn new(aggregator: Aggregator, config: &Config) -> Self {
        Self {
            cache: Arc::new(RwLock::new(CacheStore::new())),
            aggregator: Arc::new(aggregator),
            cache_ttl: Duration::from_secs(config.cache_ttl),
            granularity: config.cache_granularity,
            request_timeout: Duration::from_secs(config.request_timeout),
        }
    }
}

/// Handler for GET /api/v1/entries
///
/// Serves the merged feed: cache-aside population at the configured
/// granularity, bounded by the per-request deadline, followed by a stable
/// newest-first sort. A population failure for any unit fails the whole
/// request; errors are never written to the cache.
pub async fn entries_handler(
    State(state): State<AppState>,
    uri: Uri,
) -> Result<Json<EntriesResponse>> {
    let request_url = uri.to_string();

    let populate = async {
        match state.granularity {
            CacheGranularity::WholeFeed => whole_feed_entries(&state, &request_url).await,
            CacheGranularity::PerSource => per_source_entries(&state, &request_url).await,
        }
    };

    let mut entries = timeout(state.request_timeout, populate)
        .await
        .map_err(|_| FeedError::Timeout)??;

    // Stable sort, newest first; equal timestamps keep concatenation order
    entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    Ok(Json(EntriesResponse::new(entries)))
}

/// Cache-aside population keyed on the entire merged feed.
async fn whole_feed_entries(state: &AppState, request_url: &str) -> Result<Vec<Entry>> {
    let key = derive_key(request_url, "");

    let cached = state.cache.read().await.get(&key);
    if let Some(content) = cached {
        return Ok(content);
    }

    info!(%request_url, "cache miss");
    let entries = state.aggregator.fetch_all().await?;
    state
        .cache
        .write()
        .await
        .set(key, entries.clone(), state.cache_ttl);

    Ok(entries)
}

/// Cache-aside population with one independent key per registered source.
///
/// Each source's check/fetch/write path runs as its own task, so an
/// expired source refreshes without touching a still-fresh sibling's
/// cached content. The fail-fast policy matches the engine's: the first
/// unit failure fails the request, surviving siblings are detached.
async fn per_source_entries(state: &AppState, request_url: &str) -> Result<Vec<Entry>> {
    let mut tasks = JoinSet::new();
    for source in state.aggregator.sources() {
        let source = Arc::clone(source);
        let cache = Arc::clone(&state.cache);
        let key = derive_key(request_url, source.name());
        let ttl = state.cache_ttl;

        tasks.spawn(async move {
            let cached = cache.read().await.get(&key);
            if let Some(content) = cached {
                return Ok(content);
            }

            info!(source = source.name(), "cache miss");
            let entries = source.fetch().await?;
            cache.write().await.set(key, entries.clone(), ttl);

            Ok(entries)
        });
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

/// Handler for GET /
///
/// The root only forwards to the feed endpoint.
pub async fn root_handler() -> impl IntoResponse {
    Redirect::permanent("/api/v1/entries")
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
