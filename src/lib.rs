//! Feed Aggregator - a blog feed aggregation server
//!
//! Fetches entries from independent upstream sources concurrently, merges
//! them into one time-ordered feed, and serves it over HTTP behind a
//! short-lived TTL cache.

pub mod aggregator;
pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod sources;

pub use aggregator::Aggregator;
pub use api::AppState;
pub use config::Config;
