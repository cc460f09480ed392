//! Response DTOs for the aggregation server API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::models::Entry;

/// Response body for the feed endpoint (GET /api/v1/entries)
///
/// Wraps the merged, newest-first entry list in an `entries` envelope.
#[derive(Debug, Clone, Serialize)]
pub struct EntriesResponse {
    /// Aggregated entries, sorted by `created_at` descending
    pub entries: Vec<Entry>,
}

impl EntriesResponse {
    /// Creates a new EntriesResponse
    pub fn new(entries: Vec<Entry>) -> Self {
        Self { entries }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
