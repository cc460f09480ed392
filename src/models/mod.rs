//! Response models for the aggregation server API
//!
//! This module defines the feed entry value type and the DTOs (Data Transfer
//! Objects) used for serializing HTTP response bodies.

pub mod entry;
pub mod responses;

// Re-export commonly used types
pub use entry::Entry;
pub use responses::{EntriesResponse, ErrorResponse, HealthResponse};
