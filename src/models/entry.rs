//! Entry Module
//!
//! Defines the value type for a single aggregated feed entry.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

// == Entry ==
/// One timestamped content item from an upstream source.
///
/// Entries are plain values: two entries with identical fields are
/// indistinguishable and both are kept (no deduplication). `created_at`
/// retains the offset reported by the source and is the ordering key for
/// the merged feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Display title, as provided by the source
    pub title: String,
    /// Canonical link, used for display only
    pub url: String,
    /// Publication timestamp with source-reported offset
    pub created_at: DateTime<FixedOffset>,
}
