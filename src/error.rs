//! Error types for the aggregation server
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Feed Error Enum ==
/// Unified error type for the aggregation server.
#[derive(Error, Debug)]
pub enum FeedError {
    /// An upstream source call failed (network error, non-success status,
    /// or malformed payload)
    #[error("failed to fetch {source_name} entries: {reason}")]
    Fetch {
        /// Name of the failing source
        source_name: &'static str,
        /// Underlying failure description
        reason: String,
    },

    /// The per-request deadline elapsed before all fetches returned
    #[error("request timed out")]
    Timeout,

    /// Internal server error
    #[error("internal error: {0}")]
    Internal(String),
}

impl FeedError {
    /// Shorthand for an upstream fetch failure.
    pub fn fetch(source: &'static str, reason: impl ToString) -> Self {
        FeedError::Fetch {
            source_name: source,
            reason: reason.to_string(),
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for FeedError {
    fn into_response(self) -> Response {
        let status = match &self {
            FeedError::Fetch { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            FeedError::Timeout => StatusCode::GATEWAY_TIMEOUT,
            FeedError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(ErrorResponse::new(self.to_string()));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the aggregation server.
pub type Result<T> = std::result::Result<T, FeedError>;
