//! API Module
//!
//! HTTP handlers and routing for the aggregation server API.
//!
//! # Endpoints
//! - `GET /api/v1/entries` - The merged feed, newest first
//! - `GET /` - Redirect to the feed endpoint
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
