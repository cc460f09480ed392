//! API Routes
//!
//! Configures the Axum router with all aggregation server endpoints.

use axum::{http::HeaderValue, routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{entries_handler, health_handler, root_handler, AppState};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /api/v1/entries` - The merged feed, newest first
/// - `GET /` - Redirect to the feed endpoint
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows the configured origin only
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState, origin: HeaderValue) -> Router {
    // Configure CORS middleware for the deployed frontend origin
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router with all endpoints
    Router::new()
        .route("/", get(root_handler))
        .route("/api/v1/entries", get(entries_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
