//! Feed Aggregator - a blog feed aggregation server
//!
//! Fetches entries from independent upstream sources concurrently, merges
//! them into one time-ordered feed, and serves it over HTTP behind a
//! short-lived TTL cache.

mod aggregator;
mod api;
mod cache;
mod config;
mod error;
mod models;
mod sources;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::http::HeaderValue;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use aggregator::Aggregator;
use api::{create_router, AppState};
use config::Config;
use sources::{HatenaSource, QiitaSource};

/// Main entry point for the feed aggregation server.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load and validate configuration from environment variables
/// 3. Register one source per configured upstream
/// 4. Create application state with cache store and aggregator
/// 5. Create Axum router with all endpoints
/// 6. Start HTTP server on configured port
/// 7. Handle graceful shutdown on SIGINT/SIGTERM
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber with env filter
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "feed_aggregator=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Feed Aggregator");

    // Load configuration from environment variables
    let config = Config::from_env().context("configuration loading failed")?;
    info!(
        "Configuration loaded: port={}, cache_ttl={}s, granularity={:?}, request_timeout={}s",
        config.listen_port, config.cache_ttl, config.cache_granularity, config.request_timeout
    );

    let origin: HeaderValue = config
        .origin_url
        .parse()
        .context("ORIGIN_URL is not a valid header value")?;

    // Register one source per configured upstream
    let aggregator = register_sources(&config).context("source registration failed")?;
    info!("Registered {} sources", aggregator.len());

    // Create application state with cache store and aggregator
    let state = AppState::new(aggregator, &config);

    // Create router with all endpoints
    let app = create_router(state, origin);

    // Bind to configured port
    let addr = SocketAddr::from(([0, 0, 0, 0], config.listen_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Server listening on http://{}", addr);

    // Start server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Builds the aggregator from the configured upstream sources.
///
/// A source is registered only when its identity parameters are present,
/// so a deployment with a single upstream runs with a single source.
fn register_sources(config: &Config) -> anyhow::Result<Aggregator> {
    let client = sources::http_client().context("failed to build HTTP client")?;

    let mut aggregator = Aggregator::new();
    if let Some(qiita) = &config.qiita {
        aggregator.register(Arc::new(QiitaSource::new(
            client.clone(),
            qiita.user_id.clone(),
        )));
    }
    if let Some(hatena) = &config.hatena {
        aggregator.register(Arc::new(HatenaSource::new(
            client.clone(),
            hatena.user_id.clone(),
            hatena.blog_id.clone(),
            hatena.api_key.clone(),
        )));
    }

    Ok(aggregator)
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }
}
