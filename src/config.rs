//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;

use anyhow::{bail, Context};
use url::Url;

// == Cache Granularity ==
/// Granularity at which fetch results are cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheGranularity {
    /// One cache key for the entire merged feed
    WholeFeed,
    /// One cache key per registered source, populated independently
    PerSource,
}

impl CacheGranularity {
    fn from_env_value(value: &str) -> Self {
        match value {
            "source" => CacheGranularity::PerSource,
            _ => CacheGranularity::WholeFeed,
        }
    }
}

// == Source Configs ==
/// Identity parameters for the Qiita source.
#[derive(Debug, Clone)]
pub struct QiitaConfig {
    /// Qiita user whose posts are aggregated
    pub user_id: String,
}

/// Identity and credential parameters for the Hatena Blog source.
#[derive(Debug, Clone)]
pub struct HatenaConfig {
    /// Hatena account id
    pub user_id: String,
    /// Blog domain (e.g. `example.hatenablog.com`)
    pub blog_id: String,
    /// AtomPub API key
    pub api_key: String,
}

// == Config ==
/// Server configuration parameters.
///
/// A source is registered only when its configuration is present.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP listen port
    pub listen_port: u16,
    /// Origin allowed by CORS on the feed endpoint
    pub origin_url: String,
    /// Cache TTL in seconds
    pub cache_ttl: u64,
    /// Cache key granularity
    pub cache_granularity: CacheGranularity,
    /// Per-request deadline in seconds for the fetch phase
    pub request_timeout: u64,
    /// Qiita source parameters, if configured
    pub qiita: Option<QiitaConfig>,
    /// Hatena source parameters, if configured
    pub hatena: Option<HatenaConfig>,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `LISTEN_PORT` - HTTP listen port (default: 8080)
    /// - `ORIGIN_URL` - CORS origin, required, must be an http(s) URL
    /// - `CACHE_TTL` - Cache TTL in seconds (default: 60)
    /// - `CACHE_GRANULARITY` - `feed` or `source` (default: `feed`)
    /// - `REQUEST_TIMEOUT` - Fetch-phase deadline in seconds (default: 30)
    /// - `QIITA_ID` - enables the Qiita source
    /// - `HATENA_ID`, `HATENA_BLOG_ID`, `HATENA_BLOG_API_KEY` - together
    ///   enable the Hatena source
    pub fn from_env() -> anyhow::Result<Self> {
        let origin_url = env::var("ORIGIN_URL").context("ORIGIN_URL must be set")?;
        let parsed = Url::parse(&origin_url).context("Origin url parse failed")?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            bail!("Invalid scheme in origin url");
        }

        let qiita = non_empty_var("QIITA_ID").map(|user_id| QiitaConfig { user_id });

        let hatena = match (
            non_empty_var("HATENA_ID"),
            non_empty_var("HATENA_BLOG_ID"),
            non_empty_var("HATENA_BLOG_API_KEY"),
        ) {
            (Some(user_id), Some(blog_id), Some(api_key)) => Some(HatenaConfig {
                user_id,
                blog_id,
                api_key,
            }),
            _ => None,
        };

        Ok(Self {
            listen_port: env::var("LISTEN_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),
            origin_url,
            cache_ttl: env::var("CACHE_TTL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60),
            cache_granularity: env::var("CACHE_GRANULARITY")
                .map(|v| CacheGranularity::from_env_value(&v))
                .unwrap_or(CacheGranularity::WholeFeed),
            request_timeout: env::var("REQUEST_TIMEOUT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
            qiita,
            hatena,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_port: 8080,
            origin_url: "http://localhost:8080".to_string(),
            cache_ttl: 60,
            cache_granularity: CacheGranularity::WholeFeed,
            request_timeout: 30,
            qiita: None,
            hatena: None,
        }
    }
}

/// Reads an environment variable, treating the empty string as unset.
fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.is_empty())
}
