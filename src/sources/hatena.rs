//! Hatena Blog Source
//!
//! Fetches the entry list of a Hatena blog through the AtomPub endpoint,
//! authenticated with HTTP basic auth. Each Atom `<entry>` contributes its
//! title, the `rel="alternate"` link, and the `<published>` timestamp.

use async_trait::async_trait;
use chrono::DateTime;
use serde::Deserialize;

use crate::error::{FeedError, Result};
use crate::models::Entry;
use crate::sources::Source;

const BASE_URL: &str = "https://blog.hatena.ne.jp";

// == Atom Payload ==
#[derive(Debug, Deserialize)]
struct AtomFeed {
    #[serde(rename = "entry", default)]
    entries: Vec<AtomEntry>,
}

#[derive(Debug, Deserialize)]
struct AtomEntry {
    title: String,
    #[serde(rename = "link", default)]
    links: Vec<AtomLink>,
    published: String,
}

#[derive(Debug, Deserialize)]
struct AtomLink {
    #[serde(rename = "@rel")]
    rel: Option<String>,
    #[serde(rename = "@href")]
    href: String,
}

// == Hatena Source ==
/// Entry source backed by the Hatena Blog AtomPub API.
pub struct HatenaSource {
    client: reqwest::Client,
    user_id: String,
    blog_id: String,
    api_key: String,
    base_url: String,
}

impl HatenaSource {
    /// Creates a new HatenaSource for the given user and blog.
    pub fn new(
        client: reqwest::Client,
        user_id: impl Into<String>,
        blog_id: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            client,
            user_id: user_id.into(),
            blog_id: blog_id.into(),
            api_key: api_key.into(),
            base_url: BASE_URL.to_string(),
        }
    }

    #[cfg(test)]
    fn with_base_url(
        client: reqwest::Client,
        user_id: &str,
        blog_id: &str,
        api_key: &str,
        base_url: String,
    ) -> Self {
        Self {
            client,
            user_id: user_id.to_string(),
            blog_id: blog_id.to_string(),
            api_key: api_key.to_string(),
            base_url,
        }
    }
}

#[async_trait]
impl Source for HatenaSource {
    fn name(&self) -> &'static str {
        "hatena"
    }

    async fn fetch(&self) -> Result<Vec<Entry>> {
        let endpoint = format!("{}/{}/{}/atom/entry", self.base_url, self.user_id, self.blog_id);

        let response = self
            .client
            .get(&endpoint)
            .basic_auth(&self.user_id, Some(&self.api_key))
            .send()
            .await
            .map_err(|e| FeedError::fetch("hatena", e))?;

        if !response.status().is_success() {
            return Err(FeedError::fetch(
                "hatena",
                format!("unexpected status {}", response.status()),
            ));
        }

        let body = response
            .text()
            .await
            .map_err(|e| FeedError::fetch("hatena", e))?;

        let feed: AtomFeed =
            quick_xml::de::from_str(&body).map_err(|e| FeedError::fetch("hatena", e))?;

        feed.entries.into_iter().map(to_entry).collect()
    }
}

/// Converts one Atom entry into a feed entry.
fn to_entry(atom: AtomEntry) -> Result<Entry> {
    let url = atom
        .links
        .iter()
        .find(|l| l.rel.as_deref() == Some("alternate"))
        .map(|l| l.href.clone())
        .unwrap_or_default();

    let created_at = DateTime::parse_from_rfc3339(&atom.published)
        .map_err(|e| FeedError::fetch("hatena", format!("invalid published timestamp: {}", e)))?;

    Ok(Entry {
        title: atom.title,
        url,
        created_at,
    })
}
