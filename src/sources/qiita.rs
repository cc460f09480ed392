//! Qiita Source
//!
//! Fetches a user's posts from the Qiita v2 API. The item objects already
//! carry `title`, `url`, and `created_at`, so the JSON body deserializes
//! straight into entries.

use async_trait::async_trait;

use crate::error::{FeedError, Result};
use crate::models::Entry;
use crate::sources::Source;

const BASE_URL: &str = "https://qiita.com/api/v2";

// == Qiita Source ==
/// Entry source backed by the Qiita API.
pub struct QiitaSource {
    client: reqwest::Client,
    user_id: String,
    base_url: String,
}

impl QiitaSource {
    /// Creates a new QiitaSource for the given user.
    pub fn new(client: reqwest::Client, user_id: impl Into<String>) -> Self {
        Self {
            client,
            user_id: user_id.into(),
            base_url: BASE_URL.to_string(),
        }
    }

    #[cfg(test)]
    fn with_base_url(client: reqwest::Client, user_id: &str, base_url: String) -> Self {
        Self {
            client,
            user_id: user_id.to_string(),
            base_url,
        }
    }
}

#[async_trait]
impl Source for QiitaSource {
    fn name(&self) -> &'static str {
        "qiita"
    }

    async fn fetch(&self) -> Result<Vec<Entry>> {
        let endpoint = format!("{}/users/{}/items", self.base_url, self.user_id);

        let response = self
            .client
            .get(&endpoint)
            .send()
            .await
            .map_err(|e| FeedError::fetch("qiita", e))?;

        if !response.status().is_success() {
            return Err(FeedError::fetch(
                "qiita",
                format!("unexpected status {}", response.status()),
            ));
        }

        let entries: Vec<Entry> = response
            .json()
            .await
            .map_err(|e| FeedError::fetch("qiita", e))?;

        Ok(entries)
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn test_fetch_success() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/users/shiimaxx/items");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!([
                    {
                        "title": "first",
                        "url": "https://qiita.com/shiimaxx/items/1",
                        "created_at": "2020-01-01T10:00:00+09:00",
                        "likes_count": 12
                    },
                    {
                        "title": "second",
                        "url": "https://qiita.com/shiimaxx/items/2",
                        "created_at": "2020-02-01T10:00:00+09:00",
                        "likes_count": 3
                    }
                ]));
        });

        let source =
            QiitaSource::with_base_url(reqwest::Client::new(), "shiimaxx", server.base_url());
        let entries = source.fetch().await.unwrap();

        mock.assert();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].title, "first");
        assert_eq!(entries[1].url, "https://qiita.com/shiimaxx/items/2");
    }

    #[tokio::test]
    async fn test_fetch_non_success_status() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/users/ghost/items");
            then.status(404);
        });

        let source = QiitaSource::with_base_url(reqwest::Client::new(), "ghost", server.base_url());
        let err = source.fetch().await.unwrap_err();

        assert!(err.to_string().contains("qiita"));
        assert!(err.to_string().contains("404"));
    }

    #[tokio::test]
    async fn test_fetch_malformed_payload() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/users/shiimaxx/items");
            then.status(200)
                .header("Content-Type", "application/json")
                .body("not json");
        });

        let source =
            QiitaSource::with_base_url(reqwest::Client::new(), "shiimaxx", server.base_url());

        assert!(source.fetch().await.is_err());
    }

    #[tokio::test]
    async fn test_empty_item_list() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/users/quiet/items");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!([]));
        });

        let source = QiitaSource::with_base_url(reqwest::Client::new(), "quiet", server.base_url());
        let entries = source.fetch().await.unwrap();

        assert!(entries.is_empty());
    }
}
