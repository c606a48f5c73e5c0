use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, info};
use url::Url;

use tf_core::{Error, NewsProvider, RawArticle, Result};

pub const DEFAULT_BASE_URL: &str = "https://newsapi.org/v2/everything";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, Deserialize)]
struct EverythingResponse {
    #[serde(default)]
    articles: Vec<RawArticle>,
}

/// HTTP client for the provider's `everything` endpoint. A missing key fails
/// the call before any request is made; callers convert every error from
/// here into a fallback value.
pub struct NewsApiClient {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl NewsApiClient {
    pub fn new(api_key: Option<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key,
        })
    }

    /// Read the key from `NEWS_API_KEY`.
    pub fn from_env() -> Result<Self> {
        Self::new(std::env::var("NEWS_API_KEY").ok())
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn request_url(&self, query: &str, page_size: usize) -> Result<Url> {
        let key = self
            .api_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or_else(|| Error::Provider("no API key configured".to_string()))?;

        Url::parse_with_params(
            &self.base_url,
            &[
                ("q", query),
                ("sortBy", "publishedAt"),
                ("language", "en"),
                ("pageSize", &page_size.to_string()),
                ("apiKey", key),
            ],
        )
        .map_err(|e| Error::InvalidUrl(e.to_string()))
    }
}

#[async_trait]
impl NewsProvider for NewsApiClient {
    async fn search(&self, query: &str, page_size: usize) -> Result<Vec<RawArticle>> {
        let url = self.request_url(query, page_size)?;
        debug!(query, page_size, "requesting articles");

        let response = self.client.get(url).send().await?.error_for_status()?;
        let payload: EverythingResponse = response.json().await?;

        info!(query, articles = payload.articles.len(), "provider query completed");
        Ok(payload.articles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_key_fails_before_any_request() {
        let client = NewsApiClient::new(None).unwrap();
        let result = client.search("bitcoin", 10).await;
        assert!(matches!(result, Err(Error::Provider(_))));

        let client = NewsApiClient::new(Some(String::new())).unwrap();
        assert!(client.search("bitcoin", 10).await.is_err());
    }

    #[test]
    fn test_request_url_shape() {
        let client = NewsApiClient::new(Some("k123".to_string())).unwrap();
        let url = client.request_url("dow jones", 20).unwrap();
        assert!(url.as_str().starts_with(DEFAULT_BASE_URL));
        let params: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        assert!(params.contains(&("q".to_string(), "dow jones".to_string())));
        assert!(params.contains(&("sortBy".to_string(), "publishedAt".to_string())));
        assert!(params.contains(&("language".to_string(), "en".to_string())));
        assert!(params.contains(&("pageSize".to_string(), "20".to_string())));
        assert!(params.contains(&("apiKey".to_string(), "k123".to_string())));
    }

    #[test]
    fn test_everything_response_tolerates_missing_articles() {
        let payload: EverythingResponse = serde_json::from_str(r#"{"status":"ok"}"#).unwrap();
        assert!(payload.articles.is_empty());
    }
}
