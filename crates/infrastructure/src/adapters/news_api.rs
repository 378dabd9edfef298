//! Live-news adapter backed by NewsAPI.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use veriscope_application::{NewsProvider, ProviderError};
use veriscope_domain::NewsArticle;

use super::{DEFAULT_TIMEOUT, build_client, check_status, map_error};

const NEWS_ENDPOINT: &str = "https://newsapi.org/v2/everything";

/// How many articles one feed request returns.
const PAGE_SIZE: usize = 10;

/// News provider backed by the NewsAPI "everything" endpoint, sorted
/// newest first.
pub struct NewsApiProvider {
    client: reqwest::Client,
    api_key: String,
    timeout: Duration,
}

impl NewsApiProvider {
    /// Creates the provider with the default timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(api_key: String) -> Result<Self, ProviderError> {
        Self::with_timeout(api_key, DEFAULT_TIMEOUT)
    }

    /// Creates the provider with an explicit per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_timeout(api_key: String, timeout: Duration) -> Result<Self, ProviderError> {
        Ok(Self {
            client: build_client(timeout)?,
            api_key,
            timeout,
        })
    }
}

#[async_trait]
impl NewsProvider for NewsApiProvider {
    async fn latest(&self, query: &str) -> Result<Vec<NewsArticle>, ProviderError> {
        let page_size = PAGE_SIZE.to_string();
        let response = self
            .client
            .get(NEWS_ENDPOINT)
            .query(&[
                ("q", query),
                ("sortBy", "publishedAt"),
                ("pageSize", page_size.as_str()),
                ("apiKey", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| map_error(&e, self.timeout))?;

        let payload: NewsResponse = check_status(response)?
            .json()
            .await
            .map_err(|e| ProviderError::Decode(e.to_string()))?;

        if payload.status != "ok" {
            return Err(ProviderError::Other(
                payload
                    .message
                    .unwrap_or_else(|| "news backend reported failure".to_string()),
            ));
        }

        Ok(payload.articles.into_iter().map(into_article).collect())
    }
}

#[derive(Debug, Deserialize)]
struct NewsResponse {
    status: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    articles: Vec<RawArticle>,
}

#[derive(Debug, Deserialize)]
struct RawArticle {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    url: String,
    #[serde(rename = "urlToImage", default)]
    url_to_image: Option<String>,
    #[serde(default)]
    source: RawSource,
    #[serde(rename = "publishedAt", default)]
    published_at: String,
}

#[derive(Debug, Deserialize, Default)]
struct RawSource {
    #[serde(default)]
    name: Option<String>,
}

fn into_article(raw: RawArticle) -> NewsArticle {
    NewsArticle {
        title: raw.title.unwrap_or_else(|| "No title".to_string()),
        description: raw
            .description
            .unwrap_or_else(|| "No description available".to_string()),
        url: raw.url,
        image: raw.url_to_image,
        source: raw.source.name.unwrap_or_else(|| "Unknown".to_string()),
        published_at: raw.published_at,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_article_mapping() {
        let payload: NewsResponse = serde_json::from_str(
            r#"{
                "status": "ok",
                "articles": [{
                    "title": "Budget tabled",
                    "description": "Summary",
                    "url": "https://example.com/a",
                    "urlToImage": null,
                    "source": {"name": "The Wire"},
                    "publishedAt": "2024-02-01T09:30:00Z"
                }]
            }"#,
        )
        .unwrap();

        assert_eq!(payload.status, "ok");
        let article = into_article(payload.articles.into_iter().next().unwrap());
        assert_eq!(article.source, "The Wire");
        assert_eq!(article.image, None);
    }

    #[test]
    fn test_missing_fields_get_placeholders() {
        let raw: RawArticle =
            serde_json::from_str(r#"{"url": "https://example.com/b"}"#).unwrap();
        let article = into_article(raw);
        assert_eq!(article.title, "No title");
        assert_eq!(article.description, "No description available");
        assert_eq!(article.source, "Unknown");
    }

    #[test]
    fn test_error_status_payload() {
        let payload: NewsResponse = serde_json::from_str(
            r#"{"status": "error", "message": "apiKeyInvalid"}"#,
        )
        .unwrap();
        assert_eq!(payload.status, "error");
        assert_eq!(payload.message.as_deref(), Some("apiKeyInvalid"));
    }
}
