//! Evidence adapter backed by the Google Custom Search API.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use veriscope_application::{EvidenceProvider, ProviderError};
use veriscope_domain::Evidence;

use super::{DEFAULT_TIMEOUT, build_client, check_status, map_error};

const SEARCH_ENDPOINT: &str = "https://www.googleapis.com/customsearch/v1";

/// At most this many results are turned into evidence.
const MAX_RESULTS: usize = 10;

/// Evidence provider that runs a broad (unrestricted) web search and
/// classifies result hosts against the trusted-source tables.
pub struct GoogleSearchProvider {
    client: reqwest::Client,
    api_key: String,
    engine_id: String,
    timeout: Duration,
}

impl GoogleSearchProvider {
    /// Creates the provider with the default timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(api_key: String, engine_id: String) -> Result<Self, ProviderError> {
        Self::with_timeout(api_key, engine_id, DEFAULT_TIMEOUT)
    }

    /// Creates the provider with an explicit per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_timeout(
        api_key: String,
        engine_id: String,
        timeout: Duration,
    ) -> Result<Self, ProviderError> {
        Ok(Self {
            client: build_client(timeout)?,
            api_key,
            engine_id,
            timeout,
        })
    }
}

#[async_trait]
impl EvidenceProvider for GoogleSearchProvider {
    async fn search(&self, query: &str) -> Result<Vec<Evidence>, ProviderError> {
        let response = self
            .client
            .get(SEARCH_ENDPOINT)
            .query(&[
                ("key", self.api_key.as_str()),
                ("cx", self.engine_id.as_str()),
                ("q", query),
            ])
            .send()
            .await
            .map_err(|e| map_error(&e, self.timeout))?;

        let payload: SearchResponse = check_status(response)?
            .json()
            .await
            .map_err(|e| ProviderError::Decode(e.to_string()))?;

        Ok(into_evidence(payload))
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    snippet: Option<String>,
    #[serde(default)]
    link: Option<String>,
}

fn into_evidence(payload: SearchResponse) -> Vec<Evidence> {
    payload
        .items
        .into_iter()
        .take(MAX_RESULTS)
        .map(|item| {
            Evidence::from_result(
                item.title.unwrap_or_else(|| "No title".to_string()),
                item.snippet
                    .unwrap_or_else(|| "No description available".to_string()),
                item.link.unwrap_or_default(),
            )
        })
        .collect()
}
