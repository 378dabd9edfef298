//! Autocomplete adapter backed by the Google Suggest endpoint.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use veriscope_application::{ProviderError, SuggestionProvider};

use super::{DEFAULT_TIMEOUT, build_client, check_status, map_error};

const SUGGEST_ENDPOINT: &str = "http://suggestqueries.google.com/complete/search";

/// At most this many candidates are returned.
const MAX_SUGGESTIONS: usize = 8;

/// The endpoint rejects default bot user agents, so pose as a browser.
const BROWSER_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Suggestion provider backed by the undocumented Google Suggest API
/// (`client=firefox` variant, which answers plain JSON).
pub struct GoogleSuggestProvider {
    client: reqwest::Client,
    timeout: Duration,
}

impl GoogleSuggestProvider {
    /// Creates the provider with the default timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new() -> Result<Self, ProviderError> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Creates the provider with an explicit per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_timeout(timeout: Duration) -> Result<Self, ProviderError> {
        Ok(Self {
            client: build_client(timeout)?,
            timeout,
        })
    }
}

#[async_trait]
impl SuggestionProvider for GoogleSuggestProvider {
    async fn complete(&self, query: &str) -> Result<Vec<String>, ProviderError> {
        let response = self
            .client
            .get(SUGGEST_ENDPOINT)
            .header("User-Agent", BROWSER_USER_AGENT)
            .query(&[("client", "firefox"), ("q", query)])
            .send()
            .await
            .map_err(|e| map_error(&e, self.timeout))?;

        let payload: Value = check_status(response)?
            .json()
            .await
            .map_err(|e| ProviderError::Decode(e.to_string()))?;

        Ok(parse_suggestions(&payload))
    }
}

/// The firefox-client payload is `[query, [suggestion, ...], ...]`;
/// anything else parses as no suggestions.
fn parse_suggestions(payload: &Value) -> Vec<String> {
    payload
        .as_array()
        .and_then(|outer| outer.get(1))
        .and_then(Value::as_array)
        .map(|candidates| {
            candidates
                .iter()
                .filter_map(Value::as_str)
                .take(MAX_SUGGESTIONS)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_firefox_payload_shape() {
        let payload = json!(["fake", ["fake news", "fake news detection"], [], {}]);
        assert_eq!(
            parse_suggestions(&payload),
            vec!["fake news".to_string(), "fake news detection".to_string()]
        );
    }

    #[test]
    fn test_candidate_cap() {
        let candidates: Vec<String> = (0..12).map(|i| format!("query {i}")).collect();
        let payload = json!(["query", candidates]);
        assert_eq!(parse_suggestions(&payload).len(), MAX_SUGGESTIONS);
    }

    #[test]
    fn test_unexpected_payload_is_empty() {
        assert!(parse_suggestions(&json!({"error": "nope"})).is_empty());
        assert!(parse_suggestions(&json!(["only-query"])).is_empty());
    }
}
