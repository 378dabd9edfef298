//! Shared request state.

use std::sync::Arc;
use std::time::Duration;

use veriscope_application::{EvidenceProvider, NewsProvider, SuggestionProvider};
use veriscope_infrastructure::{
    CachedEvidenceProvider, GoogleSearchProvider, GoogleSuggestProvider, NewsApiProvider,
};

use crate::config::ServerConfig;

/// Provider handles shared by every request handler.
///
/// Providers are trait objects so tests can swap in stubs without
/// touching the router.
#[derive(Clone)]
pub struct AppState {
    /// Evidence search backend.
    pub evidence: Arc<dyn EvidenceProvider>,
    /// Live-news backend.
    pub news: Arc<dyn NewsProvider>,
    /// Autocomplete backend.
    pub suggestions: Arc<dyn SuggestionProvider>,
}

impl AppState {
    /// Builds state with explicit providers.
    #[must_use]
    pub fn new(
        evidence: Arc<dyn EvidenceProvider>,
        news: Arc<dyn NewsProvider>,
        suggestions: Arc<dyn SuggestionProvider>,
    ) -> Self {
        Self {
            evidence,
            news,
            suggestions,
        }
    }

    /// Builds state with the real outbound providers from config.
    ///
    /// # Errors
    ///
    /// Returns an error if an HTTP client cannot be created.
    pub fn from_config(config: &ServerConfig) -> anyhow::Result<Self> {
        let timeout = Duration::from_millis(config.request_timeout_ms);

        let search = GoogleSearchProvider::with_timeout(
            config.google_api_key.clone(),
            config.search_engine_id.clone(),
            timeout,
        )?;
        let evidence = CachedEvidenceProvider::new(
            search,
            Duration::from_secs(config.evidence_cache_ttl_secs),
        );
        let news = NewsApiProvider::with_timeout(config.news_api_key.clone(), timeout)?;
        let suggestions = GoogleSuggestProvider::with_timeout(timeout)?;

        Ok(Self {
            evidence: Arc::new(evidence),
            news: Arc::new(news),
            suggestions: Arc::new(suggestions),
        })
    }
}
