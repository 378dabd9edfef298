//! Server configuration.

use serde::Deserialize;

/// Runtime configuration for the prediction service.
///
/// Loaded from `VERISCOPE_*` environment variables over built-in
/// defaults, e.g. `VERISCOPE_PORT=8080` or
/// `VERISCOPE_GOOGLE_API_KEY=...`. The API keys default to empty
/// strings; without them the evidence and news providers answer with
/// provider errors, which the prediction path degrades gracefully.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
    /// Google Custom Search API key.
    pub google_api_key: String,
    /// Google Custom Search engine id.
    pub search_engine_id: String,
    /// NewsAPI key for the live-news feed.
    pub news_api_key: String,
    /// Timeout for outbound provider calls, in milliseconds.
    pub request_timeout_ms: u64,
    /// How long evidence lookups stay cached, in seconds.
    pub evidence_cache_ttl_secs: u64,
}

impl ServerConfig {
    /// Loads configuration from the environment over defaults.
    ///
    /// # Errors
    ///
    /// Returns an error when an override cannot be parsed (for
    /// example a non-numeric `VERISCOPE_PORT`).
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(config::Environment::with_prefix("VERISCOPE"))
    }

    fn load_from(env: config::Environment) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .set_default("host", "0.0.0.0")?
            .set_default("port", 3001)?
            .set_default("google_api_key", "")?
            .set_default("search_engine_id", "")?
            .set_default("news_api_key", "")?
            .set_default("request_timeout_ms", 10_000)?
            .set_default("evidence_cache_ttl_secs", 300)?
            .add_source(env)
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let cfg = ServerConfig::load_from(config::Environment::with_prefix("VERISCOPE_TEST_UNSET"))
            .unwrap();
        assert_eq!(cfg.host, "0.0.0.0");
        assert_eq!(cfg.port, 3001);
        assert_eq!(cfg.request_timeout_ms, 10_000);
        assert_eq!(cfg.evidence_cache_ttl_secs, 300);
        assert!(cfg.google_api_key.is_empty());
    }
}
