//! Live-news use case.

use veriscope_domain::NewsArticle;

use crate::error::ApplicationResult;
use crate::ports::NewsProvider;

/// Topic used when the caller does not supply one.
const DEFAULT_TOPIC: &str = "news";

/// Use case for fetching the live-news feed.
pub struct LiveNews<N: NewsProvider> {
    news: N,
}

impl<N: NewsProvider> LiveNews<N> {
    /// Creates the use case over a news provider.
    #[must_use]
    pub const fn new(news: N) -> Self {
        Self { news }
    }

    /// Fetches recent articles for a topic, optionally scoped to a region.
    ///
    /// The region currently only specializes India, matching the
    /// product's launch market; other values leave the query global.
    ///
    /// # Errors
    ///
    /// Propagates provider failures so the API layer can report them.
    pub async fn execute(
        &self,
        topic: Option<&str>,
        region: Option<&str>,
    ) -> ApplicationResult<Vec<NewsArticle>> {
        let topic = topic.filter(|t| !t.trim().is_empty()).unwrap_or(DEFAULT_TOPIC);

        let query = if region.is_some_and(|r| r.eq_ignore_ascii_case("india")) {
            format!("{topic} AND India")
        } else {
            topic.to_string()
        };

        Ok(self.news.latest(&query).await?)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use std::sync::{Arc, Mutex};

    use crate::ports::ProviderError;

    #[derive(Default, Clone)]
    struct RecordingNews {
        queries: Arc<Mutex<Vec<String>>>,
    }

    #[async_trait]
    impl NewsProvider for RecordingNews {
        async fn latest(&self, query: &str) -> Result<Vec<NewsArticle>, ProviderError> {
            self.queries.lock().unwrap().push(query.to_string());
            Ok(Vec::new())
        }
    }

    #[tokio::test]
    async fn test_default_topic() {
        let provider = RecordingNews::default();
        let queries = Arc::clone(&provider.queries);
        LiveNews::new(provider).execute(None, None).await.unwrap();
        assert_eq!(queries.lock().unwrap().as_slice(), ["news"]);
    }

    #[tokio::test]
    async fn test_india_region_scopes_query() {
        let provider = RecordingNews::default();
        let queries = Arc::clone(&provider.queries);
        LiveNews::new(provider)
            .execute(Some("elections"), Some("India"))
            .await
            .unwrap();
        assert_eq!(queries.lock().unwrap().as_slice(), ["elections AND India"]);
    }

    #[tokio::test]
    async fn test_other_regions_stay_global() {
        let provider = RecordingNews::default();
        let queries = Arc::clone(&provider.queries);
        LiveNews::new(provider)
            .execute(Some("markets"), Some("global"))
            .await
            .unwrap();
        assert_eq!(queries.lock().unwrap().as_slice(), ["markets"]);
    }
}
