//! Live-news feed port.

use async_trait::async_trait;
use veriscope_domain::NewsArticle;

use super::ProviderError;

/// Port for fetching recent articles matching a query.
#[async_trait]
pub trait NewsProvider: Send + Sync {
    /// Fetches the latest articles for the query, newest first.
    ///
    /// # Errors
    ///
    /// Returns a [`ProviderError`] when the news backend cannot be
    /// reached or answers with an unusable payload.
    async fn latest(&self, query: &str) -> Result<Vec<NewsArticle>, ProviderError>;
}

#[async_trait]
impl<T: NewsProvider + ?Sized> NewsProvider for std::sync::Arc<T> {
    async fn latest(&self, query: &str) -> Result<Vec<NewsArticle>, ProviderError> {
        (**self).latest(query).await
    }
}
