//! Query autocomplete port.

use async_trait::async_trait;

use super::ProviderError;

/// Port for completing a partial search query.
#[async_trait]
pub trait SuggestionProvider: Send + Sync {
    /// Returns completion candidates for the partial query.
    ///
    /// # Errors
    ///
    /// Returns a [`ProviderError`] when the autocomplete backend cannot
    /// be reached or answers with an unusable payload.
    async fn complete(&self, query: &str) -> Result<Vec<String>, ProviderError>;
}

#[async_trait]
impl<T: SuggestionProvider + ?Sized> SuggestionProvider for std::sync::Arc<T> {
    async fn complete(&self, query: &str) -> Result<Vec<String>, ProviderError> {
        (**self).complete(query).await
    }
}
