//! Evidence search port.

use async_trait::async_trait;
use veriscope_domain::Evidence;

use super::ProviderError;

/// Port for searching corroborating sources for a claim.
#[async_trait]
pub trait EvidenceProvider: Send + Sync {
    /// Searches for evidence related to the query.
    ///
    /// Returns all relevant results; trusted-source filtering is the
    /// caller's concern.
    ///
    /// # Errors
    ///
    /// Returns a [`ProviderError`] when the search backend cannot be
    /// reached or answers with an unusable payload.
    async fn search(&self, query: &str) -> Result<Vec<Evidence>, ProviderError>;
}

#[async_trait]
impl<T: EvidenceProvider + ?Sized> EvidenceProvider for std::sync::Arc<T> {
    async fn search(&self, query: &str) -> Result<Vec<Evidence>, ProviderError> {
        (**self).search(query).await
    }
}
