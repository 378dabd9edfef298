//! Caching wrapper for evidence providers.

use std::time::Duration;

use async_trait::async_trait;
use moka::future::Cache;
use veriscope_application::{EvidenceProvider, ProviderError};
use veriscope_domain::Evidence;

/// Default number of distinct queries kept in the cache.
const DEFAULT_CAPACITY: u64 = 1_000;

/// Evidence provider decorator that caches successful lookups per
/// query. Repeated submissions of the same claim are common (the
/// harness resubmits fixed texts, UI users retry), and evidence for a
/// claim does not change within the TTL window. Failures are not
/// cached, so a transient outage does not pin an empty result.
pub struct CachedEvidenceProvider<P> {
    inner: P,
    cache: Cache<String, Vec<Evidence>>,
}

impl<P: EvidenceProvider> CachedEvidenceProvider<P> {
    /// Wraps a provider with a TTL-bounded query cache.
    #[must_use]
    pub fn new(inner: P, ttl: Duration) -> Self {
        Self {
            inner,
            cache: Cache::builder()
                .max_capacity(DEFAULT_CAPACITY)
                .time_to_live(ttl)
                .build(),
        }
    }
}

#[async_trait]
impl<P: EvidenceProvider> EvidenceProvider for CachedEvidenceProvider<P> {
    async fn search(&self, query: &str) -> Result<Vec<Evidence>, ProviderError> {
        if let Some(hit) = self.cache.get(query).await {
            tracing::debug!(query, "evidence cache hit");
            return Ok(hit);
        }

        let evidence = self.inner.search(query).await?;
        self.cache.insert(query.to_string(), evidence.clone()).await;
        Ok(evidence)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Clone)]
    struct CountingProvider {
        calls: Arc<AtomicUsize>,
        fail: bool,
    }

    #[async_trait]
    impl EvidenceProvider for CountingProvider {
        async fn search(&self, query: &str) -> Result<Vec<Evidence>, ProviderError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(ProviderError::Connection("refused".into()));
            }
            Ok(vec![Evidence::from_result(
                query.to_string(),
                "snippet".into(),
                "https://reuters.com/x".into(),
            )])
        }
    }

    #[tokio::test]
    async fn test_repeat_query_hits_cache() {
        let calls = Arc::new(AtomicUsize::new(0));
        let cached = CachedEvidenceProvider::new(
            CountingProvider {
                calls: Arc::clone(&calls),
                fail: false,
            },
            Duration::from_secs(60),
        );

        let first = cached.search("same claim").await.unwrap();
        let second = cached.search("same claim").await.unwrap();
        assert_eq!(first, second);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_distinct_queries_miss() {
        let calls = Arc::new(AtomicUsize::new(0));
        let cached = CachedEvidenceProvider::new(
            CountingProvider {
                calls: Arc::clone(&calls),
                fail: false,
            },
            Duration::from_secs(60),
        );

        cached.search("claim one").await.unwrap();
        cached.search("claim two").await.unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_failures_are_not_cached() {
        let calls = Arc::new(AtomicUsize::new(0));
        let cached = CachedEvidenceProvider::new(
            CountingProvider {
                calls: Arc::clone(&calls),
                fail: true,
            },
            Duration::from_secs(60),
        );

        assert!(cached.search("claim").await.is_err());
        assert!(cached.search("claim").await.is_err());
        // Both attempts reached the inner provider.
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}
