//! Provider adapters
//!
//! Each adapter wraps a `reqwest::Client` and implements one of the
//! application ports. Error mapping from reqwest into [`ProviderError`]
//! is shared here.

mod cached;
mod google_search;
mod google_suggest;
mod news_api;

pub use cached::CachedEvidenceProvider;
pub use google_search::GoogleSearchProvider;
pub use google_suggest::GoogleSuggestProvider;
pub use news_api::NewsApiProvider;

use std::time::Duration;

use veriscope_application::ProviderError;

/// Default timeout applied to every outbound provider call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Builds the shared outbound HTTP client.
///
/// # Errors
///
/// Returns an error if the client cannot be created.
pub fn build_client(timeout: Duration) -> Result<reqwest::Client, ProviderError> {
    reqwest::Client::builder()
        .user_agent(concat!("Veriscope/", env!("CARGO_PKG_VERSION")))
        .timeout(timeout)
        .build()
        .map_err(|e| ProviderError::Other(e.to_string()))
}

/// Maps reqwest errors to [`ProviderError`].
pub(crate) fn map_error(error: &reqwest::Error, timeout: Duration) -> ProviderError {
    if error.is_timeout() {
        return ProviderError::Timeout {
            timeout_ms: timeout.as_millis() as u64,
        };
    }
    if error.is_connect() {
        return ProviderError::Connection(error.to_string());
    }
    if error.is_decode() {
        return ProviderError::Decode(error.to_string());
    }
    if let Some(status) = error.status() {
        return ProviderError::UnexpectedStatus {
            status: status.as_u16(),
        };
    }
    ProviderError::Other(error.to_string())
}

/// Converts a non-success response into an error, passing success through.
pub(crate) fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ProviderError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ProviderError::UnexpectedStatus {
            status: status.as_u16(),
        })
    }
}
