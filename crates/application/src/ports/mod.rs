//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the application core and the
//! external search, news, and autocomplete services. Each port is a
//! trait implemented by an adapter in the infrastructure layer.

mod evidence_provider;
mod news_provider;
mod suggestion_provider;

pub use evidence_provider::EvidenceProvider;
pub use news_provider::NewsProvider;
pub use suggestion_provider::SuggestionProvider;

use thiserror::Error;

/// Errors an external provider call can produce.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// The call exceeded its timeout.
    #[error("provider request timed out after {timeout_ms}ms")]
    Timeout {
        /// Configured timeout in milliseconds.
        timeout_ms: u64,
    },

    /// The provider host could not be reached.
    #[error("connection to provider failed: {0}")]
    Connection(String),

    /// The provider answered with a non-success status.
    #[error("provider returned status {status}")]
    UnexpectedStatus {
        /// HTTP status code from the provider.
        status: u16,
    },

    /// The provider's payload could not be decoded.
    #[error("failed to decode provider response: {0}")]
    Decode(String),

    /// Any other failure.
    #[error("provider error: {0}")]
    Other(String),
}
