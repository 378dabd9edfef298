//! Application error types

use thiserror::Error;
use veriscope_domain::DomainError;

use crate::ports::ProviderError;

/// Application-level errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// A domain validation error occurred.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// An external provider call failed.
    #[error("provider error: {0}")]
    Provider(#[from] ProviderError),

    /// An internal error occurred.
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result type alias for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
