//! Veriscope Application - Use cases and ports
//!
//! This crate orchestrates the domain logic behind each API operation
//! and defines the ports implemented by infrastructure adapters.

pub mod error;
pub mod ports;
pub mod use_cases;

pub use error::{ApplicationError, ApplicationResult};
pub use ports::{EvidenceProvider, NewsProvider, ProviderError, SuggestionProvider};
pub use use_cases::{Explain, LiveNews, Predict, PredictInput, Suggestions};
