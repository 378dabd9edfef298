//! Veriscope Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the provider ports
//! defined in the application layer, backed by reqwest clients against
//! the Google Custom Search, NewsAPI, and Google Suggest services.

pub mod adapters;

pub use adapters::{
    CachedEvidenceProvider, GoogleSearchProvider, GoogleSuggestProvider, NewsApiProvider,
};
