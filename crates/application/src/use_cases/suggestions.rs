//! Suggestions use case.

use crate::ports::SuggestionProvider;

/// Queries shorter than this are not worth completing.
const MIN_QUERY_LEN: usize = 2;

/// Use case for completing a partial search query.
pub struct Suggestions<S: SuggestionProvider> {
    suggestions: S,
}

impl<S: SuggestionProvider> Suggestions<S> {
    /// Creates the use case over a suggestion provider.
    #[must_use]
    pub const fn new(suggestions: S) -> Self {
        Self { suggestions }
    }

    /// Returns completion candidates for the partial query.
    ///
    /// Short queries return empty without calling the provider, and
    /// provider failures degrade to empty as well: autocomplete is a
    /// convenience, never an error surface.
    pub async fn execute(&self, query: &str) -> Vec<String> {
        if query.len() < MIN_QUERY_LEN {
            return Vec::new();
        }

        match self.suggestions.complete(query).await {
            Ok(candidates) => candidates,
            Err(error) => {
                tracing::debug!(%error, "suggestion lookup failed");
                Vec::new()
            }
        }
    }
}
