//! Explain use case.

use veriscope_domain::{DomainError, explain};

use crate::error::ApplicationResult;

/// Use case for rendering a word-importance explanation of a text.
#[derive(Debug, Default, Clone, Copy)]
pub struct Explain;

impl Explain {
    /// Creates the use case.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Renders the HTML explanation for the text.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::EmptyText`] for empty input. There is no
    /// length floor, and whitespace-only text renders an explanation
    /// with no weighted words rather than erroring.
    pub fn execute(&self, text: &str) -> ApplicationResult<String> {
        if text.is_empty() {
            return Err(DomainError::EmptyText.into());
        }
        Ok(explain::render_explanation(text))
    }
}
