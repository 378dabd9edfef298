//! Text submissions and model selection.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{DomainError, DomainResult};

/// Minimum trimmed length, in characters, for an analyzable submission.
pub const MIN_TEXT_LEN: usize = 20;

/// Minimum word count for an analyzable submission.
pub const MIN_WORD_COUNT: usize = 3;

/// A validated piece of text submitted for analysis.
///
/// Construction enforces the bad-input rule: text shorter than
/// [`MIN_TEXT_LEN`] characters (trimmed) or with fewer than
/// [`MIN_WORD_COUNT`] words is not a sentence worth scoring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    text: String,
}

impl Submission {
    /// Validates and wraps the given text.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::EmptyText`], [`DomainError::TextTooShort`]
    /// or [`DomainError::TooFewWords`] when the input fails validation.
    pub fn new(text: impl Into<String>) -> DomainResult<Self> {
        let text = text.into();
        let trimmed = text.trim();

        if trimmed.is_empty() {
            return Err(DomainError::EmptyText);
        }

        let words = trimmed.split_whitespace().count();
        let length = trimmed.chars().count();
        if length < MIN_TEXT_LEN {
            return Err(DomainError::TextTooShort { length });
        }
        if words < MIN_WORD_COUNT {
            return Err(DomainError::TooFewWords { words });
        }

        Ok(Self { text })
    }

    /// Returns the submitted text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Which classifier to run over a submission.
///
/// Unknown labels deserialize as [`ModelType::DeepLearning`]; the deep
/// model is the default path and the classic model is opt-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ModelType {
    /// Keyword-indicator model.
    Classic,
    /// Sentiment-weighted model.
    #[default]
    #[serde(other)]
    DeepLearning,
}

impl ModelType {
    /// Parses a model label leniently: `classic` selects the classic
    /// model, anything else falls back to deep learning.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        if label == "classic" {
            Self::Classic
        } else {
            Self::DeepLearning
        }
    }

    /// Returns the model type as its wire label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::DeepLearning => "deep_learning",
        }
    }
}

impl fmt::Display for ModelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_valid_submission() {
        let sub = Submission::new("The committee published its annual findings today.").unwrap();
        assert!(sub.text().starts_with("The committee"));
    }

    #[test]
    fn test_empty_text_rejected() {
        assert_eq!(Submission::new("   "), Err(DomainError::EmptyText));
    }

    #[test]
    fn test_short_text_rejected() {
        // 19 trimmed chars, under the 20-char floor.
        let result = Submission::new("only nineteen chars");
        assert_eq!(result, Err(DomainError::TextTooShort { length: 19 }));
    }

    #[test]
    fn test_exactly_twenty_chars_accepted() {
        let text = "twenty chars in all!";
        assert_eq!(text.len(), 20);
        assert!(Submission::new(text).is_ok());
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 19 Devanagari characters but 49 bytes of UTF-8; the floor
        // applies to characters, so this is still too short.
        let text = "यह एक छोटा वाक्य है";
        assert!(text.len() > MIN_TEXT_LEN);
        assert_eq!(
            Submission::new(text),
            Err(DomainError::TextTooShort { length: 19 })
        );
    }

    #[test]
    fn test_two_words_rejected() {
        let result = Submission::new("supercalifragilistic expialidocious");
        assert_eq!(result, Err(DomainError::TooFewWords { words: 2 }));
    }

    #[test]
    fn test_model_type_lenient_parse() {
        assert_eq!(ModelType::from_label("classic"), ModelType::Classic);
        assert_eq!(ModelType::from_label("deep_learning"), ModelType::DeepLearning);
        assert_eq!(ModelType::from_label("transformer-xl"), ModelType::DeepLearning);
    }

    #[test]
    fn test_model_type_serde() {
        assert_eq!(
            serde_json::from_str::<ModelType>("\"classic\"").unwrap(),
            ModelType::Classic
        );
        // Unknown labels fall back to the deep model.
        assert_eq!(
            serde_json::from_str::<ModelType>("\"bert\"").unwrap(),
            ModelType::DeepLearning
        );
    }
}
