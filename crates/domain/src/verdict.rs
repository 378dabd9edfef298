//! Verdict labels and their display colors.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{DomainError, DomainResult};

/// Categorical assessment of a text's veracity.
///
/// The unified verdict combines two signals: whether the AI classifier
/// leans fake (fake score >= 0.5) and whether any trusted evidence was
/// found for the claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    /// Credible writing style and corroborated by trusted sources.
    #[serde(rename = "VERIFIED REAL")]
    VerifiedReal,
    /// Credible writing style but no trusted source carries the claim.
    #[serde(rename = "POTENTIAL HOAX")]
    PotentialHoax,
    /// Corroborated facts presented in a sensational style.
    #[serde(rename = "SENSATIONALIZED")]
    Sensationalized,
    /// Suspicious style and zero corroboration.
    #[serde(rename = "CONFIRMED FAKE")]
    ConfirmedFake,
    /// Input was too short or meaningless to analyze.
    #[serde(rename = "NOT A VALID SENTENCE")]
    NotValidSentence,
}

impl Verdict {
    /// Derives the unified verdict from the two scoring signals.
    #[must_use]
    pub const fn from_signals(ai_says_fake: bool, has_evidence: bool) -> Self {
        match (ai_says_fake, has_evidence) {
            (false, true) => Self::VerifiedReal,
            (false, false) => Self::PotentialHoax,
            (true, true) => Self::Sensationalized,
            (true, false) => Self::ConfirmedFake,
        }
    }

    /// Returns the display color associated with this verdict.
    #[must_use]
    pub const fn color(self) -> UiColor {
        match self {
            Self::VerifiedReal => UiColor::Green,
            Self::PotentialHoax => UiColor::Amber,
            Self::Sensationalized => UiColor::Yellow,
            Self::ConfirmedFake => UiColor::Red,
            Self::NotValidSentence => UiColor::Gray,
        }
    }

    /// Returns the human-readable explanation shown next to the verdict.
    #[must_use]
    pub const fn explanation(self) -> &'static str {
        match self {
            Self::VerifiedReal => {
                "✅ Verified by trusted sources with professional writing style."
            }
            Self::PotentialHoax => {
                "⚠️ Professional writing style, but NO evidence found in trusted sources."
            }
            Self::Sensationalized => {
                "ℹ️ Facts confirmed by sources, but the writing style is sensational/clickbait."
            }
            Self::ConfirmedFake => {
                "⛔ Suspicious writing style and zero evidence found in trusted sources."
            }
            Self::NotValidSentence => "Input invalid.",
        }
    }

    /// Returns the verdict as its wire label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::VerifiedReal => "VERIFIED REAL",
            Self::PotentialHoax => "POTENTIAL HOAX",
            Self::Sensationalized => "SENSATIONALIZED",
            Self::ConfirmedFake => "CONFIRMED FAKE",
            Self::NotValidSentence => "NOT A VALID SENTENCE",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Verdict {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        match s {
            "VERIFIED REAL" => Ok(Self::VerifiedReal),
            "POTENTIAL HOAX" => Ok(Self::PotentialHoax),
            "SENSATIONALIZED" => Ok(Self::Sensationalized),
            "CONFIRMED FAKE" => Ok(Self::ConfirmedFake),
            "NOT A VALID SENTENCE" => Ok(Self::NotValidSentence),
            other => Err(DomainError::UnknownVerdict(other.to_string())),
        }
    }
}

/// Display color attached to a verdict for UI consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UiColor {
    /// Verified content.
    Green,
    /// Unverified but plausible content.
    Amber,
    /// Sensationalized content.
    Yellow,
    /// Fake content.
    Red,
    /// Invalid input.
    Gray,
}

impl UiColor {
    /// Returns the color as its wire label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Amber => "amber",
            Self::Yellow => "yellow",
            Self::Red => "red",
            Self::Gray => "gray",
        }
    }
}

impl fmt::Display for UiColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
