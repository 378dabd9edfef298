//! Classic keyword-indicator model.

use super::{NEUTRAL_FAKE_SCORE, Prediction, clamp_score};

/// Phrases that typically accompany fabricated or clickbait stories.
const FAKE_INDICATORS: &[&str] = &[
    "shocking",
    "unbelievable",
    "secret",
    "they don't want you to know",
    "breaking",
    "urgent",
    "share before deleted",
    "mainstream media",
    "conspiracy",
    "cover-up",
    "exposed",
    "truth revealed",
    "wake up",
    "miracle",
    "cure",
    "100%",
    "guaranteed",
    "hoax",
    "scam",
];

/// Phrases that typically accompany sourced reporting.
const REAL_INDICATORS: &[&str] = &[
    "according to",
    "study shows",
    "research",
    "scientists",
    "officials",
    "confirmed",
    "reported",
    "announced",
    "statement",
    "evidence",
    "data",
    "analysis",
    "peer-reviewed",
];

/// Scores the text by counting indicator substrings from each list.
///
/// The fake probability is the share of fake indicators among all hits;
/// with no hits at all the neutral default applies.
#[must_use]
pub fn classic_predict(text: &str) -> Prediction {
    let lower = text.to_lowercase();

    let fake_hits = FAKE_INDICATORS.iter().filter(|i| lower.contains(**i)).count();
    let real_hits = REAL_INDICATORS.iter().filter(|i| lower.contains(**i)).count();

    let total = fake_hits + real_hits;
    let fake_probability = if total == 0 {
        NEUTRAL_FAKE_SCORE
    } else {
        fake_hits as f64 / total as f64
    };

    Prediction {
        fake_score: clamp_score(fake_probability),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_neutral_text_defaults_leaning_real() {
        let prediction = classic_predict("The weather was mild across the region this week.");
        assert_eq!(prediction.fake_score, NEUTRAL_FAKE_SCORE);
        assert!(!prediction.says_fake());
    }

    #[test]
    fn test_pure_fake_indicators_clamp_high() {
        let prediction = classic_predict("SHOCKING secret miracle cure guaranteed!");
        assert_eq!(prediction.fake_score, 0.99);
    }

    #[test]
    fn test_pure_real_indicators_clamp_low() {
        let prediction =
            classic_predict("According to officials, the study shows new evidence and data.");
        assert_eq!(prediction.fake_score, 0.01);
    }

    #[test]
    fn test_mixed_indicators_ratio() {
        // One fake hit ("breaking") against one real hit ("confirmed").
        let prediction = classic_predict("Breaking: ministry confirmed the figures.");
        assert_eq!(prediction.fake_score, 0.5);
        assert!(prediction.says_fake());
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let upper = classic_predict("HOAX EXPOSED BY CONSPIRACY");
        let lower = classic_predict("hoax exposed by conspiracy");
        assert_eq!(upper, lower);
    }
}
