//! Sentiment-weighted "deep" model.
//!
//! Stands in for a transformer-based scorer: counts sentiment-bearing
//! words on whole-word boundaries, weighing negative hits 1.5x since
//! alarmist vocabulary correlates more strongly with fabricated text.

use std::sync::LazyLock;

use regex::Regex;

use super::{NEUTRAL_FAKE_SCORE, Prediction, clamp_score};

/// Longest prefix (in chars) the model looks at.
const MAX_INPUT_CHARS: usize = 1_000;

/// Extra weight applied to each negative-sentiment hit.
const NEGATIVE_WEIGHT: f64 = 1.5;

const NEGATIVE_WORDS: &[&str] = &[
    "bad",
    "terrible",
    "awful",
    "horrible",
    "fake",
    "false",
    "lie",
    "wrong",
    "misleading",
    "dangerous",
    "corrupt",
    "illegal",
    "evil",
];

const POSITIVE_WORDS: &[&str] = &[
    "good",
    "great",
    "true",
    "correct",
    "verified",
    "confirmed",
    "accurate",
    "factual",
    "legitimate",
    "official",
    "proven",
    "safe",
];

static NEGATIVE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| compile_word_patterns(NEGATIVE_WORDS));
static POSITIVE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| compile_word_patterns(POSITIVE_WORDS));

fn compile_word_patterns(words: &[&str]) -> Vec<Regex> {
    words
        .iter()
        .filter_map(|word| Regex::new(&format!(r"\b{word}\b")).ok())
        .collect()
}

fn count_hits(patterns: &[Regex], text: &str) -> usize {
    patterns.iter().map(|re| re.find_iter(text).count()).sum()
}

/// Scores the text by whole-word sentiment counting.
///
/// Only the first [`MAX_INPUT_CHARS`] characters are considered. The
/// fake probability is the negative share of the weighted sentiment
/// mass; with no sentiment words at all the neutral default applies.
#[must_use]
pub fn deep_predict(text: &str) -> Prediction {
    let truncated: String = text.chars().take(MAX_INPUT_CHARS).collect();
    let lower = truncated.to_lowercase();

    let neg_score = count_hits(&NEGATIVE_PATTERNS, &lower) as f64 * NEGATIVE_WEIGHT;
    let pos_score = count_hits(&POSITIVE_PATTERNS, &lower) as f64;

    let total = neg_score + pos_score;
    let fake_probability = if total == 0.0 {
        NEUTRAL_FAKE_SCORE
    } else {
        neg_score / total
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
        let prediction = deep_predict("The council will meet on Tuesday to review the plan.");
        assert_eq!(prediction.fake_score, NEUTRAL_FAKE_SCORE);
    }

    #[test]
    fn test_word_boundaries_respected() {
        // "officially" must not match the positive word "official",
        // and "lies" must not match the negative word "lie".
        let prediction = deep_predict("The minister officially denied telling lies.");
        assert_eq!(prediction.fake_score, NEUTRAL_FAKE_SCORE);
    }

    #[test]
    fn test_negative_hits_weighted_heavier() {
        // One negative vs one positive hit: 1.5 / (1.5 + 1.0) = 0.6.
        let prediction = deep_predict("A dangerous claim, though the source is official.");
        assert!((prediction.fake_score - 0.6).abs() < 1e-9);
        assert!(prediction.says_fake());
    }

    #[test]
    fn test_verified_real_case_text_scores_real() {
        let prediction = deep_predict(
            "The government of India officially announced the new digital budget verified safe.",
        );
        assert!(!prediction.says_fake());
    }

    #[test]
    fn test_potential_hoax_case_text_scores_real() {
        let prediction =
            deep_predict("The verified good amazing miracle safe cure found on Mars today.");
        assert!(!prediction.says_fake());
    }

    #[test]
    fn test_confirmed_fake_case_text_scores_fake() {
        let prediction =
            deep_predict("The terrible bad illegal government lie about aliens attacking earth.");
        assert_eq!(prediction.fake_score, 0.99);
    }

    #[test]
    fn test_determinism() {
        let text = "The verified good amazing miracle safe cure found on Mars today.";
        assert_eq!(deep_predict(text), deep_predict(text));
    }

    #[test]
    fn test_truncation_ignores_tail() {
        let mut text = "x ".repeat(600);
        text.push_str("terrible fake lie");
        // The sentiment words sit past the 1000-char window.
        let prediction = deep_predict(&text);
        assert_eq!(prediction.fake_score, NEUTRAL_FAKE_SCORE);
    }
}
