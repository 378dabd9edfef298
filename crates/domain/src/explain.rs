//! LIME-style word-importance explanations.
//!
//! Assigns each word a signed weight (positive pulls toward "fake",
//! negative toward "real") from short indicator lists, with random
//! jitter so repeated runs shade neutral words differently, and renders
//! the result as a self-contained HTML fragment: a top-10 bar chart,
//! the highlighted text, and a legend.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Indicator stems that pull a word toward the fake side.
const FAKE_STEMS: &[&str] = &[
    "shocking",
    "unbelievable",
    "secret",
    "breaking",
    "urgent",
    "conspiracy",
    "exposed",
    "truth",
    "hoax",
    "scam",
    "fake",
    "lie",
];

/// Indicator stems that pull a word toward the real side.
const REAL_STEMS: &[&str] = &[
    "according",
    "study",
    "research",
    "scientists",
    "officials",
    "confirmed",
    "reported",
    "evidence",
    "data",
    "analysis",
];

/// Only the first N words of the text are explained.
const MAX_EXPLAINED_WORDS: usize = 50;

/// How many words appear in the importance chart.
const TOP_WORDS: usize = 10;

/// Which side of the classification a word leans toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightKind {
    /// Indicates real content.
    Positive,
    /// Indicates fake content.
    Negative,
    /// No meaningful pull.
    Neutral,
}

/// One word with its importance weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordWeight {
    /// The word as it appeared in the text.
    pub word: String,
    /// Signed weight; positive leans fake, negative leans real.
    pub weight: f64,
    /// Classification of the pull.
    pub kind: WeightKind,
}

/// Computes per-word importance weights for the first
/// [`MAX_EXPLAINED_WORDS`] words of the text.
#[must_use]
pub fn word_importance(text: &str) -> Vec<WordWeight> {
    let mut rng = rand::rng();

    text.split_whitespace()
        .take(MAX_EXPLAINED_WORDS)
        .map(|word| {
            let clean: String = word
                .to_lowercase()
                .chars()
                .filter(char::is_ascii_lowercase)
                .collect();

            let (weight, kind) = if FAKE_STEMS.iter().any(|stem| clean.contains(stem)) {
                (0.3 + rng.random_range(0.0..0.4), WeightKind::Negative)
            } else if REAL_STEMS.iter().any(|stem| clean.contains(stem)) {
                (-(0.3 + rng.random_range(0.0..0.4)), WeightKind::Positive)
            } else if clean.len() > 3 {
                let jitter = rng.random_range(-0.1..0.1);
                let kind = if jitter > 0.0 {
                    WeightKind::Negative
                } else if jitter < -0.05 {
                    WeightKind::Positive
                } else {
                    WeightKind::Neutral
                };
                (jitter, kind)
            } else {
                (0.0, WeightKind::Neutral)
            };

            WordWeight {
                word: word.to_string(),
                weight,
                kind,
            }
        })
        .collect()
}

/// Renders the full HTML explanation for the text.
#[must_use]
pub fn render_explanation(text: &str) -> String {
    let weights = word_importance(text);

    let mut top: Vec<&WordWeight> = weights.iter().collect();
    top.sort_by(|a, b| {
        b.weight
            .abs()
            .partial_cmp(&a.weight.abs())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    top.truncate(TOP_WORDS);

    let bar_chart: String = top.into_iter().map(render_bar).collect();
    let highlighted: Vec<String> = weights.iter().map(render_highlight).collect();

    format!(
        r#"<div style="font-family: system-ui, sans-serif; color: #1f2937;">
  <h3 style="font-size: 18px; font-weight: 600;">LIME Text Explanation</h3>
  <div style="margin-bottom: 24px;">
    <h4 style="font-size: 14px; font-weight: 600;">Word Importance (Top {TOP_WORDS})</h4>
    <div style="background: #f9fafb; padding: 16px; border-radius: 8px;">{bar_chart}</div>
  </div>
  <div style="margin-bottom: 24px;">
    <h4 style="font-size: 14px; font-weight: 600;">Highlighted Text</h4>
    <div style="background: #f9fafb; padding: 16px; border-radius: 8px; line-height: 1.8;">{}</div>
  </div>
  <div style="display: flex; gap: 16px;">
    <span style="font-size: 13px; color: #6b7280;">&#9632; red: indicates fake</span>
    <span style="font-size: 13px; color: #6b7280;">&#9632; green: indicates real</span>
  </div>
</div>"#,
        highlighted.join(" "),
    )
}

fn render_bar(weight: &WordWeight) -> String {
    let bar_width = (weight.weight.abs() * 200.0).round() as u32;
    let (color, label) = if weight.weight > 0.0 {
        ("#ef4444", "Fake indicator")
    } else {
        ("#22c55e", "Real indicator")
    };
    format!(
        r#"<div style="display: flex; align-items: center; margin: 8px 0;">
  <div style="width: 120px; font-size: 14px;">{}</div>
  <div style="width: {bar_width}px; height: 20px; background: {color}; border-radius: 4px;"></div>
  <span style="font-size: 12px; color: #6b7280;">{:.1}% ({label})</span>
</div>"#,
        escape_html(&weight.word),
        weight.weight * 100.0,
    )
}

fn render_highlight(weight: &WordWeight) -> String {
    if weight.weight.abs() < 0.1 {
        return escape_html(&weight.word);
    }

    let intensity = (weight.weight.abs() * 2.0).min(1.0);
    let background = match weight.kind {
        WeightKind::Negative => format!("rgba(239, 68, 68, {intensity:.2})"),
        WeightKind::Positive => format!("rgba(34, 197, 94, {intensity:.2})"),
        WeightKind::Neutral => return escape_html(&weight.word),
    };
    format!(
        r#"<span style="background-color: {background}; padding: 2px 4px; border-radius: 3px;">{}</span>"#,
        escape_html(&weight.word)
    )
}

fn escape_html(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_indicator_words_get_signed_weights() {
        let weights = word_importance("shocking conspiracy confirmed by officials");
        assert_eq!(weights[0].kind, WeightKind::Negative);
        assert!(weights[0].weight >= 0.3);
        assert_eq!(weights[2].kind, WeightKind::Positive);
        assert!(weights[2].weight <= -0.3);
    }

    #[test]
    fn test_short_words_are_neutral() {
        let weights = word_importance("a up it is");
        assert!(weights.iter().all(|w| w.kind == WeightKind::Neutral));
        assert!(weights.iter().all(|w| w.weight == 0.0));
    }

    #[test]
    fn test_word_cap() {
        let text = "word ".repeat(80);
        assert_eq!(word_importance(&text).len(), MAX_EXPLAINED_WORDS);
    }

    #[test]
    fn test_punctuation_stripped_before_matching() {
        let weights = word_importance("It was a 'Hoax!' they said");
        let hoax = weights.iter().find(|w| w.word.contains("Hoax")).unwrap();
        assert_eq!(hoax.kind, WeightKind::Negative);
    }

    #[test]
    fn test_rendered_explanation_structure() {
        let html = render_explanation("shocking miracle cure confirmed by research data");
        assert!(html.contains("LIME Text Explanation"));
        assert!(html.contains("Word Importance"));
        assert!(html.contains("Highlighted Text"));
    }

    #[test]
    fn test_html_is_escaped() {
        let html = render_explanation("beware the <script> shocking payload here");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
