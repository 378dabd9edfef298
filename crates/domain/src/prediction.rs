//! The prediction report returned for one submission.

use serde::{Deserialize, Serialize};

use crate::classify::{AiLabel, Prediction};
use crate::evidence::{Evidence, trusted_count};
use crate::verdict::{UiColor, Verdict};

/// Full result of analyzing one text, as served to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionReport {
    /// Fake probability from the selected classifier.
    pub ai_score: f64,
    /// Categorical AI label for the score.
    pub ai_label: AiLabel,
    /// Number of trusted evidence items found.
    pub evidence_count: usize,
    /// Unified verdict over score and evidence.
    pub final_verdict: Verdict,
    /// Display color for the verdict.
    pub ui_color: UiColor,
    /// Human explanation of the verdict.
    pub verdict_explanation: String,
    /// All evidence found, trusted or not.
    pub evidence: Vec<Evidence>,
    /// Guidance shown for invalid input; absent otherwise.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl PredictionReport {
    /// Builds the report for a scored submission with its evidence.
    ///
    /// The verdict counts only trusted evidence, but all items are
    /// carried in the report so clients can style the distinction.
    #[must_use]
    pub fn from_scoring(prediction: Prediction, evidence: Vec<Evidence>) -> Self {
        let trusted = trusted_count(&evidence);
        let verdict = Verdict::from_signals(prediction.says_fake(), trusted > 0);
        Self {
            ai_score: prediction.fake_score,
            ai_label: prediction.label(),
            evidence_count: trusted,
            final_verdict: verdict,
            ui_color: verdict.color(),
            verdict_explanation: verdict.explanation().to_string(),
            evidence,
            description: None,
        }
    }

    /// Builds the fixed report for input that fails validation.
    #[must_use]
    pub fn invalid_input() -> Self {
        let verdict = Verdict::NotValidSentence;
        Self {
            ai_score: 0.0,
            ai_label: AiLabel::Unknown,
            evidence_count: 0,
            final_verdict: verdict,
            ui_color: verdict.color(),
            verdict_explanation: verdict.explanation().to_string(),
            evidence: Vec::new(),
            description: Some(
                "The input is too short or meaningless to analyze. \
                 Please enter a complete news headline or paragraph."
                    .to_string(),
            ),
        }
    }
}
