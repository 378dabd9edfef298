//! Text classifiers.
//!
//! Two keyword-driven models score a submission for "fakeness". Both
//! produce a fake probability clamped to [0.01, 0.99] and default to a
//! slightly-real 0.4 when no indicator fires, so neutral text is never
//! flagged outright. Scoring is deterministic for a fixed input.

mod classic;
mod deep;

use serde::{Deserialize, Serialize};

pub use classic::classic_predict;
pub use deep::deep_predict;

use crate::submission::{ModelType, Submission};

/// Neutral fake probability used when no indicator matches.
pub(crate) const NEUTRAL_FAKE_SCORE: f64 = 0.4;

/// Clamps a raw probability into the reportable range.
pub(crate) fn clamp_score(probability: f64) -> f64 {
    probability.clamp(0.01, 0.99)
}

/// Output of a classifier run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Probability in [0.01, 0.99] that the text is fake.
    pub fake_score: f64,
}

impl Prediction {
    /// Whether the classifier leans fake.
    #[must_use]
    pub fn says_fake(self) -> bool {
        self.fake_score >= 0.5
    }

    /// The categorical label for this score.
    #[must_use]
    pub fn label(self) -> AiLabel {
        if self.says_fake() {
            AiLabel::Fake
        } else {
            AiLabel::Real
        }
    }
}

/// Categorical AI label reported alongside the raw score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AiLabel {
    /// Score at or above the fake threshold.
    Fake,
    /// Score below the fake threshold.
    Real,
    /// No score was computed (invalid input).
    Unknown,
}

/// Runs the classifier selected by `model` over the submission.
#[must_use]
pub fn predict(submission: &Submission, model: ModelType) -> Prediction {
    match model {
        ModelType::Classic => classic_predict(submission.text()),
        ModelType::DeepLearning => deep_predict(submission.text()),
    }
}
