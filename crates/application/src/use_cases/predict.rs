//! Predict use case.

use veriscope_domain::{ModelType, PredictionReport, Submission, classify};

use crate::ports::EvidenceProvider;

/// Input for analyzing one text.
#[derive(Debug, Clone)]
pub struct PredictInput {
    /// The text to analyze.
    pub text: String,
    /// Which classifier to run.
    pub model: ModelType,
}

/// Use case for producing a prediction report for one submission.
pub struct Predict<E: EvidenceProvider> {
    evidence: E,
}

impl<E: EvidenceProvider> Predict<E> {
    /// Creates the use case over an evidence provider.
    #[must_use]
    pub const fn new(evidence: E) -> Self {
        Self { evidence }
    }

    /// Analyzes the text and produces the full report.
    ///
    /// Input that fails sentence validation yields the fixed
    /// `NOT A VALID SENTENCE` report instead of an error. Evidence
    /// lookup failures degrade to an empty evidence list so a flaky
    /// search backend never blocks scoring; the verdict then falls on
    /// the no-evidence side of the table.
    pub async fn execute(&self, input: PredictInput) -> PredictionReport {
        let Ok(submission) = Submission::new(input.text) else {
            return PredictionReport::invalid_input();
        };

        let prediction = classify::predict(&submission, input.model);

        let evidence = match self.evidence.search(submission.text()).await {
            Ok(items) => items,
            Err(error) => {
                tracing::warn!(%error, "evidence lookup failed, scoring without evidence");
                Vec::new()
            }
        };

        PredictionReport::from_scoring(prediction, evidence)
    }
}
