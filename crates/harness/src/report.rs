//! Structured run results and console rendering.

use serde::Deserialize;
use veriscope_domain::Verdict;

use crate::client::ClientError;

/// The fields of a prediction response this harness consumes.
///
/// The service sends more (explanations, raw evidence); everything
/// beyond these is ignored, and the verdict stays a plain string so
/// unrecognized labels surface as failures rather than decode errors.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PredictionResult {
    /// Fake probability reported by the service.
    #[serde(default)]
    pub ai_score: f64,
    /// Trusted evidence count reported by the service.
    #[serde(default)]
    pub evidence_count: u64,
    /// Verdict label.
    pub final_verdict: String,
    /// Display color for the verdict.
    #[serde(default)]
    pub ui_color: String,
}

/// How one case ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaseStatus {
    /// The verdict matched the expectation.
    Passed,
    /// The service answered but with a different verdict.
    Failed {
        /// Verdict the case expected.
        expected: Verdict,
        /// Verdict the service returned.
        actual: String,
    },
    /// The case never got a usable response; it was not run to a
    /// verdict rather than failed.
    Error {
        /// Transport or decode failure description.
        message: String,
    },
}

/// Result of one executed case.
#[derive(Debug, Clone, PartialEq)]
pub struct CaseOutcome {
    /// Case label.
    pub name: &'static str,
    /// How the case ended.
    pub status: CaseStatus,
    /// The parsed response, when one was received.
    pub result: Option<PredictionResult>,
}

impl CaseOutcome {
    /// Builds the outcome for a received response checked against the
    /// expected verdict.
    #[must_use]
    pub fn from_result(name: &'static str, expected: Verdict, result: PredictionResult) -> Self {
        let status = if result.final_verdict == expected.as_str() {
            CaseStatus::Passed
        } else {
            CaseStatus::Failed {
                expected,
                actual: result.final_verdict.clone(),
            }
        };
        Self {
            name,
            status,
            result: Some(result),
        }
    }

    /// Builds the outcome for a case that never reached a verdict.
    #[must_use]
    pub fn from_error(name: &'static str, error: &ClientError) -> Self {
        Self {
            name,
            status: CaseStatus::Error {
                message: error.to_string(),
            },
            result: None,
        }
    }

    /// Renders this outcome to the console, matching the layout the
    /// original operators expect.
    pub fn print(&self) {
        if let CaseStatus::Error { message } = &self.status {
            println!("Error {}: {message}", self.name);
            return;
        }

        println!("\n--- {} ---", self.name);
        if let Some(result) = &self.result {
            println!("AI Score: {}", result.ai_score);
            println!("Evidence Count: {}", result.evidence_count);
            println!("Final Verdict: {}", result.final_verdict);
            println!("UI Color: {}", result.ui_color);
        }
        match &self.status {
            CaseStatus::Passed => println!("✅ PASS"),
            CaseStatus::Failed { expected, .. } => println!("❌ FAIL (Expected {expected})"),
            CaseStatus::Error { .. } => {}
        }
    }
}

/// Aggregated outcomes of one full run.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RunReport {
    /// Per-case outcomes in execution order.
    pub outcomes: Vec<CaseOutcome>,
}

impl RunReport {
    /// Number of cases whose verdict matched.
    #[must_use]
    pub fn passed(&self) -> usize {
        self.count(|s| matches!(s, CaseStatus::Passed))
    }

    /// Number of cases whose verdict differed.
    #[must_use]
    pub fn failed(&self) -> usize {
        self.count(|s| matches!(s, CaseStatus::Failed { .. }))
    }

    /// Number of cases that never reached a verdict.
    #[must_use]
    pub fn errored(&self) -> usize {
        self.count(|s| matches!(s, CaseStatus::Error { .. }))
    }

    /// Whether every case passed.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        !self.outcomes.is_empty() && self.passed() == self.outcomes.len()
    }

    /// Process exit code for CI: zero only when every case passed.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        i32::from(!self.all_passed())
    }

    /// Prints the summary line.
    pub fn print_summary(&self) {
        println!(
            "\n{} passed, {} failed, {} errored ({} total)",
            self.passed(),
            self.failed(),
            self.errored(),
            self.outcomes.len()
        );
    }

    fn count(&self, predicate: impl Fn(&CaseStatus) -> bool) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| predicate(&outcome.status))
            .count()
    }
}
