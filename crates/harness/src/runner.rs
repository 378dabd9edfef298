//! Sequential case execution.

use crate::case::TestCase;
use crate::client::PredictClient;
use crate::report::{CaseOutcome, RunReport};

/// Executes cases one at a time against a prediction client.
///
/// There is no concurrency, no retry, and no early abort: every case
/// issues exactly one call and the run always covers all cases, so a
/// single run yields the maximum diagnostic information.
pub struct Runner {
    cases: Vec<TestCase>,
    quiet: bool,
}

impl Runner {
    /// Creates a runner over the given cases.
    #[must_use]
    pub const fn new(cases: Vec<TestCase>) -> Self {
        Self {
            cases,
            quiet: false,
        }
    }

    /// Suppresses per-case console output (used by tests).
    #[must_use]
    pub const fn quiet(mut self) -> Self {
        self.quiet = true;
        self
    }

    /// Runs every case in order and returns the aggregated report.
    pub async fn run(&self, client: &PredictClient) -> RunReport {
        let mut outcomes = Vec::with_capacity(self.cases.len());

        for case in &self.cases {
            let outcome = match client.predict(case.text, case.model).await {
                Ok(result) => CaseOutcome::from_result(case.name, case.expected, result),
                Err(error) => CaseOutcome::from_error(case.name, &error),
            };
            if !self.quiet {
                outcome.print();
            }
            outcomes.push(outcome);
        }

        RunReport { outcomes }
    }
}
