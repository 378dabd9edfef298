//! Veriscope Harness - prediction API verification
//!
//! Drives a fixed sequence of request/verify cycles against a running
//! prediction service and reports outcomes. Each case posts one text
//! to `/predict`, parses the returned report, and checks the verdict
//! against an expected label. Cases run strictly in sequence, never
//! retry, and never abort the run: a transport failure in one case is
//! recorded and the next case still executes.

pub mod case;
pub mod client;
pub mod report;
pub mod runner;

pub use case::{TestCase, builtin_cases};
pub use client::{ClientError, PredictClient};
pub use report::{CaseOutcome, CaseStatus, PredictionResult, RunReport};
pub use runner::Runner;
