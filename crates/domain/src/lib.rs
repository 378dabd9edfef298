//! Veriscope Domain - Core business types
//!
//! This crate defines the domain model for the Veriscope misinformation
//! checker: verdicts, submissions, classifiers, evidence, and the
//! prediction report returned to clients. All types here are pure Rust
//! with no I/O dependencies.

pub mod classify;
pub mod error;
pub mod evidence;
pub mod explain;
pub mod news;
pub mod prediction;
pub mod submission;
pub mod verdict;

pub use classify::{AiLabel, Prediction, classic_predict, deep_predict};
pub use error::{DomainError, DomainResult};
pub use evidence::{Evidence, classify_link};
pub use explain::{WeightKind, WordWeight, render_explanation, word_importance};
pub use news::NewsArticle;
pub use prediction::PredictionReport;
pub use submission::{ModelType, Submission};
pub use verdict::{UiColor, Verdict};
