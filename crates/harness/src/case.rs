//! The fixed verification cases.

use veriscope_domain::{ModelType, Verdict};

/// One request/verify cycle against the prediction endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    /// Case label used in output and error reports.
    pub name: &'static str,
    /// Text submitted for prediction.
    pub text: &'static str,
    /// Model the service should run.
    pub model: ModelType,
    /// Verdict the service must return.
    pub expected: Verdict,
}

/// The three built-in cases, one per exercised verdict.
///
/// The texts are chosen to drive the deep model and the evidence
/// lookup to a known corner of the verdict table:
/// positive wording with corroboration, positive wording about an
/// implausible uncorroborated claim, and alarmist wording with no
/// corroboration.
#[must_use]
pub fn builtin_cases() -> Vec<TestCase> {
    vec![
        TestCase {
            name: "TEST 1: VERIFIED REAL",
            text: "The government of India officially announced the new digital budget \
                   verified safe.",
            model: ModelType::DeepLearning,
            expected: Verdict::VerifiedReal,
        },
        TestCase {
            name: "TEST 2: POTENTIAL HOAX",
            text: "The verified good amazing miracle safe cure found on Mars today.",
            model: ModelType::DeepLearning,
            expected: Verdict::PotentialHoax,
        },
        TestCase {
            name: "TEST 3: CONFIRMED FAKE",
            text: "The terrible bad illegal government lie about aliens attacking earth.",
            model: ModelType::DeepLearning,
            expected: Verdict::ConfirmedFake,
        },
    ]
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_three_cases_cover_three_verdicts() {
        let cases = builtin_cases();
        assert_eq!(cases.len(), 3);
        let verdicts: Vec<Verdict> = cases.iter().map(|c| c.expected).collect();
        assert_eq!(
            verdicts,
            [
                Verdict::VerifiedReal,
                Verdict::PotentialHoax,
                Verdict::ConfirmedFake
            ]
        );
    }

    #[test]
    fn test_case_texts_pass_sentence_validation() {
        for case in builtin_cases() {
            assert!(
                veriscope_domain::Submission::new(case.text).is_ok(),
                "{} text must be analyzable",
                case.name
            );
        }
    }
}
