mod config;
mod rules;

pub use config::Thresholds;

use super::domain::{Stage, StageInputs, TransitionResult};

/// Stateless evaluator that applies the stage rules to typed inputs.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StageEvaluator {
    thresholds: Thresholds,
}

impl StageEvaluator {
    pub fn new(thresholds: Thresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    /// Compute the transition out of `stage` for the given inputs.
    ///
    /// Never fails: terminal stages, inputs shaped for a different stage and
    /// missing fields all resolve to a rejection with the condition
    /// `"Transition Failed"` and a score of zero.
    pub fn evaluate(&self, stage: Stage, inputs: &StageInputs) -> TransitionResult {
        match (stage, inputs) {
            (
                Stage::DocumentCheck,
                StageInputs::Documents {
                    documents_verified: Some(verified),
                },
            ) => rules::document_check(*verified),
            (
                Stage::AcademicEvaluation,
                StageInputs::Academic {
                    marks_2nd_year: Some(marks_2nd_year),
                    marks_admission_test: Some(marks_admission_test),
                },
            ) => rules::academic_evaluation(
                *marks_2nd_year,
                *marks_admission_test,
                &self.thresholds,
            ),
            (
                Stage::ActivityCheck,
                StageInputs::Activities {
                    activity_count: Some(count),
                },
            ) => rules::activity_check(*count),
            (
                Stage::InterviewEvaluation,
                StageInputs::Interview {
                    interview_percentage: Some(percentage),
                },
            ) => rules::interview_evaluation(*percentage, &self.thresholds),
            _ => rules::transition_failed(),
        }
    }

    /// Combined academic percentage, or `None` when the marks cannot produce one.
    pub fn academic_score(&self, marks_2nd_year: f64, marks_admission_test: f64) -> Option<f64> {
        rules::academic_score(marks_2nd_year, marks_admission_test, &self.thresholds)
    }
}
