use super::super::domain::{Stage, TransitionResult};
use super::config::Thresholds;

const REJECTED_LABEL: &str = "Rejected";
const TRANSITION_FAILED: &str = "Transition Failed";

/// Fail-closed result for input that cannot be evaluated against any rule.
pub(crate) fn transition_failed() -> TransitionResult {
    rejected(TRANSITION_FAILED.to_string(), 0.0)
}

fn advance(
    next_stage: Stage,
    outcome_label: String,
    condition_text: String,
    stage_score: f64,
) -> TransitionResult {
    TransitionResult {
        next_stage,
        outcome_label,
        condition_text,
        stage_score,
    }
}

fn rejected(condition_text: String, stage_score: f64) -> TransitionResult {
    TransitionResult {
        next_stage: Stage::Rejected,
        outcome_label: REJECTED_LABEL.to_string(),
        condition_text,
        stage_score,
    }
}

pub(crate) fn document_check(documents_verified: bool) -> TransitionResult {
    if documents_verified {
        advance(
            Stage::AcademicEvaluation,
            "Documents Verified".to_string(),
            "All Mandatory Documents Validated".to_string(),
            0.0,
        )
    } else {
        rejected("Mandatory Document Failure".to_string(), 0.0)
    }
}

/// Combined percentage over both mark sheets, rounded half away from zero.
///
/// Scaling before dividing keeps whole-mark inputs exact, so ties such as
/// 714/1200 land on 59.5 and round up.
pub(crate) fn academic_score(
    marks_2nd_year: f64,
    marks_admission_test: f64,
    thresholds: &Thresholds,
) -> Option<f64> {
    let score =
        ((marks_2nd_year + marks_admission_test) * 100.0 / thresholds.combined_max_score).round();
    score.is_finite().then_some(score)
}

pub(crate) fn academic_evaluation(
    marks_2nd_year: f64,
    marks_admission_test: f64,
    thresholds: &Thresholds,
) -> TransitionResult {
    let Some(score) = academic_score(marks_2nd_year, marks_admission_test, thresholds) else {
        return transition_failed();
    };
    let pass_mark = thresholds.academic_pass_percentage;

    if score >= pass_mark {
        advance(
            Stage::ActivityCheck,
            format!("Academic Pass (Score: {score}%)"),
            format!("Combined Percentage {score}% ≥ {pass_mark}%"),
            score,
        )
    } else {
        rejected(format!("Combined Percentage {score}% < {pass_mark}%"), score)
    }
}

pub(crate) fn activity_check(activity_count: u32) -> TransitionResult {
    if activity_count >= 1 {
        advance(
            Stage::InterviewEvaluation,
            format!("Activities Recorded (Count: {activity_count})"),
            format!("Minimum activity requirement met ({activity_count} ≥ 1)"),
            100.0,
        )
    } else {
        rejected(
            "Minimum 1 extracurricular activity required".to_string(),
            0.0,
        )
    }
}

pub(crate) fn interview_evaluation(
    interview_percentage: f64,
    thresholds: &Thresholds,
) -> TransitionResult {
    if !interview_percentage.is_finite() {
        return transition_failed();
    }
    let pass_mark = thresholds.interview_pass_percentage;

    if interview_percentage >= pass_mark {
        advance(
            Stage::Accepted,
            "Accepted".to_string(),
            format!("Interview Score {interview_percentage}% ≥ {pass_mark}%"),
            interview_percentage,
        )
    } else {
        rejected(
            format!("Interview Score {interview_percentage}% < {pass_mark}%"),
            interview_percentage,
        )
    }
}
