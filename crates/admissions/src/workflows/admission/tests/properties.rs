use proptest::prelude::*;

use super::common::*;
use crate::workflows::admission::domain::{Stage, StageInputs};

fn any_stage() -> impl Strategy<Value = Stage> {
    prop_oneof![
        Just(Stage::DocumentCheck),
        Just(Stage::AcademicEvaluation),
        Just(Stage::ActivityCheck),
        Just(Stage::InterviewEvaluation),
        Just(Stage::Accepted),
        Just(Stage::Rejected),
    ]
}

fn any_inputs() -> impl Strategy<Value = StageInputs> {
    prop_oneof![
        proptest::option::of(any::<bool>())
            .prop_map(|documents_verified| StageInputs::Documents { documents_verified }),
        (
            proptest::option::of(0u32..=1100),
            proptest::option::of(0u32..=100)
        )
            .prop_map(|(second_year, admission_test)| StageInputs::Academic {
                marks_2nd_year: second_year.map(f64::from),
                marks_admission_test: admission_test.map(f64::from),
            }),
        proptest::option::of(0u32..10)
            .prop_map(|activity_count| StageInputs::Activities { activity_count }),
        proptest::option::of(0u32..=100).prop_map(|percentage| StageInputs::Interview {
            interview_percentage: percentage.map(f64::from),
        }),
    ]
}

proptest! {
    #[test]
    fn evaluation_is_deterministic(stage in any_stage(), inputs in any_inputs()) {
        let evaluator = evaluator();
        let first = evaluator.evaluate(stage, &inputs);
        let second = evaluator.evaluate(stage, &inputs);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn transitions_only_move_forward_or_reject(stage in any_stage(), inputs in any_inputs()) {
        let result = evaluator().evaluate(stage, &inputs);
        prop_assert!(result.next_stage == Stage::Rejected || result.next_stage > stage);
        prop_assert!(!stage.is_terminal() || result.next_stage == Stage::Rejected);
    }

    #[test]
    fn academic_score_follows_combined_percentage(
        second_year in 0u32..=1100,
        admission_test in 0u32..=100
    ) {
        let total = f64::from(second_year + admission_test);
        let expected = (total / 1200.0 * 100.0).round();
        let result = evaluator().evaluate(
            Stage::AcademicEvaluation,
            &StageInputs::academic(f64::from(second_year), f64::from(admission_test)),
        );

        prop_assert!((result.stage_score - expected).abs() <= 1.0);
        prop_assert!((0.0..=100.0).contains(&result.stage_score));
        prop_assert_eq!(
            result.next_stage == Stage::ActivityCheck,
            result.stage_score >= 60.0
        );
    }

    #[test]
    fn interview_passes_exactly_at_threshold(percentage in 0u32..=100) {
        let result = evaluator().evaluate(
            Stage::InterviewEvaluation,
            &StageInputs::interview(f64::from(percentage)),
        );
        prop_assert_eq!(result.next_stage == Stage::Accepted, percentage >= 50);
        prop_assert_eq!(result.stage_score, f64::from(percentage));
    }
}
