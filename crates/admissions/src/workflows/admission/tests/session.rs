use super::common::*;
use crate::workflows::admission::domain::{ApplicantProfile, FieldValue, Stage, StageInputs};
use crate::workflows::admission::session::{AdmissionSession, SessionError};

#[test]
fn new_session_starts_at_document_check() {
    let session = AdmissionSession::new(evaluator());

    assert_eq!(session.current_stage(), Stage::DocumentCheck);
    assert!(session.history().is_empty());
    assert!(session.profile().is_empty());
    assert!(session.student().is_none());
}

#[test]
fn accepted_walkthrough_records_every_stage() {
    let mut session = AdmissionSession::new(evaluator());
    for inputs in accepted_path() {
        session.submit(inputs).expect("transient stage");
    }

    assert_eq!(session.current_stage(), Stage::Accepted);
    assert!(session.is_terminal());

    let path: Vec<(Stage, Stage)> = session
        .history()
        .iter()
        .map(|record| (record.from_stage, record.to_stage))
        .collect();
    assert_eq!(
        path,
        vec![
            (Stage::DocumentCheck, Stage::AcademicEvaluation),
            (Stage::AcademicEvaluation, Stage::ActivityCheck),
            (Stage::ActivityCheck, Stage::InterviewEvaluation),
            (Stage::InterviewEvaluation, Stage::Accepted),
        ]
    );
    assert_eq!(session.history()[1].stage_score, 68.0);
    assert!(session.rejection().is_none());
}

#[test]
fn academic_failure_stops_the_walkthrough() {
    let mut session = AdmissionSession::new(evaluator());
    session
        .submit(StageInputs::documents(true))
        .expect("documents");
    let record = session
        .submit(StageInputs::academic(400.0, 0.0))
        .expect("academics")
        .clone();

    assert_eq!(record.to_stage, Stage::Rejected);
    assert_eq!(record.stage_score, 33.0);
    assert_eq!(session.current_stage(), Stage::Rejected);
    assert_eq!(session.history().len(), 2);
    assert_eq!(
        session.rejection().map(|record| record.from_stage),
        Some(Stage::AcademicEvaluation)
    );
}

#[test]
fn submit_after_terminal_stage_is_refused() {
    let mut session = session_at(Stage::Accepted);

    let error = session
        .submit(StageInputs::documents(true))
        .expect_err("terminal stage");

    assert_eq!(
        error,
        SessionError::Terminal {
            stage: Stage::Accepted
        }
    );
    assert_eq!(session.history().len(), 4);
}

#[test]
fn profile_merges_fields_across_stages() {
    let session = session_at(Stage::InterviewEvaluation);
    let profile = session.profile();

    assert_eq!(profile.len(), 4);
    assert_eq!(
        profile.get("documentsVerified"),
        Some(&FieldValue::Boolean(true))
    );
    assert_eq!(profile.get("marks2ndYear"), Some(&FieldValue::Number(750.0)));
    assert_eq!(
        profile.get("marksAdmissionTest"),
        Some(&FieldValue::Number(70.0))
    );
    assert_eq!(profile.get("activityCount"), Some(&FieldValue::Count(1)));
}

#[test]
fn later_fields_overwrite_earlier_values() {
    let mut profile = ApplicantProfile::default();
    profile.merge(&StageInputs::academic(100.0, 10.0));
    profile.merge(&StageInputs::Academic {
        marks_2nd_year: Some(900.0),
        marks_admission_test: None,
    });

    assert_eq!(profile.len(), 2);
    assert_eq!(profile.get("marks2ndYear"), Some(&FieldValue::Number(900.0)));
    assert_eq!(
        profile.get("marksAdmissionTest"),
        Some(&FieldValue::Number(10.0))
    );
}

#[test]
fn mismatched_inputs_reject_and_merge() {
    let mut session = AdmissionSession::new(evaluator());
    let record = session
        .submit(StageInputs::interview(95.0))
        .expect("document stage")
        .clone();

    assert_eq!(record.to_stage, Stage::Rejected);
    assert_eq!(record.condition_text, "Transition Failed");
    assert_eq!(
        session.profile().get("interviewPercentage"),
        Some(&FieldValue::Number(95.0))
    );
}

#[test]
fn reset_clears_history_and_profile_but_keeps_student() {
    let mut session = session_at(Stage::Accepted);

    session.reset();

    assert_eq!(session.current_stage(), Stage::DocumentCheck);
    assert!(session.history().is_empty());
    assert!(session.profile().is_empty());
    assert_eq!(session.student(), Some(&student()));
}

#[test]
fn registering_a_student_restarts_the_workflow() {
    let mut session = session_at(Stage::ActivityCheck);

    session.register_student(student());

    assert_eq!(session.current_stage(), Stage::DocumentCheck);
    assert!(session.history().is_empty());
}

#[test]
fn view_reflects_session_state() {
    let session = session_at(Stage::ActivityCheck);
    let view = session.view();

    assert_eq!(view.current_stage, Stage::ActivityCheck);
    assert_eq!(view.stage_code, "S3");
    assert_eq!(view.stage_title, "Extracurricular Activities Check");
    assert!(!view.terminal);
    assert_eq!(view.history.len(), 2);
    assert_eq!(view.log.len(), 2);
    assert_eq!(view.log[0].from_code, "S2");
}
