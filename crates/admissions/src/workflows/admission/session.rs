use serde::Serialize;
use tracing::{debug, info, warn};

use super::domain::{ApplicantProfile, Stage, StageInputs, StudentInfo, TransitionRecord};
use super::evaluation::StageEvaluator;
use super::report::{history_log, HistoryLogEntry};

/// Errors raised when a session operation does not apply to the current stage.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("applicant already reached terminal stage {stage}")]
    Terminal { stage: Stage },
    #[error("no admission decision yet; workflow is at {stage}")]
    NotDecided { stage: Stage },
}

/// Single applicant's walk through the workflow.
///
/// Owns the current stage, the append-only transition history and the merged
/// applicant profile. `submit` and `reset` are the only operations that change
/// any of them.
#[derive(Debug, Clone)]
pub struct AdmissionSession {
    evaluator: StageEvaluator,
    student: Option<StudentInfo>,
    current_stage: Stage,
    history: Vec<TransitionRecord>,
    profile: ApplicantProfile,
}

impl Default for AdmissionSession {
    fn default() -> Self {
        Self::new(StageEvaluator::default())
    }
}

impl AdmissionSession {
    pub fn new(evaluator: StageEvaluator) -> Self {
        Self {
            evaluator,
            student: None,
            current_stage: Stage::INITIAL,
            history: Vec::new(),
            profile: ApplicantProfile::default(),
        }
    }

    /// Start a fresh application for `student`.
    pub fn register_student(&mut self, student: StudentInfo) {
        self.reset();
        info!(
            registration_number = %student.registration_number,
            program = %student.program,
            "student registered for admission"
        );
        self.student = Some(student);
    }

    /// Evaluate `inputs` against the current stage and commit the transition.
    pub fn submit(&mut self, inputs: StageInputs) -> Result<&TransitionRecord, SessionError> {
        let from_stage = self.current_stage;
        if from_stage.is_terminal() {
            warn!(stage = from_stage.code(), "submission rejected in terminal stage");
            return Err(SessionError::Terminal { stage: from_stage });
        }

        if inputs.stage() != from_stage {
            debug!(
                expected = from_stage.code(),
                received = inputs.stage().code(),
                "inputs shaped for a different stage"
            );
        }

        let result = self.evaluator.evaluate(from_stage, &inputs);
        self.profile.merge(&inputs);
        self.current_stage = result.next_stage;

        let record = TransitionRecord::new(from_stage, result);
        info!(
            from = record.from_stage.code(),
            to = record.to_stage.code(),
            outcome = %record.outcome_label,
            score = record.stage_score,
            "stage transition committed"
        );
        self.history.push(record);

        Ok(&self.history[self.history.len() - 1])
    }

    /// Discard history and profile and return to the initial stage.
    ///
    /// The registered student is kept.
    pub fn reset(&mut self) {
        self.current_stage = Stage::INITIAL;
        self.history.clear();
        self.profile.clear();
        debug!("admission session reset");
    }

    pub fn evaluator(&self) -> &StageEvaluator {
        &self.evaluator
    }

    pub fn current_stage(&self) -> Stage {
        self.current_stage
    }

    pub fn is_terminal(&self) -> bool {
        self.current_stage.is_terminal()
    }

    pub fn history(&self) -> &[TransitionRecord] {
        &self.history
    }

    pub fn profile(&self) -> &ApplicantProfile {
        &self.profile
    }

    pub fn student(&self) -> Option<&StudentInfo> {
        self.student.as_ref()
    }

    /// The transition that sent the applicant to `Rejected`, if any.
    pub fn rejection(&self) -> Option<&TransitionRecord> {
        self.history.iter().find(|record| record.is_rejection())
    }

    pub fn view(&self) -> SessionView {
        SessionView {
            current_stage: self.current_stage,
            stage_code: self.current_stage.code(),
            stage_title: self.current_stage.title(),
            terminal: self.is_terminal(),
            student: self.student.clone(),
            history: self.history.clone(),
            log: history_log(&self.history),
            profile: self.profile.clone(),
        }
    }
}

/// Serializable snapshot of a session for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    pub current_stage: Stage,
    pub stage_code: &'static str,
    pub stage_title: &'static str,
    pub terminal: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student: Option<StudentInfo>,
    pub history: Vec<TransitionRecord>,
    pub log: Vec<HistoryLogEntry>,
    pub profile: ApplicantProfile,
}
