use std::sync::{Arc, Mutex, MutexGuard};

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::domain::{StageInputs, StudentInfo, TransitionRecord};
use super::evaluation::StageEvaluator;
use super::intake::{coerce_form, FormFields};
use super::report::DecisionReport;
use super::session::{AdmissionSession, SessionError, SessionView};
use super::sink::{HistoryEvent, HistorySink, SinkError};

/// Submission body: either already-typed inputs or raw form fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Submission {
    Typed { inputs: StageInputs },
    Form { fields: FormFields },
}

/// Result of a committed submission.
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionReceipt {
    pub record: TransitionRecord,
    pub session: SessionView,
}

/// Facade owning the one live session and forwarding transitions to a sink.
pub struct AdmissionService<S> {
    session: Mutex<AdmissionSession>,
    sink: Arc<S>,
}

impl<S> AdmissionService<S>
where
    S: HistorySink + 'static,
{
    pub fn new(evaluator: StageEvaluator, sink: Arc<S>) -> Self {
        Self {
            session: Mutex::new(AdmissionSession::new(evaluator)),
            sink,
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, AdmissionSession>, AdmissionServiceError> {
        self.session
            .lock()
            .map_err(|_| AdmissionServiceError::SessionUnavailable)
    }

    pub fn view(&self) -> Result<SessionView, AdmissionServiceError> {
        Ok(self.lock()?.view())
    }

    pub fn register_student(
        &self,
        student: StudentInfo,
    ) -> Result<SessionView, AdmissionServiceError> {
        let mut session = self.lock()?;
        session.register_student(student);
        Ok(session.view())
    }

    /// Coerce, evaluate and commit one submission for the current stage.
    ///
    /// The transition is committed before the sink is notified; a sink failure
    /// is reported but does not roll the session back.
    pub fn submit(
        &self,
        submission: Submission,
    ) -> Result<SubmissionReceipt, AdmissionServiceError> {
        let mut session = self.lock()?;
        let stage = session.current_stage();

        let inputs = match submission {
            Submission::Typed { inputs } => inputs,
            Submission::Form { fields } => {
                coerce_form(stage, &fields).ok_or(SessionError::Terminal { stage })?
            }
        };

        let record = session.submit(inputs)?.clone();
        let event = HistoryEvent::new(
            session.student(),
            session.history().len(),
            record.clone(),
        );
        let receipt = SubmissionReceipt {
            record,
            session: session.view(),
        };
        drop(session);

        if let Err(error) = self.sink.record(event) {
            warn!(%error, "history sink rejected transition");
            return Err(error.into());
        }

        Ok(receipt)
    }

    pub fn reset(&self) -> Result<SessionView, AdmissionServiceError> {
        let mut session = self.lock()?;
        session.reset();
        Ok(session.view())
    }

    pub fn report(&self) -> Result<DecisionReport, AdmissionServiceError> {
        let session = self.lock()?;
        Ok(DecisionReport::from_session(&session)?)
    }
}

/// Error raised by the admission service.
#[derive(Debug, thiserror::Error)]
pub enum AdmissionServiceError {
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Sink(#[from] SinkError),
    #[error("admission session is unavailable")]
    SessionUnavailable,
}
