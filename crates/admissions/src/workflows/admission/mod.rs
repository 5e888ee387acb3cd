//! Four-stage admission workflow: documents, academics, activities, interview.
//!
//! [`StageEvaluator`] is the pure transition function. [`AdmissionSession`] owns
//! the mutable state of one applicant, [`intake`] adapts raw form fields, and
//! [`AdmissionService`] with [`admission_router`] expose the session over HTTP.

pub mod domain;
pub mod evaluation;
pub mod intake;
pub mod report;
pub mod router;
pub mod service;
pub mod session;
pub mod sink;

#[cfg(test)]
mod tests;

pub use domain::{
    ApplicantProfile, FieldValue, Stage, StageInputs, StudentInfo, TransitionRecord,
    TransitionResult,
};
pub use evaluation::{StageEvaluator, Thresholds};
pub use intake::{coerce_form, FormFields};
pub use report::{DecisionReport, ExecutionPath, HistoryLogEntry};
pub use router::admission_router;
pub use service::{AdmissionService, AdmissionServiceError, Submission, SubmissionReceipt};
pub use session::{AdmissionSession, SessionError, SessionView};
pub use sink::{DiscardSink, HistoryEvent, HistorySink, SinkError};
