use serde::{Deserialize, Serialize};

use super::domain::{StudentInfo, TransitionRecord};

/// Outbound hook receiving every committed transition (audit log, dashboards).
pub trait HistorySink: Send + Sync {
    fn record(&self, entry: HistoryEvent) -> Result<(), SinkError>;
}

/// Transition as delivered to a sink, tagged with the applicant it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEvent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_number: Option<String>,
    pub sequence: usize,
    pub record: TransitionRecord,
}

impl HistoryEvent {
    pub fn new(student: Option<&StudentInfo>, sequence: usize, record: TransitionRecord) -> Self {
        Self {
            registration_number: student.map(|info| info.registration_number.clone()),
            sequence,
            record,
        }
    }
}

/// History sink failure.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("history sink unavailable: {0}")]
    Unavailable(String),
}

/// Sink that drops every event, for callers that only need the session history.
#[derive(Debug, Default, Clone, Copy)]
pub struct DiscardSink;

impl HistorySink for DiscardSink {
    fn record(&self, _entry: HistoryEvent) -> Result<(), SinkError> {
        Ok(())
    }
}
