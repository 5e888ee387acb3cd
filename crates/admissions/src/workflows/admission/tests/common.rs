use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::workflows::admission::domain::{StageInputs, StudentInfo};
use crate::workflows::admission::evaluation::{StageEvaluator, Thresholds};
use crate::workflows::admission::intake::FormFields;
use crate::workflows::admission::service::AdmissionService;
use crate::workflows::admission::session::AdmissionSession;
use crate::workflows::admission::sink::{HistoryEvent, HistorySink, SinkError};
use crate::workflows::admission::{admission_router, Stage};

pub(super) fn evaluator() -> StageEvaluator {
    StageEvaluator::new(Thresholds::default())
}

pub(super) fn student() -> StudentInfo {
    StudentInfo {
        name: "Ayesha Khan".to_string(),
        registration_number: "REG-2024-0117".to_string(),
        program: "BS Computer Science".to_string(),
    }
}

/// Inputs that carry an applicant all the way to `Accepted`.
pub(super) fn accepted_path() -> Vec<StageInputs> {
    vec![
        StageInputs::documents(true),
        StageInputs::academic(750.0, 70.0),
        StageInputs::activities(1),
        StageInputs::interview(75.0),
    ]
}

pub(super) fn session_at(stage: Stage) -> AdmissionSession {
    let mut session = AdmissionSession::new(evaluator());
    session.register_student(student());
    for inputs in accepted_path() {
        if session.current_stage() == stage {
            break;
        }
        session.submit(inputs).expect("transient stage accepts input");
    }
    assert_eq!(session.current_stage(), stage);
    session
}

pub(super) fn form(pairs: &[(&str, &str)]) -> FormFields {
    pairs
        .iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect()
}

#[derive(Default)]
pub(super) struct MemorySink {
    events: Mutex<Vec<HistoryEvent>>,
}

impl MemorySink {
    pub(super) fn events(&self) -> Vec<HistoryEvent> {
        self.events.lock().expect("sink mutex poisoned").clone()
    }
}

impl HistorySink for MemorySink {
    fn record(&self, entry: HistoryEvent) -> Result<(), SinkError> {
        self.events.lock().expect("sink mutex poisoned").push(entry);
        Ok(())
    }
}

pub(super) struct OfflineSink;

impl HistorySink for OfflineSink {
    fn record(&self, _entry: HistoryEvent) -> Result<(), SinkError> {
        Err(SinkError::Unavailable("audit log offline".to_string()))
    }
}

pub(super) fn build_service() -> (Arc<AdmissionService<MemorySink>>, Arc<MemorySink>) {
    let sink = Arc::new(MemorySink::default());
    let service = Arc::new(AdmissionService::new(evaluator(), sink.clone()));
    (service, sink)
}

pub(super) fn router_with_service(service: Arc<AdmissionService<MemorySink>>) -> axum::Router {
    admission_router(service)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
