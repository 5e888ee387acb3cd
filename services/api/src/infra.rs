use admissions::workflows::admission::{HistoryEvent, HistorySink, SinkError};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Keeps every transition in memory and mirrors it to the tracing log.
#[derive(Default, Clone)]
pub(crate) struct InMemoryHistorySink {
    events: Arc<Mutex<Vec<HistoryEvent>>>,
}

impl HistorySink for InMemoryHistorySink {
    fn record(&self, entry: HistoryEvent) -> Result<(), SinkError> {
        info!(
            sequence = entry.sequence,
            from = entry.record.from_stage.code(),
            to = entry.record.to_stage.code(),
            condition = %entry.record.condition_text,
            "transition recorded"
        );
        let mut guard = self
            .events
            .lock()
            .map_err(|_| SinkError::Unavailable("history mutex poisoned".to_string()))?;
        guard.push(entry);
        Ok(())
    }
}

impl InMemoryHistorySink {
    pub(crate) fn events(&self) -> Vec<HistoryEvent> {
        self.events
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}
