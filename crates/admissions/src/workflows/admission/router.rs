use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::domain::StudentInfo;
use super::service::{AdmissionService, AdmissionServiceError, Submission};
use super::session::SessionError;
use super::sink::HistorySink;

/// Router builder exposing the admission session over HTTP.
pub fn admission_router<S>(service: Arc<AdmissionService<S>>) -> Router
where
    S: HistorySink + 'static,
{
    Router::new()
        .route("/api/v1/admission", get(session_handler::<S>))
        .route("/api/v1/admission/student", post(student_handler::<S>))
        .route(
            "/api/v1/admission/transitions",
            post(transition_handler::<S>),
        )
        .route("/api/v1/admission/reset", post(reset_handler::<S>))
        .route("/api/v1/admission/report", get(report_handler::<S>))
        .with_state(service)
}

fn error_response(error: AdmissionServiceError) -> Response {
    let status = match &error {
        AdmissionServiceError::Session(SessionError::Terminal { .. })
        | AdmissionServiceError::Session(SessionError::NotDecided { .. }) => StatusCode::CONFLICT,
        AdmissionServiceError::Sink(_) => StatusCode::BAD_GATEWAY,
        AdmissionServiceError::SessionUnavailable => StatusCode::INTERNAL_SERVER_ERROR,
    };
    let payload = json!({
        "error": error.to_string(),
    });
    (status, axum::Json(payload)).into_response()
}

pub(crate) async fn session_handler<S>(
    State(service): State<Arc<AdmissionService<S>>>,
) -> Response
where
    S: HistorySink + 'static,
{
    match service.view() {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn student_handler<S>(
    State(service): State<Arc<AdmissionService<S>>>,
    axum::Json(student): axum::Json<StudentInfo>,
) -> Response
where
    S: HistorySink + 'static,
{
    match service.register_student(student) {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn transition_handler<S>(
    State(service): State<Arc<AdmissionService<S>>>,
    axum::Json(submission): axum::Json<Submission>,
) -> Response
where
    S: HistorySink + 'static,
{
    match service.submit(submission) {
        Ok(receipt) => (StatusCode::OK, axum::Json(receipt)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn reset_handler<S>(State(service): State<Arc<AdmissionService<S>>>) -> Response
where
    S: HistorySink + 'static,
{
    match service.reset() {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn report_handler<S>(State(service): State<Arc<AdmissionService<S>>>) -> Response
where
    S: HistorySink + 'static,
{
    match service.report() {
        Ok(report) => (StatusCode::OK, axum::Json(report)).into_response(),
        Err(error) => error_response(error),
    }
}
