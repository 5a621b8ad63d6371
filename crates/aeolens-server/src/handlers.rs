use super::{
    AppState,
    types::{AuditRequest, HealthResponse, ReadyResponse},
};
use axum::{Json, extract::State, response::IntoResponse};

/// `GET /`
pub async fn ready_handler() -> impl IntoResponse {
    Json(ReadyResponse::default())
}

/// `GET /api/health`
pub async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse::default())
}

/// `POST /audit`, `POST /api/audit`
///
/// Always answers 200 with the report; a page that could not be fetched shows
/// up as a zero-score report carrying `error`.
pub async fn audit_handler(
    State(state): State<AppState>,
    Json(request): Json<AuditRequest>,
) -> impl IntoResponse {
    tracing::info!(url = %request.url, "auditing URL");

    let report = state.auditor.evaluate(&request.url).await;

    if let Some(error) = report.error.as_deref() {
        tracing::warn!(url = %report.url, error, "audit failed");
    } else {
        tracing::info!(url = %report.url, score = report.score, "audit finished");
    }

    Json(report)
}
