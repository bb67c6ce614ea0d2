use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde_json::json;

use crate::routes::AppState;

/// GET /health - Liveness probe
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}

/// GET /ready - Readiness probe
///
/// Not ready until the Forms API account and form are configured; the site
/// still serves pages meanwhile.
pub async fn ready(State(app): State<AppState>) -> impl IntoResponse {
    if app.contact.is_configured() {
        return (StatusCode::OK, Json(json!({"status": "ready"})));
    }

    tracing::debug!("Readiness check failed: forms api unconfigured");

    (
        StatusCode::SERVICE_UNAVAILABLE,
        Json(json!({
            "status": "not_ready",
            "reason": "forms_api_unconfigured"
        })),
    )
}
