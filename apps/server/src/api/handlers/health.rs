//! Liveness / readiness endpoint.

use crate::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// GET /health
pub async fn health(State(state): State<AppState>) -> Response {
    match state.crud_service.health_check().await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({ "status": "UP", "components": { "db": { "status": "UP" } } })),
        )
            .into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "Health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "status": "DOWN", "components": { "db": { "status": "DOWN" } } })),
            )
                .into_response()
        }
    }
}
