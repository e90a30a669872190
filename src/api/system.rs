use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use super::AppState;
use super::types::HealthResponse;

/// `GET /health`
///
/// Readiness probe that checks database connectivity.
pub async fn health(State(state): State<Arc<AppState>>) -> Response {
    let ready = state.store.ping().await.is_ok();

    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(HealthResponse { ready })).into_response()
}
