//! Liveness endpoint.

use arena_protocol::HealthResponse;
use axum::Json;

/// `GET /health`: constant liveness signal, no dependencies checked.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
