//! Configuration listing endpoint.

use crate::state::AppState;
use arena_protocol::ConfigResponse;
use axum::extract::State;
use axum::Json;

/// `GET /config`: all discovered frameworks/agents plus the model catalog.
///
/// Pure read over the startup-built registry; no side effects.
pub async fn get_system_config(State(state): State<AppState>) -> Json<ConfigResponse> {
    Json(ConfigResponse {
        frameworks: state.registry.list(),
        models: (*state.models).clone(),
    })
}
