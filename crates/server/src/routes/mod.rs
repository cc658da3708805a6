//! Route table for the dispatch API.

pub mod chat;
pub mod config;
pub mod health;

use crate::state::AppState;
use axum::routing::{get, post};
use axum::Router;

/// Assemble the dispatch API router over the shared state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/config", get(config::get_system_config))
        .route("/chat", post(chat::handle_chat))
        .route("/health", get(health::health_check))
        .with_state(state)
}
