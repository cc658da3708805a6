//! # arena-server
//!
//! Dispatch HTTP API for agent-arena.
//!
//! Thin plumbing around the [`arena_core::agents::AgentRegistry`]:
//! - `GET /config`: frameworks/agents listing plus the model catalog
//! - `POST /chat`: dispatch one chat turn to an agent
//! - `GET /health`: constant liveness signal
//!
//! The registry is built before serving begins and shared read-only, so
//! request handling takes no locks.

pub mod error;
pub mod routes;
pub mod state;

pub use routes::router;
pub use state::AppState;

/// Bind `addr` and serve the dispatch API until shutdown.
pub async fn serve(addr: &str, state: AppState) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(addr = %listener.local_addr()?, "dispatch API listening");
    axum::serve(listener, router(state)).await
}
