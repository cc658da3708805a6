//! Shared state for the dispatch API.

use arena_core::agents::AgentRegistry;
use std::sync::Arc;

/// Read-only state shared by all request handlers.
///
/// Built once before serving begins; cloning is cheap (two Arcs).
#[derive(Clone)]
pub struct AppState {
    /// The startup-built agent registry.
    pub registry: Arc<AgentRegistry>,

    /// Model catalog served through `GET /config`, opaque to the core.
    pub models: Arc<Vec<String>>,
}

impl AppState {
    /// Create state from a built registry and the configured model catalog.
    pub fn new(registry: AgentRegistry, models: Vec<String>) -> Self {
        Self {
            registry: Arc::new(registry),
            models: Arc::new(models),
        }
    }
}
