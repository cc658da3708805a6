//! Built-in echo adapter.
//!
//! Needs no runner process; replies with the prompt prefixed by `echo: `.
//! Useful as a smoke test for the whole dispatch path and as the starter
//! agent scaffolded by `arena init`.

use crate::agents::base::{ensure_model_allowed, AdapterError, AgentAdapter, InvokeRequest};
use arena_protocol::{AgentDescriptor, AgentManifest};
use async_trait::async_trait;

/// Adapter that repeats the prompt back.
pub struct EchoAdapter {
    descriptor: AgentDescriptor,
    models: Vec<String>,
}

impl EchoAdapter {
    /// Create a new echo adapter from its manifest.
    pub fn new(manifest: &AgentManifest) -> Self {
        Self {
            descriptor: AgentDescriptor::from(manifest),
            models: manifest.models.clone(),
        }
    }
}

#[async_trait]
impl AgentAdapter for EchoAdapter {
    fn descriptor(&self) -> &AgentDescriptor {
        &self.descriptor
    }

    async fn invoke(&self, request: &InvokeRequest) -> Result<String, AdapterError> {
        ensure_model_allowed(&self.models, &request.model)?;
        Ok(format!("echo: {}", request.message))
    }
}
