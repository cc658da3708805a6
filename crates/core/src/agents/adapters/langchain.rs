//! LangChain adapter implementation.
//!
//! Wraps a LangChain runner process. The runner receives one request line
//! on stdin and emits chain output as NDJSON: `chunk` events while the
//! chain streams, a final `result` event, or an `error` event.

use crate::agents::adapters::runner_error;
use crate::agents::base::{ensure_model_allowed, AdapterError, AgentAdapter, InvokeRequest};
use crate::agents::factory::FactoryError;
use crate::agents::runner::{AgentRunner, RunnerRequest, DEFAULT_TIMEOUT_SECS};
use arena_protocol::{AgentDescriptor, AgentManifest};
use async_trait::async_trait;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use std::time::Duration;
use tokio_stream::{Stream, StreamExt};

/// Adapter for agents built on LangChain.
pub struct LangChainAdapter {
    descriptor: AgentDescriptor,
    manifest: AgentManifest,
    command: String,
    working_dir: PathBuf,
    timeout: Duration,
}

impl LangChainAdapter {
    /// Create a new LangChain adapter from its manifest.
    ///
    /// # Arguments
    ///
    /// * `manifest` - The agent manifest
    /// * `manifest_dir` - Directory containing the manifest; becomes the
    ///   runner's working directory
    pub fn new(manifest: AgentManifest, manifest_dir: &Path) -> Result<Self, FactoryError> {
        let command = manifest
            .command
            .clone()
            .ok_or_else(|| FactoryError::MissingCommand {
                framework: manifest.framework.clone(),
                name: manifest.name.clone(),
            })?;

        Ok(Self {
            descriptor: AgentDescriptor::from(&manifest),
            command,
            working_dir: manifest_dir.to_path_buf(),
            timeout: Duration::from_secs(manifest.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)),
            manifest,
        })
    }

    /// Fold the runner's event stream into the chain's final output.
    async fn collect_response(
        mut stream: Pin<Box<dyn Stream<Item = Result<serde_json::Value, AdapterError>> + Send>>,
    ) -> Result<String, AdapterError> {
        let mut streamed = String::new();

        while let Some(item) = stream.next().await {
            let value = item?;
            let event: ChainEvent = serde_json::from_value(value)
                .map_err(|e| AdapterError::Upstream(format!("Unrecognized chain event: {}", e)))?;

            match event {
                ChainEvent::Chunk { content } => streamed.push_str(&content),
                ChainEvent::Result { output } => return Ok(output),
                ChainEvent::Error { kind, message } => return Err(runner_error(kind, message)),
            }
        }

        // A streaming chain may finish without an explicit result event.
        if streamed.is_empty() {
            Err(AdapterError::Upstream(
                "Runner exited without producing a result".to_string(),
            ))
        } else {
            Ok(streamed)
        }
    }
}

#[async_trait]
impl AgentAdapter for LangChainAdapter {
    fn descriptor(&self) -> &AgentDescriptor {
        &self.descriptor
    }

    async fn check_availability(&self) -> bool {
        which::which(&self.command).is_ok()
    }

    async fn invoke(&self, request: &InvokeRequest) -> Result<String, AdapterError> {
        ensure_model_allowed(&self.manifest.models, &request.model)?;

        let stream = AgentRunner::execute(
            self.command.clone(),
            self.manifest.args.clone(),
            self.working_dir.clone(),
            RunnerRequest {
                message: request.message.clone(),
                model: request.model.clone(),
                conversation_id: request.conversation_id.clone(),
                system_prompt: self.manifest.system_prompt.clone(),
                settings: self.manifest.settings.clone(),
            },
        );

        match tokio::time::timeout(self.timeout, Self::collect_response(stream)).await {
            Ok(result) => result,
            Err(_) => Err(AdapterError::Timeout),
        }
    }
}

/// LangChain runner events (NDJSON output).
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ChainEvent {
    /// Incremental chain output while streaming.
    Chunk { content: String },
    /// Final chain output.
    Result { output: String },
    /// Chain failure.
    Error {
        #[serde(default)]
        kind: Option<String>,
        message: String,
    },
}
