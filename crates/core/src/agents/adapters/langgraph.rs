//! LangGraph adapter implementation.
//!
//! Wraps a LangGraph runner process. Graph execution emits `node` events
//! as control moves through the graph, `message` events carrying model
//! output, and an `end` event that may override the accumulated output.

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

/// Adapter for agents built on LangGraph.
pub struct LangGraphAdapter {
    descriptor: AgentDescriptor,
    manifest: AgentManifest,
    command: String,
    working_dir: PathBuf,
    timeout: Duration,
}

impl LangGraphAdapter {
    /// Create a new LangGraph adapter from its manifest.
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

    /// Fold graph events into the final output.
    ///
    /// Message contents accumulate in order; an `end` event carrying an
    /// output replaces them.
    async fn collect_response(
        agent: &str,
        mut stream: Pin<Box<dyn Stream<Item = Result<serde_json::Value, AdapterError>> + Send>>,
    ) -> Result<String, AdapterError> {
        let mut messages: Vec<String> = Vec::new();

        while let Some(item) = stream.next().await {
            let value = item?;
            let event: GraphEvent = serde_json::from_value(value)
                .map_err(|e| AdapterError::Upstream(format!("Unrecognized graph event: {}", e)))?;

            match event {
                GraphEvent::Node { name } => {
                    tracing::debug!(agent, node = %name, "graph node entered");
                }
                GraphEvent::Message { content } => messages.push(content),
                GraphEvent::End { output } => {
                    return match output {
                        Some(output) => Ok(output),
                        None if messages.is_empty() => Err(AdapterError::Upstream(
                            "Graph ended without producing output".to_string(),
                        )),
                        None => Ok(messages.join("\n")),
                    };
                }
                GraphEvent::Error { kind, message } => return Err(runner_error(kind, message)),
            }
        }

        if messages.is_empty() {
            Err(AdapterError::Upstream(
                "Runner exited without reaching the graph end".to_string(),
            ))
        } else {
            Ok(messages.join("\n"))
        }
    }
}

#[async_trait]
impl AgentAdapter for LangGraphAdapter {
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

        match tokio::time::timeout(
            self.timeout,
            Self::collect_response(&self.descriptor.name, stream),
        )
        .await
        {
            Ok(result) => result,
            Err(_) => Err(AdapterError::Timeout),
        }
    }
}

/// LangGraph runner events (NDJSON output).
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum GraphEvent {
    /// Control entered a graph node.
    Node { name: String },
    /// Model output emitted by a node.
    Message { content: String },
    /// Graph execution finished; `output` overrides accumulated messages.
    End {
        #[serde(default)]
        output: Option<String>,
    },
    /// Graph failure.
    Error {
        #[serde(default)]
        kind: Option<String>,
        message: String,
    },
}
