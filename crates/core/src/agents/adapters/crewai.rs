//! CrewAI adapter implementation.
//!
//! Wraps a CrewAI runner process. A crew executes a sequence of tasks;
//! the runner reports `task_started`/`task_output` progress events and a
//! final `crew_result` with the assembled report.

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

/// Adapter for agents built on CrewAI.
pub struct CrewAiAdapter {
    descriptor: AgentDescriptor,
    manifest: AgentManifest,
    command: String,
    working_dir: PathBuf,
    timeout: Duration,
}

impl CrewAiAdapter {
    /// Create a new CrewAI adapter from its manifest.
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

    /// Fold crew events into the final report.
    ///
    /// The crew result is authoritative; if the runner dies before
    /// producing one, the last completed task's output is used.
    async fn collect_response(
        agent: &str,
        mut stream: Pin<Box<dyn Stream<Item = Result<serde_json::Value, AdapterError>> + Send>>,
    ) -> Result<String, AdapterError> {
        let mut last_task_output: Option<String> = None;

        while let Some(item) = stream.next().await {
            let value = item?;
            let event: CrewEvent = serde_json::from_value(value)
                .map_err(|e| AdapterError::Upstream(format!("Unrecognized crew event: {}", e)))?;

            match event {
                CrewEvent::TaskStarted { task } => {
                    tracing::debug!(agent, task = %task, "crew task started");
                }
                CrewEvent::TaskOutput { output, .. } => last_task_output = Some(output),
                CrewEvent::CrewResult { output } => return Ok(output),
                CrewEvent::Error { kind, message } => return Err(runner_error(kind, message)),
            }
        }

        last_task_output.ok_or_else(|| {
            AdapterError::Upstream("Crew exited without completing any task".to_string())
        })
    }
}

#[async_trait]
impl AgentAdapter for CrewAiAdapter {
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

/// CrewAI runner events (NDJSON output).
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum CrewEvent {
    /// A crew task began executing.
    TaskStarted { task: String },
    /// A crew task finished with output.
    TaskOutput {
        #[serde(default)]
        task: String,
        output: String,
    },
    /// The whole crew finished.
    CrewResult { output: String },
    /// Crew failure.
    Error {
        #[serde(default)]
        kind: Option<String>,
        message: String,
    },
}
