//! AutoGen adapter implementation.
//!
//! Wraps an AutoGen runner process. A group chat produces `turn` events
//! as participants speak and, usually, a closing `summary`; without one,
//! the last turn stands as the reply.

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

/// Adapter for agents built on AutoGen.
pub struct AutoGenAdapter {
    descriptor: AgentDescriptor,
    manifest: AgentManifest,
    command: String,
    working_dir: PathBuf,
    timeout: Duration,
}

impl AutoGenAdapter {
    /// Create a new AutoGen adapter from its manifest.
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

    /// Fold group-chat events into the reply.
    async fn collect_response(
        agent: &str,
        mut stream: Pin<Box<dyn Stream<Item = Result<serde_json::Value, AdapterError>> + Send>>,
    ) -> Result<String, AdapterError> {
        let mut last_turn: Option<String> = None;

        while let Some(item) = stream.next().await {
            let value = item?;
            let event: GroupChatEvent = serde_json::from_value(value).map_err(|e| {
                AdapterError::Upstream(format!("Unrecognized group chat event: {}", e))
            })?;

            match event {
                GroupChatEvent::Turn { speaker, content } => {
                    tracing::debug!(agent, speaker = %speaker, "group chat turn");
                    last_turn = Some(content);
                }
                GroupChatEvent::Summary { content } => return Ok(content),
                GroupChatEvent::Error { kind, message } => return Err(runner_error(kind, message)),
            }
        }

        last_turn.ok_or_else(|| {
            AdapterError::Upstream("Group chat ended without any turns".to_string())
        })
    }
}

#[async_trait]
impl AgentAdapter for AutoGenAdapter {
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

/// AutoGen runner events (NDJSON output).
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum GroupChatEvent {
    /// One participant spoke.
    Turn { speaker: String, content: String },
    /// Closing summary of the chat.
    Summary { content: String },
    /// Chat failure.
    Error {
        #[serde(default)]
        kind: Option<String>,
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn manifest(args: Vec<String>) -> AgentManifest {
        AgentManifest {
            framework: "autogen".to_string(),
            name: "cot_groupchat".to_string(),
            display_name: "CoT Group Chat".to_string(),
            description: "Adaptive group chat".to_string(),
            command: Some("echo".to_string()),
            args,
            models: vec![],
            timeout_secs: None,
            settings: HashMap::new(),
            system_prompt: String::new(),
        }
    }

    fn request() -> InvokeRequest {
        InvokeRequest::new("solve this".to_string()).with_model("any".to_string())
    }

    #[tokio::test]
    async fn test_summary_is_the_reply() {
        let ndjson = "{\"type\":\"turn\",\"speaker\":\"planner\",\"content\":\"plan\"}\n\
                      {\"type\":\"turn\",\"speaker\":\"solver\",\"content\":\"solution\"}\n\
                      {\"type\":\"summary\",\"content\":\"final summary\"}";
        let adapter = AutoGenAdapter::new(manifest(vec![ndjson.to_string()]), Path::new(".")).unwrap();

        let reply = adapter.invoke(&request()).await.unwrap();
        assert_eq!(reply, "final summary");
    }

    #[tokio::test]
    async fn test_last_turn_without_summary() {
        let ndjson = "{\"type\":\"turn\",\"speaker\":\"planner\",\"content\":\"plan\"}\n\
                      {\"type\":\"turn\",\"speaker\":\"solver\",\"content\":\"solution\"}";
        let adapter = AutoGenAdapter::new(manifest(vec![ndjson.to_string()]), Path::new(".")).unwrap();

        let reply = adapter.invoke(&request()).await.unwrap();
        assert_eq!(reply, "solution");
    }

    #[tokio::test]
    async fn test_error_event_kind_preserved() {
        let ndjson = r#"{"type":"error","kind":"timeout","message":"llm stalled"}"#;
        let adapter = AutoGenAdapter::new(manifest(vec![ndjson.to_string()]), Path::new(".")).unwrap();

        let result = adapter.invoke(&request()).await;
        assert_eq!(result, Err(AdapterError::Timeout));
    }
}
