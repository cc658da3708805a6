//! Base adapter trait and supporting types.

use arena_protocol::AgentDescriptor;
use async_trait::async_trait;
use thiserror::Error;

/// Payload of one adapter invocation.
#[derive(Debug, Clone)]
pub struct InvokeRequest {
    /// The user's message.
    pub message: String,

    /// Model the agent should use for this turn.
    pub model: String,

    /// Opaque conversation identifier supplied by the caller.
    pub conversation_id: String,
}

impl InvokeRequest {
    /// Create a new InvokeRequest with the given message.
    ///
    /// Model and conversation id default to empty strings.
    pub fn new(message: String) -> Self {
        Self {
            message,
            model: String::new(),
            conversation_id: String::new(),
        }
    }

    /// Set the model.
    pub fn with_model(mut self, model: String) -> Self {
        self.model = model;
        self
    }

    /// Set the conversation id.
    pub fn with_conversation_id(mut self, conversation_id: String) -> Self {
        self.conversation_id = conversation_id;
        self
    }
}

/// Invocation failure, with the kind preserved for the HTTP layer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AdapterError {
    #[error("Invocation timed out")]
    Timeout,
    #[error("Upstream failure: {0}")]
    Upstream(String),
    #[error("Invalid model: {0}")]
    InvalidModel(String),
}

impl AdapterError {
    /// Stable kind label surfaced in HTTP error details.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Timeout => "timeout",
            Self::Upstream(_) => "upstream-error",
            Self::InvalidModel(_) => "invalid-model",
        }
    }
}

/// Uniform capability set over one wrapped agent framework.
///
/// Adapters are constructed once during discovery and live, immutable, for
/// the process lifetime. Invocations for different requests may run
/// concurrently; any internal state an adapter keeps is its own.
#[async_trait]
pub trait AgentAdapter: Send + Sync {
    /// Identity and metadata of this agent.
    fn descriptor(&self) -> &AgentDescriptor;

    /// Framework the agent belongs to, e.g. "crewai".
    fn framework(&self) -> &str {
        &self.descriptor().framework
    }

    /// Unique technical name within the framework, used in API calls.
    fn name(&self) -> &str {
        &self.descriptor().name
    }

    /// Human-friendly name shown by the UI.
    fn display_name(&self) -> &str {
        &self.descriptor().display_name
    }

    /// Short description of the agent, usable as a help tooltip.
    fn description(&self) -> &str {
        &self.descriptor().description
    }

    /// Whether the adapter's tooling is usable right now.
    ///
    /// Used for startup diagnostics only; an unavailable agent stays listed
    /// and fails at invocation instead of silently disappearing.
    async fn check_availability(&self) -> bool {
        true
    }

    /// Run one turn and resolve to the agent's textual reply.
    async fn invoke(&self, request: &InvokeRequest) -> Result<String, AdapterError>;
}

/// Reject a model the manifest does not allow.
///
/// An empty allowlist accepts any model.
pub(crate) fn ensure_model_allowed(allowed: &[String], model: &str) -> Result<(), AdapterError> {
    if allowed.is_empty() || allowed.iter().any(|m| m == model) {
        Ok(())
    } else {
        Err(AdapterError::InvalidModel(model.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestAdapter {
        descriptor: AgentDescriptor,
    }

    #[async_trait]
    impl AgentAdapter for TestAdapter {
        fn descriptor(&self) -> &AgentDescriptor {
            &self.descriptor
        }

        async fn invoke(&self, request: &InvokeRequest) -> Result<String, AdapterError> {
            Ok(format!("seen: {}", request.message))
        }
    }

    fn test_adapter() -> TestAdapter {
        TestAdapter {
            descriptor: AgentDescriptor {
                framework: "test".to_string(),
                name: "probe".to_string(),
                display_name: "Probe".to_string(),
                description: "A probe agent".to_string(),
            },
        }
    }

    #[test]
    fn test_metadata_accessors_delegate_to_descriptor() {
        let adapter = test_adapter();
        assert_eq!(adapter.framework(), "test");
        assert_eq!(adapter.name(), "probe");
        assert_eq!(adapter.display_name(), "Probe");
        assert_eq!(adapter.description(), "A probe agent");
    }

    #[tokio::test]
    async fn test_default_availability_is_true() {
        let adapter = test_adapter();
        assert!(adapter.check_availability().await);
    }

    #[tokio::test]
    async fn test_invoke_resolves_to_text() {
        let adapter = test_adapter();
        let request = InvokeRequest::new("hello".to_string())
            .with_model("test-model".to_string())
            .with_conversation_id("c1".to_string());

        let reply = adapter.invoke(&request).await.unwrap();
        assert_eq!(reply, "seen: hello");
    }

    #[test]
    fn test_invoke_request_builder() {
        let request = InvokeRequest::new("hi".to_string())
            .with_model("deepseek-chat".to_string())
            .with_conversation_id("conv-9".to_string());

        assert_eq!(request.message, "hi");
        assert_eq!(request.model, "deepseek-chat");
        assert_eq!(request.conversation_id, "conv-9");
    }

    #[test]
    fn test_error_kinds() {
        assert_eq!(AdapterError::Timeout.kind(), "timeout");
        assert_eq!(AdapterError::Upstream("x".to_string()).kind(), "upstream-error");
        assert_eq!(AdapterError::InvalidModel("m".to_string()).kind(), "invalid-model");
    }

    #[test]
    fn test_model_allowlist() {
        let allowed = vec!["a".to_string(), "b".to_string()];
        assert!(ensure_model_allowed(&allowed, "a").is_ok());
        assert_eq!(
            ensure_model_allowed(&allowed, "c"),
            Err(AdapterError::InvalidModel("c".to_string()))
        );
        // Empty allowlist accepts anything
        assert!(ensure_model_allowed(&[], "whatever").is_ok());
    }
}
