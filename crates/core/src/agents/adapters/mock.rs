//! Mock adapter for testing.
//!
//! Behavior is driven by manifest settings, so test fixtures can exercise
//! every failure kind through the real discovery path:
//!
//! ```markdown
//! ---
//! framework: mock
//! name: flaky
//! display_name: Flaky
//! description: Always fails upstream
//! settings:
//!   behavior: upstream-error
//! ---
//! ```

use crate::agents::base::{ensure_model_allowed, AdapterError, AgentAdapter, InvokeRequest};
use arena_protocol::{AgentDescriptor, AgentManifest};
use async_trait::async_trait;

const DEFAULT_REPLY: &str = "mock response";

/// Canned behavior of a [`MockAdapter`].
#[derive(Debug, Clone, PartialEq, Eq)]
enum MockBehavior {
    Success(String),
    Fail(AdapterError),
    Unavailable,
}

/// Adapter with canned behavior for tests and fixtures.
#[derive(Clone)]
pub struct MockAdapter {
    descriptor: AgentDescriptor,
    models: Vec<String>,
    behavior: MockBehavior,
}

impl MockAdapter {
    /// Create a mock adapter from its manifest.
    ///
    /// Recognized settings: `behavior` (`success`, `upstream-error`,
    /// `timeout`, `invalid-model`, `unavailable`) and `reply` (the success
    /// text). Unrecognized behaviors fall back to success.
    pub fn new(manifest: &AgentManifest) -> Self {
        let reply = manifest
            .settings
            .get("reply")
            .and_then(|v| v.as_str())
            .unwrap_or(DEFAULT_REPLY)
            .to_string();

        let behavior = match manifest.settings.get("behavior").and_then(|v| v.as_str()) {
            Some("upstream-error") => MockBehavior::Fail(AdapterError::Upstream(
                "Mock upstream failure".to_string(),
            )),
            Some("timeout") => MockBehavior::Fail(AdapterError::Timeout),
            Some("invalid-model") => {
                MockBehavior::Fail(AdapterError::InvalidModel("mock-model".to_string()))
            }
            Some("unavailable") => MockBehavior::Unavailable,
            _ => MockBehavior::Success(reply),
        };

        Self {
            descriptor: AgentDescriptor::from(manifest),
            models: manifest.models.clone(),
            behavior,
        }
    }

    /// Mock that replies with the default text.
    pub fn success(descriptor: AgentDescriptor) -> Self {
        Self {
            descriptor,
            models: vec![],
            behavior: MockBehavior::Success(DEFAULT_REPLY.to_string()),
        }
    }

    /// Mock that fails every invocation upstream.
    pub fn failing(descriptor: AgentDescriptor) -> Self {
        Self {
            descriptor,
            models: vec![],
            behavior: MockBehavior::Fail(AdapterError::Upstream(
                "Mock upstream failure".to_string(),
            )),
        }
    }

    /// Mock whose tooling reports as unavailable.
    pub fn unavailable(descriptor: AgentDescriptor) -> Self {
        Self {
            descriptor,
            models: vec![],
            behavior: MockBehavior::Unavailable,
        }
    }
}

#[async_trait]
impl AgentAdapter for MockAdapter {
    fn descriptor(&self) -> &AgentDescriptor {
        &self.descriptor
    }

    async fn check_availability(&self) -> bool {
        self.behavior != MockBehavior::Unavailable
    }

    async fn invoke(&self, request: &InvokeRequest) -> Result<String, AdapterError> {
        ensure_model_allowed(&self.models, &request.model)?;

        match &self.behavior {
            MockBehavior::Success(reply) => Ok(reply.clone()),
            MockBehavior::Fail(error) => Err(error.clone()),
            MockBehavior::Unavailable => Err(AdapterError::Upstream(
                "Mock agent is unavailable".to_string(),
            )),
        }
    }
}
