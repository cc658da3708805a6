//! Adapter factory for creating agent instances from manifests.

use crate::agents::adapters::{
    AutoGenAdapter, CrewAiAdapter, EchoAdapter, LangChainAdapter, LangGraphAdapter, MockAdapter,
};
use crate::agents::base::AgentAdapter;
use arena_protocol::AgentManifest;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

/// Frameworks the platform can wrap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameworkKind {
    LangChain,
    LangGraph,
    CrewAi,
    AutoGen,
    Echo,
    Mock,
}

impl FrameworkKind {
    /// Resolve a manifest's framework field, case-insensitively.
    ///
    /// Returns `None` for frameworks the platform has no adapter for; the
    /// registry treats that as a discovery failure and skips the manifest.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "langchain" => Some(Self::LangChain),
            "langgraph" => Some(Self::LangGraph),
            "crewai" | "crew-ai" => Some(Self::CrewAi),
            "autogen" | "auto-gen" => Some(Self::AutoGen),
            "echo" => Some(Self::Echo),
            "mock" => Some(Self::Mock),
            _ => None,
        }
    }

    /// Canonical display name of the framework.
    pub fn name(&self) -> &'static str {
        match self {
            Self::LangChain => "LangChain",
            Self::LangGraph => "LangGraph",
            Self::CrewAi => "CrewAI",
            Self::AutoGen => "AutoGen",
            Self::Echo => "Echo",
            Self::Mock => "Mock",
        }
    }
}

/// Instantiation failure for one manifest.
#[derive(Error, Debug)]
pub enum FactoryError {
    /// The manifest names a framework without an adapter.
    #[error("Unknown framework '{0}'")]
    UnknownFramework(String),

    /// A subprocess-backed framework was declared without a runner command.
    #[error("Agent '{framework}/{name}' declares no runner command")]
    MissingCommand { framework: String, name: String },
}

/// Factory for creating adapter instances from manifests.
///
/// The factory selects the adapter from the manifest's `framework` field
/// and instantiates it with the manifest directory as the runner's working
/// directory.
pub struct AdapterFactory;

impl AdapterFactory {
    /// Create an adapter instance for one manifest.
    ///
    /// # Arguments
    ///
    /// * `manifest` - Parsed agent manifest
    /// * `manifest_dir` - Directory the manifest was found in
    ///
    /// # Errors
    ///
    /// `FactoryError::UnknownFramework` for an unadapted framework,
    /// `FactoryError::MissingCommand` when a subprocess framework has no
    /// runner command. Both are skip-and-continue conditions for discovery.
    pub fn create(
        manifest: AgentManifest,
        manifest_dir: &Path,
    ) -> Result<Arc<dyn AgentAdapter>, FactoryError> {
        let kind = FrameworkKind::from_name(&manifest.framework)
            .ok_or_else(|| FactoryError::UnknownFramework(manifest.framework.clone()))?;

        match kind {
            FrameworkKind::LangChain => {
                Ok(Arc::new(LangChainAdapter::new(manifest, manifest_dir)?))
            }
            FrameworkKind::LangGraph => {
                Ok(Arc::new(LangGraphAdapter::new(manifest, manifest_dir)?))
            }
            FrameworkKind::CrewAi => Ok(Arc::new(CrewAiAdapter::new(manifest, manifest_dir)?)),
            FrameworkKind::AutoGen => Ok(Arc::new(AutoGenAdapter::new(manifest, manifest_dir)?)),
            FrameworkKind::Echo => Ok(Arc::new(EchoAdapter::new(&manifest))),
            FrameworkKind::Mock => Ok(Arc::new(MockAdapter::new(&manifest))),
        }
    }
}
