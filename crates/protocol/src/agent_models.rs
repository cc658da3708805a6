//! Agent manifest and descriptor models.
//!
//! Agents are defined as Markdown files with YAML front matter, discovered
//! recursively under the configured agent roots. The front matter carries
//! the agent's identity and runner settings, the file body carries the
//! system prompt.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use ts_rs::TS;

/// Declarative definition of one agent, parsed from a manifest file.
///
/// # Example
///
/// ```markdown
/// ---
/// framework: langchain
/// name: research_assistant
/// display_name: Research Assistant
/// description: Answers questions with a single LLM chain
/// command: python3
/// args: ["agent.py"]
/// models: ["deepseek-chat", "gpt-4o-mini"]
/// ---
///
/// You are a concise research assistant.
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, TS)]
pub struct AgentManifest {
    /// Framework this agent belongs to (e.g., "langchain", "crewai").
    ///
    /// Selects the adapter that will wrap the agent; matching is
    /// case-insensitive.
    pub framework: String,

    /// Unique technical name within the framework, used in API calls.
    pub name: String,

    /// Human-friendly name shown by the UI.
    pub display_name: String,

    /// Short description of the agent, usable as a help tooltip.
    pub description: String,

    /// Runner executable for subprocess-backed frameworks.
    ///
    /// Built-in frameworks (echo, mock) ignore it.
    #[serde(default)]
    pub command: Option<String>,

    /// Arguments passed to the runner executable.
    #[serde(default)]
    pub args: Vec<String>,

    /// Models this agent accepts. Empty means any model is accepted.
    #[serde(default)]
    pub models: Vec<String>,

    /// Invocation timeout in seconds. Adapters apply their default when unset.
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    /// Opaque framework-specific settings forwarded to the runner verbatim
    /// (MCP server endpoints, tool configuration, temperatures, ...).
    #[serde(default)]
    #[ts(type = "Record<string, unknown>")]
    pub settings: HashMap<String, serde_json::Value>,

    /// The main content of the manifest file, not part of the front matter.
    ///
    /// This contains the system prompt that defines the agent's behavior.
    /// Skipped during JSON serialization as it's not front matter metadata.
    #[serde(skip)]
    pub system_prompt: String,
}

/// Immutable identity and metadata record for one registered agent.
///
/// Identity is the (framework, name) pair; two agents may share a name as
/// long as their frameworks differ.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, TS)]
pub struct AgentDescriptor {
    /// Framework the agent belongs to.
    pub framework: String,

    /// Unique technical name within the framework.
    pub name: String,

    /// Human-friendly name shown by the UI.
    pub display_name: String,

    /// Short description of the agent.
    pub description: String,
}

impl AgentDescriptor {
    /// The `framework/name` qualified form, unambiguous across frameworks.
    pub fn qualified_name(&self) -> String {
        format!("{}/{}", self.framework, self.name)
    }
}

impl From<&AgentManifest> for AgentDescriptor {
    fn from(manifest: &AgentManifest) -> Self {
        Self {
            framework: manifest.framework.clone(),
            name: manifest.name.clone(),
            display_name: manifest.display_name.clone(),
            description: manifest.description.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manifest() -> AgentManifest {
        AgentManifest {
            framework: "langchain".to_string(),
            name: "research_assistant".to_string(),
            display_name: "Research Assistant".to_string(),
            description: "Answers questions".to_string(),
            command: Some("python3".to_string()),
            args: vec!["agent.py".to_string()],
            models: vec![],
            timeout_secs: None,
            settings: HashMap::new(),
            system_prompt: "Be concise.".to_string(),
        }
    }

    #[test]
    fn test_descriptor_from_manifest() {
        let descriptor = AgentDescriptor::from(&manifest());
        assert_eq!(descriptor.framework, "langchain");
        assert_eq!(descriptor.name, "research_assistant");
        assert_eq!(descriptor.display_name, "Research Assistant");
    }

    #[test]
    fn test_qualified_name() {
        let descriptor = AgentDescriptor::from(&manifest());
        assert_eq!(descriptor.qualified_name(), "langchain/research_assistant");
    }

    #[test]
    fn test_system_prompt_not_serialized() {
        let json = serde_json::to_value(manifest()).expect("serialize manifest");
        assert!(json.get("system_prompt").is_none());
    }
}
