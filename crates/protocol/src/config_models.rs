//! Global configuration models for `.agent-arena/config.toml`.
//!
//! This module defines the structure of the global configuration file that
//! controls the dispatch server and agent discovery.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use ts_rs::TS;

/// Represents global settings from `.agent-arena/config.toml`.
///
/// # Example
///
/// ```toml
/// # .agent-arena/config.toml
/// agent_roots = ["agents", "/srv/arena/community-agents"]
/// models = ["deepseek-chat", "gpt-4o-mini"]
///
/// [server]
/// host = "127.0.0.1"
/// port = 8000
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, TS)]
pub struct GlobalConfig {
    /// Root directories scanned recursively for agent manifests.
    ///
    /// Relative paths are resolved against `.agent-arena/`. Defaults to
    /// the single root `agents/`.
    #[serde(default = "default_agent_roots")]
    #[ts(type = "Array<string>")]
    pub agent_roots: Vec<PathBuf>,

    /// Model catalog offered to the UI, passed through `GET /config`
    /// verbatim. Opaque to the core.
    #[serde(default)]
    pub models: Vec<String>,

    /// Dispatch server bind settings.
    #[serde(default)]
    pub server: ServerConfig,
}

/// Bind address settings for the dispatch server.
#[derive(Serialize, Deserialize, Debug, Clone, TS)]
pub struct ServerConfig {
    /// Interface to bind.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            agent_roots: default_agent_roots(),
            models: Vec::new(),
            server: ServerConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_agent_roots() -> Vec<PathBuf> {
    vec![PathBuf::from("agents")]
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}
