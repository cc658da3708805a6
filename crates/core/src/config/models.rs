//! Configuration models that aggregate all settings.

use arena_protocol::GlobalConfig;
use std::path::PathBuf;

/// Application configuration loaded from the `.agent-arena/` directory.
///
/// Combines the raw `config.toml` contents with the agent roots resolved
/// to concrete paths the registry can scan.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Global settings from `config.toml` (defaults when absent).
    pub global: GlobalConfig,

    /// The `.agent-arena/` directory the configuration was loaded from.
    pub arena_dir: PathBuf,

    /// Agent roots with relative entries resolved against `arena_dir`.
    pub agent_roots: Vec<PathBuf>,
}

impl AppConfig {
    /// The address string the dispatch server should bind.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.global.server.host, self.global.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_addr() {
        let config = AppConfig {
            global: GlobalConfig::default(),
            arena_dir: PathBuf::from(".agent-arena"),
            agent_roots: vec![],
        };
        assert_eq!(config.bind_addr(), "127.0.0.1:8000");
    }
}
