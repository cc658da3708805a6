//! Configuration file loader for the `.agent-arena/` directory.
//!
//! Loads `config.toml` (global settings, agent roots, model catalog) and
//! resolves relative agent roots against the `.agent-arena/` directory.

use crate::config::error::{ConfigError, ConfigResult};
use crate::config::models::AppConfig;
use arena_protocol::GlobalConfig;
use std::path::{Path, PathBuf};

/// Load configuration from `<root>/.agent-arena/`.
///
/// # Arguments
///
/// * `root` - Project root containing the `.agent-arena/` folder
///
/// # Returns
///
/// An `AppConfig`. A missing `.agent-arena/` directory or `config.toml`
/// yields the default configuration rather than an error; the registry
/// later warns about roots that do not exist.
///
/// # Errors
///
/// Returns `ConfigError` if `config.toml` exists but cannot be read or has
/// invalid TOML syntax.
pub async fn load_config(root: &Path) -> ConfigResult<AppConfig> {
    let arena_dir = root.join(".agent-arena");
    let global = load_global_config(&arena_dir)?;
    let agent_roots = resolve_agent_roots(&arena_dir, &global.agent_roots);

    Ok(AppConfig {
        global,
        arena_dir,
        agent_roots,
    })
}

/// Loads global configuration from `config.toml`.
fn load_global_config(arena_dir: &Path) -> ConfigResult<GlobalConfig> {
    let config_path = arena_dir.join("config.toml");

    if !config_path.exists() {
        return Ok(GlobalConfig::default());
    }

    let content =
        std::fs::read_to_string(&config_path).map_err(|source| ConfigError::FileRead {
            path: config_path.clone(),
            source,
        })?;

    let config: GlobalConfig =
        toml::from_str(&content).map_err(|source| ConfigError::TomlParse {
            path: config_path,
            source,
        })?;

    Ok(config)
}

/// Resolve relative agent roots against the `.agent-arena/` directory.
fn resolve_agent_roots(arena_dir: &Path, roots: &[PathBuf]) -> Vec<PathBuf> {
    roots
        .iter()
        .map(|root| {
            if root.is_absolute() {
                root.clone()
            } else {
                arena_dir.join(root)
            }
        })
        .collect()
}
