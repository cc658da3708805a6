//! Embedded template files for `.agent-arena/` initialization.
//!
//! This module uses `rust-embed` to embed template files from the project
//! root `templates/` directory into the binary at compile time, so the CLI
//! can scaffold `.agent-arena/` structures without external files.

use rust_embed::RustEmbed;

/// Embedded template files from the `templates/` directory.
///
/// At compile time, all files in the project root `templates/` directory
/// are embedded into the binary. The path is calculated relative to the
/// crate root:
/// - `CARGO_MANIFEST_DIR` = `crates/core`
/// - `../../templates` = project root `templates/`
///
/// During development with the `debug-embed` feature, files are read from
/// the filesystem at runtime for quick iteration without recompilation.
#[derive(RustEmbed)]
#[folder = "$CARGO_MANIFEST_DIR/../../templates"]
pub struct TemplateAssets;

/// Get template file content by path.
///
/// # Arguments
/// * `path` - Relative path from templates root (e.g., "config.toml", "agents/echo.md")
///
/// # Returns
/// The file content as a String, or None if the file doesn't exist.
pub fn get_template(path: &str) -> Option<String> {
    TemplateAssets::get(path).map(|file| String::from_utf8_lossy(file.data.as_ref()).to_string())
}

/// List all template files under a prefix.
///
/// # Arguments
/// * `prefix` - Directory prefix (e.g., "agents/")
pub fn list_templates(prefix: &str) -> Vec<String> {
    TemplateAssets::iter()
        .filter(|path| path.starts_with(prefix))
        .map(|path| path.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_config_template() {
        let config = get_template("config.toml");
        assert!(config.is_some(), "config.toml should be embedded");
        let content = config.expect("config.toml content");
        assert!(
            content.contains("agent_roots"),
            "config.toml should declare agent roots"
        );
    }

    #[test]
    fn test_get_echo_agent_template() {
        let echo = get_template("agents/echo.md");
        assert!(echo.is_some(), "agents/echo.md should be embedded");
        let content = echo.expect("echo.md content");
        assert!(
            content.contains("framework: echo"),
            "echo.md should have correct front matter"
        );
    }

    #[test]
    fn test_get_nonexistent_template() {
        assert!(get_template("nonexistent.txt").is_none());
    }

    #[test]
    fn test_list_agent_templates() {
        let agents = list_templates("agents/");
        assert!(!agents.is_empty(), "Should find agent templates");
        assert!(
            agents.contains(&"agents/echo.md".to_string()),
            "Should contain echo.md"
        );
    }
}
