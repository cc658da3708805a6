//! Directory structure and file generation for `.agent-arena/` initialization.

use super::error::{InitError, InitResult};
use super::templates::{get_template, list_templates};
use std::fs;
use std::path::{Path, PathBuf};

/// Options for initializing a `.agent-arena/` directory.
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// Target directory where `.agent-arena/` will be created.
    pub target_dir: PathBuf,

    /// Overwrite an existing `.agent-arena/` directory.
    pub force: bool,

    /// Create only the echo smoke-test agent.
    pub minimal: bool,
}

impl Default for InitOptions {
    fn default() -> Self {
        Self {
            target_dir: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            force: false,
            minimal: false,
        }
    }
}

/// Generate a `.agent-arena/` directory structure with starter templates.
///
/// Creates the following structure:
/// ```text
/// .agent-arena/
/// ├── config.toml
/// └── agents/
///     ├── echo.md
///     └── langchain-assistant.md (unless minimal)
/// ```
///
/// # Arguments
/// * `options` - Configuration for the initialization process
///
/// # Errors
/// Returns an `InitError` if:
/// - `.agent-arena/` already exists (without the force flag)
/// - A template file cannot be found
/// - File system operations fail
pub async fn generate_arena_structure(options: InitOptions) -> InitResult<()> {
    let arena_dir = options.target_dir.join(".agent-arena");

    if arena_dir.exists() && !options.force {
        return Err(InitError::DirectoryExists(arena_dir));
    }

    fs::create_dir_all(arena_dir.join("agents")).map_err(|source| InitError::DirectoryCreate {
        path: arena_dir.join("agents"),
        source,
    })?;

    write_template_file(&arena_dir, "config.toml")?;

    if options.minimal {
        write_template_file(&arena_dir, "agents/echo.md")?;
    } else {
        for agent_path in list_templates("agents/") {
            write_template_file(&arena_dir, &agent_path)?;
        }
    }

    Ok(())
}

/// Write one embedded template into the target directory.
fn write_template_file(arena_dir: &Path, template_path: &str) -> InitResult<()> {
    let content = get_template(template_path)
        .ok_or_else(|| InitError::TemplateNotFound(template_path.to_string()))?;

    let target_path = arena_dir.join(template_path);

    if let Some(parent) = target_path.parent() {
        fs::create_dir_all(parent).map_err(|source| InitError::DirectoryCreate {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    fs::write(&target_path, content).map_err(|source| InitError::FileWrite {
        path: target_path,
        source,
    })?;

    Ok(())
}
