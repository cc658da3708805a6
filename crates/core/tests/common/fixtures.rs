//! Test fixtures for building agent-root directory trees.

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Create an empty temporary agent root.
///
/// Returns a TempDir that must be kept alive for the test duration.
pub fn create_agent_root() -> std::io::Result<TempDir> {
    tempfile::tempdir()
}

/// Write an agent manifest under the root, creating parent directories.
///
/// `relative_path` is the manifest location inside the root (e.g.
/// "LangChain/assistant/agent.md"), mirroring the per-framework directory
/// trees users keep their agents in.
pub fn write_manifest(root: &Path, relative_path: &str, content: &str) -> PathBuf {
    let path = root.join(relative_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create manifest parent dirs");
    }
    std::fs::write(&path, content).expect("write manifest");
    path
}

/// Manifest for a built-in mock agent.
pub fn mock_manifest(framework: &str, name: &str) -> String {
    format!(
        "---\nframework: {framework}\nname: {name}\ndisplay_name: {name}\ndescription: Test agent {name}\n---\n\nTest prompt.\n",
    )
}

/// Manifest for the built-in echo agent under an arbitrary name.
pub fn echo_manifest(name: &str) -> String {
    format!(
        "---\nframework: echo\nname: {name}\ndisplay_name: Echo {name}\ndescription: Repeats the prompt back\n---\n",
    )
}
