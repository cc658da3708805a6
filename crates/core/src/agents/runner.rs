//! Common subprocess runner for framework adapters.
//!
//! This module provides a unified interface for invoking runner processes
//! and parsing their JSON Lines / NDJSON output streams. The request is
//! written to the runner's stdin as a single JSON line; stdin is then
//! closed so runners that read to EOF terminate naturally.

use crate::agents::base::AdapterError;
use serde::Serialize;
use std::collections::HashMap;
use std::path::PathBuf;
use std::pin::Pin;
use std::process::Stdio;
use tokio::io::AsyncBufReadExt;
use tokio::io::AsyncWriteExt;
use tokio::io::BufReader;
use tokio::process::Command;
use tokio_stream::Stream;

/// Default invocation timeout applied when a manifest sets none.
pub const DEFAULT_TIMEOUT_SECS: u64 = 300;

/// Request line written to a runner's stdin.
///
/// The shape is shared by all framework runners; `settings` is forwarded
/// verbatim from the agent manifest (MCP endpoints, tool config, ...).
#[derive(Debug, Clone, Serialize)]
pub struct RunnerRequest {
    pub message: String,
    pub model: String,
    pub conversation_id: String,
    pub system_prompt: String,
    pub settings: HashMap<String, serde_json::Value>,
}

/// Runner executor for subprocess-backed adapters.
pub struct AgentRunner;

impl AgentRunner {
    /// Spawn a runner and parse its stdout as JSON Lines/NDJSON.
    ///
    /// # Arguments
    ///
    /// * `command` - The runner executable (e.g., "python3")
    /// * `args` - Command line arguments
    /// * `working_dir` - Working directory, normally the manifest's directory
    /// * `request` - Request payload written to stdin as one JSON line
    ///
    /// # Returns
    ///
    /// A stream of `serde_json::Value` objects, one per line of JSON output.
    /// Empty lines are filtered out. Spawn, I/O, and parse failures yield
    /// `AdapterError::Upstream` without terminating the stream early where
    /// later lines may still be usable.
    pub fn execute(
        command: String,
        args: Vec<String>,
        working_dir: PathBuf,
        request: RunnerRequest,
    ) -> Pin<Box<dyn Stream<Item = Result<serde_json::Value, AdapterError>> + Send>> {
        let stream = async_stream::stream! {
            let mut cmd = Command::new(&command);
            cmd.args(&args);
            cmd.current_dir(&working_dir);
            cmd.stdin(Stdio::piped());
            cmd.stdout(Stdio::piped());
            cmd.stderr(Stdio::null());

            let mut child = match cmd.spawn() {
                Ok(child) => child,
                Err(e) => {
                    yield Err(AdapterError::Upstream(format!(
                        "Failed to spawn runner '{}': {}",
                        command, e
                    )));
                    return;
                }
            };

            // Write the request line, then close stdin.
            if let Some(mut stdin) = child.stdin.take() {
                let payload = match serde_json::to_string(&request) {
                    Ok(payload) => payload,
                    Err(e) => {
                        yield Err(AdapterError::Upstream(format!(
                            "Failed to serialize runner request: {}",
                            e
                        )));
                        return;
                    }
                };

                // A runner that exits without reading stdin breaks the pipe;
                // its real failure will show up in the output stream, so the
                // write error itself is not surfaced.
                if let Err(e) = stdin.write_all(payload.as_bytes()).await {
                    tracing::debug!("runner did not read stdin: {}", e);
                } else if let Err(e) = stdin.write_all(b"\n").await {
                    tracing::debug!("runner did not read stdin: {}", e);
                }
                // Dropping stdin closes the pipe.
            }

            let stdout = match child.stdout.take() {
                Some(stdout) => stdout,
                None => {
                    yield Err(AdapterError::Upstream(
                        "Failed to capture runner stdout".to_string(),
                    ));
                    return;
                }
            };

            let reader = BufReader::new(stdout);
            let mut lines = reader.lines();

            while let Ok(Some(line)) = lines.next_line().await {
                if line.trim().is_empty() {
                    continue;
                }

                match serde_json::from_str::<serde_json::Value>(&line) {
                    Ok(value) => {
                        yield Ok(value);
                    }
                    Err(e) => {
                        yield Err(AdapterError::Upstream(format!(
                            "Failed to parse runner output: {} (line: {})",
                            e, line
                        )));
                    }
                }
            }

            // Reap the child; output errors were already surfaced above.
            let _ = child.wait().await;
        };

        Box::pin(stream)
    }
}
