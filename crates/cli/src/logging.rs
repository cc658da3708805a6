//! Tracing setup for the CLI.
//!
//! Logs go to stderr so `arena agents --json` output stays pipeable.
//! The filter comes from `RUST_LOG`, defaulting to `info`.

use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
