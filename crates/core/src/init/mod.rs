//! Initialization module for creating `.agent-arena/` directory structures.
//!
//! This module scaffolds a new agent-arena project: a `.agent-arena/`
//! directory with a starter `config.toml` and example agent manifests.
//!
//! # Example
//!
//! ```no_run
//! use arena_core::init::{generate_arena_structure, InitOptions};
//! use std::path::PathBuf;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let options = InitOptions {
//!     target_dir: PathBuf::from("."),
//!     force: false,
//!     minimal: false,
//! };
//!
//! generate_arena_structure(options).await?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod generator;
pub mod templates;

// Re-export commonly used types for convenience
pub use error::{InitError, InitResult};
pub use generator::{generate_arena_structure, InitOptions};
pub use templates::{get_template, list_templates};
