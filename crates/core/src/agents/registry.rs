//! Agent registry: discovery, indexing, and lookup.
//!
//! The registry is built once at startup by scanning the configured agent
//! roots for manifest files, and is read-only afterward. Lookups therefore
//! take no locks. Discovery tolerates broken manifests (a user-contributed
//! agent must not brick the platform) but refuses duplicate identities.

use crate::agents::base::AgentAdapter;
use crate::agents::factory::{AdapterFactory, FactoryError};
use arena_protocol::{AgentDescriptor, AgentManifest, FrameworkConfig};
use gray_matter::engine::YAML;
use gray_matter::Matter;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use walkdir::WalkDir;

/// Failure to load one manifest during discovery.
///
/// Always contained within the registry build: logged and skipped, never
/// fatal to the scan.
#[derive(Error, Debug)]
pub enum DiscoveryError {
    /// The manifest file could not be read.
    #[error("Failed to read manifest {path:?}: {source}")]
    ManifestRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The manifest front matter is missing or malformed.
    #[error("Failed to parse manifest {path:?}: {reason}")]
    ManifestParse { path: PathBuf, reason: String },

    /// The adapter could not be instantiated.
    #[error("Failed to instantiate agent from {path:?}: {source}")]
    Instantiate {
        path: PathBuf,
        source: FactoryError,
    },
}

/// Registry build and lookup failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Two manifests produced the same (framework, name) identity.
    ///
    /// Fail-fast policy: silent shadowing of a user-contributed agent is
    /// worse than refusing to start.
    #[error("Duplicate agent '{framework}/{name}': identity already registered")]
    DuplicateAgent { framework: String, name: String },

    /// No registered agent matches the requested name.
    #[error("Agent '{0}' not found.")]
    NotFound(String),

    /// Several frameworks provide the requested bare name.
    #[error("Agent name '{name}' is provided by several frameworks ({frameworks}); use 'framework/{name}'")]
    AmbiguousName { name: String, frameworks: String },
}

/// Startup-built, read-only index of all discovered agents.
pub struct AgentRegistry {
    /// Registered adapters in discovery order.
    agents: Vec<Arc<dyn AgentAdapter>>,
    /// (framework, name) -> index into `agents`.
    by_key: HashMap<(String, String), usize>,
    /// bare name -> indices into `agents`, discovery order.
    by_name: HashMap<String, Vec<usize>>,
}

impl AgentRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            agents: Vec::new(),
            by_key: HashMap::new(),
            by_name: HashMap::new(),
        }
    }

    /// Discover all agents under the given roots.
    ///
    /// Each root is walked recursively; directory entries are visited in
    /// file-name order so discovery order is deterministic across runs.
    /// Every `*.md` file is treated as an agent manifest. A manifest that
    /// fails to read, parse, or instantiate is logged and skipped; sibling
    /// manifests still register.
    ///
    /// # Errors
    ///
    /// `RegistryError::DuplicateAgent` if two manifests share a
    /// (framework, name) identity. Deterministic: the same root contents
    /// produce the same outcome on every run.
    pub fn discover(roots: &[PathBuf]) -> Result<Self, RegistryError> {
        let mut registry = Self::new();

        for root in roots {
            registry.scan_root(root)?;
        }

        tracing::info!(agents = registry.len(), "agent discovery finished");
        Ok(registry)
    }

    fn scan_root(&mut self, root: &Path) -> Result<(), RegistryError> {
        if !root.exists() {
            tracing::warn!(root = %root.display(), "agent root does not exist, skipping");
            return Ok(());
        }

        tracing::info!(root = %root.display(), "scanning agent root");

        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!(root = %root.display(), "unreadable entry skipped: {}", e);
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            if path.extension().and_then(|s| s.to_str()) != Some("md") {
                continue;
            }

            match load_manifest(path) {
                Ok(manifest) => {
                    let manifest_dir = path.parent().unwrap_or(root);
                    match AdapterFactory::create(manifest, manifest_dir) {
                        Ok(adapter) => {
                            let descriptor = adapter.descriptor().clone();
                            self.register(adapter)?;
                            tracing::info!(
                                framework = %descriptor.framework,
                                name = %descriptor.name,
                                path = %path.display(),
                                "registered agent"
                            );
                        }
                        Err(source) => {
                            let error = DiscoveryError::Instantiate {
                                path: path.to_path_buf(),
                                source,
                            };
                            tracing::warn!("{}", error);
                        }
                    }
                }
                Err(error) => {
                    tracing::warn!("{}", error);
                }
            }
        }

        Ok(())
    }

    /// Register one adapter under its (framework, name) identity.
    ///
    /// # Errors
    ///
    /// `RegistryError::DuplicateAgent` if the identity is already taken.
    pub fn register(&mut self, adapter: Arc<dyn AgentAdapter>) -> Result<(), RegistryError> {
        let descriptor = adapter.descriptor();
        let key = (descriptor.framework.clone(), descriptor.name.clone());

        if self.by_key.contains_key(&key) {
            return Err(RegistryError::DuplicateAgent {
                framework: key.0,
                name: key.1,
            });
        }

        let index = self.agents.len();
        self.by_name
            .entry(descriptor.name.clone())
            .or_default()
            .push(index);
        self.by_key.insert(key, index);
        self.agents.push(adapter);
        Ok(())
    }

    /// Look up an agent by name.
    ///
    /// Accepts the `framework/name` qualified form, which is always
    /// unambiguous, or a bare name, which resolves only when exactly one
    /// framework provides it.
    ///
    /// # Errors
    ///
    /// `RegistryError::NotFound` for an unknown name,
    /// `RegistryError::AmbiguousName` when a bare name is shared by
    /// several frameworks.
    pub fn get(&self, name: &str) -> Result<Arc<dyn AgentAdapter>, RegistryError> {
        if let Some((framework, bare)) = name.split_once('/') {
            return self
                .by_key
                .get(&(framework.to_string(), bare.to_string()))
                .map(|&i| Arc::clone(&self.agents[i]))
                .ok_or_else(|| RegistryError::NotFound(name.to_string()));
        }

        match self.by_name.get(name).map(Vec::as_slice) {
            None | Some([]) => Err(RegistryError::NotFound(name.to_string())),
            Some([index]) => Ok(Arc::clone(&self.agents[*index])),
            Some(indices) => Err(RegistryError::AmbiguousName {
                name: name.to_string(),
                frameworks: indices
                    .iter()
                    .map(|&i| self.agents[i].framework().to_string())
                    .collect::<Vec<_>>()
                    .join(", "),
            }),
        }
    }

    /// All descriptors grouped by framework.
    ///
    /// Frameworks appear in the order they were first discovered; agents
    /// keep discovery order within each framework. Stable across calls.
    pub fn list(&self) -> Vec<FrameworkConfig> {
        let mut order: Vec<String> = Vec::new();
        let mut groups: HashMap<String, Vec<AgentDescriptor>> = HashMap::new();

        for adapter in &self.agents {
            let descriptor = adapter.descriptor();
            if !groups.contains_key(&descriptor.framework) {
                order.push(descriptor.framework.clone());
            }
            groups
                .entry(descriptor.framework.clone())
                .or_default()
                .push(descriptor.clone());
        }

        order
            .into_iter()
            .map(|name| {
                let agents = groups.remove(&name).unwrap_or_default();
                FrameworkConfig { name, agents }
            })
            .collect()
    }

    /// Number of registered agents.
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    /// Whether the registry holds no agents.
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// Registered adapters in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn AgentAdapter>> {
        self.agents.iter()
    }
}

impl Default for AgentRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse one manifest file: YAML front matter plus system-prompt body.
fn load_manifest(path: &Path) -> Result<AgentManifest, DiscoveryError> {
    let content = std::fs::read_to_string(path).map_err(|source| DiscoveryError::ManifestRead {
        path: path.to_path_buf(),
        source,
    })?;

    let matter = Matter::<YAML>::new();
    let result = matter.parse(&content);

    let mut manifest: AgentManifest = result
        .data
        .ok_or_else(|| DiscoveryError::ManifestParse {
            path: path.to_path_buf(),
            reason: "Missing YAML front matter".to_string(),
        })?
        .deserialize()
        .map_err(|e| DiscoveryError::ManifestParse {
            path: path.to_path_buf(),
            reason: format!("Failed to deserialize front matter: {}", e),
        })?;

    manifest.system_prompt = result.content;
    Ok(manifest)
}
