//! Agent abstraction and discovery.
//!
//! This module provides the `AgentAdapter` trait (Adapter Pattern), the
//! per-framework adapter implementations, and the `AgentRegistry` that
//! discovers and indexes them at startup.

pub mod adapters;
pub mod base;
pub mod factory;
pub mod registry;
pub mod runner;

pub use adapters::MockAdapter;
pub use base::{AdapterError, AgentAdapter, InvokeRequest};
pub use factory::{AdapterFactory, FactoryError, FrameworkKind};
pub use registry::{AgentRegistry, DiscoveryError, RegistryError};
