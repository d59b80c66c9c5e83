//! Driven Adapters
//!
//! Implementations of gateway traits for external systems:
//! - Artifact sources and stores
//! - Configuration
//! - Logging

pub mod artifacts;
pub mod config;
pub mod logging;

pub use artifacts::{BundledArtifacts, DirectoryArtifacts, JsonArtifactStore};
pub use config::AppConfig;
