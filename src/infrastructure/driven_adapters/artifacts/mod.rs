//! Artifact Adapters
//!
//! Sources and stores for published registry documents.

pub mod bundled;
pub mod codec;
pub mod directory;
pub mod json_store;

use std::sync::Arc;

use crate::domain::gateways::ArtifactSource;
use crate::infrastructure::driven_adapters::config::{ArtifactSourceKind, RegistryConfig};

pub use bundled::BundledArtifacts;
pub use directory::DirectoryArtifacts;
pub use json_store::JsonArtifactStore;

/// Build the artifact source selected by configuration
#[must_use]
pub fn source_from_config(config: &RegistryConfig) -> Arc<dyn ArtifactSource> {
    match config.source {
        ArtifactSourceKind::Bundled => Arc::new(BundledArtifacts),
        ArtifactSourceKind::Directory => {
            Arc::new(DirectoryArtifacts::new(config.artifacts_dir.clone()))
        }
    }
}
