//! Normalize Registry Use Case
//!
//! Rewrites a registry document in the standard layout.

use std::path::Path;
use std::sync::Arc;

use crate::domain::gateways::ArtifactStore;
use crate::shared::errors::UseCaseError;

/// Use case for normalizing a registry document in place
pub struct NormalizeRegistryUseCase {
    artifact_store: Arc<dyn ArtifactStore>,
}

impl NormalizeRegistryUseCase {
    /// Create a new NormalizeRegistryUseCase
    #[must_use]
    pub fn new(artifact_store: Arc<dyn ArtifactStore>) -> Self {
        Self { artifact_store }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if the document cannot be read or written.
    pub async fn execute(&self, path: &Path) -> Result<(), UseCaseError> {
        let registry = self.artifact_store.read(path).await.map_err(|err| {
            tracing::error!(path = %path.display(), error = %err, "Error reading registry");
            err
        })?;

        self.artifact_store.replace(path, &registry).await.map_err(|err| {
            tracing::error!(path = %path.display(), error = %err, "Error normalizing registry");
            err
        })?;

        tracing::info!(path = %path.display(), contracts = registry.len(), "Registry normalized");
        Ok(())
    }
}
