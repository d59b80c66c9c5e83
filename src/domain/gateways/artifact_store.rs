//! Artifact Store Gateway
//!
//! Abstract trait for reading and writing registry documents by path.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::domain::models::ContractRegistry;
use crate::shared::errors::RepositoryError;

/// Path-addressed storage for registry documents
#[async_trait]
pub trait ArtifactStore: Send + Sync {
    /// Read the document at `path`
    async fn read(&self, path: &Path) -> Result<ContractRegistry, RepositoryError>;

    /// Write a document, merging into an existing file when chain ids do not
    /// overlap. Overlapping output is diverted to a sibling `.unmerged.json`.
    /// Returns the path actually written.
    async fn write(
        &self,
        path: &Path,
        registry: &ContractRegistry,
    ) -> Result<PathBuf, RepositoryError>;

    /// Replace the document at `path` unconditionally
    async fn replace(
        &self,
        path: &Path,
        registry: &ContractRegistry,
    ) -> Result<(), RepositoryError>;
}
