//! Artifact Source Gateway
//!
//! Abstract trait for obtaining each domain's published registry document.

use async_trait::async_trait;

use crate::domain::models::{ContractRegistry, Domain};
use crate::shared::errors::RepositoryError;

/// Source of per-domain registry documents
#[async_trait]
pub trait ArtifactSource: Send + Sync {
    /// Load the registry for a domain, or `None` if this source has none
    async fn load(&self, domain: Domain) -> Result<Option<ContractRegistry>, RepositoryError>;
}
