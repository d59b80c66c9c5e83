//! Directory Artifacts
//!
//! Reads `{dir}/{domain}.json` from the filesystem.

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;

use super::codec::parse_document;
use crate::domain::gateways::ArtifactSource;
use crate::domain::models::{ContractRegistry, Domain};
use crate::shared::errors::RepositoryError;

/// Artifact source backed by a directory of per-domain documents
#[derive(Debug, Clone)]
pub struct DirectoryArtifacts {
    dir: PathBuf,
}

impl DirectoryArtifacts {
    /// Create a new DirectoryArtifacts
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn path_for(&self, domain: Domain) -> PathBuf {
        self.dir.join(format!("{domain}.json"))
    }
}

#[async_trait]
impl ArtifactSource for DirectoryArtifacts {
    async fn load(&self, domain: Domain) -> Result<Option<ContractRegistry>, RepositoryError> {
        let path = self.path_for(domain);

        let json = match tokio::fs::read_to_string(&path).await {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        tracing::debug!(path = %path.display(), "Parsing registry document");
        parse_document(&json).map(Some).map_err(|e| match e {
            RepositoryError::Mapping(msg) => {
                RepositoryError::Mapping(format!("{}: {msg}", path.display()))
            }
            other => other,
        })
    }
}
