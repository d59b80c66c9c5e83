//! JSON File Store
//!
//! Reads and writes registry documents on the local filesystem.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use super::codec::{parse_document, render_document};
use crate::domain::gateways::ArtifactStore;
use crate::domain::models::ContractRegistry;
use crate::shared::errors::RepositoryError;

/// Filesystem implementation of ArtifactStore
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonArtifactStore;

impl JsonArtifactStore {
    /// Create a new JsonArtifactStore
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    async fn write_file(path: &Path, registry: &ContractRegistry) -> Result<(), RepositoryError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(path, render_document(registry)?).await?;
        Ok(())
    }
}

#[async_trait]
impl ArtifactStore for JsonArtifactStore {
    async fn read(&self, path: &Path) -> Result<ContractRegistry, RepositoryError> {
        let json = tokio::fs::read_to_string(path).await?;
        parse_document(&json)
    }

    async fn write(
        &self,
        path: &Path,
        registry: &ContractRegistry,
    ) -> Result<PathBuf, RepositoryError> {
        if registry.is_empty() {
            tracing::info!(path = %path.display(), "No entries provided, nothing written");
            return Ok(path.to_path_buf());
        }

        if !tokio::fs::try_exists(path).await? {
            tracing::info!(path = %path.display(), "Creating new registry");
            Self::write_file(path, registry).await?;
            return Ok(path.to_path_buf());
        }

        let mut existing = self.read(path).await?;
        if registry.chain_ids().any(|chain_id| existing.contains_chain(chain_id)) {
            let diverted = path.with_extension("unmerged.json");
            tracing::warn!(
                path = %path.display(),
                diverted = %diverted.display(),
                "Cannot merge registries with overlapping chain ids"
            );
            Self::write_file(&diverted, registry).await?;
            return Ok(diverted);
        }

        tracing::info!(path = %path.display(), "Updating existing registry");
        existing.extend_chains(registry.clone());
        Self::write_file(path, &existing).await?;
        Ok(path.to_path_buf())
    }

    async fn replace(
        &self,
        path: &Path,
        registry: &ContractRegistry,
    ) -> Result<(), RepositoryError> {
        let temp = path.with_extension("temp.json");
        Self::write_file(&temp, registry).await?;
        tokio::fs::rename(&temp, path).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{ChainId, ChecksumAddress, DeployedContract};
    use serde_json::json;

    fn registry(chain_id: u64, name: &str, address: &str) -> ContractRegistry {
        let mut registry = ContractRegistry::new();
        registry.insert(
            ChainId::new(chain_id),
            name,
            DeployedContract::new(ChecksumAddress::parse(address).unwrap(), json!([])),
        );
        registry
    }

    #[tokio::test]
    async fn test_write_creates_new_file_and_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("lynx.json");
        let store = JsonArtifactStore::new();
        let data = registry(80002, "Coordinator", "0xAB3005440698C83998E1705BB7A7AF3D2E2425Ba");

        let written = store.write(&path, &data).await.unwrap();

        assert_eq!(written, path);
        assert_eq!(store.read(&path).await.unwrap(), data);
    }

    #[tokio::test]
    async fn test_write_merges_disjoint_chains_into_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mainnet.json");
        let store = JsonArtifactStore::new();
        store
            .write(&path, &registry(1, "Coordinator", "0xCde641553b7511475d0B7B5320c0069F8dC525E4"))
            .await
            .unwrap();

        let polygon = registry(137, "Coordinator", "0xCA79BFDe0765D3377e46c1E9771AC9f153302350");

        let written = store.write(&path, &polygon).await.unwrap();

        assert_eq!(written, path);
        let merged = store.read(&path).await.unwrap();
        assert!(merged.contains_chain(ChainId::new(1)));
        assert!(merged.contains_chain(ChainId::new(137)));
    }

    #[tokio::test]
    async fn test_write_diverts_overlapping_chains() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tapir.json");
        let store = JsonArtifactStore::new();
        let original = registry(80002, "Coordinator", "0x5aC964131B5250F067b74C68BD1EE27518e4bD6e");
        store.write(&path, &original).await.unwrap();

        let overlapping =
            registry(80002, "GlobalAllowList", "0xbD6C96Fde1797Abd723E1F94f401f062407Bd8eC");

        let written = store.write(&path, &overlapping).await.unwrap();

        assert_eq!(written, dir.path().join("tapir.unmerged.json"));
        assert_eq!(store.read(&path).await.unwrap(), original);
    }

    #[tokio::test]
    async fn test_replace_overwrites_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lynx.json");
        std::fs::write(
            &path,
            r#"{"80002":{"Coordinator":{"abi":[],
                "address":"0xAB3005440698C83998E1705BB7A7AF3D2E2425Ba"}}}"#,
        )
        .unwrap();
        let store = JsonArtifactStore::new();

        let data = store.read(&path).await.unwrap();
        store.replace(&path, &data).await.unwrap();

        let rendered = std::fs::read_to_string(&path).unwrap();
        assert!(rendered.starts_with("{\n    \"80002\": {"));
        assert!(!dir.path().join("lynx.temp.json").exists());
    }
}
