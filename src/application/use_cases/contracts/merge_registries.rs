//! Merge Registries Use Case
//!
//! Combines two registry documents into one.

use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;

use crate::domain::gateways::ArtifactStore;
use crate::domain::models::{ChainId, ContractRegistry, DeployedContract};
use crate::shared::errors::UseCaseError;

/// How to settle a name recorded on the same chain in both inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictPolicy {
    PreferFirst,
    PreferSecond,
    Abort,
}

impl FromStr for ConflictPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "prefer-first" => Ok(Self::PreferFirst),
            "prefer-second" => Ok(Self::PreferSecond),
            "abort" => Ok(Self::Abort),
            other => Err(format!("unknown conflict policy '{other}'")),
        }
    }
}

/// Use case for merging two registry documents
pub struct MergeRegistriesUseCase {
    artifact_store: Arc<dyn ArtifactStore>,
}

impl MergeRegistriesUseCase {
    /// Create a new MergeRegistriesUseCase
    #[must_use]
    pub fn new(artifact_store: Arc<dyn ArtifactStore>) -> Self {
        Self { artifact_store }
    }

    /// Execute the use case, returning the path actually written
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Conflict` if the inputs disagree and the policy is `Abort`.
    /// Returns `UseCaseError::Repository` if reading or writing fails.
    pub async fn execute(
        &self,
        first: &Path,
        second: &Path,
        output: &Path,
        deprecated: &[String],
        policy: ConflictPolicy,
    ) -> Result<PathBuf, UseCaseError> {
        tracing::info!(
            first = %first.display(),
            second = %second.display(),
            output = %output.display(),
            "Merging registries"
        );

        let first_registry = self.artifact_store.read(first).await?;
        let second_registry = self.artifact_store.read(second).await?;

        let merged = merge(first_registry, second_registry, deprecated, policy)?;
        let written = self.artifact_store.write(output, &merged).await?;

        tracing::info!(
            output = %written.display(),
            contracts = merged.len(),
            "Merged registry written"
        );
        Ok(written)
    }
}

/// Merge two registries in memory
///
/// # Errors
///
/// Returns `UseCaseError::Conflict` on the first disagreement when the policy is `Abort`.
pub fn merge(
    first: ContractRegistry,
    second: ContractRegistry,
    deprecated: &[String],
    policy: ConflictPolicy,
) -> Result<ContractRegistry, UseCaseError> {
    let keep = |name: &str| !deprecated.iter().any(|d| d == name);

    let mut merged = ContractRegistry::new();
    for (chain_id, contracts) in first.chains() {
        for (name, contract) in contracts.iter().filter(|(name, _)| keep(name.as_str())) {
            merged.insert(chain_id, name.clone(), contract.clone());
        }
    }

    for (chain_id, contracts) in second.chains() {
        for (name, contract) in contracts.iter().filter(|(name, _)| keep(name.as_str())) {
            match merged.contract(chain_id, name) {
                None => merged.insert(chain_id, name.clone(), contract.clone()),
                Some(existing) => match policy {
                    ConflictPolicy::PreferFirst => {
                        log_conflict(chain_id, name, existing, contract, "first");
                    }
                    ConflictPolicy::PreferSecond => {
                        log_conflict(chain_id, name, existing, contract, "second");
                        merged.insert(chain_id, name.clone(), contract.clone());
                    }
                    ConflictPolicy::Abort => {
                        tracing::warn!(
                            chain_id = chain_id.value(),
                            contract = %name,
                            "Merge aborted on conflict"
                        );
                        return Err(UseCaseError::Conflict(format!(
                            "{name} on chain id {chain_id} is recorded at {} and {}",
                            existing.address(),
                            contract.address()
                        )));
                    }
                },
            }
        }
    }

    Ok(merged)
}

fn log_conflict(
    chain_id: ChainId,
    name: &str,
    first: &DeployedContract,
    second: &DeployedContract,
    kept: &str,
) {
    tracing::warn!(
        chain_id = chain_id.value(),
        contract = name,
        first = %first.address(),
        second = %second.address(),
        kept,
        "Conflicting registry entries"
    );
}
