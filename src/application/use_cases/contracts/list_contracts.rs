//! List Contracts Use Case
//!
//! Lists registry entries grouped by domain and chain id.

use std::sync::Arc;

use crate::domain::models::{ChainId, ChecksumAddress, Domain, DomainRegistry};
use crate::shared::errors::{LookupError, UseCaseError};

/// A single registry entry in a listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractEntry {
    pub name: String,
    pub address: ChecksumAddress,
}

/// Entries deployed on one chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainListing {
    pub chain_id: ChainId,
    pub contracts: Vec<ContractEntry>,
}

/// Entries for one domain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainListing {
    pub domain: Domain,
    pub chains: Vec<ChainListing>,
}

/// Use case for listing every deployed contract
pub struct ListContractsUseCase {
    registry: Arc<DomainRegistry>,
}

impl ListContractsUseCase {
    /// Create a new ListContractsUseCase
    #[must_use]
    pub fn new(registry: Arc<DomainRegistry>) -> Self {
        Self { registry }
    }

    /// Execute the use case
    ///
    /// Lists all loaded domains, or only `domain` when given. Chains and
    /// contract names are in ascending order.
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Lookup` if `domain` names no loaded registry.
    pub fn execute(&self, domain: Option<&str>) -> Result<Vec<DomainListing>, UseCaseError> {
        tracing::debug!(domain, "Listing contracts");

        let Some(requested) = domain else {
            return Ok(self
                .registry
                .domains()
                .map(|(domain, _)| self.listing(domain))
                .collect());
        };

        let domain = requested
            .parse::<Domain>()
            .ok()
            .filter(|domain| self.registry.get(*domain).is_some())
            .ok_or_else(|| {
                tracing::warn!(domain = requested, "No contract registry for domain");
                LookupError::UnknownEnvironment(requested.to_string())
            })?;

        Ok(vec![self.listing(domain)])
    }

    fn listing(&self, domain: Domain) -> DomainListing {
        let chains = self
            .registry
            .get(domain)
            .map(|registry| {
                registry
                    .chains()
                    .map(|(chain_id, contracts)| ChainListing {
                        chain_id,
                        contracts: contracts
                            .iter()
                            .map(|(name, deployed)| ContractEntry {
                                name: name.clone(),
                                address: deployed.address().clone(),
                            })
                            .collect(),
                    })
                    .collect()
            })
            .unwrap_or_default();

        DomainListing { domain, chains }
    }
}
