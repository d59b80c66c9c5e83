//! Registry Model
//!
//! Immutable nested tables: domain -> chain id -> contract name -> contract.

use std::collections::BTreeMap;

use super::contract::DeployedContract;
use super::environment::{ChainId, Domain};

/// Contracts deployed on a single chain, keyed by registry name
pub type ChainContracts = BTreeMap<String, DeployedContract>;

/// One domain's contract table
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContractRegistry {
    chains: BTreeMap<ChainId, ChainContracts>,
}

impl ContractRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a contract, replacing any previous entry with the same name
    pub fn insert(
        &mut self,
        chain_id: ChainId,
        name: impl Into<String>,
        contract: DeployedContract,
    ) {
        self.chains.entry(chain_id).or_default().insert(name.into(), contract);
    }

    #[must_use]
    pub fn chain(&self, chain_id: ChainId) -> Option<&ChainContracts> {
        self.chains.get(&chain_id)
    }

    #[must_use]
    pub fn contract(&self, chain_id: ChainId, name: &str) -> Option<&DeployedContract> {
        self.chain(chain_id).and_then(|contracts| contracts.get(name))
    }

    pub fn chain_ids(&self) -> impl Iterator<Item = ChainId> + '_ {
        self.chains.keys().copied()
    }

    pub fn chains(&self) -> impl Iterator<Item = (ChainId, &ChainContracts)> + '_ {
        self.chains.iter().map(|(id, contracts)| (*id, contracts))
    }

    #[must_use]
    pub fn contains_chain(&self, chain_id: ChainId) -> bool {
        self.chains.contains_key(&chain_id)
    }

    /// Total number of recorded contracts across all chains
    #[must_use]
    pub fn len(&self) -> usize {
        self.chains.values().map(BTreeMap::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Add every chain of `other`. Chains already present are left untouched.
    pub fn extend_chains(&mut self, other: ContractRegistry) {
        for (chain_id, contracts) in other.chains {
            self.chains.entry(chain_id).or_insert(contracts);
        }
    }
}

impl FromIterator<(ChainId, String, DeployedContract)> for ContractRegistry {
    fn from_iter<T: IntoIterator<Item = (ChainId, String, DeployedContract)>>(iter: T) -> Self {
        let mut registry = ContractRegistry::new();
        for (chain_id, name, contract) in iter {
            registry.insert(chain_id, name, contract);
        }
        registry
    }
}

/// Every loaded domain's registry. Built once, then shared read-only.
#[derive(Debug, Clone, Default)]
pub struct DomainRegistry {
    domains: BTreeMap<Domain, ContractRegistry>,
}

impl DomainRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_domain(mut self, domain: Domain, registry: ContractRegistry) -> Self {
        self.domains.insert(domain, registry);
        self
    }

    #[must_use]
    pub fn get(&self, domain: Domain) -> Option<&ContractRegistry> {
        self.domains.get(&domain)
    }

    pub fn domains(&self) -> impl Iterator<Item = (Domain, &ContractRegistry)> + '_ {
        self.domains.iter().map(|(domain, registry)| (*domain, registry))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }
}
