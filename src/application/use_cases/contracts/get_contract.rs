//! Get Contract Use Case
//!
//! Resolves (domain, chain id, contract name) to a deployed contract.

use std::sync::Arc;

use crate::domain::models::{
    ChainId, ChecksumAddress, ContractName, ContractNamePolicy, DeployedContract, Domain,
    DomainRegistry,
};
use crate::shared::errors::{LookupError, UseCaseError};

/// Use case for looking up a deployed contract address
pub struct GetContractUseCase {
    registry: Arc<DomainRegistry>,
    policy: ContractNamePolicy,
}

impl GetContractUseCase {
    /// Create a new GetContractUseCase
    #[must_use]
    pub fn new(registry: Arc<DomainRegistry>, policy: ContractNamePolicy) -> Self {
        Self { registry, policy }
    }

    /// Resolve the full deployment record.
    ///
    /// Keys are checked in a fixed order: contract name, domain, chain id,
    /// then presence of the contract on that chain. The first failing key
    /// determines the error.
    ///
    /// # Errors
    ///
    /// Returns the `LookupError` variant for the first key that fails.
    pub fn resolve(
        &self,
        domain: &str,
        chain_id: impl Into<ChainId>,
        contract: &str,
    ) -> Result<&DeployedContract, LookupError> {
        let chain_id = chain_id.into();
        tracing::debug!(domain, chain_id = chain_id.value(), contract, "Resolving contract");

        let name = contract
            .parse::<ContractName>()
            .ok()
            .filter(|name| self.policy.allows(*name))
            .ok_or_else(|| {
                tracing::warn!(contract, policy = ?self.policy, "Invalid contract name");
                LookupError::UnknownContractKind(contract.to_string())
            })?;

        let registry = domain
            .parse::<Domain>()
            .ok()
            .and_then(|domain| self.registry.get(domain))
            .ok_or_else(|| {
                tracing::warn!(domain, "No contract registry for domain");
                LookupError::UnknownEnvironment(domain.to_string())
            })?;

        let contracts = registry.chain(chain_id).ok_or_else(|| {
            tracing::warn!(domain, chain_id = chain_id.value(), "No contracts for chain");
            LookupError::UnknownNetwork(chain_id.value())
        })?;

        contracts.get(name.as_str()).ok_or_else(|| {
            tracing::warn!(domain, chain_id = chain_id.value(), contract, "Contract not deployed");
            LookupError::ContractNotDeployed {
                name: name.to_string(),
                chain_id: chain_id.value(),
            }
        })
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Lookup` if any key along the path is missing.
    pub fn execute(
        &self,
        domain: &str,
        chain_id: impl Into<ChainId>,
        contract: &str,
    ) -> Result<ChecksumAddress, UseCaseError> {
        let deployed = self.resolve(domain, chain_id, contract)?;
        Ok(deployed.address().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::ContractRegistry;
    use serde_json::json;

    const LYNX_COORDINATOR: &str = "0xAB3005440698C83998E1705BB7A7AF3D2E2425Ba";
    const TAPIR_COORDINATOR: &str = "0x5aC964131B5250F067b74C68BD1EE27518e4bD6e";
    const LYNX_SIGNING: &str = "0xA45eE6eBc57F4590641e1F037860Cf29ae36563d";

    const AMOY: ChainId = ChainId::new(80002);
    const SEPOLIA: ChainId = ChainId::new(11_155_111);

    fn deployed(address: &str) -> DeployedContract {
        DeployedContract::new(ChecksumAddress::parse(address).unwrap(), json!([]))
    }

    fn create_test_registry() -> Arc<DomainRegistry> {
        let mut lynx = ContractRegistry::new();
        lynx.insert(AMOY, "Coordinator", deployed(LYNX_COORDINATOR));
        lynx.insert(
            AMOY,
            "GlobalAllowList",
            deployed("0x70712D5F63adfa395d6cff31aEeA03BDba261AD5"),
        );
        lynx.insert(SEPOLIA, "SigningCoordinator", deployed(LYNX_SIGNING));

        let mut tapir = ContractRegistry::new();
        tapir.insert(AMOY, "Coordinator", deployed(TAPIR_COORDINATOR));

        Arc::new(
            DomainRegistry::new()
                .with_domain(Domain::Lynx, lynx)
                .with_domain(Domain::Tapir, tapir),
        )
    }

    fn use_case(policy: ContractNamePolicy) -> GetContractUseCase {
        GetContractUseCase::new(create_test_registry(), policy)
    }

    #[test]
    fn should_return_address_when_found() {
        let result = use_case(ContractNamePolicy::Advertised).execute("lynx", AMOY, "Coordinator");

        assert_eq!(result.unwrap().as_str(), LYNX_COORDINATOR);
    }

    #[test]
    fn should_accept_raw_chain_id() {
        let use_case = use_case(ContractNamePolicy::Advertised);
        let raw: u64 = 80002;

        let from_raw = use_case.execute("lynx", raw, "Coordinator").unwrap();
        let from_typed = use_case.execute("lynx", ChainId::new(raw), "Coordinator").unwrap();

        assert_eq!(from_raw, from_typed);
    }

    #[test]
    fn should_return_distinct_addresses_per_domain() {
        let use_case = use_case(ContractNamePolicy::Advertised);
        let lynx = use_case.execute("lynx", AMOY, "Coordinator").unwrap();
        let tapir = use_case.execute("tapir", AMOY, "Coordinator").unwrap();

        assert_ne!(lynx, tapir);
    }

    #[test]
    fn should_fail_on_unknown_domain() {
        let use_case = use_case(ContractNamePolicy::Advertised);
        let result = use_case.resolve("invalid-domain", AMOY, "Coordinator");

        assert_eq!(
            result.unwrap_err(),
            LookupError::UnknownEnvironment("invalid-domain".into())
        );
    }

    #[test]
    fn should_fail_on_known_domain_without_registry() {
        let use_case = use_case(ContractNamePolicy::Advertised);
        let result = use_case.resolve("oryx", AMOY, "Coordinator");

        assert_eq!(result.unwrap_err(), LookupError::UnknownEnvironment("oryx".into()));
    }

    #[test]
    fn should_fail_on_unknown_chain() {
        let use_case = use_case(ContractNamePolicy::Advertised);
        let result = use_case.resolve("lynx", ChainId::new(0), "Coordinator");

        assert_eq!(result.unwrap_err(), LookupError::UnknownNetwork(0));
    }

    #[test]
    fn should_fail_when_contract_missing_on_chain() {
        let use_case = use_case(ContractNamePolicy::Advertised);
        let result = use_case.resolve("tapir", AMOY, "GlobalAllowList");

        assert_eq!(
            result.unwrap_err(),
            LookupError::ContractNotDeployed {
                name: "GlobalAllowList".into(),
                chain_id: 80002,
            }
        );
    }

    #[test]
    fn should_reject_invalid_contract_before_anything_else() {
        let use_case = use_case(ContractNamePolicy::Advertised);
        let unknown_chain = ChainId::new(0);

        for (domain, chain_id) in [
            ("lynx", AMOY),
            ("invalid-domain", AMOY),
            ("lynx", unknown_chain),
            ("nope", unknown_chain),
        ] {
            let result = use_case.resolve(domain, chain_id, "InvalidContract");
            assert_eq!(
                result.unwrap_err(),
                LookupError::UnknownContractKind("InvalidContract".into())
            );
        }
    }

    #[test]
    fn should_reject_signing_coordinator_under_advertised_policy() {
        let use_case = use_case(ContractNamePolicy::Advertised);
        let result = use_case.resolve("lynx", SEPOLIA, "SigningCoordinator");

        assert_eq!(
            result.unwrap_err(),
            LookupError::UnknownContractKind("SigningCoordinator".into())
        );
    }

    #[test]
    fn should_resolve_signing_coordinator_under_all_policy() {
        let use_case = use_case(ContractNamePolicy::All);
        let result = use_case.execute("lynx", SEPOLIA, "SigningCoordinator");

        assert_eq!(result.unwrap().as_str(), LYNX_SIGNING);
    }

    #[test]
    fn should_return_full_record_from_resolve() {
        let use_case = use_case(ContractNamePolicy::Advertised);
        let record = use_case.resolve("lynx", AMOY, "Coordinator").unwrap();

        assert_eq!(record.address().as_str(), LYNX_COORDINATOR);
        assert_eq!(record.abi(), &json!([]));
    }
}
