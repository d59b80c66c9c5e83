//! Load Registry Use Case
//!
//! Builds the immutable domain registry from an artifact source.

use std::sync::Arc;

use crate::domain::gateways::ArtifactSource;
use crate::domain::models::{Domain, DomainRegistry};
use crate::shared::errors::UseCaseError;

/// Use case for loading every domain's registry at startup
pub struct LoadRegistryUseCase {
    artifact_source: Arc<dyn ArtifactSource>,
}

impl LoadRegistryUseCase {
    /// Create a new LoadRegistryUseCase
    #[must_use]
    pub fn new(artifact_source: Arc<dyn ArtifactSource>) -> Self {
        Self { artifact_source }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if any domain's document cannot be
    /// read or mapped. No partial registry is returned.
    pub async fn execute(&self) -> Result<DomainRegistry, UseCaseError> {
        let mut registry = DomainRegistry::new();

        for domain in Domain::ALL {
            match self.artifact_source.load(domain).await? {
                Some(contracts) => {
                    tracing::info!(
                        domain = %domain,
                        chains = contracts.chain_ids().count(),
                        contracts = contracts.len(),
                        "Loaded contract registry"
                    );
                    registry = registry.with_domain(domain, contracts);
                }
                None => tracing::debug!(domain = %domain, "No contract registry published"),
            }
        }

        if registry.is_empty() {
            tracing::warn!("No contract registries loaded, every lookup will fail");
        }

        Ok(registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{ChainId, ChecksumAddress, ContractRegistry, DeployedContract};
    use crate::shared::errors::RepositoryError;
    use async_trait::async_trait;
    use serde_json::json;
    use std::collections::HashMap;
    use std::sync::Mutex;

    struct MockArtifactSource {
        documents: HashMap<Domain, ContractRegistry>,
        failing: Option<Domain>,
        requested: Mutex<Vec<Domain>>,
    }

    impl MockArtifactSource {
        fn new() -> Self {
            Self {
                documents: HashMap::new(),
                failing: None,
                requested: Mutex::new(Vec::new()),
            }
        }

        fn with_document(mut self, domain: Domain, registry: ContractRegistry) -> Self {
            self.documents.insert(domain, registry);
            self
        }

        fn failing_on(mut self, domain: Domain) -> Self {
            self.failing = Some(domain);
            self
        }
    }

    #[async_trait]
    impl ArtifactSource for MockArtifactSource {
        async fn load(&self, domain: Domain) -> Result<Option<ContractRegistry>, RepositoryError> {
            self.requested.lock().unwrap().push(domain);
            if self.failing == Some(domain) {
                return Err(RepositoryError::Mapping("broken document".to_string()));
            }
            Ok(self.documents.get(&domain).cloned())
        }
    }

    fn create_test_document() -> ContractRegistry {
        let mut registry = ContractRegistry::new();
        registry.insert(
            ChainId::new(80002),
            "Coordinator",
            DeployedContract::new(
                ChecksumAddress::parse("0xAB3005440698C83998E1705BB7A7AF3D2E2425Ba").unwrap(),
                json!([]),
            ),
        );
        registry
    }

    #[tokio::test]
    async fn should_load_published_domains_only() {
        let source =
            Arc::new(MockArtifactSource::new().with_document(Domain::Lynx, create_test_document()));

        let use_case = LoadRegistryUseCase::new(source.clone());
        let registry = use_case.execute().await.unwrap();

        assert!(registry.get(Domain::Lynx).is_some());
        assert!(registry.get(Domain::Oryx).is_none());
        assert_eq!(source.requested.lock().unwrap().len(), Domain::ALL.len());
    }

    #[tokio::test]
    async fn should_fail_when_a_document_is_broken() {
        let source = Arc::new(
            MockArtifactSource::new()
                .with_document(Domain::Lynx, create_test_document())
                .failing_on(Domain::Tapir),
        );

        let use_case = LoadRegistryUseCase::new(source);
        let result = use_case.execute().await;

        assert!(matches!(result.unwrap_err(), UseCaseError::Repository(_)));
    }

    #[test]
    fn should_return_empty_registry_when_nothing_published() {
        let use_case = LoadRegistryUseCase::new(Arc::new(MockArtifactSource::new()));

        let registry = tokio_test::block_on(use_case.execute()).unwrap();

        assert!(registry.is_empty());
    }
}
