//! Common test utilities for e2e tests
//!
//! Builds the application router over the bundled registries, the same way
//! the server binary does, without binding a socket.

#![allow(dead_code)]

use std::sync::Arc;

use axum::{body::Body, http::Request, response::Response, Router};
use serde::Deserialize;
use tower::util::ServiceExt;

use contract_registry::application::use_cases::contracts::{
    GetContractUseCase, ListContractsUseCase, LoadRegistryUseCase,
};
use contract_registry::domain::models::DomainRegistry;
use contract_registry::infrastructure::driven_adapters::artifacts::BundledArtifacts;
use contract_registry::infrastructure::driven_adapters::config::AppConfig;
use contract_registry::infrastructure::driving_adapters::api_rest::{self, AppState};

/// Test application context
pub struct TestApp {
    pub router: Router,
    pub registry: Arc<DomainRegistry>,
}

impl TestApp {
    /// Create a test application advertising the default contract names
    pub async fn new() -> Self {
        Self::with_contract_names("advertised").await
    }

    /// Create a test application with the given `registry.contract_names` setting
    pub async fn with_contract_names(contract_names: &str) -> Self {
        let config = create_test_config(contract_names);

        let registry = Arc::new(
            LoadRegistryUseCase::new(Arc::new(BundledArtifacts))
                .execute()
                .await
                .expect("Failed to load bundled registries"),
        );

        let state = AppState {
            get_contract_use_case: Arc::new(GetContractUseCase::new(
                registry.clone(),
                config.registry.contract_names,
            )),
            list_contracts_use_case: Arc::new(ListContractsUseCase::new(registry.clone())),
        };

        Self {
            router: api_rest::router(state),
            registry,
        }
    }

    /// Send a GET request through the router
    pub async fn get(&self, uri: &str) -> Response {
        self.router
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }
}

/// Create test configuration
fn create_test_config(contract_names: &str) -> AppConfig {
    AppConfig::from_toml(&format!(
        r#"
[server]
host = "127.0.0.1"
port = 0

[registry]
source = "bundled"
contract_names = "{contract_names}"
"#
    ))
    .expect("Failed to build test config")
}

/// Read a JSON response body
pub async fn json_body<T: serde::de::DeserializeOwned>(response: Response) -> T {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

/// Contract address response DTO for tests
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractAddressResponse {
    pub domain: String,
    pub chain_id: u64,
    pub name: String,
    pub address: String,
}

/// Error response DTO for tests
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
    pub request_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}
