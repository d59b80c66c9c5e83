//! Contract Registry API - Main Entry Point

use std::sync::Arc;

use tokio::net::TcpListener;

use contract_registry::application::use_cases::contracts::{
    GetContractUseCase, ListContractsUseCase, LoadRegistryUseCase,
};
use contract_registry::infrastructure::driven_adapters::artifacts::source_from_config;
use contract_registry::infrastructure::driven_adapters::config::AppConfig;
use contract_registry::infrastructure::driven_adapters::logging;
use contract_registry::infrastructure::driving_adapters::api_rest::{self, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = AppConfig::load()?;

    // Initialize tracing
    logging::init(&config.logging, logging::DEFAULT_FILTER);
    tracing::info!("Configuration loaded successfully");

    // Load registry once; it is read-only from here on
    let artifact_source = source_from_config(&config.registry);
    let registry = Arc::new(LoadRegistryUseCase::new(artifact_source).execute().await?);
    tracing::info!(
        source = ?config.registry.source,
        contract_names = ?config.registry.contract_names,
        "Contract registry loaded"
    );

    // Create use cases
    let get_contract_use_case = Arc::new(GetContractUseCase::new(
        registry.clone(),
        config.registry.contract_names,
    ));
    let list_contracts_use_case = Arc::new(ListContractsUseCase::new(registry));

    // Create application state
    let app_state = AppState {
        get_contract_use_case,
        list_contracts_use_case,
    };

    // Build router
    let app = api_rest::router(app_state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
