//! Contract Handlers
//!
//! Read-only HTTP handlers for contract lookups.
//! Registry data is public deployment metadata, so no endpoint requires authentication.

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};

use crate::domain::models::{Abi, ChainId};
use crate::infrastructure::driving_adapters::api_rest::dto::contract::{
    ContractAddressResponseDto, DomainContractsDto, ListContractsQuery,
};
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

/// Create the router for contract endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_contracts))
        .route("/:domain/:chain_id/:name", get(get_contract_address))
        .route("/:domain/:chain_id/:name/abi", get(get_contract_abi))
}

fn parse_chain_id(raw: &str) -> Result<ChainId, ApiError> {
    raw.parse::<ChainId>().map_err(|e| ApiError::BadRequest(e.to_string()))
}

/// GET /contracts - List deployed contracts
///
/// # Responses
///
/// * 200 OK - Contracts grouped by domain and chain id
/// * 404 Not Found - `domain` query parameter names no loaded registry
#[axum::debug_handler]
async fn list_contracts(
    State(state): State<AppState>,
    Query(query): Query<ListContractsQuery>,
) -> Result<Json<Vec<DomainContractsDto>>, ApiError> {
    let listing = state.list_contracts_use_case.execute(query.domain.as_deref())?;

    Ok(Json(listing.into_iter().map(DomainContractsDto::from).collect()))
}

/// GET /contracts/:domain/:chain_id/:name - Resolve a contract address
///
/// # Responses
///
/// * 200 OK - Contract address
/// * 400 Bad Request - Invalid contract name or non-numeric chain id
/// * 404 Not Found - Unknown domain, unknown chain id, or contract not deployed on that chain
#[axum::debug_handler]
async fn get_contract_address(
    State(state): State<AppState>,
    Path((domain, chain_id, name)): Path<(String, String, String)>,
) -> Result<Json<ContractAddressResponseDto>, ApiError> {
    let chain_id = parse_chain_id(&chain_id)?;

    let address = state
        .get_contract_use_case
        .execute(&domain, chain_id, &name)?;

    Ok(Json(ContractAddressResponseDto {
        domain,
        chain_id: chain_id.value(),
        name,
        address: address.into_inner(),
    }))
}

/// GET /contracts/:domain/:chain_id/:name/abi - Fetch a contract's ABI
///
/// # Responses
///
/// * 200 OK - The ABI exactly as published
/// * 400 Bad Request - Invalid contract name or non-numeric chain id
/// * 404 Not Found - Unknown domain, unknown chain id, or contract not deployed on that chain
#[axum::debug_handler]
async fn get_contract_abi(
    State(state): State<AppState>,
    Path((domain, chain_id, name)): Path<(String, String, String)>,
) -> Result<Json<Abi>, ApiError> {
    let chain_id = parse_chain_id(&chain_id)?;

    let deployed = state
        .get_contract_use_case
        .resolve(&domain, chain_id, &name)?;

    Ok(Json(deployed.abi().clone()))
}
