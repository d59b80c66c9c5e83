//! Contract DTOs
//!
//! Data transfer objects for contract lookup endpoints.

use serde::{Deserialize, Serialize};

use crate::application::use_cases::contracts::{ChainListing, ContractEntry, DomainListing};

/// Query parameters for listing contracts
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListContractsQuery {
    pub domain: Option<String>,
}

/// Resolved contract address response DTO
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractAddressResponseDto {
    pub domain: String,
    pub chain_id: u64,
    pub name: String,
    pub address: String,
}

/// Single entry in a listing
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractEntryDto {
    pub name: String,
    pub address: String,
}

/// Entries deployed on one chain
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainContractsDto {
    pub chain_id: u64,
    pub contracts: Vec<ContractEntryDto>,
}

/// Entries for one domain
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainContractsDto {
    pub domain: String,
    pub chains: Vec<ChainContractsDto>,
}

impl From<ContractEntry> for ContractEntryDto {
    fn from(entry: ContractEntry) -> Self {
        Self {
            name: entry.name,
            address: entry.address.into_inner(),
        }
    }
}

impl From<ChainListing> for ChainContractsDto {
    fn from(listing: ChainListing) -> Self {
        Self {
            chain_id: listing.chain_id.value(),
            contracts: listing.contracts.into_iter().map(ContractEntryDto::from).collect(),
        }
    }
}

impl From<DomainListing> for DomainContractsDto {
    fn from(listing: DomainListing) -> Self {
        Self {
            domain: listing.domain.to_string(),
            chains: listing.chains.into_iter().map(ChainContractsDto::from).collect(),
        }
    }
}
