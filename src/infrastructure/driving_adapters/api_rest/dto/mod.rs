//! Data Transfer Objects
//!
//! Request and response DTOs for the REST API.

pub mod contract;

pub use contract::{
    ChainContractsDto, ContractAddressResponseDto, ContractEntryDto, DomainContractsDto,
    ListContractsQuery,
};
