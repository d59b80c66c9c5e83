//! Contract Use Cases
//!
//! Lookup, listing and maintenance of contract registries.

mod get_contract;
mod list_contracts;
mod load_registry;
mod merge_registries;
mod normalize_registry;

pub use get_contract::GetContractUseCase;
pub use list_contracts::{ChainListing, ContractEntry, DomainListing, ListContractsUseCase};
pub use load_registry::LoadRegistryUseCase;
pub use merge_registries::{merge, ConflictPolicy, MergeRegistriesUseCase};
pub use normalize_registry::NormalizeRegistryUseCase;
