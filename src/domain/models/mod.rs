//! Domain Models
//!
//! Pure domain entities and value objects representing registry concepts.

pub mod contract;
pub mod environment;
pub mod registry;

pub use contract::{
    Abi, ChecksumAddress, ContractName, ContractNamePolicy, DeployedContract, DeploymentReceipt,
};
pub use environment::{ChainId, Domain};
pub use registry::{ChainContracts, ContractRegistry, DomainRegistry};
