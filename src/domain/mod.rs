//! Domain Layer
//!
//! Contains the registry model and gateway traits (ports).
//! This layer has no dependencies on infrastructure.

pub mod gateways;
pub mod models;

pub use gateways::{ArtifactSource, ArtifactStore};
pub use models::{
    ChainId, ChecksumAddress, ContractName, ContractNamePolicy, ContractRegistry,
    DeployedContract, Domain, DomainRegistry,
};
