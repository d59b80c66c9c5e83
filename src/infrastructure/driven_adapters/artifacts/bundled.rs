//! Bundled Artifacts
//!
//! Registry documents compiled into the binary.

use async_trait::async_trait;

use super::codec::parse_document;
use crate::domain::gateways::ArtifactSource;
use crate::domain::models::{ContractRegistry, Domain};
use crate::shared::errors::RepositoryError;

const LYNX: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/deployment/artifacts/lynx.json"
));
const TAPIR: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/deployment/artifacts/tapir.json"
));
const MAINNET: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/deployment/artifacts/mainnet.json"
));

/// Artifact source backed by the documents shipped with the crate
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledArtifacts;

impl BundledArtifacts {
    /// Raw document for a domain, if one is published
    #[must_use]
    pub fn document(domain: Domain) -> Option<&'static str> {
        match domain {
            Domain::Lynx => Some(LYNX),
            Domain::Tapir => Some(TAPIR),
            Domain::Mainnet => Some(MAINNET),
            Domain::Oryx => None,
        }
    }
}

#[async_trait]
impl ArtifactSource for BundledArtifacts {
    async fn load(&self, domain: Domain) -> Result<Option<ContractRegistry>, RepositoryError> {
        Self::document(domain).map(parse_document).transpose()
    }
}
