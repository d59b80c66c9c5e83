//! Registry Document Codec
//!
//! Maps the published JSON document layout to and from `ContractRegistry`.
//!
//! ```json
//! { "<chain id>": { "<contract name>": { "address": "0x…", "abi": [...],
//!   "tx_hash": "0x…", "block_number": 1, "deployer": "0x…" } } }
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;

use crate::domain::models::{
    Abi, ChainId, ChecksumAddress, ContractRegistry, DeployedContract, DeploymentReceipt,
};
use crate::shared::errors::RepositoryError;

/// Document row for a single contract
#[derive(Debug, Serialize, Deserialize)]
struct ArtifactEntry {
    address: String,
    abi: Abi,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    tx_hash: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    block_number: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    deployer: Option<String>,
}

/// Chain ids are string keys, so they sort as strings in written documents
type ArtifactDocument = BTreeMap<String, BTreeMap<String, ArtifactEntry>>;

impl TryFrom<ArtifactEntry> for DeployedContract {
    type Error = RepositoryError;

    fn try_from(entry: ArtifactEntry) -> Result<Self, Self::Error> {
        let address = ChecksumAddress::parse(entry.address)?;
        Ok(DeployedContract::new(address, entry.abi).with_receipt(DeploymentReceipt {
            tx_hash: entry.tx_hash,
            block_number: entry.block_number,
            deployer: entry.deployer,
        }))
    }
}

impl From<&DeployedContract> for ArtifactEntry {
    fn from(contract: &DeployedContract) -> Self {
        let receipt = contract.receipt();
        Self {
            address: contract.address().to_string(),
            abi: sorted_abi(contract.abi()),
            tx_hash: receipt.tx_hash.clone(),
            block_number: receipt.block_number,
            deployer: receipt.deployer.clone(),
        }
    }
}

/// Parse a registry document
///
/// # Errors
///
/// Returns `RepositoryError::Json` for malformed JSON and
/// `RepositoryError::Mapping` for bad chain id keys or addresses.
pub fn parse_document(json: &str) -> Result<ContractRegistry, RepositoryError> {
    let document: ArtifactDocument = serde_json::from_str(json)?;

    let mut registry = ContractRegistry::new();
    for (chain_key, contracts) in document {
        let chain_id: ChainId = chain_key.parse()?;
        for (name, entry) in contracts {
            let contract = DeployedContract::try_from(entry)
                .map_err(|e| RepositoryError::Mapping(format!("{name} on chain {chain_id}: {e}")))?;
            registry.insert(chain_id, name, contract);
        }
    }

    Ok(registry)
}

/// Render a registry in the standard layout: 4-space indentation, chain ids
/// and names sorted, ABI items sorted by (`type`, `name`)
///
/// # Errors
///
/// Returns `RepositoryError::Json` if serialization fails.
pub fn render_document(registry: &ContractRegistry) -> Result<String, RepositoryError> {
    let document: ArtifactDocument = registry
        .chains()
        .map(|(chain_id, contracts)| {
            let entries = contracts
                .iter()
                .map(|(name, contract)| (name.clone(), ArtifactEntry::from(contract)))
                .collect();
            (chain_id.to_string(), entries)
        })
        .collect();

    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    document.serialize(&mut serializer)?;
    buffer.push(b'\n');

    String::from_utf8(buffer)
        .map_err(|e| RepositoryError::Mapping(format!("Rendered document is not UTF-8: {e}")))
}

/// ABIs are opaque; only arrays of objects are reordered
fn sorted_abi(abi: &Abi) -> Abi {
    let Some(items) = abi.as_array() else {
        return abi.clone();
    };
    if !items.iter().all(serde_json::Value::is_object) {
        return abi.clone();
    }

    let field = |item: &serde_json::Value, key: &str| {
        item.get(key).and_then(serde_json::Value::as_str).unwrap_or_default().to_string()
    };
    let mut items = items.clone();
    items.sort_by_key(|item| (field(item, "type"), field(item, "name")));
    Abi::Array(items)
}
