//! Deployed Contract Model
//!
//! Contract names, addresses and the deployment record stored in a registry.

use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;
use serde::Deserialize;

use crate::shared::errors::DomainError;

lazy_static! {
    /// Structural shape of an EVM address; casing is not checked
    static ref ADDRESS_REGEX: Regex = Regex::new(r"^0x[a-fA-F0-9]{40}$").expect("valid regex");
}

/// Opaque contract ABI. The registry never inspects its shape.
pub type Abi = serde_json::Value;

/// Logical role of a deployed contract
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ContractName {
    Coordinator,
    GlobalAllowList,
    SubscriptionManager,
    SigningCoordinator,
}

impl ContractName {
    /// Names published to registry consumers
    pub const ADVERTISED: [ContractName; 3] = [
        ContractName::Coordinator,
        ContractName::GlobalAllowList,
        ContractName::SubscriptionManager,
    ];

    /// Every name the registry knows how to resolve
    pub const ALL: [ContractName; 4] = [
        ContractName::Coordinator,
        ContractName::GlobalAllowList,
        ContractName::SubscriptionManager,
        ContractName::SigningCoordinator,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ContractName::Coordinator => "Coordinator",
            ContractName::GlobalAllowList => "GlobalAllowList",
            ContractName::SubscriptionManager => "SubscriptionManager",
            ContractName::SigningCoordinator => "SigningCoordinator",
        }
    }
}

impl fmt::Display for ContractName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContractName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContractName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| s.to_string())
    }
}

/// Which contract names a lookup accepts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContractNamePolicy {
    /// Only [`ContractName::ADVERTISED`]
    #[default]
    Advertised,
    /// [`ContractName::ALL`], including `SigningCoordinator`
    All,
}

impl ContractNamePolicy {
    #[must_use]
    pub fn allowed(self) -> &'static [ContractName] {
        match self {
            ContractNamePolicy::Advertised => &ContractName::ADVERTISED,
            ContractNamePolicy::All => &ContractName::ALL,
        }
    }

    #[must_use]
    pub fn allows(self, name: ContractName) -> bool {
        self.allowed().contains(&name)
    }
}

/// Hex address tagged as a contract address, kept exactly as published
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChecksumAddress(String);

impl ChecksumAddress {
    /// Parse an address, checking only the `0x` + 40 hex digit shape
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidAddress` when the shape does not match.
    pub fn parse(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        if ADDRESS_REGEX.is_match(&value) {
            Ok(Self(value))
        } else {
            Err(DomainError::InvalidAddress(value))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ChecksumAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ChecksumAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Deployment metadata recorded alongside an entry
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeploymentReceipt {
    pub tx_hash: Option<String>,
    pub block_number: Option<u64>,
    pub deployer: Option<String>,
}

/// A contract as recorded in a registry
#[derive(Debug, Clone, PartialEq)]
pub struct DeployedContract {
    address: ChecksumAddress,
    abi: Abi,
    receipt: DeploymentReceipt,
}

impl DeployedContract {
    #[must_use]
    pub fn new(address: ChecksumAddress, abi: Abi) -> Self {
        Self {
            address,
            abi,
            receipt: DeploymentReceipt::default(),
        }
    }

    #[must_use]
    pub fn with_receipt(self, receipt: DeploymentReceipt) -> Self {
        Self { receipt, ..self }
    }

    #[must_use]
    pub fn address(&self) -> &ChecksumAddress {
        &self.address
    }

    #[must_use]
    pub fn abi(&self) -> &Abi {
        &self.abi
    }

    #[must_use]
    pub fn receipt(&self) -> &DeploymentReceipt {
        &self.receipt
    }
}
