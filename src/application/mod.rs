//! Application Layer
//!
//! Use cases for resolving, listing, loading and maintaining contract
//! registries. They depend on domain gateways, never on concrete adapters.

pub mod use_cases;
