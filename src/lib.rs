//! Contract Registry
//!
//! Static lookup of deployed contract addresses by domain, chain id and
//! contract name, following Clean/Hexagonal Architecture principles.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;
