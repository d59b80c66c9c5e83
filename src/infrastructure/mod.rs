//! Infrastructure Layer
//!
//! Contains all external concerns: driving adapters (HTTP handlers) and
//! driven adapters (artifact sources, configuration, logging).

pub mod driven_adapters;
pub mod driving_adapters;
