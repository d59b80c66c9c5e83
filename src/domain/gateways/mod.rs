//! Gateway Traits (Ports)
//!
//! Abstract interfaces defining contracts for external dependencies.
//! These are implemented by driven adapters in the infrastructure layer.

pub mod artifact_source;
pub mod artifact_store;

pub use artifact_source::ArtifactSource;
pub use artifact_store::ArtifactStore;
