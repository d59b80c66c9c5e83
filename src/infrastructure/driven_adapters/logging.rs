//! Logging Setup
//!
//! Installs the global tracing subscriber for the binaries.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::config::LoggingConfig;

/// Filter used when `RUST_LOG` is not set
pub const DEFAULT_FILTER: &str = "contract_registry=debug,tower_http=debug";

/// Initialize tracing with an env filter, in plain or JSON format
pub fn init(config: &LoggingConfig, default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());
    let registry = tracing_subscriber::registry().with(filter);

    if config.json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
