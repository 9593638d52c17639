//! Tracing/logging setup shared by binaries, tests and benches that use the
//! domain crates. The domain crates only emit events; installing a subscriber
//! is left to whoever embeds them.

/// Logging configuration (filter directives, output format).
pub mod config;

/// Tracing subscriber installation.
pub mod tracing;

pub use config::{ConfigError, LogFormat, ObservabilityConfig};

/// Initialize process-wide tracing from the environment.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init_with(&ObservabilityConfig::from_env());
}

/// Initialize process-wide tracing from an explicit configuration.
pub fn init_with(config: &ObservabilityConfig) {
    tracing::init_with(config);
}
