//! Tracing and logging (shared setup).

/// Initialize process-wide observability from the environment.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init_with(&ObservabilityConfig::from_env());
}

/// Logging configuration (filter, output format).
pub mod config;

/// Tracing subscriber setup.
pub mod tracing;

pub use config::{ConfigError, LogFormat, ObservabilityConfig};
