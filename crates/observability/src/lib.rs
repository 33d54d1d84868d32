//! Tracing/logging setup shared by catalog binaries.

/// Log filter and output format.
pub mod config;

/// Subscriber installation.
pub mod tracing;

pub use config::{LogConfig, LogFormat};

/// Initialize process-wide logging from the environment.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init(&LogConfig::from_env());
}
