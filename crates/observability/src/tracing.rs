//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

use crate::config::{LogConfig, LogFormat, DEFAULT_FILTER};

/// Install the global subscriber described by `config`.
///
/// Safe to call multiple times (subsequent calls are no-ops). An invalid
/// filter string falls back to `info`.
pub fn init(config: &LogConfig) {
    let (filter, fell_back) = parse_filter(&config.filter);

    // Logs go to stderr so stdout stays clean for command output.
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    let installed = match config.format {
        LogFormat::Json => builder
            .json()
            .with_timer(tracing_subscriber::fmt::time::SystemTime)
            .try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
    };
    if installed.is_err() {
        return;
    }

    if fell_back {
        ::tracing::warn!(filter = %config.filter, "invalid log filter, using {DEFAULT_FILTER}");
    }
    ::tracing::debug!(format = ?config.format, filter = %config.filter, "logging initialized");
}

/// Parse a filter directive, falling back to [`DEFAULT_FILTER`].
///
/// The flag is `true` when the fallback was used.
fn parse_filter(directives: &str) -> (EnvFilter, bool) {
    match EnvFilter::try_new(directives) {
        Ok(filter) => (filter, false),
        Err(_) => (EnvFilter::new(DEFAULT_FILTER), true),
    }
}
