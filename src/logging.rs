//! Diagnostic logging to stderr.

use tracing_subscriber::EnvFilter;

use crate::config::{Settings, DEFAULT_LOG_FILTER};

/// Installs the global `tracing` subscriber.
///
/// Logs go to stderr so command output on stdout stays clean. An invalid
/// filter falls back to the default; a second call is a no-op.
pub fn init(settings: &Settings) {
    let filter = EnvFilter::try_new(&settings.log_filter)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
