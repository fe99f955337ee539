//! # Observability
//!
//! Tracing subscriber setup and Prometheus metrics.

pub mod metrics;

use crate::constants::DEFAULT_LOG_FILTER;

/// Install the process-wide fmt subscriber
///
/// The filter is read from `RUST_LOG`, falling back to `provider_akamai=info`.
/// Output goes to stderr so binaries can keep stdout for their own output.
///
/// # Errors
///
/// Fails if a global subscriber is already set.
pub fn init_tracing() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))
}
