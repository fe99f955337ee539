//! # Metrics Registry
//!
//! Prometheus metrics registry setup and registration.

use anyhow::{Context, Result};
use prometheus::Registry;
use std::sync::LazyLock;

/// Global Prometheus metrics registry
pub(crate) static REGISTRY: LazyLock<Registry> = LazyLock::new(Registry::new);

/// Register all metrics with the Prometheus registry
///
/// Call once at startup.
///
/// # Errors
///
/// Registering twice fails with a duplicate collector error.
pub fn register_metrics() -> Result<()> {
    super::credential_metrics::register_credential_metrics()
        .context("failed to register credential metrics")?;
    Ok(())
}

/// The registry metrics are exported from
pub fn registry() -> &'static Registry {
    &REGISTRY
}
