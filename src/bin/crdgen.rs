//! Print the provider's CustomResourceDefinitions
//!
//! Usage:
//!   cargo run --bin crdgen > package/crds.yaml
//!
//! Logs go to stderr; stdout carries only the YAML stream.

use anyhow::{Context, Result};
use provider_akamai::crd::TypeRegistry;
use provider_akamai::observability::init_tracing;
use std::io::Write;
use tracing::info;

fn main() -> Result<()> {
    init_tracing()?;

    let registry = TypeRegistry::provider();
    let yaml = registry
        .to_yaml()
        .context("Failed to render CustomResourceDefinitions")?;

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(yaml.as_bytes())
        .context("Failed to write CustomResourceDefinitions to stdout")?;

    info!(kinds = registry.len(), "rendered CustomResourceDefinitions");
    Ok(())
}
