//! # Credential Metrics
//!
//! Metrics for credential resolution: outcomes, failure reasons, durations,
//! and ProviderConfigUsage writes.

use crate::observability::metrics::registry::REGISTRY;
use anyhow::Result;
use prometheus::{Histogram, IntCounter, IntCounterVec};
use std::sync::LazyLock;

pub const OUTCOME_SUCCESS: &str = "success";
pub const OUTCOME_FAILURE: &str = "failure";

static RESOLUTIONS_TOTAL: LazyLock<IntCounterVec> = LazyLock::new(|| {
    IntCounterVec::new(
        prometheus::Opts::new(
            "provider_akamai_credential_resolutions_total",
            "Total number of ProviderConfig credential resolutions by outcome",
        ),
        &["outcome"],
    )
    .expect("Failed to create RESOLUTIONS_TOTAL metric - this should never happen")
});

static RESOLUTION_ERRORS_TOTAL: LazyLock<IntCounterVec> = LazyLock::new(|| {
    IntCounterVec::new(
        prometheus::Opts::new(
            "provider_akamai_credential_resolution_errors_total",
            "Total number of failed credential resolutions by failure reason",
        ),
        &["reason"],
    )
    .expect("Failed to create RESOLUTION_ERRORS_TOTAL metric - this should never happen")
});

static RESOLUTION_DURATION: LazyLock<Histogram> = LazyLock::new(|| {
    Histogram::with_opts(
        prometheus::HistogramOpts::new(
            "provider_akamai_credential_resolution_duration_seconds",
            "Duration of credential resolution in seconds",
        )
        .buckets(vec![0.005, 0.01, 0.05, 0.1, 0.5, 1.0, 5.0]),
    )
    .expect("Failed to create RESOLUTION_DURATION metric - this should never happen")
});

static USAGE_TRACKED_TOTAL: LazyLock<IntCounter> = LazyLock::new(|| {
    IntCounter::new(
        "provider_akamai_provider_config_usage_tracked_total",
        "Total number of ProviderConfigUsage records created or refreshed",
    )
    .expect("Failed to create USAGE_TRACKED_TOTAL metric - this should never happen")
});

/// Register credential metrics with the registry
pub(crate) fn register_credential_metrics() -> Result<()> {
    REGISTRY.register(Box::new(RESOLUTIONS_TOTAL.clone()))?;
    REGISTRY.register(Box::new(RESOLUTION_ERRORS_TOTAL.clone()))?;
    REGISTRY.register(Box::new(RESOLUTION_DURATION.clone()))?;
    REGISTRY.register(Box::new(USAGE_TRACKED_TOTAL.clone()))?;
    Ok(())
}

pub fn increment_resolutions(outcome: &str) {
    RESOLUTIONS_TOTAL.with_label_values(&[outcome]).inc();
}

pub fn increment_resolution_errors(reason: &str) {
    RESOLUTION_ERRORS_TOTAL.with_label_values(&[reason]).inc();
}

pub fn observe_resolution_duration(duration: f64) {
    RESOLUTION_DURATION.observe(duration);
}

pub fn increment_usage_tracked() {
    USAGE_TRACKED_TOTAL.inc();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increment_resolutions() {
        let before = RESOLUTIONS_TOTAL.with_label_values(&[OUTCOME_SUCCESS]).get();
        increment_resolutions(OUTCOME_SUCCESS);
        let after = RESOLUTIONS_TOTAL.with_label_values(&[OUTCOME_SUCCESS]).get();
        assert!(after > before);
    }

    #[test]
    fn test_increment_resolution_errors_by_reason() {
        let before = RESOLUTION_ERRORS_TOTAL
            .with_label_values(&["missing_section"])
            .get();
        increment_resolution_errors("missing_section");
        let after = RESOLUTION_ERRORS_TOTAL
            .with_label_values(&["missing_section"])
            .get();
        assert!(after > before);
    }

    #[test]
    fn test_observe_resolution_duration() {
        let before = RESOLUTION_DURATION.get_sample_count();
        observe_resolution_duration(0.02);
        assert!(RESOLUTION_DURATION.get_sample_count() > before);
    }

    #[test]
    fn test_increment_usage_tracked() {
        let before = USAGE_TRACKED_TOTAL.get();
        increment_usage_tracked();
        assert!(USAGE_TRACKED_TOTAL.get() > before);
    }
}
