//! # Metrics Module
//!
//! Prometheus metrics for credential resolution.
//!
//! ## Sub-modules
//!
//! - `registry` - Metrics registry setup and registration
//! - `credential_metrics` - Resolution outcomes, failure reasons, durations, usage writes

pub mod credential_metrics;
pub mod registry;

pub use credential_metrics::*;
pub use registry::*;
