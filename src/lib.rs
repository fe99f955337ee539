//! # provider-akamai
//!
//! Credential resolution for a Crossplane-style Akamai provider.
//!
//! A managed resource names a cluster-scoped `ProviderConfig`; the
//! `ProviderConfig` points at a `Secret` holding an `.edgerc` profile. The
//! [`client::ProviderConfigClient`] follows that chain, records a
//! `ProviderConfigUsage` for the resource, and returns a typed
//! [`client::Config`] ready for EdgeGrid request signing.

pub mod client;
pub mod config;
pub mod constants;
pub mod crd;
pub mod observability;
