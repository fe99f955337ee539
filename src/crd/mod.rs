//! # Custom Resource Definitions
//!
//! CRD types for the Akamai provider.
//!
//! This module contains the cluster-scoped `ProviderConfig` and
//! `ProviderConfigUsage` kinds, the `Property` managed resource, the shared
//! reference/selector types, and the explicit [`TypeRegistry`].

mod common;
mod managed;
mod property;
mod provider_config;
mod registry;

pub use common::*;
pub use managed::Managed;
pub use property::*;
pub use provider_config::*;
pub use registry::{TypeMetadata, TypeRegistry};
