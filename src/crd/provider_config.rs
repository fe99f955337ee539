//! # ProviderConfig and ProviderConfigUsage
//!
//! Cluster-scoped kinds describing how the provider authenticates to Akamai
//! and which managed resources depend on each configuration.

use crate::crd::common::{Condition, ProviderConfigReference, ProviderCredentials, TypedReference};
use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// ProviderConfig Custom Resource Definition
///
/// # Example
///
/// ```yaml
/// apiVersion: akamai.crossplane.io/v1alpha1
/// kind: ProviderConfig
/// metadata:
///   name: default
/// spec:
///   credentials:
///     source: Secret
///     secretRef:
///       namespace: crossplane-system
///       name: akamai-edgerc
///       key: edgerc
/// ```
#[derive(CustomResource, Debug, Clone, PartialEq, Deserialize, Serialize, JsonSchema)]
#[kube(
    kind = "ProviderConfig",
    group = "akamai.crossplane.io",
    version = "v1alpha1",
    status = "ProviderConfigStatus",
    category = "crossplane",
    category = "provider",
    category = "akamai",
    printcolumn = r#"{"name":"AGE", "type":"date", "jsonPath":".metadata.creationTimestamp"}, {"name":"SECRET-NAME", "type":"string", "jsonPath":".spec.credentials.secretRef.name", "priority":1}"#
)]
#[serde(rename_all = "camelCase")]
pub struct ProviderConfigSpec {
    /// Credentials required to authenticate to this provider
    pub credentials: ProviderCredentials,
}

/// Observed state of a ProviderConfig
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProviderConfigStatus {
    /// Number of managed resources currently using this ProviderConfig
    #[serde(default)]
    pub users: i64,
    #[serde(default)]
    pub conditions: Vec<Condition>,
}

/// ProviderConfigUsage Custom Resource Definition
///
/// Records that a managed resource uses a ProviderConfig. One usage exists per
/// managed resource, named after the resource's UID and owned by it.
#[derive(CustomResource, Debug, Clone, PartialEq, Deserialize, Serialize, JsonSchema)]
#[kube(
    kind = "ProviderConfigUsage",
    group = "akamai.crossplane.io",
    version = "v1alpha1",
    category = "crossplane",
    category = "provider",
    category = "akamai",
    printcolumn = r#"{"name":"AGE", "type":"date", "jsonPath":".metadata.creationTimestamp"}, {"name":"CONFIG-NAME", "type":"string", "jsonPath":".spec.providerConfigRef.name"}, {"name":"RESOURCE-KIND", "type":"string", "jsonPath":".spec.resourceRef.kind"}, {"name":"RESOURCE-NAME", "type":"string", "jsonPath":".spec.resourceRef.name"}"#
)]
#[serde(rename_all = "camelCase")]
pub struct ProviderConfigUsageSpec {
    /// ProviderConfig being used
    pub provider_config_ref: ProviderConfigReference,
    /// Managed resource using the ProviderConfig
    pub resource_ref: TypedReference,
}
