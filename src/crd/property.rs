//! # Property
//!
//! Managed resource representing an Akamai property configuration.

use crate::crd::common::{ResourceSpec, ResourceStatus};
use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Configurable fields of a Property
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PropertyParameters {
    pub account_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest_version: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub production_version: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule_format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub staging_version: Option<i64>,
}

/// Observable fields of a Property
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PropertyObservation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observable_field: Option<String>,
}

/// Property Custom Resource Definition
///
/// # Example
///
/// ```yaml
/// apiVersion: akamai.crossplane.io/v1alpha1
/// kind: Property
/// metadata:
///   name: www-example-com
/// spec:
///   providerConfigRef:
///     name: default
///   forProvider:
///     accountId: act_1-ABCDE
///     propertyName: www.example.com
/// ```
#[derive(CustomResource, Debug, Clone, PartialEq, Deserialize, Serialize, JsonSchema)]
#[kube(
    kind = "Property",
    group = "akamai.crossplane.io",
    version = "v1alpha1",
    status = "PropertyStatus",
    category = "crossplane",
    category = "managed",
    category = "akamai",
    printcolumn = r#"{"name":"READY", "type":"string", "jsonPath":".status.conditions[?(@.type=='Ready')].status"}, {"name":"SYNCED", "type":"string", "jsonPath":".status.conditions[?(@.type=='Synced')].status"}, {"name":"EXTERNAL-NAME", "type":"string", "jsonPath":".metadata.annotations.crossplane\\.io/external-name"}, {"name":"AGE", "type":"date", "jsonPath":".metadata.creationTimestamp"}"#
)]
#[serde(rename_all = "camelCase")]
pub struct PropertySpec {
    #[serde(flatten)]
    pub resource_spec: ResourceSpec,
    pub for_provider: PropertyParameters,
}

/// Observed state of a Property
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PropertyStatus {
    #[serde(flatten)]
    pub resource_status: ResourceStatus,
    #[serde(default)]
    pub at_provider: PropertyObservation,
}
