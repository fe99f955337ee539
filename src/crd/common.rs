//! # Common API Types
//!
//! Reference, selector, and status types shared by every kind the provider serves.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where the provider reads its credentials from
///
/// Only `Secret` is currently handled by the credential materializer; every
/// other source is rejected with an explicit error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, JsonSchema)]
pub enum CredentialsSource {
    /// No credentials
    #[default]
    None,
    /// Credentials stored in a Kubernetes Secret
    Secret,
    /// Credentials injected into the provider pod (e.g. workload identity)
    InjectedIdentity,
    /// Credentials read from an environment variable of the provider pod
    Environment,
    /// Credentials read from a file mounted into the provider pod
    Filesystem,
}

impl CredentialsSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            CredentialsSource::None => "None",
            CredentialsSource::Secret => "Secret",
            CredentialsSource::InjectedIdentity => "InjectedIdentity",
            CredentialsSource::Environment => "Environment",
            CredentialsSource::Filesystem => "Filesystem",
        }
    }
}

impl fmt::Display for CredentialsSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reference to a Secret in an arbitrary namespace
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SecretReference {
    /// Name of the secret
    pub name: String,
    /// Namespace of the secret
    pub namespace: String,
}

/// Selects a single key of a Secret
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SecretKeySelector {
    /// Name of the secret
    pub name: String,
    /// Namespace of the secret
    pub namespace: String,
    /// Key within the secret's data map
    pub key: String,
}

/// Selects an environment variable of the provider process
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EnvSelector {
    pub name: String,
}

/// Selects a file on the provider's filesystem
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FsSelector {
    pub path: String,
}

/// Credentials required to authenticate against the Akamai APIs
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProviderCredentials {
    /// Source of the provider credentials
    #[serde(default)]
    pub source: CredentialsSource,
    /// Secret key holding the `.edgerc` payload
    /// Required when `source` is `Secret`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret_ref: Option<SecretKeySelector>,
    /// Environment variable holding the credentials
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub env: Option<EnvSelector>,
    /// File holding the credentials
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fs: Option<FsSelector>,
}

/// Reference (by name) to a cluster-scoped ProviderConfig
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProviderConfigReference {
    /// Name of the referenced ProviderConfig
    pub name: String,
}

impl ProviderConfigReference {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Typed reference to an arbitrary Kubernetes object
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TypedReference {
    pub api_version: String,
    pub kind: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
}

/// What happens to the external resource when its managed resource is deleted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, JsonSchema)]
pub enum DeletionPolicy {
    /// Leave the external resource in place
    Orphan,
    /// Delete the external resource
    #[default]
    Delete,
}

/// Fields common to the spec of every managed resource
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResourceSpec {
    /// ProviderConfig used to authenticate calls for this resource
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_config_ref: Option<ProviderConfigReference>,
    /// Secret to which connection details of the external resource are written
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub write_connection_secret_to_ref: Option<SecretReference>,
    #[serde(default)]
    pub deletion_policy: DeletionPolicy,
}

/// Fields common to the status of every managed resource
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResourceStatus {
    /// Conditions represent the latest available observations
    #[serde(default)]
    pub conditions: Vec<Condition>,
}

/// Condition represents a condition of a resource
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    /// Type of condition (Ready, Synced)
    pub r#type: String,
    /// Status of the condition (True, False, Unknown)
    pub status: String,
    /// Last transition time
    #[serde(default)]
    pub last_transition_time: Option<String>,
    /// Reason for the condition
    #[serde(default)]
    pub reason: Option<String>,
    /// Message describing the condition
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_source_wire_names() {
        let json = serde_json::to_string(&CredentialsSource::InjectedIdentity).unwrap();
        assert_eq!(json, "\"InjectedIdentity\"");

        let parsed: CredentialsSource = serde_json::from_str("\"Secret\"").unwrap();
        assert_eq!(parsed, CredentialsSource::Secret);
        assert_eq!(parsed.to_string(), "Secret");
    }

    #[test]
    fn test_credentials_default_to_none_source() {
        let creds: ProviderCredentials = serde_json::from_str("{}").unwrap();
        assert_eq!(creds.source, CredentialsSource::None);
        assert!(creds.secret_ref.is_none());
    }

    #[test]
    fn test_resource_spec_camel_case() {
        let spec: ResourceSpec = serde_json::from_value(serde_json::json!({
            "providerConfigRef": {"name": "default"},
            "deletionPolicy": "Orphan"
        }))
        .unwrap();

        assert_eq!(spec.provider_config_ref, Some(ProviderConfigReference::new("default")));
        assert_eq!(spec.deletion_policy, DeletionPolicy::Orphan);
    }
}
