//! # Shared Test Fixtures
//!
//! In-memory object store and usage tracker, plus builders for the objects a
//! credential resolution touches.

#![allow(dead_code, reason = "Each test binary uses a different subset of fixtures")]

use async_trait::async_trait;
use k8s_openapi::api::core::v1::Secret;
use k8s_openapi::ByteString;
use kube::ResourceExt;
use provider_akamai::client::{ObjectStore, StoreError, UsageTracker};
use provider_akamai::crd::{
    CredentialsSource, ProviderConfig, ProviderConfigReference, ProviderConfigSpec,
    ProviderConfigUsage, ProviderCredentials, Property, PropertyParameters, PropertySpec,
    ResourceSpec, SecretKeySelector,
};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

pub const NAMESPACE: &str = "crossplane-system";
pub const SECRET_NAME: &str = "akamai-edgerc";
pub const SECRET_KEY: &str = "edgerc";

pub const COMPLETE_EDGERC: &str =
    "[default]\nhost=h\nclient_token=t\nclient_secret=s\naccess_token=a\n";

/// Object store holding ProviderConfigs and Secrets in memory
#[derive(Debug, Default)]
pub struct InMemoryStore {
    provider_configs: Mutex<BTreeMap<String, ProviderConfig>>,
    secrets: Mutex<BTreeMap<(String, String), Secret>>,
    calls: AtomicUsize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_provider_config(self, provider_config: ProviderConfig) -> Self {
        self.provider_configs
            .lock()
            .unwrap()
            .insert(provider_config.name_any(), provider_config);
        self
    }

    pub fn with_secret(self, namespace: &str, name: &str, key: &str, payload: &[u8]) -> Self {
        let secret = Secret {
            data: Some(BTreeMap::from([(
                key.to_string(),
                ByteString(payload.to_vec()),
            )])),
            ..Default::default()
        };
        self.secrets
            .lock()
            .unwrap()
            .insert((namespace.to_string(), name.to_string()), secret);
        self
    }

    /// Number of get calls that reached the store
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ObjectStore for InMemoryStore {
    async fn get_provider_config(&self, name: &str) -> Result<ProviderConfig, StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.provider_configs
            .lock()
            .unwrap()
            .get(name)
            .cloned()
            .ok_or_else(|| StoreError::NotFound {
                kind: "ProviderConfig",
                name: name.to_string(),
            })
    }

    async fn get_secret(&self, namespace: &str, name: &str) -> Result<Secret, StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.secrets
            .lock()
            .unwrap()
            .get(&(namespace.to_string(), name.to_string()))
            .cloned()
            .ok_or_else(|| StoreError::NotFound {
                kind: "Secret",
                name: format!("{namespace}/{name}"),
            })
    }
}

/// Usage tracker that keeps the latest ProviderConfigUsage per name
#[derive(Debug, Default)]
pub struct InMemoryUsageTracker {
    usages: Mutex<BTreeMap<String, ProviderConfigUsage>>,
    writes: AtomicUsize,
}

impl InMemoryUsageTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub fn usages(&self) -> Vec<ProviderConfigUsage> {
        self.usages.lock().unwrap().values().cloned().collect()
    }
}

#[async_trait]
impl UsageTracker for InMemoryUsageTracker {
    async fn track(&self, usage: &ProviderConfigUsage) -> Result<(), StoreError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.usages
            .lock()
            .unwrap()
            .insert(usage.name_any(), usage.clone());
        Ok(())
    }
}

pub fn property(name: &str, uid: &str, provider_config: Option<&str>) -> Property {
    let mut property = Property::new(
        name,
        PropertySpec {
            resource_spec: ResourceSpec {
                provider_config_ref: provider_config.map(ProviderConfigReference::new),
                ..Default::default()
            },
            for_provider: PropertyParameters {
                account_id: "act_1-ABCDE".to_string(),
                contract_id: Some("ctr_1-ABCDE".to_string()),
                group_id: Some("grp_12345".to_string()),
                ..Default::default()
            },
        },
    );
    property.metadata.uid = Some(uid.to_string());
    property
}

pub fn secret_provider_config(name: &str) -> ProviderConfig {
    provider_config(
        name,
        CredentialsSource::Secret,
        Some(SecretKeySelector {
            namespace: NAMESPACE.to_string(),
            name: SECRET_NAME.to_string(),
            key: SECRET_KEY.to_string(),
        }),
    )
}

pub fn provider_config(
    name: &str,
    source: CredentialsSource,
    secret_ref: Option<SecretKeySelector>,
) -> ProviderConfig {
    ProviderConfig::new(
        name,
        ProviderConfigSpec {
            credentials: ProviderCredentials {
                source,
                secret_ref,
                ..Default::default()
            },
        },
    )
}
