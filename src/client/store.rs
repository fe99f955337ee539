//! # Object Store
//!
//! Read access to the objects credential resolution depends on.
//!
//! The trait lets tests substitute the Kubernetes API server while the real
//! implementation goes through `kube::Api`.

use super::error::StoreError;
use crate::crd::ProviderConfig;
use async_trait::async_trait;
use k8s_openapi::api::core::v1::Secret;
use kube::{Api, Client};
#[cfg(test)]
use mockall::automock;
use tracing::debug;

/// Typed get-by-name access to ProviderConfigs and Secrets
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Get a cluster-scoped ProviderConfig by name
    async fn get_provider_config(&self, name: &str) -> Result<ProviderConfig, StoreError>;

    /// Get a Secret by namespace and name
    async fn get_secret(&self, namespace: &str, name: &str) -> Result<Secret, StoreError>;
}

/// Real Kubernetes object store
#[derive(Clone)]
pub struct KubeObjectStore {
    client: Client,
}

impl std::fmt::Debug for KubeObjectStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KubeObjectStore").finish_non_exhaustive()
    }
}

impl KubeObjectStore {
    /// Create a new KubeObjectStore wrapping the given kube Client
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

/// Map an API 404 to `NotFound`; everything else stays an opaque API error
fn map_get_error(kind: &'static str, name: &str, err: kube::Error) -> StoreError {
    match err {
        kube::Error::Api(api_err) if api_err.code == 404 => StoreError::NotFound {
            kind,
            name: name.to_string(),
        },
        e => StoreError::Kube(e),
    }
}

#[async_trait]
impl ObjectStore for KubeObjectStore {
    async fn get_provider_config(&self, name: &str) -> Result<ProviderConfig, StoreError> {
        let api: Api<ProviderConfig> = Api::all(self.client.clone());
        debug!(provider_config = %name, "getting ProviderConfig");
        api.get(name)
            .await
            .map_err(|e| map_get_error("ProviderConfig", name, e))
    }

    async fn get_secret(&self, namespace: &str, name: &str) -> Result<Secret, StoreError> {
        let api: Api<Secret> = Api::namespaced(self.client.clone(), namespace);
        debug!(secret.namespace = %namespace, secret.name = %name, "getting credentials Secret");
        api.get(name)
            .await
            .map_err(|e| map_get_error("Secret", &format!("{namespace}/{name}"), e))
    }
}
