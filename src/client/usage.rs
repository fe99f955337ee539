//! # ProviderConfig Usage Tracking
//!
//! Records which managed resources depend on which ProviderConfig so that a
//! ProviderConfig in use is not deleted out from under them.
//!
//! One ProviderConfigUsage exists per managed resource. It is named after the
//! resource's UID, labelled with the ProviderConfig name, and owned by the
//! managed resource so the API server garbage-collects it with the resource.

use super::error::StoreError;
use crate::constants::LABEL_PROVIDER_CONFIG;
use crate::crd::{Managed, ProviderConfigReference, ProviderConfigUsage, ProviderConfigUsageSpec};
use async_trait::async_trait;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::OwnerReference;
use kube::api::{Patch, PatchParams};
use kube::{Api, Client, ResourceExt};
#[cfg(test)]
use mockall::automock;
use std::collections::BTreeMap;
use tracing::debug;

/// Records a managed resource's use of a ProviderConfig
///
/// Implementations must be idempotent: tracking an already-tracked resource
/// succeeds.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UsageTracker: Send + Sync {
    async fn track(&self, usage: &ProviderConfigUsage) -> Result<(), StoreError>;
}

/// Build the ProviderConfigUsage recording that `managed` uses `provider_config`
///
/// Fails when the managed resource has no UID (it has not been persisted yet).
pub fn usage_for<M: Managed>(
    managed: &M,
    provider_config: &ProviderConfigReference,
) -> Result<ProviderConfigUsage, StoreError> {
    let resource_ref = managed.typed_reference();
    let uid = resource_ref.uid.clone().ok_or_else(|| {
        StoreError::InvalidObject(format!(
            "{} \"{}\" has no uid",
            resource_ref.kind, resource_ref.name
        ))
    })?;

    let mut usage = ProviderConfigUsage::new(
        &uid,
        ProviderConfigUsageSpec {
            provider_config_ref: provider_config.clone(),
            resource_ref: resource_ref.clone(),
        },
    );
    usage.metadata.labels = Some(BTreeMap::from([(
        LABEL_PROVIDER_CONFIG.to_string(),
        provider_config.name.clone(),
    )]));
    usage.metadata.owner_references = Some(vec![OwnerReference {
        api_version: resource_ref.api_version,
        kind: resource_ref.kind,
        name: resource_ref.name,
        uid,
        ..Default::default()
    }]);

    Ok(usage)
}

/// Usage tracker backed by server-side apply of ProviderConfigUsage objects
#[derive(Clone)]
pub struct ProviderConfigUsageTracker {
    client: Client,
    field_manager: String,
}

impl std::fmt::Debug for ProviderConfigUsageTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderConfigUsageTracker")
            .field("field_manager", &self.field_manager)
            .finish_non_exhaustive()
    }
}

impl ProviderConfigUsageTracker {
    pub fn new(client: Client, field_manager: impl Into<String>) -> Self {
        Self {
            client,
            field_manager: field_manager.into(),
        }
    }
}

#[async_trait]
impl UsageTracker for ProviderConfigUsageTracker {
    async fn track(&self, usage: &ProviderConfigUsage) -> Result<(), StoreError> {
        let api: Api<ProviderConfigUsage> = Api::all(self.client.clone());
        let name = usage.name_any();
        let params = PatchParams::apply(&self.field_manager).force();

        api.patch(&name, &params, &Patch::Apply(usage)).await?;

        debug!(
            usage = %name,
            provider_config = %usage.spec.provider_config_ref.name,
            "applied ProviderConfigUsage"
        );
        Ok(())
    }
}
