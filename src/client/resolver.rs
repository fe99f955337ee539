//! # ProviderConfig Reference Resolution
//!
//! Looks up the ProviderConfig a managed resource references and records the
//! resource's usage of it.

use super::context::ResolveContext;
use super::error::CredentialsError;
use super::store::ObjectStore;
use super::usage::{usage_for, UsageTracker};
use crate::crd::{Managed, ProviderConfig};
use crate::observability::metrics;
use kube::ResourceExt;
use std::sync::Arc;
use tracing::{debug, warn};

/// Resolves a managed resource's ProviderConfig reference
#[derive(Debug)]
pub struct ConfigReferenceResolver<S, T> {
    store: Arc<S>,
    tracker: Arc<T>,
}

impl<S, T> Clone for ConfigReferenceResolver<S, T> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            tracker: Arc::clone(&self.tracker),
        }
    }
}

impl<S: ObjectStore, T: UsageTracker> ConfigReferenceResolver<S, T> {
    pub fn new(store: Arc<S>, tracker: Arc<T>) -> Self {
        Self { store, tracker }
    }

    /// Fetch the ProviderConfig referenced by `managed` and track its usage
    ///
    /// The usage record is written before the ProviderConfig's credentials are
    /// looked at, so it is refreshed even when the config later proves invalid.
    pub async fn resolve<M: Managed>(
        &self,
        ctx: &ResolveContext,
        managed: &M,
    ) -> Result<ProviderConfig, CredentialsError> {
        let reference = managed
            .provider_config_reference()
            .ok_or(CredentialsError::NoProviderConfigReference)?;

        let provider_config = ctx
            .run(|| self.store.get_provider_config(&reference.name))
            .await
            .map_err(|source| {
                warn!(
                    provider_config = %reference.name,
                    error = %source,
                    "cannot get referenced ProviderConfig"
                );
                CredentialsError::ConfigFetch {
                    name: reference.name.clone(),
                    source,
                }
            })?;

        let usage = usage_for(managed, reference)
            .map_err(|source| CredentialsError::UsageTracking { source })?;
        ctx.run(|| self.tracker.track(&usage))
            .await
            .map_err(|source| CredentialsError::UsageTracking { source })?;
        metrics::increment_usage_tracked();

        debug!(
            resource = %managed.name_any(),
            provider_config = %reference.name,
            "tracked ProviderConfig usage"
        );
        Ok(provider_config)
    }
}
