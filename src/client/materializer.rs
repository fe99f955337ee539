//! # Credential Materialization
//!
//! Turns a ProviderConfig's credential source into a typed [`Config`].

use super::context::ResolveContext;
use super::error::CredentialsError;
use super::profile::EdgercFile;
use super::store::ObjectStore;
use super::Config;
use crate::constants::DEFAULT_PROFILE_SECTION;
use crate::crd::{CredentialsSource, ProviderConfig, SecretKeySelector};
use kube::ResourceExt;
use std::sync::Arc;
use tracing::{debug, warn};

/// How strictly a parsed profile is validated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CredentialPolicy {
    /// Reject profiles missing any of `host`, `client_token`,
    /// `client_secret`, `access_token` instead of returning empty strings
    pub require_all_fields: bool,
}

impl CredentialPolicy {
    pub fn lenient() -> Self {
        Self {
            require_all_fields: false,
        }
    }

    pub fn strict() -> Self {
        Self {
            require_all_fields: true,
        }
    }
}

/// Materializes credentials described by a ProviderConfig
#[derive(Debug)]
pub struct CredentialMaterializer<S> {
    store: Arc<S>,
    policy: CredentialPolicy,
}

impl<S> Clone for CredentialMaterializer<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            policy: self.policy,
        }
    }
}

impl<S: ObjectStore> CredentialMaterializer<S> {
    pub fn new(store: Arc<S>, policy: CredentialPolicy) -> Self {
        Self { store, policy }
    }

    /// Produce the Config described by `provider_config`'s credentials
    pub async fn materialize(
        &self,
        ctx: &ResolveContext,
        provider_config: &ProviderConfig,
    ) -> Result<Config, CredentialsError> {
        let credentials = &provider_config.spec.credentials;

        // Adding a source means adding an arm here.
        match credentials.source {
            CredentialsSource::Secret => {
                let selector = credentials
                    .secret_ref
                    .as_ref()
                    .ok_or(CredentialsError::MissingReference)?;
                debug!(
                    provider_config = %provider_config.name_any(),
                    secret.namespace = %selector.namespace,
                    secret.name = %selector.name,
                    "materializing credentials from Secret"
                );
                self.materialize_secret(ctx, selector).await
            }
            source @ (CredentialsSource::None
            | CredentialsSource::InjectedIdentity
            | CredentialsSource::Environment
            | CredentialsSource::Filesystem) => {
                Err(CredentialsError::UnsupportedSource { kind: source })
            }
        }
    }

    async fn materialize_secret(
        &self,
        ctx: &ResolveContext,
        selector: &SecretKeySelector,
    ) -> Result<Config, CredentialsError> {
        let secret = ctx
            .run(|| self.store.get_secret(&selector.namespace, &selector.name))
            .await
            .map_err(|source| CredentialsError::SecretFetch {
                namespace: selector.namespace.clone(),
                name: selector.name.clone(),
                source,
            })?;

        let payload = secret
            .data
            .as_ref()
            .and_then(|data| data.get(&selector.key))
            .map(|bytes| bytes.0.as_slice())
            .unwrap_or_else(|| {
                warn!(
                    secret.namespace = %selector.namespace,
                    secret.name = %selector.name,
                    secret.key = %selector.key,
                    "credentials Secret has no such key, parsing an empty payload"
                );
                &[][..]
            });

        let edgerc = EdgercFile::parse(payload)
            .map_err(|source| CredentialsError::ProfileParse { source })?;

        let profile = edgerc
            .profile(DEFAULT_PROFILE_SECTION)
            .ok_or_else(|| CredentialsError::MissingSection {
                section: DEFAULT_PROFILE_SECTION.to_string(),
            })?;

        if self.policy.require_all_fields {
            let missing = profile.missing_keys();
            if !missing.is_empty() {
                return Err(CredentialsError::MissingFields { fields: missing });
            }
        }

        Ok(Config::from(profile))
    }
}
