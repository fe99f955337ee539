//! # ProviderConfig Client
//!
//! Resolves the EdgeGrid credentials a managed resource should use.
//!
//! Resolution runs in two stages:
//!
//! 1. [`ConfigReferenceResolver`] fetches the ProviderConfig the resource
//!    references and records a ProviderConfigUsage for it.
//! 2. [`CredentialMaterializer`] reads the ProviderConfig's credential source
//!    and produces a [`Config`].
//!
//! [`ProviderConfigClient`] composes both behind
//! [`use_provider_config`](ProviderConfigClient::use_provider_config).

mod context;
mod error;
mod materializer;
mod profile;
mod resolver;
mod store;
mod usage;

pub use context::ResolveContext;
pub use error::{CredentialsError, ProfileError, StoreError};
pub use materializer::{CredentialMaterializer, CredentialPolicy};
pub use profile::{CredentialProfile, EdgercFile};
pub use resolver::ConfigReferenceResolver;
pub use store::{KubeObjectStore, ObjectStore};
pub use usage::{usage_for, ProviderConfigUsageTracker, UsageTracker};

use crate::config::ControllerConfig;
use crate::constants::{ENV_ACCESS_TOKEN, ENV_CLIENT_SECRET, ENV_CLIENT_TOKEN, ENV_HOST};
use crate::crd::Managed;
use crate::observability::metrics;
use anyhow::Context;
use kube::{Client, ResourceExt};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info_span, warn, Instrument};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// EdgeGrid connection credentials
///
/// Secret fields are wiped on drop and never printed by `Debug`.
#[derive(Clone, Default, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Config {
    pub host: String,
    pub client_token: String,
    pub client_secret: String,
    pub access_token: String,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("host", &self.host)
            .field("client_token", &"[REDACTED]")
            .field("client_secret", &"[REDACTED]")
            .field("access_token", &"[REDACTED]")
            .finish()
    }
}

impl Config {
    pub fn new(
        host: impl Into<String>,
        client_token: impl Into<String>,
        client_secret: impl Into<String>,
        access_token: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            client_token: client_token.into(),
            client_secret: client_secret.into(),
            access_token: access_token.into(),
        }
    }

    /// Read credentials from `AKAMAI_HOST`, `AKAMAI_CLIENT_TOKEN`,
    /// `AKAMAI_CLIENT_SECRET` and `AKAMAI_ACCESS_TOKEN`
    ///
    /// # Errors
    ///
    /// `MissingEnvironment` naming the first variable that is not set.
    pub fn from_env() -> Result<Self, CredentialsError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Config::from_env`] with a caller-supplied variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CredentialsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |variable: &'static str| {
            lookup(variable).ok_or(CredentialsError::MissingEnvironment { variable })
        };
        Ok(Self {
            host: read(ENV_HOST)?,
            client_token: read(ENV_CLIENT_TOKEN)?,
            client_secret: read(ENV_CLIENT_SECRET)?,
            access_token: read(ENV_ACCESS_TOKEN)?,
        })
    }

    /// Base URL for API requests
    ///
    /// `.edgerc` hosts are written without a scheme; HTTPS is assumed unless
    /// one is given.
    pub fn base_url(&self) -> String {
        let host = self.host.trim_end_matches('/');
        if host.contains("://") {
            host.to_string()
        } else {
            format!("https://{host}")
        }
    }
}

impl From<CredentialProfile> for Config {
    fn from(profile: CredentialProfile) -> Self {
        Self {
            host: profile.host.unwrap_or_default(),
            client_token: profile.client_token.unwrap_or_default(),
            client_secret: profile.client_secret.unwrap_or_default(),
            access_token: profile.access_token.unwrap_or_default(),
        }
    }
}

/// Resolves managed resources to EdgeGrid credentials
#[derive(Debug)]
pub struct ProviderConfigClient<S, T> {
    resolver: ConfigReferenceResolver<S, T>,
    materializer: CredentialMaterializer<S>,
    timeout: Option<Duration>,
}

impl<S, T> Clone for ProviderConfigClient<S, T> {
    fn clone(&self) -> Self {
        Self {
            resolver: self.resolver.clone(),
            materializer: self.materializer.clone(),
            timeout: self.timeout,
        }
    }
}

impl<S: ObjectStore, T: UsageTracker> ProviderConfigClient<S, T> {
    pub fn new(store: Arc<S>, tracker: Arc<T>, policy: CredentialPolicy) -> Self {
        Self {
            resolver: ConfigReferenceResolver::new(Arc::clone(&store), tracker),
            materializer: CredentialMaterializer::new(store, policy),
            timeout: None,
        }
    }

    /// Bound every resolution by `timeout`; `None` leaves only the caller's deadline
    #[must_use]
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Resolve the credentials `managed` should connect with
    ///
    /// Records the resource's ProviderConfig usage on the way.
    ///
    /// # Errors
    ///
    /// Any [`CredentialsError`]; see [`CredentialsError::reason`] for the
    /// failing step. Cancellation or deadline expiry of `ctx` (or of this
    /// client's timeout) is reported through [`CredentialsError::is_cancelled`].
    pub async fn use_provider_config<M: Managed>(
        &self,
        ctx: &ResolveContext,
        managed: &M,
    ) -> Result<Config, CredentialsError> {
        let span = info_span!(
            "provider_config.resolve",
            resource = %managed.name_any(),
            provider_config = managed
                .provider_config_reference()
                .map_or("", |r| r.name.as_str()),
        );

        async {
            let ctx = match self.timeout {
                Some(timeout) => ctx.clone().with_timeout(timeout),
                None => ctx.clone(),
            };
            let start = std::time::Instant::now();

            let result = async {
                let provider_config = self.resolver.resolve(&ctx, managed).await?;
                self.materializer.materialize(&ctx, &provider_config).await
            }
            .await;

            metrics::observe_resolution_duration(start.elapsed().as_secs_f64());
            match &result {
                Ok(config) => {
                    metrics::increment_resolutions(metrics::OUTCOME_SUCCESS);
                    debug!(host = %config.host, "resolved provider credentials");
                }
                Err(e) => {
                    metrics::increment_resolutions(metrics::OUTCOME_FAILURE);
                    metrics::increment_resolution_errors(e.reason());
                    warn!(reason = e.reason(), error = %e, "credential resolution failed");
                }
            }
            result
        }
        .instrument(span)
        .await
    }
}

impl ProviderConfigClient<KubeObjectStore, ProviderConfigUsageTracker> {
    /// Client backed by the Kubernetes API
    pub fn from_kube(client: Client, config: &ControllerConfig) -> Self {
        let store = Arc::new(KubeObjectStore::new(client.clone()));
        let tracker = Arc::new(ProviderConfigUsageTracker::new(
            client,
            config.field_manager.clone(),
        ));
        Self::new(store, tracker, config.credential_policy()).with_timeout(config.store_timeout())
    }

    /// Client for the in-cluster or kubeconfig context, configured from the environment
    ///
    /// # Errors
    ///
    /// Fails when no kubeconfig or in-cluster service account is available.
    pub async fn try_default() -> anyhow::Result<Self> {
        // rustls 0.23 needs a process-wide crypto provider before the first TLS handshake
        if rustls::crypto::ring::default_provider()
            .install_default()
            .is_err()
        {
            debug!("rustls crypto provider already installed");
        }

        let client = Client::try_default()
            .await
            .context("Failed to create Kubernetes client")?;
        Ok(Self::from_kube(client, &ControllerConfig::from_env()))
    }
}

#[cfg(test)]
mod tests {
    use super::store::MockObjectStore;
    use super::usage::MockUsageTracker;
    use super::*;
    use crate::crd::{
        CredentialsSource, ProviderConfig, ProviderConfigReference, ProviderConfigSpec,
        ProviderCredentials, Property, PropertyParameters, PropertySpec, ResourceSpec,
        SecretKeySelector,
    };
    use k8s_openapi::api::core::v1::Secret;
    use k8s_openapi::ByteString;
    use std::collections::BTreeMap;

    fn property() -> Property {
        let mut property = Property::new(
            "www-example-com",
            PropertySpec {
                resource_spec: ResourceSpec {
                    provider_config_ref: Some(ProviderConfigReference::new("default")),
                    ..Default::default()
                },
                for_provider: PropertyParameters {
                    account_id: "act_1-ABCDE".to_string(),
                    ..Default::default()
                },
            },
        );
        property.metadata.uid = Some("property-uid".to_string());
        property
    }

    fn secret_provider_config(name: &str) -> ProviderConfig {
        ProviderConfig::new(
            name,
            ProviderConfigSpec {
                credentials: ProviderCredentials {
                    source: CredentialsSource::Secret,
                    secret_ref: Some(SecretKeySelector {
                        namespace: "crossplane-system".to_string(),
                        name: "akamai-edgerc".to_string(),
                        key: "edgerc".to_string(),
                    }),
                    ..Default::default()
                },
            },
        )
    }

    #[test]
    fn test_debug_redacts_secret_fields() {
        let config = Config::new("akab-host.luna.akamaiapis.net", "ctok", "csec", "atok");
        let rendered = format!("{config:?}");
        assert!(rendered.contains("akab-host.luna.akamaiapis.net"));
        assert!(!rendered.contains("ctok"));
        assert!(!rendered.contains("csec"));
        assert!(!rendered.contains("atok"));
    }

    #[test]
    fn test_base_url_defaults_to_https() {
        assert_eq!(
            Config::new("akab-host.luna.akamaiapis.net", "", "", "").base_url(),
            "https://akab-host.luna.akamaiapis.net"
        );
        assert_eq!(
            Config::new("http://localhost:8080/", "", "", "").base_url(),
            "http://localhost:8080"
        );
    }

    #[test]
    fn test_from_lookup_reads_all_variables() {
        let vars = BTreeMap::from([
            (ENV_HOST, "h"),
            (ENV_CLIENT_TOKEN, "t"),
            (ENV_CLIENT_SECRET, "s"),
            (ENV_ACCESS_TOKEN, "a"),
        ]);
        let config = Config::from_lookup(|key| vars.get(key).map(|v| (*v).to_string())).unwrap();
        assert_eq!(config, Config::new("h", "t", "s", "a"));
    }

    #[test]
    fn test_from_lookup_names_missing_variable() {
        let err = Config::from_lookup(|key| (key == ENV_HOST).then(|| "h".to_string()))
            .unwrap_err();
        match err {
            CredentialsError::MissingEnvironment { variable } => {
                assert_eq!(variable, ENV_CLIENT_TOKEN);
            }
            other => panic!("expected MissingEnvironment, got {other:?}"),
        }
    }

    #[test]
    fn test_profile_projection_fills_absent_keys_with_empty_strings() {
        let config = Config::from(CredentialProfile {
            host: Some("h".to_string()),
            ..Default::default()
        });
        assert_eq!(config, Config::new("h", "", "", ""));
    }

    #[tokio::test]
    async fn test_use_provider_config_end_to_end() {
        let mut store = MockObjectStore::new();
        store
            .expect_get_provider_config()
            .times(1)
            .returning(|name| Ok(secret_provider_config(name)));
        store.expect_get_secret().times(1).returning(|_, _| {
            Ok(Secret {
                data: Some(BTreeMap::from([(
                    "edgerc".to_string(),
                    ByteString(
                        b"[default]\nhost=h\nclient_token=t\nclient_secret=s\naccess_token=a\n"
                            .to_vec(),
                    ),
                )])),
                ..Default::default()
            })
        });
        let mut tracker = MockUsageTracker::new();
        tracker.expect_track().times(1).returning(|_| Ok(()));

        let client = ProviderConfigClient::new(
            Arc::new(store),
            Arc::new(tracker),
            CredentialPolicy::lenient(),
        )
        .with_timeout(Some(Duration::from_secs(30)));

        let config = client
            .use_provider_config(&ResolveContext::new(), &property())
            .await
            .unwrap();
        assert_eq!(config, Config::new("h", "t", "s", "a"));
    }

    #[tokio::test]
    async fn test_resolver_failure_skips_materialization() {
        let mut store = MockObjectStore::new();
        store.expect_get_provider_config().returning(|name| {
            Err(StoreError::NotFound {
                kind: "ProviderConfig",
                name: name.to_string(),
            })
        });
        store.expect_get_secret().times(0);
        let mut tracker = MockUsageTracker::new();
        tracker.expect_track().times(0);

        let client = ProviderConfigClient::new(
            Arc::new(store),
            Arc::new(tracker),
            CredentialPolicy::lenient(),
        );

        let err = client
            .use_provider_config(&ResolveContext::new(), &property())
            .await
            .unwrap_err();
        assert_eq!(err.reason(), "config_fetch");
    }
}
