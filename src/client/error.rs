//! # Credential Resolution Errors
//!
//! Error taxonomy for resolving a managed resource's ProviderConfig into a
//! typed [`Config`](super::Config). Every variant is terminal for the call;
//! retry policy belongs to the caller.

use crate::crd::CredentialsSource;
use thiserror::Error;

/// Failure of a single object store or usage tracker call
#[derive(Debug, Error)]
pub enum StoreError {
    /// The requested object does not exist
    #[error("{kind} \"{name}\" not found")]
    NotFound { kind: &'static str, name: String },
    /// The calling context was cancelled
    #[error("context cancelled")]
    Cancelled,
    /// The calling context's deadline passed
    #[error("context deadline exceeded")]
    DeadlineExceeded,
    /// The object cannot be written as given
    #[error("invalid object: {0}")]
    InvalidObject(String),
    /// Any other Kubernetes API failure
    #[error(transparent)]
    Kube(#[from] kube::Error),
}

impl StoreError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, StoreError::Cancelled | StoreError::DeadlineExceeded)
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}

/// The secret payload is not a well-formed `.edgerc` profile
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("payload is not valid UTF-8 text")]
    InvalidUtf8(#[from] std::str::Utf8Error),
    #[error(transparent)]
    Syntax(#[from] ini::ParseError),
}

/// Credential resolution error
#[derive(Debug, Error)]
pub enum CredentialsError {
    #[error("managed resource does not reference a ProviderConfig")]
    NoProviderConfigReference,

    #[error("cannot get referenced ProviderConfig \"{name}\": {source}")]
    ConfigFetch {
        name: String,
        #[source]
        source: StoreError,
    },

    #[error("cannot track ProviderConfig usage: {source}")]
    UsageTracking {
        #[source]
        source: StoreError,
    },

    #[error("no credentials secret referenced")]
    MissingReference,

    #[error("cannot get credentials secret \"{namespace}/{name}\": {source}")]
    SecretFetch {
        namespace: String,
        name: String,
        #[source]
        source: StoreError,
    },

    #[error("cannot parse credentials secret: {source}")]
    ProfileParse {
        #[source]
        source: ProfileError,
    },

    #[error("{section} section does not exist")]
    MissingSection { section: String },

    #[error("credentials source {kind} is not currently supported")]
    UnsupportedSource { kind: CredentialsSource },

    #[error("required credential keys not set: {}", .fields.join(", "))]
    MissingFields { fields: Vec<&'static str> },

    #[error("required environment variable {variable} is not set")]
    MissingEnvironment { variable: &'static str },
}

impl CredentialsError {
    /// Short reason string used as a metric label
    pub fn reason(&self) -> &'static str {
        match self {
            CredentialsError::NoProviderConfigReference => "no_provider_config_reference",
            CredentialsError::ConfigFetch { .. } => "config_fetch",
            CredentialsError::UsageTracking { .. } => "usage_tracking",
            CredentialsError::MissingReference => "missing_reference",
            CredentialsError::SecretFetch { .. } => "secret_fetch",
            CredentialsError::ProfileParse { .. } => "profile_parse",
            CredentialsError::MissingSection { .. } => "missing_section",
            CredentialsError::UnsupportedSource { .. } => "unsupported_source",
            CredentialsError::MissingFields { .. } => "missing_fields",
            CredentialsError::MissingEnvironment { .. } => "missing_environment",
        }
    }

    /// Whether the failure came from a cancelled or expired calling context
    pub fn is_cancelled(&self) -> bool {
        match self {
            CredentialsError::ConfigFetch { source, .. }
            | CredentialsError::UsageTracking { source }
            | CredentialsError::SecretFetch { source, .. } => source.is_cancelled(),
            _ => false,
        }
    }
}
