//! # Controller Configuration
//!
//! Credential resolution settings loaded from environment variables.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `REQUIRE_CREDENTIAL_FIELDS` | `false` | Reject `.edgerc` profiles missing any credential key |
//! | `STORE_TIMEOUT_SECS` | `30` | Deadline for one credential resolution (`0` disables) |
//! | `FIELD_MANAGER` | `provider-akamai` | SSA field manager for ProviderConfigUsage |

use crate::client::CredentialPolicy;
use std::time::Duration;

/// Credential resolution configuration
///
/// All settings have defaults and can be overridden via environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerConfig {
    /// Fail resolution when the `.edgerc` profile lacks a credential key
    pub require_credential_fields: bool,
    /// Credential resolution deadline (seconds)
    pub store_timeout_secs: u64,
    /// Server-side apply field manager
    pub field_manager: String,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        use crate::constants::*;
        Self {
            require_credential_fields: DEFAULT_REQUIRE_CREDENTIAL_FIELDS,
            store_timeout_secs: DEFAULT_STORE_TIMEOUT_SECS,
            field_manager: DEFAULT_FIELD_MANAGER.to_string(),
        }
    }
}

impl ControllerConfig {
    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Self {
        use crate::constants::*;
        Self {
            require_credential_fields: env_var_or_default(
                "REQUIRE_CREDENTIAL_FIELDS",
                DEFAULT_REQUIRE_CREDENTIAL_FIELDS,
            ),
            store_timeout_secs: env_var_or_default(
                "STORE_TIMEOUT_SECS",
                DEFAULT_STORE_TIMEOUT_SECS,
            ),
            field_manager: std::env::var("FIELD_MANAGER")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_FIELD_MANAGER.to_string()),
        }
    }

    pub fn credential_policy(&self) -> CredentialPolicy {
        CredentialPolicy {
            require_all_fields: self.require_credential_fields,
        }
    }

    /// Resolution deadline, `None` when disabled
    pub fn store_timeout(&self) -> Option<Duration> {
        (self.store_timeout_secs > 0).then(|| Duration::from_secs(self.store_timeout_secs))
    }
}

/// Read environment variable or return default value
fn env_var_or_default<T: std::str::FromStr>(key: &str, default: T) -> T
where
    <T as std::str::FromStr>::Err: std::fmt::Debug,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}
