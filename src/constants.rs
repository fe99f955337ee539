//! # Constants
//!
//! Shared names, label keys, and configuration defaults.

/// Section of the `.edgerc` payload that holds the credentials
pub const DEFAULT_PROFILE_SECTION: &str = "default";

/// Label carried by every ProviderConfigUsage naming the ProviderConfig in use
pub const LABEL_PROVIDER_CONFIG: &str = "crossplane.io/provider-config";

/// Default field manager for server-side apply of ProviderConfigUsage objects
pub const DEFAULT_FIELD_MANAGER: &str = "provider-akamai";

/// Default deadline (seconds) for one credential resolution
/// A value of 0 disables the deadline
pub const DEFAULT_STORE_TIMEOUT_SECS: u64 = 30;

/// Strict required-field validation is off unless explicitly enabled
pub const DEFAULT_REQUIRE_CREDENTIAL_FIELDS: bool = false;

/// Default tracing filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "provider_akamai=info";

/// Environment variables read by [`crate::client::Config::from_env`]
pub const ENV_HOST: &str = "AKAMAI_HOST";
pub const ENV_CLIENT_TOKEN: &str = "AKAMAI_CLIENT_TOKEN";
pub const ENV_CLIENT_SECRET: &str = "AKAMAI_CLIENT_SECRET";
pub const ENV_ACCESS_TOKEN: &str = "AKAMAI_ACCESS_TOKEN";
