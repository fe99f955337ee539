//! # EdgeGrid Credential Profile
//!
//! Parses the `.edgerc` payload stored in a credentials Secret.
//!
//! The payload is INI text: a `[section]` header followed by `key = value`
//! lines. Only four keys of one section are meaningful; everything else in the
//! payload is ignored.

use super::error::ProfileError;
use ini::Ini;

/// Keys read from the credentials section, in `.edgerc` spelling
pub const KEY_HOST: &str = "host";
pub const KEY_CLIENT_TOKEN: &str = "client_token";
pub const KEY_CLIENT_SECRET: &str = "client_secret";
pub const KEY_ACCESS_TOKEN: &str = "access_token";

/// Every key a complete profile carries
pub const REQUIRED_KEYS: [&str; 4] = [
    KEY_HOST,
    KEY_CLIENT_TOKEN,
    KEY_CLIENT_SECRET,
    KEY_ACCESS_TOKEN,
];

/// A parsed `.edgerc` payload
#[derive(Debug)]
pub struct EdgercFile {
    ini: Ini,
}

impl EdgercFile {
    /// Parse raw Secret bytes
    ///
    /// An empty payload parses to a file with no sections. Values are kept
    /// as written: backslashes are not treated as escapes.
    pub fn parse(payload: &[u8]) -> Result<Self, ProfileError> {
        let text = std::str::from_utf8(payload)?;
        let ini = Ini::load_from_str_noescape(text)?;
        Ok(Self { ini })
    }

    /// The credentials held by the named section, if the section exists
    pub fn profile(&self, section: &str) -> Option<CredentialProfile> {
        let properties = self.ini.section(Some(section))?;
        // Repeated keys: the last occurrence wins.
        let get = |key: &str| properties.get_all(key).last().map(str::to_string);

        Some(CredentialProfile {
            host: get(KEY_HOST),
            client_token: get(KEY_CLIENT_TOKEN),
            client_secret: get(KEY_CLIENT_SECRET),
            access_token: get(KEY_ACCESS_TOKEN),
        })
    }

    pub fn has_section(&self, section: &str) -> bool {
        self.ini.section(Some(section)).is_some()
    }
}

/// Credential fields of one `.edgerc` section; absent keys are `None`
#[derive(Clone, Default, PartialEq, Eq)]
pub struct CredentialProfile {
    pub host: Option<String>,
    pub client_token: Option<String>,
    pub client_secret: Option<String>,
    pub access_token: Option<String>,
}

impl std::fmt::Debug for CredentialProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialProfile")
            .field("host", &self.host)
            .field("client_token", &self.client_token.as_ref().map(|_| "<redacted>"))
            .field("client_secret", &self.client_secret.as_ref().map(|_| "<redacted>"))
            .field("access_token", &self.access_token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl CredentialProfile {
    /// Value of a credential key, by its `.edgerc` name
    pub fn get(&self, key: &str) -> Option<&str> {
        match key {
            KEY_HOST => self.host.as_deref(),
            KEY_CLIENT_TOKEN => self.client_token.as_deref(),
            KEY_CLIENT_SECRET => self.client_secret.as_deref(),
            KEY_ACCESS_TOKEN => self.access_token.as_deref(),
            _ => None,
        }
    }

    /// Required keys that are absent or empty, in `.edgerc` order
    pub fn missing_keys(&self) -> Vec<&'static str> {
        REQUIRED_KEYS
            .into_iter()
            .filter(|key| self.get(key).is_none_or(str::is_empty))
            .collect()
    }
}
