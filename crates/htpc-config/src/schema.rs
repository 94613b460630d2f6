//! Raw credential file schema (as parsed from TOML)

use serde::Deserialize;

/// Raw credential file as parsed from TOML
#[derive(Debug, Clone, Deserialize)]
pub struct RawConfig {
    /// The `[CREDENTIALS]` section
    #[serde(rename = "CREDENTIALS")]
    pub credentials: RawCredentials,
}

/// The `[CREDENTIALS]` section fields
#[derive(Debug, Clone, Deserialize)]
pub struct RawCredentials {
    pub tvheadend_user: String,
    pub tvheadend_password: String,
}

/// Tvheadend login, loaded once at startup and immutable thereafter
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn from_raw(raw: RawConfig) -> Self {
        Self {
            username: raw.credentials.tvheadend_user,
            password: raw.credentials.tvheadend_password,
        }
    }
}
