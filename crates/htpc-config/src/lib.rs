//! Configuration for htpc-manager
//!
//! Two concerns live here:
//! - The credential file (`~/.htpc_manager`): a TOML file with a single
//!   `[CREDENTIALS]` section holding the Tvheadend login.
//! - The power-policy buffers, which are compiled-in constants validated
//!   at startup.

mod buffers;
mod schema;

pub use buffers::*;
pub use schema::*;

use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read credential file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse credential file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error(
        "Idle shutdown threshold ({threshold:?}) must exceed wakeup lead time ({lead:?})"
    )]
    InvalidBuffers { threshold: Duration, lead: Duration },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Environment variable overriding the credential file path
pub const CONFIG_PATH_ENV: &str = "HTPC_MANAGER_CONFIG";

/// Credential filename within the home directory
const CONFIG_FILENAME: &str = ".htpc_manager";

/// Get the credential file path.
///
/// Order of precedence:
/// 1. `$HTPC_MANAGER_CONFIG` environment variable (if set)
/// 2. `~/.htpc_manager`
pub fn default_config_path() -> PathBuf {
    if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
        return PathBuf::from(path);
    }

    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(CONFIG_FILENAME);
    }

    // Last resort; the subsequent read will fail with a clear error
    PathBuf::from(CONFIG_FILENAME)
}

/// Load credentials from a TOML file
pub fn load_credentials(path: impl AsRef<Path>) -> ConfigResult<Credentials> {
    let content = std::fs::read_to_string(path)?;
    parse_credentials(&content)
}

/// Parse credentials from a TOML string
pub fn parse_credentials(content: &str) -> ConfigResult<Credentials> {
    let raw: RawConfig = toml::from_str(content)?;
    Ok(Credentials::from_raw(raw))
}
