//! Client configuration, optionally read from disk.
//!
//! The config file is stored at `~/.config/jiosaavn/config.json` and may
//! contain any subset of:
//!
//! ```json
//! {
//!   "base_url": "https://www.jiosaavn.com/api.php",
//!   "user_agent": "Mozilla/5.0 ...",
//!   "timeout_secs": 30
//! }
//! ```
//!
//! Missing keys fall back to [`Config::default`]. Without `timeout_secs` the
//! transport's default (no timeout override) applies.

use crate::error::{Result, SaavnError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://www.jiosaavn.com/api.php";

const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";

/// Settings for [`JioSaavnClient`](crate::JioSaavnClient).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Full URL of the `api.php` endpoint every API call is made against.
    pub base_url: String,
    /// `User-Agent` header sent with every request.
    pub user_agent: String,
    /// Request timeout in seconds. `None` keeps the transport default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            timeout_secs: None,
        }
    }
}

impl Config {
    /// Load config from `~/.config/jiosaavn/config.json`.
    ///
    /// Returns the default config if the file does not exist.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Load config from an explicit file. The file must exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }

    fn path() -> Result<PathBuf> {
        let config = dirs::config_dir()
            .ok_or_else(|| SaavnError::Other("cannot determine config directory".into()))?;
        Ok(config.join("jiosaavn").join("config.json"))
    }
}
