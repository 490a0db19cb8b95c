/*
[INPUT]:  Process environment (PLATFORM_ENV and prefixed variables)
[OUTPUT]: PlatformConfig with base URL, account id and API key
[POS]:    Configuration layer - client setup from the environment
[UPDATE]: When adding configuration variables
*/

use std::env;
use std::fmt;

use tracing::error;

use crate::http::{PlatformError, Result};

/// Variable selecting the prefix of the other variables
pub const PLATFORM_ENV_VAR: &str = "PLATFORM_ENV";

/// Everything needed to build a client
#[derive(Clone, PartialEq, Eq)]
pub struct PlatformConfig {
    pub base_url: String,
    pub account_id: String,
    pub api_key: String,
}

impl PlatformConfig {
    /// Load `{PREFIX}_URL`, `{PREFIX}_RIVER_ACCOUNT_ID` and
    /// `{PREFIX}_RIVER_API_SECRET`, where `PREFIX` is the value of
    /// `PLATFORM_ENV`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Same as [`PlatformConfig::from_env`] with a custom variable source.
    ///
    /// Empty values count as missing. The first missing variable is named in
    /// the error.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let prefix = lookup(PLATFORM_ENV_VAR).unwrap_or_default();
        let require = |suffix: &str| -> Result<String> {
            let name = format!("{prefix}_{suffix}");
            match lookup(name.as_str()) {
                Some(value) if !value.is_empty() => Ok(value),
                _ => {
                    error!(variable = %name, "required environment variable missing");
                    Err(PlatformError::Config(format!("{name} not set")))
                }
            }
        };

        Ok(Self {
            base_url: require("URL")?,
            account_id: require("RIVER_ACCOUNT_ID")?,
            api_key: require("RIVER_API_SECRET")?,
        })
    }
}

impl fmt::Debug for PlatformConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlatformConfig")
            .field("base_url", &self.base_url)
            .field("account_id", &self.account_id)
            .field("api_key", &"<redacted>")
            .finish()
    }
}
