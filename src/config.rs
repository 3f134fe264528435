//! Runtime configuration
//!
//! Read from the environment once at startup and handed to the lookup client.

use std::fmt;
use std::num::ParseIntError;
use std::time::Duration;

use thiserror::Error;

/// Environment variable holding the CalorieNinjas API key
pub const API_KEY_VAR: &str = "CALORIENINJAS_API_KEY";
/// Environment variable overriding the nutrition endpoint
pub const API_URL_VAR: &str = "NUTRITION_TRACKER_API_URL";
/// Environment variable overriding the request timeout, in seconds
pub const TIMEOUT_VAR: &str = "NUTRITION_TRACKER_TIMEOUT_SECS";

pub const DEFAULT_API_URL: &str = "https://api.calorieninjas.com/v1/nutrition";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} is not set; get a key at https://calorieninjas.com/api")]
    MissingApiKey(&'static str),

    #[error("{var} must be a whole number of seconds, got '{value}': {source}")]
    InvalidTimeout {
        var: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },
}

/// Lookup client configuration
#[derive(Clone)]
pub struct Config {
    pub api_key: String,
    pub api_url: String,
    pub timeout: Duration,
}

impl Config {
    /// Load from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Load from any variable source; empty values count as unset
    pub fn from_vars<F>(get: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| get(name).filter(|v| !v.trim().is_empty());

        let api_key = get(API_KEY_VAR).ok_or(ConfigError::MissingApiKey(API_KEY_VAR))?;
        let api_url = get(API_URL_VAR).unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let timeout_secs = match get(TIMEOUT_VAR) {
            Some(value) => value
                .trim()
                .parse::<u64>()
                .map_err(|source| ConfigError::InvalidTimeout {
                    var: TIMEOUT_VAR,
                    value,
                    source,
                })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            api_key,
            api_url,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("api_url", &self.api_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}
