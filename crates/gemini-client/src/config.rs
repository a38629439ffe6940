//! Client configuration.

use std::fmt;
use std::time::Duration;

use crate::error::ConfigError;

/// Environment variable holding the `generateContent` endpoint URL.
pub const ENV_API_URL: &str = "GEMINI_API_URL";
/// Environment variable holding the API key.
pub const ENV_API_KEY: &str = "GEMINI_API_KEY";
/// Environment variable holding the request timeout in seconds (`0` disables it).
pub const ENV_TIMEOUT_SECS: &str = "GEMINI_TIMEOUT_SECS";

/// Timeout applied when none is configured.
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Immutable endpoint settings, built once at startup and handed to the client.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    endpoint_url: String,
    api_key: String,
    timeout: Option<Duration>,
}

impl ClientConfig {
    /// Builds a config with the default timeout.
    ///
    /// Both values must be non-blank. The URL itself is only parsed when a
    /// request is made.
    pub fn new(
        endpoint_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let endpoint_url = endpoint_url.into();
        let api_key = api_key.into();
        if endpoint_url.trim().is_empty() {
            return Err(ConfigError::Missing(ENV_API_URL));
        }
        if api_key.trim().is_empty() {
            return Err(ConfigError::Missing(ENV_API_KEY));
        }
        Ok(Self {
            endpoint_url,
            api_key,
            timeout: Some(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
        })
    }

    /// Reads `GEMINI_API_URL`, `GEMINI_API_KEY` and `GEMINI_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`ClientConfig::from_env`] with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let endpoint_url = lookup(ENV_API_URL).ok_or(ConfigError::Missing(ENV_API_URL))?;
        let api_key = lookup(ENV_API_KEY).ok_or(ConfigError::Missing(ENV_API_KEY))?;
        let config = Self::new(endpoint_url, api_key)?;

        match lookup(ENV_TIMEOUT_SECS) {
            Some(raw) if !raw.trim().is_empty() => {
                let secs = raw
                    .trim()
                    .parse::<u64>()
                    .map_err(|_| ConfigError::InvalidTimeout(raw.clone()))?;
                Ok(config.with_timeout_secs(secs))
            }
            _ => Ok(config),
        }
    }

    /// Replaces the request timeout. `None` leaves requests unbounded.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Replaces the request timeout; `0` disables it.
    pub fn with_timeout_secs(self, secs: u64) -> Self {
        let timeout = (secs > 0).then(|| Duration::from_secs(secs));
        self.with_timeout(timeout)
    }

    pub fn endpoint_url(&self) -> &str {
        &self.endpoint_url
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// API key with everything but the last four characters hidden.
    pub fn masked_api_key(&self) -> String {
        let chars: Vec<char> = self.api_key.chars().collect();
        if chars.len() <= 4 {
            return "*".repeat(chars.len());
        }
        let visible: String = chars[chars.len() - 4..].iter().collect();
        format!("{}{}", "*".repeat(chars.len() - 4), visible)
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("endpoint_url", &self.endpoint_url)
            .field("api_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}
