//! Gateway client configuration.

use std::time::Duration;

use serde::Deserialize;

/// Base address used when nothing is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Environment variable selecting the service base address.
pub const BASE_URL_ENV: &str = "TTB_API_BASE_URL";

const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Connection defaults for the verification gateway.
///
/// Created once at startup and immutable afterwards; every request made
/// through the client reads the same values.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClientConfig {
    /// Base address of the verification service.
    pub base_url: String,
    /// Request timeout in milliseconds.
    pub timeout_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl ClientConfig {
    /// Build a config from the environment.
    ///
    /// Reads [`BASE_URL_ENV`] and falls back to [`DEFAULT_BASE_URL`] when
    /// the variable is unset or empty.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(base_url) = std::env::var(BASE_URL_ENV)
            && !base_url.is_empty()
        {
            config.base_url = base_url;
        }
        config
    }

    /// The configured request timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Absolute URL for a route under the base address.
    pub(crate) fn endpoint(&self, route: &str) -> String {
        format!("{}{route}", self.base_url.trim_end_matches('/'))
    }
}
