//! Upstream API configuration.
//!
//! The base URL and subscription key are injected into [`crate::PbsClient`]
//! rather than read from constants at call sites, so tests can point the
//! client at a stub server.

/// Base URL of the PBS data API (v3).
pub const DEFAULT_BASE_URL: &str = "https://data-api.health.gov.au/pbs/api/v3";

/// Public subscription key for unregistered users.
pub const DEFAULT_SUBSCRIPTION_KEY: &str = "2384af7c667342ceb5a736fe29f1dc6b";

/// Upstream connection settings shared by every adapter.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL endpoint paths are appended to.
    pub base_url: String,
    /// Fallback subscription key used when the caller supplies none.
    pub subscription_key: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            subscription_key: DEFAULT_SUBSCRIPTION_KEY.to_string(),
        }
    }
}

impl ApiConfig {
    /// Configuration from the environment, falling back to the public
    /// defaults.
    ///
    /// Honors `PBS_API_BASE_URL` and `PBS_SUBSCRIPTION_KEY`. Binaries
    /// load `.env` files via dotenvy before calling this.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            base_url: std::env::var("PBS_API_BASE_URL").unwrap_or(defaults.base_url),
            subscription_key: std::env::var("PBS_SUBSCRIPTION_KEY")
                .unwrap_or(defaults.subscription_key),
        }
    }

    /// Override the base URL (used by tests to target a stub server).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_public_key_and_base_url() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.subscription_key, DEFAULT_SUBSCRIPTION_KEY);
    }

    #[test]
    fn with_base_url_replaces_only_the_url() {
        let config = ApiConfig::default().with_base_url("http://127.0.0.1:9999");
        assert_eq!(config.base_url, "http://127.0.0.1:9999");
        assert_eq!(config.subscription_key, DEFAULT_SUBSCRIPTION_KEY);
    }
}
