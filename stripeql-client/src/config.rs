//! Payment API client configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;
use stripeql_config::{HttpConfig as ConfigHttpConfig, StripeConfig};

/// Client configuration for the HTTP backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// API base URL, without trailing slash
    pub api_base: String,

    /// Value of the `Stripe-Version` header, if pinned
    pub api_version: Option<String>,

    /// Request timeout
    pub timeout: Duration,

    /// Connection timeout
    pub connect_timeout: Duration,

    /// User agent string
    pub user_agent: String,

    /// Whether to verify SSL certificates
    pub verify_ssl: bool,

    /// Maximum idle connections per host
    pub max_idle_per_host: usize,
}

impl ClientConfig {
    /// Build from the payment and HTTP configuration domains
    pub fn from_config(stripe: &StripeConfig, http: &ConfigHttpConfig) -> Self {
        Self {
            api_base: stripe.api_base.trim_end_matches('/').to_string(),
            api_version: stripe.api_version.clone(),
            timeout: http.timeout,
            connect_timeout: http.connect_timeout,
            user_agent: http.user_agent.clone(),
            verify_ssl: http.verify_ssl,
            max_idle_per_host: http.max_idle_per_host,
        }
    }

    /// Point the client at another base URL
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_config(&StripeConfig::default(), &ConfigHttpConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_follow_config_domains() {
        let config = ClientConfig::default();
        assert_eq!(config.api_base, "https://api.stripe.com");
        assert_eq!(config.timeout, Duration::from_secs(80));
        assert!(config.verify_ssl);
        assert!(config.api_version.is_none());
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let config = ClientConfig::default().with_api_base("http://localhost:12111/");
        assert_eq!(config.api_base, "http://localhost:12111");
    }
}
