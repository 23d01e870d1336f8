//! Settings for the HTTPS client that talks to the payment API

use crate::error::ConfigResult;
use crate::validation::{validate_positive, validate_required_string, Validatable};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Outbound API client settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Whole-request deadline for a single API call, in seconds
    #[serde(with = "crate::domains::utils::duration_secs")]
    pub timeout: Duration,

    /// TCP and TLS handshake deadline, in seconds
    #[serde(with = "crate::domains::utils::duration_secs")]
    pub connect_timeout: Duration,

    /// Sent as `User-Agent` on every API call
    pub user_agent: String,

    /// Turning this off accepts self-signed certificates (local API mocks only)
    pub verify_ssl: bool,

    /// Idle keep-alive connections kept per API host
    pub max_idle_per_host: usize,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(80),
            connect_timeout: Duration::from_secs(30),
            user_agent: format!("stripeql/{}", env!("CARGO_PKG_VERSION")),
            verify_ssl: true,
            max_idle_per_host: 10,
        }
    }
}

impl Validatable for HttpConfig {
    fn validate(&self) -> ConfigResult<()> {
        let domain = self.domain_name();
        validate_positive(self.timeout.as_secs(), "timeout", domain)?;
        validate_positive(self.connect_timeout.as_secs(), "connect_timeout", domain)?;
        validate_required_string(&self.user_agent, "user_agent", domain)?;
        validate_positive(self.max_idle_per_host, "max_idle_per_host", domain)
    }

    fn domain_name(&self) -> &'static str {
        "http"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_api_client() {
        let config = HttpConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(80));
        assert!(config.connect_timeout < config.timeout);
        assert!(config.user_agent.starts_with("stripeql/"));
        assert!(config.verify_ssl);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_values_rejected() {
        let config = HttpConfig {
            timeout: Duration::ZERO,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = HttpConfig {
            connect_timeout: Duration::ZERO,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = HttpConfig {
            user_agent: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = HttpConfig {
            max_idle_per_host: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config: HttpConfig = serde_yaml::from_str("timeout: 5\nverify_ssl: false\n").unwrap();
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert!(!config.verify_ssl);
        assert_eq!(config.max_idle_per_host, 10);
    }
}
