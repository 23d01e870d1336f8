//! Payment API credential and endpoint configuration

use crate::domains::graphql::ResolveMode;
use crate::error::{ConfigError, ConfigResult};
use crate::loader::SECRET_KEY_ENV;
use crate::validation::{validate_required_string, validate_url, Validatable};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Payment API configuration
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StripeConfig {
    /// Secret API key. Never written back out.
    #[serde(skip_serializing, default)]
    pub secret_key: String,

    /// API base URL
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Pinned API version sent as `Stripe-Version`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,
}

impl StripeConfig {
    /// Return the secret key, enforcing its presence when `mode` needs it.
    ///
    /// In discard mode an empty key is accepted; calls made with it fail
    /// upstream and their errors are dropped.
    pub fn require_secret_key(&self, mode: ResolveMode) -> ConfigResult<&str> {
        if self.secret_key.is_empty() && mode.requires_credentials() {
            return Err(ConfigError::MissingSecretKey(SECRET_KEY_ENV));
        }
        Ok(&self.secret_key)
    }
}

impl fmt::Debug for StripeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = if self.secret_key.is_empty() { "<unset>" } else { "<redacted>" };
        f.debug_struct("StripeConfig")
            .field("secret_key", &key)
            .field("api_base", &self.api_base)
            .field("api_version", &self.api_version)
            .finish()
    }
}

impl Default for StripeConfig {
    fn default() -> Self {
        Self {
            secret_key: String::new(),
            api_base: default_api_base(),
            api_version: None,
        }
    }
}

impl Validatable for StripeConfig {
    fn validate(&self) -> ConfigResult<()> {
        validate_url(&self.api_base, "api_base", self.domain_name())?;

        if let Some(ref version) = self.api_version {
            validate_required_string(version, "api_version", self.domain_name())?;
        }

        Ok(())
    }

    fn domain_name(&self) -> &'static str {
        "stripe"
    }
}

fn default_api_base() -> String {
    "https://api.stripe.com".to_string()
}
