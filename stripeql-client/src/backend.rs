//! Transport used by the service clients

use crate::config::ClientConfig;
use crate::errors::StripeError;
use crate::params::GetParams;
use crate::types::HttpMethod;
use async_trait::async_trait;
use serde_json::Value as JsonValue;
use tracing::{debug, warn};

const STRIPE_VERSION_HEADER: &str = "Stripe-Version";
const STRIPE_ACCOUNT_HEADER: &str = "Stripe-Account";

/// Performs a single API call and returns the decoded JSON body
#[async_trait]
pub trait Backend: Send + Sync {
    async fn call(
        &self,
        method: HttpMethod,
        path: &str,
        key: &str,
        params: &GetParams,
    ) -> Result<JsonValue, StripeError>;
}

/// Backend talking to the payment API over HTTPS
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    config: ClientConfig,
}

impl HttpBackend {
    pub fn new(config: ClientConfig) -> Result<Self, StripeError> {
        debug!(
            "Creating HttpBackend for {} with timeout: {}s",
            config.api_base,
            config.timeout.as_secs()
        );

        if !config.verify_ssl {
            warn!("TLS certificate verification is disabled");
        }

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(config.user_agent.as_str())
            .danger_accept_invalid_certs(!config.verify_ssl)
            .pool_max_idle_per_host(config.max_idle_per_host)
            .build()?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

#[async_trait]
impl Backend for HttpBackend {
    async fn call(
        &self,
        method: HttpMethod,
        path: &str,
        key: &str,
        params: &GetParams,
    ) -> Result<JsonValue, StripeError> {
        let url = format!("{}{}", self.config.api_base, path);
        debug!("{} {}", method, url);

        let mut request = self
            .client
            .request(method.into(), &url)
            .bearer_auth(key)
            .query(&params.query_pairs());

        if let Some(version) = &self.config.api_version {
            request = request.header(STRIPE_VERSION_HEADER, version);
        }
        if let Some(account) = &params.stripe_account {
            request = request.header(STRIPE_ACCOUNT_HEADER, account);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            debug!("{} {} failed with status {}", method, url, status);
            return Err(StripeError::from_response(status.as_u16(), &body));
        }

        Ok(serde_json::from_str(&body)?)
    }
}
