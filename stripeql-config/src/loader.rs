//! Configuration loading and environment variable handling

use crate::domains::StripeQlConfig;
use crate::error::{ConfigError, ConfigResult};
use std::path::Path;
use std::str::FromStr;

/// Unprefixed variable holding the payment API secret key
pub const SECRET_KEY_ENV: &str = "STRIPE_SECRET_KEY";

/// Configuration loader with environment variable support
pub struct ConfigLoader {
    /// Environment variable prefix
    prefix: String,
}

impl ConfigLoader {
    /// Create a new config loader with default prefix
    pub fn new() -> Self {
        Self {
            prefix: "STRIPEQL".to_string(),
        }
    }

    /// Create a new config loader with custom prefix
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Load configuration from a YAML file with environment overrides
    pub fn from_file(&self, path: impl AsRef<Path>) -> ConfigResult<StripeQlConfig> {
        let content = std::fs::read_to_string(path)?;
        let mut config: StripeQlConfig = serde_yaml::from_str(&content)?;

        self.apply_env_overrides(&mut config)?;
        config.validate_all()?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env(&self) -> ConfigResult<StripeQlConfig> {
        let mut config = StripeQlConfig::default();
        self.apply_env_overrides(&mut config)?;
        config.validate_all()?;
        Ok(config)
    }

    /// Load configuration with fallback chain
    pub fn load(&self, config_path: Option<impl AsRef<Path>>) -> ConfigResult<StripeQlConfig> {
        match config_path {
            Some(path) => self.from_file(path),
            None => self.from_env(),
        }
    }

    /// Apply environment variable overrides to configuration
    fn apply_env_overrides(&self, config: &mut StripeQlConfig) -> ConfigResult<()> {
        self.apply_server_overrides(&mut config.server)?;
        self.apply_graphql_overrides(&mut config.graphql)?;
        self.apply_stripe_overrides(&mut config.stripe)?;
        self.apply_http_overrides(&mut config.http)?;
        self.apply_logging_overrides(&mut config.logging)?;
        Ok(())
    }

    /// Apply server config overrides
    fn apply_server_overrides(
        &self,
        config: &mut crate::domains::server::ServerConfig,
    ) -> ConfigResult<()> {
        if let Ok(bind) = self.get_env_var("SERVER_BIND_ADDRESS") {
            config.bind_address = bind;
        }

        if let Ok(port) = self.get_env_var("SERVER_PORT") {
            config.port = port
                .parse()
                .map_err(|e| ConfigError::EnvError(format!("Invalid SERVER_PORT: {}", e)))?;
        }

        if let Ok(cors) = self.get_env_var("SERVER_ENABLE_CORS") {
            config.enable_cors = cors
                .parse()
                .map_err(|e| ConfigError::EnvError(format!("Invalid SERVER_ENABLE_CORS: {}", e)))?;
        }

        Ok(())
    }

    /// Apply GraphQL config overrides
    fn apply_graphql_overrides(
        &self,
        config: &mut crate::domains::graphql::GraphQLConfig,
    ) -> ConfigResult<()> {
        if let Ok(endpoint) = self.get_env_var("GRAPHQL_ENDPOINT") {
            config.endpoint = endpoint;
        }

        if let Ok(graphiql) = self.get_env_var("GRAPHQL_ENABLE_GRAPHIQL") {
            config.enable_graphiql = graphiql.parse().map_err(|e| {
                ConfigError::EnvError(format!("Invalid GRAPHQL_ENABLE_GRAPHIQL: {}", e))
            })?;
        }

        if let Ok(mode) = self.get_env_var("GRAPHQL_RESOLVE_MODE") {
            config.resolve_mode = crate::domains::graphql::ResolveMode::from_str(&mode)
                .map_err(|_| ConfigError::EnvError(format!("Invalid GRAPHQL_RESOLVE_MODE: {}", mode)))?;
        }

        Ok(())
    }

    /// Apply payment API overrides.
    ///
    /// The secret key is read from the unprefixed `STRIPE_SECRET_KEY`.
    fn apply_stripe_overrides(
        &self,
        config: &mut crate::domains::stripe::StripeConfig,
    ) -> ConfigResult<()> {
        if let Ok(key) = std::env::var(SECRET_KEY_ENV) {
            config.secret_key = key;
        }

        if let Ok(api_base) = self.get_env_var("STRIPE_API_BASE") {
            config.api_base = api_base;
        }

        if let Ok(version) = self.get_env_var("STRIPE_API_VERSION") {
            config.api_version = Some(version);
        }

        Ok(())
    }

    /// Apply HTTP config overrides
    fn apply_http_overrides(
        &self,
        config: &mut crate::domains::http::HttpConfig,
    ) -> ConfigResult<()> {
        if let Ok(timeout) = self.get_env_var("HTTP_TIMEOUT") {
            let seconds: u64 = timeout
                .parse()
                .map_err(|e| ConfigError::EnvError(format!("Invalid HTTP_TIMEOUT: {}", e)))?;
            config.timeout = std::time::Duration::from_secs(seconds);
        }

        if let Ok(user_agent) = self.get_env_var("HTTP_USER_AGENT") {
            config.user_agent = user_agent;
        }

        if let Ok(verify_ssl) = self.get_env_var("HTTP_VERIFY_SSL") {
            config.verify_ssl = verify_ssl
                .parse()
                .map_err(|e| ConfigError::EnvError(format!("Invalid HTTP_VERIFY_SSL: {}", e)))?;
        }

        Ok(())
    }

    /// Apply logging config overrides
    fn apply_logging_overrides(
        &self,
        config: &mut crate::domains::logging::LoggingConfig,
    ) -> ConfigResult<()> {
        if let Ok(log_level) = self.get_env_var("LOG_LEVEL") {
            config.level = crate::domains::logging::LogLevel::from_str(&log_level)
                .map_err(|_| ConfigError::EnvError(format!("Invalid LOG_LEVEL: {}", log_level)))?;
        }

        if let Ok(format) = self.get_env_var("LOG_FORMAT") {
            config.format = crate::domains::logging::LogFormat::from_str(&format)
                .map_err(|_| ConfigError::EnvError(format!("Invalid LOG_FORMAT: {}", format)))?;
        }

        Ok(())
    }

    /// Get environment variable with prefix
    fn get_env_var(&self, name: &str) -> Result<String, std::env::VarError> {
        std::env::var(format!("{}_{}", self.prefix, name))
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
