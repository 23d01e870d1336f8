//! HTTP server configuration for the GraphQL endpoint

use crate::error::ConfigResult;
use crate::validation::{validate_port_range, validate_positive, validate_required_string, validate_url, Validatable};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server bind address
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Whether to wrap requests in a tracing span
    #[serde(default = "crate::domains::utils::default_true")]
    pub enable_tracing: bool,

    /// Whether to attach the CORS layer
    pub enable_cors: bool,

    /// CORS configuration
    #[serde(default)]
    pub cors: CorsConfig,

    /// Grace period for in-flight requests on shutdown
    #[serde(
        with = "crate::domains::utils::duration_secs",
        default = "default_shutdown_timeout"
    )]
    pub shutdown_timeout: Duration,
}

/// CORS configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    /// Allowed origins
    #[serde(default = "default_cors_origins")]
    pub allowed_origins: Vec<String>,

    /// Allowed methods
    #[serde(default = "default_cors_methods")]
    pub allowed_methods: Vec<String>,

    /// Allowed headers
    #[serde(default = "default_cors_headers")]
    pub allowed_headers: Vec<String>,

    /// Max age for preflight requests
    #[serde(with = "crate::domains::utils::duration_secs", default = "default_cors_max_age")]
    pub max_age: Duration,
}

impl ServerConfig {
    /// Socket address string in `host:port` form
    pub fn socket_address(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            port: default_port(),
            enable_tracing: true,
            enable_cors: false,
            cors: CorsConfig::default(),
            shutdown_timeout: default_shutdown_timeout(),
        }
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: default_cors_origins(),
            allowed_methods: default_cors_methods(),
            allowed_headers: default_cors_headers(),
            max_age: default_cors_max_age(),
        }
    }
}

impl Validatable for ServerConfig {
    fn validate(&self) -> ConfigResult<()> {
        validate_required_string(&self.bind_address, "bind_address", self.domain_name())?;
        validate_port_range(self.port, "port", self.domain_name())?;
        validate_positive(self.shutdown_timeout.as_secs(), "shutdown_timeout", self.domain_name())?;

        if self.enable_cors {
            self.cors.validate()?;
        }

        Ok(())
    }

    fn domain_name(&self) -> &'static str {
        "server"
    }
}

impl Validatable for CorsConfig {
    fn validate(&self) -> ConfigResult<()> {
        for origin in &self.allowed_origins {
            if origin != "*" && !origin.is_empty() {
                validate_url(origin, "allowed_origins", self.domain_name())?;
            }
        }

        // The endpoint only answers queries
        let valid_methods = ["GET", "POST", "OPTIONS"];
        for method in &self.allowed_methods {
            if !valid_methods.contains(&method.as_str()) {
                return Err(self.validation_error(format!("Invalid HTTP method in allowed_methods: {}", method)));
            }
        }

        validate_positive(self.max_age.as_secs(), "max_age", self.domain_name())?;

        Ok(())
    }

    fn domain_name(&self) -> &'static str {
        "server.cors"
    }
}

// Default value functions
fn default_bind_address() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_shutdown_timeout() -> Duration {
    Duration::from_secs(30)
}

fn default_cors_origins() -> Vec<String> {
    vec!["*".to_string()]
}

fn default_cors_methods() -> Vec<String> {
    vec!["GET".to_string(), "POST".to_string(), "OPTIONS".to_string()]
}

fn default_cors_headers() -> Vec<String> {
    vec!["Content-Type".to_string(), "Accept".to_string()]
}

fn default_cors_max_age() -> Duration {
    Duration::from_secs(3600)
}
