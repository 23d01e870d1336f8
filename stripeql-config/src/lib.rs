//! Domain-driven configuration management for stripeql
//!
//! This crate provides modular configuration split by functional domains,
//! with validation, defaults, and environment variable support.

pub mod error;
pub mod loader;
pub mod validation;

// Domain-specific configuration modules
pub mod domains;

// Re-export main types
pub use error::{ConfigError, ConfigResult};
pub use loader::{ConfigLoader, SECRET_KEY_ENV};

// Re-export domain configurations
pub use domains::{
    graphql::{GraphQLConfig, ResolveMode},
    http::HttpConfig,
    logging::LoggingConfig,
    server::ServerConfig,
    stripe::StripeConfig,
    StripeQlConfig,
};

// Re-export utilities
pub use domains::utils::duration_secs;
