//! Errors raised while loading or validating stripeql configuration

use thiserror::Error;

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// The `--config` file could not be opened
    #[error("Failed to read config file: {0}")]
    FileReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] serde_yaml::Error),

    /// A `STRIPEQL_*` override held a value of the wrong type
    #[error("Environment variable error: {0}")]
    EnvError(String),

    /// The API credential is required but was not provided
    #[error("Please set the {0} environment variable")]
    MissingSecretKey(&'static str),

    /// A domain rejected one of its values during validation
    #[error("Domain configuration error in {domain}: {message}")]
    DomainError { domain: String, message: String },
}
