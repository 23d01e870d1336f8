//! Payment API error types

use serde::Deserialize;

/// Error type for payment API operations
#[derive(Debug, thiserror::Error)]
pub enum StripeError {
    /// The API answered with an error envelope
    #[error("{kind} ({status}): {message}")]
    Api {
        status: u16,
        kind: String,
        code: Option<String>,
        message: String,
        param: Option<String>,
    },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl StripeError {
    /// Stable machine-readable code
    pub fn code(&self) -> &str {
        match self {
            StripeError::Api { code: Some(code), .. } => code,
            StripeError::Api { kind, .. } => kind,
            StripeError::Network(_) => "network_error",
            StripeError::Decode(_) => "decode_error",
            StripeError::InvalidRequest(_) => "invalid_request",
            StripeError::Config(_) => "config_error",
        }
    }

    /// HTTP status reported by the API, if the error came from it
    pub fn status(&self) -> Option<u16> {
        match self {
            StripeError::Api { status, .. } => Some(*status),
            StripeError::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Error type reported by the API
    pub fn kind(&self) -> Option<&str> {
        match self {
            StripeError::Api { kind, .. } => Some(kind),
            _ => None,
        }
    }

    /// Build an error from a non-success response body.
    ///
    /// Bodies that are not an error envelope still produce an `Api` error
    /// carrying the raw text.
    pub fn from_response(status: u16, body: &str) -> Self {
        match serde_json::from_str::<ErrorEnvelope>(body) {
            Ok(envelope) => StripeError::Api {
                status,
                kind: envelope.error.kind,
                code: envelope.error.code,
                message: envelope.error.message.unwrap_or_default(),
                param: envelope.error.param,
            },
            Err(_) => StripeError::Api {
                status,
                kind: "api_error".to_string(),
                code: None,
                message: body.to_string(),
                param: None,
            },
        }
    }
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(rename = "type")]
    kind: String,
    code: Option<String>,
    message: Option<String>,
    param: Option<String>,
}
