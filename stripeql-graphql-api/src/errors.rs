//! GraphQL error types

use async_graphql::ErrorExtensions;
use stripeql_client::StripeError;
use thiserror::Error;

/// Message returned when the `id` argument is absent or not a string
pub const ID_CAST_ERROR: &str = "couldn't cast id to string";

/// Errors raised while building the schema
#[derive(Error, Debug)]
pub enum GraphQLError {
    #[error("No service exposes a usable 'Get' method, the schema would be empty")]
    EmptySchema,

    #[error("Failed to build schema: {0}")]
    Schema(#[from] async_graphql::dynamic::SchemaError),
}

/// Convert a payment API error into a field error with extensions
pub fn field_error(error: &StripeError) -> async_graphql::Error {
    async_graphql::Error::new(error.to_string()).extend_with(|_, extensions| {
        extensions.set("code", error.code());
        if let Some(status) = error.status() {
            extensions.set("status", status);
        }
        if let Some(kind) = error.kind() {
            extensions.set("type", kind);
        }
    })
}

/// Result type for schema construction
pub type Result<T> = std::result::Result<T, GraphQLError>;
