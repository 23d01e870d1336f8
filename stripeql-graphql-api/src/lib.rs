//! GraphQL API for stripeql
//!
//! The schema is not declared statically. It is inferred once at startup from
//! the payment client's services: every service whose `Get` method takes an id
//! becomes a root field returning an object built from the primitive fields of
//! the fetched resource.

pub mod errors;
pub mod handlers;
pub mod resolvers;
pub mod schema;

// Re-export main components
pub use errors::{field_error, GraphQLError, ID_CAST_ERROR};
pub use handlers::{graphql_get, graphql_post, graphql_routes, graphql_sdl, GraphQLState};
pub use schema::{
    build_schema, build_schema_with_summary, configure_schema, GeneratedType, SchemaSummary,
    SkipReason, QUERY_TYPE_NAME,
};
