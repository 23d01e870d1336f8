//! Schema inference from the client's introspection surface

use async_graphql::dynamic::{Field, InputValue, Object, Schema, SchemaBuilder, TypeRef};
use convert_case::{Case, Casing};
use std::fmt;
use stripeql_client::{Introspect, ScalarKind, StructShape};
use stripeql_config::GraphQLConfig;
use tracing::{debug, warn};

use crate::errors::{GraphQLError, Result};
use crate::resolvers::{field_resolver, root_resolver};

/// Name of the root query type
pub const QUERY_TYPE_NAME: &str = "RootQuery";

/// Arity of `Get(id, params)` counting the receiver
const GET_BY_ID_ARITY: usize = 3;

/// A type generated from a service's `Get` output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedType {
    pub service: &'static str,
    pub type_name: String,
    pub root_field: String,
    pub fields: Vec<&'static str>,
}

/// Why a service did not produce a type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// No `Get` method, or one not shaped `Get(id, params)`
    NoGetMethod,
    /// The returned struct has no primitive fields
    NoPrimitiveFields,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NoGetMethod => f.write_str("no usable 'Get' method"),
            SkipReason::NoPrimitiveFields => f.write_str("no primitive fields"),
        }
    }
}

/// Outcome of schema inference, for startup reporting
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaSummary {
    pub types: Vec<GeneratedType>,
    pub skipped: Vec<(&'static str, SkipReason)>,
}

impl SchemaSummary {
    pub fn root_fields(&self) -> impl Iterator<Item = &str> {
        self.types.iter().map(|t| t.root_field.as_str())
    }
}

/// GraphQL name for a service, e.g. `payment_intents` -> `PaymentIntents`.
/// Used for both the object type and its root query field.
pub fn type_name(service: &str) -> String {
    service.to_case(Case::Pascal)
}

fn scalar_type(kind: ScalarKind) -> &'static str {
    match kind {
        ScalarKind::String => TypeRef::STRING,
        ScalarKind::Int => TypeRef::INT,
        ScalarKind::Boolean => TypeRef::BOOLEAN,
        ScalarKind::Float => TypeRef::FLOAT,
    }
}

/// Build the object type for a resource shape. `None` when nothing projects.
fn object_type(name: &str, shape: &'static StructShape) -> Option<(Object, Vec<&'static str>)> {
    let mut object = Object::new(name);
    let mut fields = Vec::new();

    for (field, kind) in shape.scalar_fields() {
        object = object.field(Field::new(
            field.name,
            TypeRef::named(scalar_type(kind)),
            field_resolver(field.name),
        ));
        fields.push(field.name);
    }

    if fields.is_empty() {
        None
    } else {
        Some((object, fields))
    }
}

/// Apply query limits from configuration
pub fn configure_schema(mut builder: SchemaBuilder, config: &GraphQLConfig) -> SchemaBuilder {
    if let Some(depth) = config.max_query_depth {
        builder = builder.limit_depth(depth);
    }

    if let Some(complexity) = config.max_query_complexity {
        builder = builder.limit_complexity(complexity);
    }

    if !config.enable_introspection {
        builder = builder.disable_introspection();
    }

    builder
}

/// Infer the schema, also reporting what was generated and skipped
pub fn build_schema_with_summary(
    client: &impl Introspect,
    config: &GraphQLConfig,
) -> Result<(Schema, SchemaSummary)> {
    let mut query = Object::new(QUERY_TYPE_NAME);
    let mut objects = Vec::new();
    let mut summary = SchemaSummary::default();

    for member in client.fields() {
        let Some(method) = member
            .service
            .method("Get")
            .filter(|method| method.signature.arity() == GET_BY_ID_ARITY)
        else {
            warn!("could not get 'Get' method of: {}", member.name);
            summary.skipped.push((member.name, SkipReason::NoGetMethod));
            continue;
        };

        let Some(handler) = method.by_id() else {
            warn!("'Get' method of {} cannot be invoked by id", member.name);
            summary.skipped.push((member.name, SkipReason::NoGetMethod));
            continue;
        };

        // The declared return type wins over what the handler reports
        let output = method.signature.output.unwrap_or_else(|| handler.output());

        let type_name = type_name(member.name);
        let Some((object, fields)) = object_type(&type_name, output) else {
            debug!("Skipping {}: no primitive fields", member.name);
            summary.skipped.push((member.name, SkipReason::NoPrimitiveFields));
            continue;
        };

        let root_field = type_name.clone();
        query = query.field(
            Field::new(
                root_field.as_str(),
                TypeRef::named(type_name.as_str()),
                root_resolver(handler, config.resolve_mode),
            )
            .argument(InputValue::new("id", TypeRef::named(TypeRef::STRING))),
        );

        debug!("Generated type {} with {} fields", type_name, fields.len());
        objects.push(object);
        summary.types.push(GeneratedType {
            service: member.name,
            type_name,
            root_field,
            fields,
        });
    }

    if summary.types.is_empty() {
        return Err(GraphQLError::EmptySchema);
    }

    let mut builder = Schema::build(QUERY_TYPE_NAME, None, None).register(query);
    for object in objects {
        builder = builder.register(object);
    }

    let schema = configure_schema(builder, config).finish()?;
    Ok((schema, summary))
}

/// Infer the GraphQL schema from the client's services
pub fn build_schema(client: &impl Introspect, config: &GraphQLConfig) -> Result<Schema> {
    build_schema_with_summary(client, config).map(|(schema, _)| schema)
}
