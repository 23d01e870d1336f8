//! Resolvers attached to the generated schema

use async_graphql::dynamic::{FieldFuture, FieldValue, ResolverContext};
use async_graphql::{Number, Value};
use std::sync::Arc;
use stripeql_client::{GetById, GetParams, Record, Scalar};
use stripeql_config::ResolveMode;
use tracing::debug;

use crate::errors::{field_error, ID_CAST_ERROR};

/// Value carried from a root field to its child fields
pub type ResolvedRecord = Box<dyn Record>;

/// Convert a primitive field value to a GraphQL value
pub fn scalar_value(scalar: Scalar) -> Value {
    match scalar {
        Scalar::String(s) => Value::String(s),
        Scalar::Int(i) => Value::Number(i.into()),
        Scalar::Boolean(b) => Value::Boolean(b),
        // Non-finite floats have no JSON form
        Scalar::Float(f) => Number::from_f64(f).map(Value::Number).unwrap_or(Value::Null),
    }
}

/// Fetch a resource by id according to `mode`.
///
/// In discard mode the call is still made but its outcome is dropped.
pub async fn resolve_by_id<'a>(
    handler: &dyn GetById,
    id: &str,
    mode: ResolveMode,
) -> async_graphql::Result<Option<FieldValue<'a>>> {
    let outcome = handler.get(id, &GetParams::default()).await;

    match mode {
        ResolveMode::Forward => match outcome {
            Ok(record) => Ok(Some(FieldValue::owned_any(record))),
            Err(e) => {
                debug!("Fetching {} '{}' failed: {}", handler.output().name, id, e);
                Err(field_error(&e))
            }
        },
        ResolveMode::Discard => {
            debug!(
                "Discarding result of {} '{}' (ok: {})",
                handler.output().name,
                id,
                outcome.is_ok()
            );
            Ok(None)
        }
    }
}

/// Resolver for a root field taking an `id` argument
pub fn root_resolver(
    handler: Arc<dyn GetById>,
    mode: ResolveMode,
) -> impl for<'a> Fn(ResolverContext<'a>) -> FieldFuture<'a> + Send + Sync + 'static {
    move |ctx: ResolverContext| {
        let handler = handler.clone();
        FieldFuture::new(async move {
            let id = ctx
                .args
                .get("id")
                .and_then(|value| value.string().ok().map(str::to_owned))
                .ok_or_else(|| async_graphql::Error::new(ID_CAST_ERROR))?;

            resolve_by_id(handler.as_ref(), &id, mode).await
        })
    }
}

/// Resolver reading one primitive field off the parent record
pub fn field_resolver(
    wire_name: &'static str,
) -> impl for<'a> Fn(ResolverContext<'a>) -> FieldFuture<'a> + Send + Sync + 'static {
    move |ctx: ResolverContext| {
        FieldFuture::new(async move {
            let record = ctx.parent_value.try_downcast_ref::<ResolvedRecord>()?;
            Ok(record
                .scalar(wire_name)
                .map(scalar_value)
                .map(FieldValue::value))
        })
    }
}
