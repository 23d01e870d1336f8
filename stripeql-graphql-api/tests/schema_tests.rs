//! Schema inference and resolution tests

mod common;

use async_graphql::dynamic::Schema;
use async_trait::async_trait;
use once_cell::sync::Lazy;
use common::{client_with, sample_backend, MockBackend};
use serde_json::json;
use std::sync::Arc;
use stripeql_client::{
    FieldKind, FieldShape, GetById, GetParams, Introspect, Method, ParamKind, Record, Scalar,
    Service, ServiceField, Signature, StripeError, StructShape,
};
use stripeql_config::{GraphQLConfig, ResolveMode};
use stripeql_graphql_api::{
    build_schema, build_schema_with_summary, GraphQLError, SkipReason, ID_CAST_ERROR,
};

fn forward_config() -> GraphQLConfig {
    GraphQLConfig::default()
}

fn discard_config() -> GraphQLConfig {
    GraphQLConfig {
        resolve_mode: ResolveMode::Discard,
        ..GraphQLConfig::default()
    }
}

async fn field_names(schema: &Schema, type_name: &str) -> Vec<String> {
    let query = format!(r#"{{ __type(name: "{type_name}") {{ fields {{ name }} }} }}"#);
    let data = schema.execute(query).await.data.into_json().unwrap();
    data["__type"]["fields"]
        .as_array()
        .map(|fields| {
            fields
                .iter()
                .map(|f| f["name"].as_str().unwrap().to_string())
                .collect()
        })
        .unwrap_or_default()
}

#[tokio::test]
async fn test_client_catalogue_generates_types() {
    let client = client_with(sample_backend());
    let (schema, summary) = build_schema_with_summary(&client, &forward_config()).unwrap();

    let roots: Vec<&str> = summary.root_fields().collect();
    assert!(roots.contains(&"Customers"));
    assert!(roots.contains(&"PaymentIntents"));
    assert!(!roots.contains(&"Accounts"));
    assert!(!roots.contains(&"Balance"));

    assert!(summary.skipped.contains(&("accounts", SkipReason::NoGetMethod)));
    assert!(summary.skipped.contains(&("balance", SkipReason::NoGetMethod)));
    assert!(summary.skipped.contains(&("ephemeral_keys", SkipReason::NoGetMethod)));

    let root_fields = field_names(&schema, "RootQuery").await;
    assert_eq!(root_fields.len(), summary.types.len());
    assert_eq!(root_fields.first().map(String::as_str), Some("ApplicationFees"));
}

#[tokio::test]
async fn test_generated_type_has_only_primitive_fields() {
    let client = client_with(sample_backend());
    let schema = build_schema(&client, &forward_config()).unwrap();

    let fields = field_names(&schema, "Customers").await;
    assert!(fields.contains(&"id".to_string()));
    assert!(fields.contains(&"email".to_string()));
    assert!(fields.contains(&"balance".to_string()));
    assert!(!fields.contains(&"metadata".to_string()));
    assert!(!fields.contains(&"currency".to_string()));
    assert!(!fields.contains(&"address".to_string()));
}

#[tokio::test]
async fn test_forward_returns_fetched_values() {
    let client = client_with(sample_backend());
    let schema = build_schema(&client, &forward_config()).unwrap();

    let response = schema
        .execute(r#"{ Customers(id: "cus_123") { id email balance delinquent description } }"#)
        .await;

    assert!(response.errors.is_empty(), "{:?}", response.errors);
    assert_eq!(
        response.data.into_json().unwrap(),
        json!({
            "Customers": {
                "id": "cus_123",
                "email": "jenny.rosen@example.com",
                "balance": 2500,
                "delinquent": false,
                "description": null
            }
        })
    );
}

#[tokio::test]
async fn test_forward_resolves_nulls_in_plain_fields() {
    let backend = Arc::new(MockBackend::new().with_response(
        "/v1/customers/cus_null",
        200,
        json!({
            "id": "cus_null",
            "object": "customer",
            "email": null,
            "balance": null,
            "delinquent": null,
            "currency": null,
            "metadata": null,
            "preferred_locales": null
        }),
    ));
    let client = client_with(backend);
    let schema = build_schema(&client, &forward_config()).unwrap();

    let response = schema
        .execute(r#"{ Customers(id: "cus_null") { id email balance delinquent } }"#)
        .await;

    assert!(response.errors.is_empty(), "{:?}", response.errors);
    assert_eq!(
        response.data.into_json().unwrap(),
        json!({
            "Customers": { "id": "cus_null", "email": null, "balance": 0, "delinquent": false }
        })
    );
}

#[tokio::test]
async fn test_forward_surfaces_api_errors() {
    let client = client_with(sample_backend());
    let schema = build_schema(&client, &forward_config()).unwrap();

    let response = schema.execute(r#"{ Charges(id: "ch_missing") { id } }"#).await;

    assert_eq!(response.errors.len(), 1);
    let error = &response.errors[0];
    assert!(error.message.contains("No such object"));

    let extensions = error.extensions.as_ref().unwrap();
    assert_eq!(
        extensions.get("code"),
        Some(&async_graphql::Value::from("resource_missing"))
    );
    assert_eq!(extensions.get("status"), Some(&async_graphql::Value::from(404)));
    assert_eq!(response.data.into_json().unwrap(), json!({ "Charges": null }));
}

#[tokio::test]
async fn test_missing_id_cannot_be_cast() {
    let backend = sample_backend();
    let client = client_with(backend.clone());
    let schema = build_schema(&client, &forward_config()).unwrap();

    let response = schema.execute("{ Customers { id } }").await;
    assert_eq!(response.errors.len(), 1);
    assert_eq!(response.errors[0].message, ID_CAST_ERROR);

    let response = schema.execute("{ Customers(id: null) { id } }").await;
    assert_eq!(response.errors[0].message, ID_CAST_ERROR);
    assert_eq!(backend.calls(), 0);
}

#[tokio::test]
async fn test_discard_mode_calls_and_returns_null() {
    let backend = sample_backend();
    let client = client_with(backend.clone());
    let schema = build_schema(&client, &discard_config()).unwrap();

    let response = schema
        .execute(r#"{ Customers(id: "cus_123") { id } Charges(id: "ch_missing") { id } }"#)
        .await;

    assert!(response.errors.is_empty(), "{:?}", response.errors);
    assert_eq!(
        response.data.into_json().unwrap(),
        json!({ "Customers": null, "Charges": null })
    );
    assert_eq!(backend.calls(), 2);
}

#[tokio::test]
async fn test_depth_limit_applies() {
    let client = client_with(sample_backend());
    let config = GraphQLConfig {
        max_query_depth: Some(1),
        ..GraphQLConfig::default()
    };
    let schema = build_schema(&client, &config).unwrap();

    let response = schema.execute(r#"{ Customers(id: "cus_123") { id } }"#).await;
    assert!(!response.errors.is_empty());
}

static EMPTY_SHAPE: Lazy<StructShape> = Lazy::new(|| StructShape {
    name: "Opaque",
    fields: vec![
        FieldShape { name: "metadata", kind: FieldKind::Map },
        FieldShape { name: "currency", kind: FieldKind::Named("Currency") },
    ],
});

static WIDGET_SHAPE: Lazy<StructShape> = Lazy::new(|| StructShape {
    name: "Widget",
    fields: vec![
        FieldShape { name: "id", kind: FieldKind::String },
        FieldShape { name: "weight", kind: FieldKind::Float64 },
        FieldShape { name: "tags", kind: FieldKind::List },
    ],
});

fn empty_shape() -> &'static StructShape {
    &EMPTY_SHAPE
}

fn widget_shape() -> &'static StructShape {
    &WIDGET_SHAPE
}

#[derive(Debug)]
struct Widget;

impl Record for Widget {
    fn record_shape(&self) -> &'static StructShape {
        widget_shape()
    }

    fn scalar(&self, field: &str) -> Option<Scalar> {
        match field {
            "id" => Some(Scalar::String("wid_1".into())),
            "weight" => Some(Scalar::Float(1.5)),
            _ => None,
        }
    }
}

struct FixedGetter(&'static StructShape);

#[async_trait]
impl GetById for FixedGetter {
    fn output(&self) -> &'static StructShape {
        self.0
    }

    async fn get(&self, _id: &str, _params: &GetParams) -> Result<Box<dyn Record>, StripeError> {
        Ok(Box::new(Widget))
    }
}

/// Service whose `Get` takes the given inputs and declares `shape` as its
/// output. The handler itself reports an opaque shape.
struct FakeService {
    inputs: Option<Vec<ParamKind>>,
    shape: &'static StructShape,
}

impl Service for FakeService {
    fn method(&self, name: &str) -> Option<Method> {
        let inputs = self.inputs.clone()?;
        (name == "Get").then(|| {
            Method::new(
                "Get",
                Signature {
                    inputs,
                    output: Some(self.shape),
                },
            )
            .with_handler(Arc::new(FixedGetter(empty_shape())))
        })
    }
}

/// Service whose `Get` signature leaves the output undeclared
struct UndeclaredService;

impl Service for UndeclaredService {
    fn method(&self, name: &str) -> Option<Method> {
        (name == "Get").then(|| {
            Method::new(
                "Get",
                Signature {
                    inputs: by_id_inputs().unwrap_or_default(),
                    output: None,
                },
            )
            .with_handler(Arc::new(FixedGetter(widget_shape())))
        })
    }
}

struct FakeClient {
    services: Vec<(&'static str, Box<dyn Service>)>,
}

impl Introspect for FakeClient {
    fn fields(&self) -> Vec<ServiceField<'_>> {
        self.services
            .iter()
            .map(|(name, service)| ServiceField {
                name: *name,
                service: service.as_ref(),
            })
            .collect()
    }
}

fn by_id_inputs() -> Option<Vec<ParamKind>> {
    Some(vec![ParamKind::Receiver, ParamKind::Id, ParamKind::Params("WidgetParams")])
}

fn fake(
    name: &'static str,
    inputs: Option<Vec<ParamKind>>,
    shape: &'static StructShape,
) -> (&'static str, Box<dyn Service>) {
    (name, Box::new(FakeService { inputs, shape }))
}

#[tokio::test]
async fn test_skip_rules() {
    let client = FakeClient {
        services: vec![
            fake("no_get", None, widget_shape()),
            fake(
                "two_args",
                Some(vec![ParamKind::Receiver, ParamKind::Params("WidgetParams")]),
                widget_shape(),
            ),
            fake("opaque_things", by_id_inputs(), empty_shape()),
            fake("widget_parts", by_id_inputs(), widget_shape()),
        ],
    };

    let (schema, summary) = build_schema_with_summary(&client, &forward_config()).unwrap();

    // The handlers all report the opaque shape; the declared output decides
    assert_eq!(summary.types.len(), 1);
    assert_eq!(summary.types[0].type_name, "WidgetParts");
    assert_eq!(summary.types[0].root_field, "WidgetParts");
    assert_eq!(summary.types[0].fields, vec!["id", "weight"]);
    assert_eq!(
        summary.skipped,
        vec![
            ("no_get", SkipReason::NoGetMethod),
            ("two_args", SkipReason::NoGetMethod),
            ("opaque_things", SkipReason::NoPrimitiveFields),
        ]
    );

    let response = schema.execute(r#"{ WidgetParts(id: "wid_1") { id weight } }"#).await;
    assert_eq!(
        response.data.into_json().unwrap(),
        json!({ "WidgetParts": { "id": "wid_1", "weight": 1.5 } })
    );
}

#[test]
fn test_undeclared_output_falls_back_to_handler() {
    let client = FakeClient {
        services: vec![("widgets", Box::new(UndeclaredService) as Box<dyn Service>)],
    };

    let (_, summary) = build_schema_with_summary(&client, &forward_config()).unwrap();
    assert_eq!(summary.types.len(), 1);
    assert_eq!(summary.types[0].root_field, "Widgets");
    assert_eq!(summary.types[0].fields, vec!["id", "weight"]);
}

#[test]
fn test_empty_schema_is_an_error() {
    let client = FakeClient {
        services: vec![fake("opaque_things", by_id_inputs(), empty_shape())],
    };

    let err = build_schema(&client, &forward_config()).unwrap_err();
    assert!(matches!(err, GraphQLError::EmptySchema));
}
