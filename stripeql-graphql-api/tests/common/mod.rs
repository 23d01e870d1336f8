//! Shared fixtures for GraphQL API tests

#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::{json, Value as JsonValue};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use stripeql_client::{Backend, Client, GetParams, HttpMethod, StripeError};

/// Backend answering from a table of canned responses keyed by path
#[derive(Default)]
pub struct MockBackend {
    responses: HashMap<String, (u16, JsonValue)>,
    calls: AtomicUsize,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_response(mut self, path: &str, status: u16, body: JsonValue) -> Self {
        self.responses.insert(path.to_string(), (status, body));
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Backend for MockBackend {
    async fn call(
        &self,
        _method: HttpMethod,
        path: &str,
        _key: &str,
        _params: &GetParams,
    ) -> Result<JsonValue, StripeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        match self.responses.get(path) {
            Some((status, body)) if (200..300).contains(status) => Ok(body.clone()),
            Some((status, body)) => Err(StripeError::from_response(*status, &body.to_string())),
            None => Err(StripeError::from_response(
                404,
                &json!({"error": {"type": "invalid_request_error", "code": "resource_missing",
                    "message": format!("No such object: {path}")}})
                .to_string(),
            )),
        }
    }
}

/// Backend serving one customer and one payment intent
pub fn sample_backend() -> Arc<MockBackend> {
    Arc::new(
        MockBackend::new()
            .with_response(
                "/v1/customers/cus_123",
                200,
                json!({
                    "id": "cus_123",
                    "object": "customer",
                    "email": "jenny.rosen@example.com",
                    "balance": 2500,
                    "delinquent": false,
                    "currency": "usd",
                    "metadata": {"order": "6735"}
                }),
            )
            .with_response(
                "/v1/payment_intents/pi_1",
                200,
                json!({"id": "pi_1", "object": "payment_intent", "amount": 1099, "livemode": false}),
            ),
    )
}

pub fn client_with(backend: Arc<MockBackend>) -> Client {
    let backend: Arc<dyn Backend> = backend;
    Client::new("sk_test_123", Some(backend)).unwrap()
}
