//! End-to-end tests for the stripeql server
//!
//! Each test starts a mock payment API, boots a full server against it on an
//! ephemeral port and talks to the GraphQL endpoint over real HTTP.

use anyhow::Result;
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::time::Duration;
use stripeql_config::{ResolveMode, StripeQlConfig};
use stripeql_server::Server;
use tokio::{net::TcpListener, sync::oneshot, task::JoinHandle};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Helper to suppress logging output during test execution
fn init_quiet_logging() {
    use std::sync::Once;
    static INIT: Once = Once::new();

    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_target(false)
            .without_time()
            .try_init();
    });
}

/// A running server and the handle to stop it
struct TestServer {
    addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
    handle: JoinHandle<Result<()>>,
}

impl TestServer {
    async fn start(config: StripeQlConfig) -> Result<Self> {
        init_quiet_logging();

        let server = Server::new(config)?;
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        let (tx, rx) = oneshot::channel();
        let handle = tokio::spawn(server.serve(listener, async move {
            let _ = rx.await;
        }));

        Ok(Self {
            addr,
            shutdown: Some(tx),
            handle,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    async fn stop(mut self) -> Result<()> {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        tokio::time::timeout(Duration::from_secs(5), self.handle).await???;
        Ok(())
    }
}

fn config_for(api: &MockServer) -> StripeQlConfig {
    let mut config = StripeQlConfig::default();
    config.server.bind_address = "127.0.0.1".to_string();
    config.server.port = 0;
    config.server.shutdown_timeout = Duration::from_secs(1);
    config.stripe.secret_key = "sk_test_e2e".to_string();
    config.stripe.api_base = api.uri();
    config
}

async fn mount_customer(api: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/v1/customers/cus_e2e"))
        .and(header("authorization", "Bearer sk_test_e2e"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "cus_e2e",
            "object": "customer",
            "email": "e2e@example.com",
            "balance": 0,
            "delinquent": false,
            "metadata": {}
        })))
        .mount(api)
        .await;
}

#[tokio::test]
async fn test_post_query_is_forwarded_to_api() -> Result<()> {
    let api = MockServer::start().await;
    mount_customer(&api).await;

    let server = TestServer::start(config_for(&api)).await?;
    let client = reqwest::Client::new();

    let response: Value = client
        .post(server.url("/graphql"))
        .json(&json!({ "query": r#"{ Customers(id: "cus_e2e") { id email delinquent } }"# }))
        .send()
        .await?
        .json()
        .await?;

    assert_eq!(
        response["data"]["Customers"],
        json!({ "id": "cus_e2e", "email": "e2e@example.com", "delinquent": false })
    );

    server.stop().await
}

#[tokio::test]
async fn test_get_query_and_graphiql() -> Result<()> {
    let api = MockServer::start().await;
    mount_customer(&api).await;

    let server = TestServer::start(config_for(&api)).await?;
    let client = reqwest::Client::new();

    let response: Value = client
        .get(server.url("/graphql"))
        .query(&[("query", r#"{ Customers(id: "cus_e2e") { email } }"#)])
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(response["data"]["Customers"]["email"], "e2e@example.com");

    let page = client
        .get(server.url("/graphql"))
        .header("accept", "text/html")
        .send()
        .await?;
    assert_eq!(page.status(), 200);
    assert!(page.text().await?.to_lowercase().contains("graphiql"));

    server.stop().await
}

#[tokio::test]
async fn test_api_errors_surface_as_field_errors() -> Result<()> {
    let api = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/charges/ch_gone"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": {
                "type": "invalid_request_error",
                "code": "resource_missing",
                "message": "No such charge: 'ch_gone'"
            }
        })))
        .mount(&api)
        .await;

    let server = TestServer::start(config_for(&api)).await?;

    let response: Value = reqwest::Client::new()
        .post(server.url("/graphql"))
        .json(&json!({ "query": r#"{ Charges(id: "ch_gone") { id amount } }"# }))
        .send()
        .await?
        .json()
        .await?;

    assert!(response["data"]["Charges"].is_null());
    assert_eq!(response["errors"][0]["extensions"]["code"], "resource_missing");
    assert_eq!(response["errors"][0]["extensions"]["status"], 404);

    server.stop().await
}

#[tokio::test]
async fn test_discard_mode_returns_null() -> Result<()> {
    let api = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/customers/cus_e2e"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "cus_e2e"})))
        .expect(1)
        .mount(&api)
        .await;

    let mut config = config_for(&api);
    config.stripe.secret_key.clear();
    config.graphql.resolve_mode = ResolveMode::Discard;

    let server = TestServer::start(config).await?;

    let response: Value = reqwest::Client::new()
        .post(server.url("/graphql"))
        .json(&json!({ "query": r#"{ Customers(id: "cus_e2e") { id } }"# }))
        .send()
        .await?
        .json()
        .await?;

    assert_eq!(response, json!({ "data": { "Customers": null } }));

    server.stop().await
}

#[tokio::test]
async fn test_root_and_sdl_endpoints() -> Result<()> {
    let api = MockServer::start().await;
    let server = TestServer::start(config_for(&api)).await?;
    let client = reqwest::Client::new();

    let info: Value = client.get(server.url("/")).send().await?.json().await?;
    assert_eq!(info["service"], "stripeql");
    assert_eq!(info["endpoints"]["graphql"], "/graphql");

    let sdl: Value = client.get(server.url("/graphql/sdl")).send().await?.json().await?;
    let sdl = sdl["schema"].as_str().unwrap_or_default();
    assert!(sdl.contains("RootQuery"));
    assert!(sdl.contains("PaymentIntents"));

    server.stop().await
}
