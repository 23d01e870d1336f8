//! Server startup and shutdown logic

use anyhow::{Context, Result};
use async_graphql::dynamic::Schema;
use axum::{
    http::{HeaderName, HeaderValue, Method},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value as JsonValue};
use std::future::{Future, IntoFuture};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::Notify;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use stripeql_client::{Backend, Client, ClientConfig, HttpBackend};
use stripeql_config::domains::server::CorsConfig;
use stripeql_config::{ResolveMode, StripeQlConfig};
use stripeql_graphql_api::{build_schema_with_summary, graphql_routes, GraphQLState, SchemaSummary};

/// Server application struct
pub struct Server {
    config: StripeQlConfig,
    schema: Schema,
    summary: SchemaSummary,
}

impl Server {
    /// Create a server talking to the payment API over HTTP
    pub fn new(config: StripeQlConfig) -> Result<Self> {
        let client_config = ClientConfig::from_config(&config.stripe, &config.http);
        let backend: Arc<dyn Backend> = Arc::new(HttpBackend::new(client_config)?);
        Self::with_backend(config, backend)
    }

    /// Create a server using the given backend
    pub fn with_backend(config: StripeQlConfig, backend: Arc<dyn Backend>) -> Result<Self> {
        let mode = config.graphql.resolve_mode;
        let key = config.stripe.require_secret_key(mode)?;

        if mode == ResolveMode::Discard {
            tracing::warn!("Running in discard mode: API results are dropped and every field resolves to null");
        }

        let client = Client::new(key, Some(backend))?;
        let (schema, summary) = build_schema_with_summary(&client, &config.graphql)
            .context("Failed to generate GraphQL schema")?;

        Ok(Self {
            config,
            schema,
            summary,
        })
    }

    pub fn summary(&self) -> &SchemaSummary {
        &self.summary
    }

    /// Build the complete application router
    pub fn build_app(&self) -> Router {
        let state = GraphQLState::new(self.schema.clone(), self.config.graphql.clone());
        let info = service_info(&self.config, &self.summary);

        let mut app = graphql_routes(state).route(
            "/",
            get(move || {
                let info = info.clone();
                async move { Json(info) }
            }),
        );

        if self.config.server.enable_tracing {
            app = app.layer(TraceLayer::new_for_http());
        }

        if self.config.server.enable_cors {
            app = app.layer(cors_layer(&self.config.server.cors));
        }

        app
    }

    /// Bind the configured address and serve until Ctrl-C or SIGTERM
    pub async fn start(self) -> Result<()> {
        let addr = self.config.server.socket_address();
        let listener = TcpListener::bind(&addr)
            .await
            .with_context(|| format!("Failed to bind {}", addr))?;

        self.serve(listener, shutdown_signal()).await
    }

    /// Serve on `listener` until `shutdown` completes
    pub async fn serve(
        self,
        listener: TcpListener,
        shutdown: impl Future<Output = ()> + Send + 'static,
    ) -> Result<()> {
        let app = self.build_app();
        let addr = listener.local_addr()?;
        let grace = self.config.server.shutdown_timeout;

        self.log_config_summary();
        tracing::info!("Server listening on {}", addr);

        let stopping = Arc::new(Notify::new());
        let signal = {
            let stopping = stopping.clone();
            async move {
                shutdown.await;
                stopping.notify_one();
            }
        };

        let server = axum::serve(listener, app)
            .with_graceful_shutdown(signal)
            .into_future();

        tokio::select! {
            result = server => result?,
            _ = drain_deadline(stopping, grace) => {
                tracing::warn!("Connections still open after {:?}, shutting down anyway", grace);
            }
        }

        tracing::info!("Server shutdown complete");
        Ok(())
    }

    /// Log configuration summary
    fn log_config_summary(&self) {
        let graphql = &self.config.graphql;

        tracing::info!("=== stripeql Server Configuration ===");
        tracing::info!("Bind Address: {}", self.config.server.socket_address());
        tracing::info!("GraphQL Endpoint: {}", graphql.endpoint);
        tracing::info!("Resolve Mode: {}", graphql.resolve_mode);
        tracing::info!("API Base: {}", self.config.stripe.api_base);
        tracing::info!("GraphiQL: {}", if graphql.enable_graphiql { "Enabled" } else { "Disabled" });
        tracing::info!("CORS: {}", if self.config.server.enable_cors { "Enabled" } else { "Disabled" });
        tracing::info!("Tracing: {}", if self.config.server.enable_tracing { "Enabled" } else { "Disabled" });
        tracing::info!(
            "Generated {} types, skipped {} services",
            self.summary.types.len(),
            self.summary.skipped.len()
        );
        for generated in &self.summary.types {
            tracing::debug!(
                "  {} -> {} ({} fields)",
                generated.root_field,
                generated.type_name,
                generated.fields.len()
            );
        }
        for (service, reason) in &self.summary.skipped {
            tracing::debug!("  skipped {}: {}", service, reason);
        }
        tracing::info!("=====================================");
    }
}

/// Completes `grace` after shutdown has been requested
async fn drain_deadline(stopping: Arc<Notify>, grace: Duration) {
    stopping.notified().await;
    tokio::time::sleep(grace).await;
}

/// Body served on `/`
fn service_info(config: &StripeQlConfig, summary: &SchemaSummary) -> JsonValue {
    let endpoint = &config.graphql.endpoint;
    json!({
        "service": "stripeql",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running",
        "resolve_mode": config.graphql.resolve_mode.as_str(),
        "types": summary.types.len(),
        "endpoints": {
            "graphql": endpoint,
            "sdl": format!("{}/sdl", endpoint.trim_end_matches('/')),
            "graphiql": config.graphql.enable_graphiql.then(|| endpoint.clone()),
        }
    })
}

/// Create CORS layer from configuration
pub fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let mut cors = CorsLayer::new();

    if config.allowed_origins.iter().any(|origin| origin == "*") {
        cors = cors.allow_origin(Any);
        tracing::warn!("CORS configured to allow any origin");
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|origin| match origin.parse::<HeaderValue>() {
                Ok(value) => Some(value),
                Err(e) => {
                    tracing::error!("Invalid origin '{}' in CORS configuration: {}", origin, e);
                    None
                }
            })
            .collect();
        cors = cors.allow_origin(origins);
    }

    let methods: Vec<Method> = config
        .allowed_methods
        .iter()
        .filter_map(|method| method.parse().ok())
        .collect();

    let headers: Vec<HeaderName> = config
        .allowed_headers
        .iter()
        .filter_map(|header| header.parse().ok())
        .collect();

    cors.allow_methods(methods)
        .allow_headers(headers)
        .max_age(config.max_age)
}

/// Graceful shutdown signal
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown...");
}
