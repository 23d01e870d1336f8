//! Axum handlers serving the generated schema

use async_graphql::dynamic::Schema;
use async_graphql::Executor;
use async_graphql::http::{parse_query_string, GraphiQLSource};
use async_graphql_axum::GraphQLBatchRequest;
use axum::{
    extract::{RawQuery, State},
    http::{header, HeaderMap, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;
use stripeql_config::GraphQLConfig;
use tracing::{debug, error};

/// State shared by the GraphQL handlers
#[derive(Clone)]
pub struct GraphQLState {
    pub schema: Schema,
    pub config: Arc<GraphQLConfig>,
}

impl GraphQLState {
    pub fn new(schema: Schema, config: GraphQLConfig) -> Self {
        Self {
            schema,
            config: Arc::new(config),
        }
    }
}

/// Routes for `{endpoint}` and `{endpoint}/sdl`
pub fn graphql_routes(state: GraphQLState) -> Router {
    let endpoint = state.config.endpoint.clone();
    let sdl_path = format!("{}/sdl", endpoint.trim_end_matches('/'));

    Router::new()
        .route(&endpoint, get(graphql_get).post(graphql_post))
        .route(&sdl_path, get(graphql_sdl))
        .with_state(state)
}

/// Serialize `body` as JSON, pretty-printed when configured
fn json_response<T: Serialize>(status: StatusCode, body: &T, pretty: bool) -> Response {
    let rendered = if pretty {
        serde_json::to_string_pretty(body)
    } else {
        serde_json::to_string(body)
    };

    match rendered {
        Ok(text) => (status, [(header::CONTENT_TYPE, "application/json")], text).into_response(),
        Err(e) => {
            error!("Failed to serialize response: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

fn request_error(message: impl Into<String>, pretty: bool) -> Response {
    let body = json!({ "errors": [{ "message": message.into() }] });
    json_response(StatusCode::BAD_REQUEST, &body, pretty)
}

fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get_all(header::ACCEPT)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .any(|value| value.contains("text/html"))
}

/// Execute a GraphQL request or batch sent as JSON
pub async fn graphql_post(
    State(state): State<GraphQLState>,
    request: GraphQLBatchRequest,
) -> Response {
    let response = state.schema.execute_batch(request.into_inner()).await;
    json_response(StatusCode::OK, &response, state.config.pretty)
}

/// Serve GraphiQL to browsers, otherwise execute the query string
pub async fn graphql_get(
    State(state): State<GraphQLState>,
    headers: HeaderMap,
    RawQuery(query): RawQuery,
) -> Response {
    let query = query.filter(|q| !q.is_empty());

    if state.config.enable_graphiql && query.is_none() && accepts_html(&headers) {
        let page = GraphiQLSource::build()
            .endpoint(&state.config.endpoint)
            .title("stripeql")
            .finish();
        return Html(page).into_response();
    }

    let Some(query) = query else {
        return request_error("Missing GraphQL query in request", state.config.pretty);
    };

    let request = match parse_query_string(&query) {
        Ok(request) => request,
        Err(e) => {
            debug!("Rejected GET request: {}", e);
            return request_error(e.to_string(), state.config.pretty);
        }
    };

    let response = state.schema.execute(request).await;
    json_response(StatusCode::OK, &response, state.config.pretty)
}

/// The generated schema in SDL form
pub async fn graphql_sdl(State(state): State<GraphQLState>) -> Response {
    json_response(
        StatusCode::OK,
        &json!({ "schema": state.schema.sdl() }),
        state.config.pretty,
    )
}
