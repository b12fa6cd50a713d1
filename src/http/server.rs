//! HTTP server setup and the request handler.
//!
//! # Responsibilities
//! - Create the axum Router and application state
//! - Wire up middleware (timeout, request ID, tracing, concurrency limit)
//! - Buffer and bound the request body
//! - Normalize → dispatch → serialize per request
//! - Graceful shutdown on Ctrl+C

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    body::Body,
    extract::State,
    http::Request,
    response::Response,
    routing::any,
    Router,
};
use serde_json::json;
use tokio::net::TcpListener;
use tower::limit::GlobalConcurrencyLimitLayer;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::FunctionConfig;
use crate::dispatch::{dispatch, RouteTable};
use crate::http::request::{normalize_request, RequestIdLayer, X_REQUEST_ID};
use crate::http::response::into_http_response;
use crate::observability::metrics;
use crate::record::FunctionResponse;

/// Application state injected into the handler.
#[derive(Clone)]
pub struct AppState {
    pub routes: Arc<RouteTable>,
    pub max_body_bytes: usize,
    pub metrics_enabled: bool,
}

/// HTTP server for the function adapter.
pub struct HttpServer {
    router: Router,
    config: FunctionConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: FunctionConfig) -> Self {
        let state = AppState {
            routes: Arc::new(RouteTable::from_config(&config)),
            max_body_bytes: config.http.max_body_bytes,
            metrics_enabled: config.observability.metrics_enabled,
        };

        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the axum router with all middleware layers.
    ///
    /// Every path lands in the same handler; the dispatcher owns matching.
    fn build_router(config: &FunctionConfig, state: AppState) -> Router {
        Router::new()
            .route("/", any(function_handler))
            .route("/{*path}", any(function_handler))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(RequestIdLayer)
            .layer(TraceLayer::new_for_http())
            .layer(GlobalConcurrencyLimitLayer::new(
                config.listener.max_connections,
            ))
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &FunctionConfig {
        &self.config
    }
}

/// Main request handler: normalize, dispatch, serialize.
async fn function_handler(
    State(state): State<AppState>,
    request: Request<Body>,
) -> Response {
    let start_time = Instant::now();
    let request_id = request
        .headers()
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string();

    let (parts, body) = request.into_parts();
    let body_bytes = match axum::body::to_bytes(body, state.max_body_bytes).await {
        Ok(bytes) => bytes,
        Err(_) => {
            tracing::warn!(
                request_id = %request_id,
                limit = state.max_body_bytes,
                "Request body exceeded limit"
            );
            return into_http_response(FunctionResponse::json(
                413,
                &json!({ "error": "Request body too large" }),
            ));
        }
    };

    let record = normalize_request(&parts, &body_bytes);
    tracing::debug!(
        request_id = %request_id,
        method = %record.method,
        path = %record.path,
        "Dispatching request"
    );

    let response = dispatch(&record, &state.routes);

    if state.metrics_enabled {
        metrics::record_request(record.method.as_str(), response.status, start_time);
    }

    into_http_response(response)
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}
