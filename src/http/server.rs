//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router through the route registrar
//! - Wire up middleware (tracing, timeout, request ID)
//! - Answer unmatched paths with an explicit 404
//! - Bind server to listener and drain on shutdown

use axum::{
    extract::Request,
    http::StatusCode,
    response::Response,
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::RegistryConfig;
use crate::http::controller::LedgerController;
use crate::http::request::{request_id, request_span};
use crate::http::response::error_response;
use crate::ledger::Ledger;
use crate::routing::{self, TenderHandler, ROUTES};

/// HTTP server for the tender registry.
pub struct HttpServer {
    router: Router,
    config: RegistryConfig,
}

impl HttpServer {
    /// Create a server whose routes are served from `ledger`.
    pub fn new(config: RegistryConfig, ledger: Ledger) -> Self {
        Self::with_handler(config, Arc::new(LedgerController::new(ledger)))
    }

    /// Create a server dispatching to an arbitrary handler.
    pub fn with_handler<H: TenderHandler>(config: RegistryConfig, handler: Arc<H>) -> Self {
        let router = Self::build_router(&config, handler);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router<H: TenderHandler>(config: &RegistryConfig, handler: Arc<H>) -> Router {
        for route in ROUTES {
            tracing::debug!(
                method = route.method,
                path = route.path,
                operation = route.operation,
                "Registering route"
            );
        }

        routing::register(Router::new(), handler)
            .fallback(no_route)
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http().make_span_with(request_span))
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
    }

    /// Run the server until `shutdown` fires, then drain in-flight requests.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            routes = ROUTES.len(),
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// The fully layered router, for in-process use.
    pub fn into_router(self) -> Router {
        self.router
    }
}

async fn no_route(request: Request) -> Response {
    tracing::warn!(
        request_id = %request_id(&request),
        method = %request.method(),
        path = %request.uri().path(),
        "No route matched"
    );
    error_response(StatusCode::NOT_FOUND, "No matching route found")
}
