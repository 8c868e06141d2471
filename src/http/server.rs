//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with the relay handler
//! - Wire up middleware (tracing, request ID, CORS)
//! - Serve connections until shutdown

use std::sync::Arc;

use axum::{extract::Request, http::HeaderName, middleware, routing::any, Router};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::config::RelayConfig;
use crate::http::cors::{cors_middleware, CorsPolicy};
use crate::http::handler::{relay_handler, RelayState};
use crate::http::upstream::{UpstreamClient, UpstreamSetupError};
use crate::lifecycle::signals::shutdown_signal;

pub const X_REQUEST_ID: &str = "x-request-id";

/// Error constructing the server from configuration.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error(transparent)]
    Upstream(#[from] UpstreamSetupError),
    #[error("invalid CORS header value: {0}")]
    Cors(#[from] axum::http::header::InvalidHeaderValue),
}

/// HTTP server for the relay.
pub struct RelayServer {
    router: Router,
    config: Arc<RelayConfig>,
}

impl RelayServer {
    /// Create a new server from an already validated configuration.
    pub fn new(config: RelayConfig) -> Result<Self, ServerError> {
        let config = Arc::new(config);
        let upstream = UpstreamClient::new(&config.upstream)?;
        let cors = Arc::new(CorsPolicy::from_config(&config.cors)?);
        let state = RelayState::new(upstream, config.route.path.as_str());

        let router = Self::build_router(state, cors);
        Ok(Self { router, config })
    }

    /// Build the Axum router with all middleware layers.
    ///
    /// Layers run top to bottom on the way in: request id, trace, CORS.
    fn build_router(state: RelayState, cors: Arc<CorsPolicy>) -> Router {
        let request_id = HeaderName::from_static(X_REQUEST_ID);
        Router::new()
            .route("/", any(relay_handler))
            .route("/{*path}", any(relay_handler))
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(SetRequestIdLayer::new(request_id.clone(), MakeRequestUuid))
                    .layer(TraceLayer::new_for_http().make_span_with(request_span))
                    .layer(PropagateRequestIdLayer::new(request_id))
                    .layer(middleware::from_fn_with_state(cors, cors_middleware)),
            )
    }

    /// A clone of the fully layered router, for driving without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    pub fn config(&self) -> &RelayConfig {
        &self.config
    }

    /// Serve until Ctrl+C or SIGTERM.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        self.serve(listener, shutdown_signal()).await
    }

    /// Serve until `shutdown` fires (or its sender is dropped).
    pub async fn run_until(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        self.serve(listener, async move {
            let _ = shutdown.recv().await;
        })
        .await
    }

    async fn serve<F>(self, listener: TcpListener, signal: F) -> Result<(), std::io::Error>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(signal)
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

fn request_span(request: &Request) -> tracing::Span {
    let request_id = request
        .headers()
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown");

    tracing::info_span!(
        "request",
        request_id = %request_id,
        method = %request.method(),
        uri = %request.uri()
    )
}
