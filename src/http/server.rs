//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with all handlers
//! - Wire up middleware (trace, request timeout)
//! - Share the origin policy and upstream client with handlers
//! - Serve with graceful shutdown

use std::sync::Arc;
use std::time::Duration;

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::{ProxyConfig, ValidationError};
use crate::http::handler;
use crate::security::OriginPolicy;
use crate::upstream::AirtableClient;

/// Application state injected into handlers.
///
/// Read-only after construction; concurrent invocations share it
/// without coordination.
#[derive(Clone)]
pub struct AppState {
    pub origins: Arc<OriginPolicy>,
    pub airtable: Arc<AirtableClient>,
    pub default_table: String,
    pub echo_origin_on_reject: bool,
}

/// HTTP server for the proxy.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server from validated configuration.
    pub fn new(config: &ProxyConfig) -> Result<Self, ValidationError> {
        let state = AppState {
            origins: Arc::new(OriginPolicy::new(config.cors.allowed_origins.clone())),
            airtable: Arc::new(AirtableClient::new(&config.upstream)?),
            default_table: config.upstream.default_table.clone(),
            echo_origin_on_reject: config.cors.echo_origin_on_reject,
        };

        Ok(Self {
            router: Self::build_router(config, state),
        })
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &ProxyConfig, state: AppState) -> Router {
        Router::new()
            .route(
                "/records",
                get(handler::list_records).options(handler::preflight),
            )
            .route("/healthz", get(handler::health))
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(TraceLayer::new_for_http())
                    .layer(TimeoutLayer::new(Duration::from_secs(
                        config.listener.request_timeout_secs,
                    ))),
            )
    }

    /// Run the server, accepting connections on the given listener until
    /// the shutdown signal fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
