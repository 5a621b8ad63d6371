//! HTTP API for aeolens
//!
//! ## Endpoints
//!
//! - `POST /audit`, `POST /api/audit` - Audit `{"url": "..."}` and return the report
//! - `GET /` - Readiness greeting
//! - `GET /api/health` - Health check
//!
//! Cross-origin requests are allowed from anywhere; the audit frontend is
//! served from a different origin.

mod handlers;
mod types;

pub use handlers::{audit_handler, health_handler, ready_handler};
pub use types::{AuditRequest, HealthResponse, ReadyResponse};

use aeolens_core::Auditor;
use anyhow::Context;
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Largest accepted request body
pub const MAX_BODY_BYTES: usize = 64 * 1024;

/// Shared server state
#[derive(Clone)]
pub struct AppState {
    pub auditor: Arc<Auditor>,
}

impl AppState {
    pub fn new(auditor: Auditor) -> Self {
        Self {
            auditor: Arc::new(auditor),
        }
    }
}

/// Create the router with all endpoints and middleware.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::ready_handler))
        .route("/api/health", get(handlers::health_handler))
        .route("/audit", post(handlers::audit_handler))
        .route("/api/audit", post(handlers::audit_handler))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind `addr` and serve until Ctrl-C.
pub async fn run_server(addr: &str, state: AppState) -> anyhow::Result<()> {
    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    tracing::info!("aeolens HTTP server listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
