//! emojisearch-http — thin axum adapter in front of the filter engine.
//!
//! One route, `POST /search`, decodes a [`SearchParams`] JSON body, runs it
//! through the shared [`FilterEngine`], and answers with a JSON array of
//! records. Payloads that fail to decode are answered with `400`.
//!
//! # Example
//!
//! ```rust,no_run
//! # async fn demo() -> anyhow::Result<()> {
//! use emojisearch_core::{Catalog, FilterEngine};
//! use emojisearch_http::AppState;
//! use std::sync::Arc;
//!
//! let engine = FilterEngine::new(Arc::new(Catalog::builtin()));
//! emojisearch_http::serve("127.0.0.1:8080", AppState::new(engine, false)).await?;
//! # Ok(())
//! # }
//! ```
//!
//! [`SearchParams`]: emojisearch_core::SearchParams

pub mod handlers;

use anyhow::Context;
use axum::{routing::post, Router};
use emojisearch_core::FilterEngine;
use std::future::Future;
use tokio::net::TcpListener;

/// State shared by every request handler.
#[derive(Debug, Clone)]
pub struct AppState {
    pub engine: FilterEngine,
    /// Mirrors the `search.distinct` config key.
    pub distinct: bool,
}

impl AppState {
    pub fn new(engine: FilterEngine, distinct: bool) -> Self {
        Self { engine, distinct }
    }
}

/// Build the router with all routes.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/search", post(handlers::search))
        .with_state(state)
}

/// Bind `addr` and serve until Ctrl-C.
pub async fn serve(addr: &str, state: AppState) -> anyhow::Result<()> {
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    serve_on(listener, state, shutdown_signal()).await
}

/// Serve on an already-bound listener until `shutdown` resolves.
pub async fn serve_on<F>(listener: TcpListener, state: AppState, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    tracing::info!(%addr, records = state.engine.catalog().len(), "emojisearch listening");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await
        .context("http server failed")?;

    tracing::info!("emojisearch stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
