//! HTTP dashboard. Every request recomputes its view from the shared,
//! read-only dataset; the server keeps no per-client state.

pub mod charts;
pub mod handlers;
pub mod render;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{routing::get, Router};

use crate::data::model::Dataset;

/// State injected into every handler.
pub type SharedDataset = Arc<Dataset>;

/// Build the router for all dashboard routes.
pub fn build_router(dataset: SharedDataset) -> Router {
    Router::new()
        .route("/", get(handlers::dashboard))
        .route("/api/options", get(handlers::api_options))
        .route("/api/view", get(handlers::api_view))
        .with_state(dataset)
}

/// Bind `addr` and serve until the process is stopped.
pub async fn serve(dataset: SharedDataset, addr: SocketAddr) -> anyhow::Result<()> {
    let app = build_router(dataset);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    log::info!("Dashboard listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
