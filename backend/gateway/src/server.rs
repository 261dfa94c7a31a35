//! Main HTTP Gateway Server.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::extract::DefaultBodyLimit;
use axum::{
    routing::{get, post},
    Router,
};
use leafscan_core::VisionModel;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::{health_api, identify_api, web_ui};

/// Uploaded photos from phone cameras routinely exceed axum's 2 MB default.
const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Application state shared across routes.
#[derive(Clone)]
pub struct GatewayState {
    /// The model client, constructed once at startup and injected so tests
    /// can substitute a scripted fake.
    pub model: Arc<dyn VisionModel>,
}

/// Build the application router. Separated from serving so tests can drive
/// it directly.
pub fn build_router(state: GatewayState) -> Router {
    Router::new()
        .route("/", get(web_ui::index))
        .route("/api/identify", post(identify_api::identify))
        .route("/api/health", get(health_api::get_health))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Starts the Axum HTTP server.
pub async fn start_server(addr: SocketAddr, state: GatewayState) -> Result<()> {
    let app = build_router(state);

    info!("Gateway HTTP server listening on {}", addr);
    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
