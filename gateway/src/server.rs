//! HTTP server and routing for the mock completion endpoint.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use axum::http::StatusCode;
use axum::routing::post;
use tokio::net::TcpListener;
use tracing::{info, instrument};

use mockstream_core::StreamConfig;

use crate::completions;

/// Application state shared across routes: the immutable stream
/// configuration, injected once at startup and only ever read.
#[derive(Clone)]
pub struct GatewayState {
    pub config: Arc<StreamConfig>,
}

/// Build the application router.
///
/// Anything other than `POST /v1/chat/completions` answers 404 with an empty
/// body, including other methods on the matched path, where axum's default
/// would be a 405.
pub fn build_router(state: GatewayState) -> Router {
    Router::new()
        .route(
            "/v1/chat/completions",
            post(completions::chat_completions).fallback(not_found),
        )
        .fallback(not_found)
        .with_state(state)
}

async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}

/// Bind the listener and serve until the process is terminated.
#[instrument(skip(state))]
pub async fn start_server(addr: SocketAddr, state: GatewayState) -> Result<()> {
    let app = build_router(state);

    info!(port = addr.port(), "Mock completion server listening on {}", addr);
    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
