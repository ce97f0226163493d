use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::response::Html;
use axum::routing::{get, post};
use axum::{Json, Router};
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::domain::{ChatReply, DomainError};

use super::container::Container;
use super::controller::{ChatController, HealthController, HealthStatus, IndexController};
use super::ApiError;

/// Routes of the HTTP API:
///
/// - `GET /`: embedded chat UI
/// - `GET /health`: liveness check
/// - `POST /api/chat`: one chat turn
pub fn build_router(container: Arc<Container>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/api/chat", post(chat))
        .with_state(container)
}

/// Serve the API on `listener` until Ctrl-C.
pub async fn serve(listener: TcpListener, container: Arc<Container>) -> Result<(), DomainError> {
    let addr = listener.local_addr()?;
    info!("Open Source Mentor Bot listening on http://{addr}");

    axum::serve(listener, build_router(container))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
}

async fn index() -> Html<&'static str> {
    Html(IndexController::new().page())
}

async fn health() -> Json<HealthStatus> {
    Json(HealthController::new().health())
}

async fn chat(
    State(container): State<Arc<Container>>,
    body: Bytes,
) -> Result<Json<ChatReply>, ApiError> {
    ChatController::new(&container).chat(&body).await.map(Json)
}
