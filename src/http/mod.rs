//! HTTP surface: the registration API and its server loop.

pub mod auth;

use crate::state::AppState;
use anyhow::Result;
use axum::Router;
use axum::routing::post;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/auth/register", post(auth::register))
        .with_state(state)
}

/// Binds the listener and serves until Ctrl+C or SIGTERM.
pub async fn serve(state: Arc<AppState>) -> Result<()> {
    let address = format!("0.0.0.0:{}", state.config.port);
    let app = router(state);

    let listener = TcpListener::bind(&address).await?;
    log::info!("Server running at {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    log::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
        log::info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
        log::info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
