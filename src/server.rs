//! HTTP server initialization and runtime setup.

use crate::config::Config;
use crate::infrastructure::http::HttpUserDirectory;
use crate::routes::app_router;
use crate::state::AppState;
use crate::web::session::{run_session_sweeper, sweep_interval};

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - The listen address is invalid
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let directory = Arc::new(HttpUserDirectory::new(config.users_url.clone()));
    tracing::info!(url = %directory.users_url(), "User directory configured");

    let state = AppState::new(directory, config.reset_delay());

    let ttl = config.session_ttl();
    let sweeper = tokio::spawn(run_session_sweeper(
        Arc::clone(&state.sessions),
        ttl,
        sweep_interval(ttl),
    ));
    tracing::info!(ttl_secs = ttl.as_secs(), "Session sweeper started");

    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    sweeper.abort();

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
