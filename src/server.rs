//! HTTP server initialization and runtime setup.
//!
//! Builds the content store, wires the repository into shared state, and runs
//! the Axum server until a shutdown signal arrives.

use crate::config::Config;
use crate::infrastructure::stores;
use crate::routes::app_router;
use crate::state::{AppState, SiteContext};

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Content store (Cosmic or fixtures)
/// - Content repository
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - The content store cannot be built
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let store = stores::from_config(&config)?;
    let site = SiteContext::new(config.variant, config.site_name.clone());
    let state = AppState::new(store, site);

    let app = app_router(state, Some(config.rate_limit));

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid LISTEN address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Serving {} site on http://{addr}", config.variant);

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
