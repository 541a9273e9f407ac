//! BookLeaf Backend
//!
//! A REST API computing author royalty balances and recording withdrawals.
//! All data lives in memory and resets on restart.

use anyhow::Context;
use bookleaf_backend::config::Config;
use bookleaf_backend::routes::build_router;
use bookleaf_backend::state::AppState;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = Config::from_env();
    info!("Configuration loaded: {:?}", config);

    // Initialize application state
    let state = AppState::new().with_minimum_withdrawal(config.withdrawal.minimum_amount);
    state.validate_catalog().context("Invalid seed catalog")?;
    info!(
        authors = state.authors().len(),
        books = state.books().len(),
        sales = state.sales().len(),
        "Seed catalog loaded"
    );
    let app = build_router(Arc::new(RwLock::new(state)));

    // Bind to address from config
    let addr: SocketAddr = config
        .server_addr()
        .parse()
        .with_context(|| format!("Invalid server address: {}", config.server_addr()))?;

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("✅ BookLeaf API running on port {}", config.server.port);
    info!("📍 Environment: {}", config.environment);
    info!("🌐 Access at: http://localhost:{}", config.server.port);
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    // Setup graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Handle graceful shutdown signals (Ctrl+C, SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down gracefully...");
        },
        _ = terminate => {
            info!("Received SIGTERM, shutting down gracefully...");
        },
    }
}
