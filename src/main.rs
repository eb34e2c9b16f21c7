//! Judge Gateway - Application Entry Point
//!
//! This is the main entry point for the Judge Gateway server.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use judge_gateway::{
    config::Config,
    constants::DEFAULT_LOG_FILTER,
    execution::{cancel_pair, CancelHandle},
    handlers,
    judge0::Judge0Client,
    state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Judge Gateway...");

    // Validate configuration before opening any socket
    let config = Config::from_env().inspect_err(|e| {
        tracing::error!(error = %e, "Invalid configuration, refusing to start");
    })?;
    tracing::debug!(judge0 = ?config.judge0, polling = ?config.polling, "Configuration loaded");

    let backend = Judge0Client::new(&config.judge0)?;
    tracing::info!(base_url = %config.judge0.base_url, "Judge0 client ready");

    let (shutdown_handle, shutdown_signal) = cancel_pair();
    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);
    let state = AppState::new(Arc::new(backend), config, shutdown_signal);

    let app = handlers::router(state);

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Server is running on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown(shutdown_handle))
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Wait for Ctrl-C or SIGTERM, then stop in-flight poll loops
async fn shutdown(handle: CancelHandle) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
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
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown requested, cancelling in-flight executions");
    handle.cancel();
}
