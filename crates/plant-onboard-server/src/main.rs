//! plant-onboard - HTTP server for the plant onboarding wizard
//!
//! Configuration comes from flags or the environment:
//!   ONBOARD_BIND          - listen address (default: 0.0.0.0:8000)
//!   ONBOARD_REGISTRY      - parameter registry JSON (default: built-in)
//!   ONBOARD_TEMPLATES_DIR - template directory (default: data/templates)
//!   ONBOARD_SEED_SAMPLES  - write the sample templates on startup
//!   RUST_LOG              - tracing filter

use anyhow::{Context, Result};
use clap::Parser;
use plant_onboard_server::{build_router, AppState, ServerConfig};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let config = ServerConfig::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&config.log)
                .with_context(|| format!("Invalid log filter: {}", config.log))?,
        )
        .init();

    let state = AppState::load(&config)?;
    let app = build_router(state);

    let listener = TcpListener::bind(&config.bind)
        .await
        .with_context(|| format!("Failed to bind to {}", config.bind))?;
    tracing::info!("plant-onboard listening on {}", config.bind);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("plant-onboard stopped");
    Ok(())
}

/// Resolve on Ctrl-C, or SIGTERM on Unix
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl-C");
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
                tracing::error!(error = %e, "failed to listen for SIGTERM");
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

    tracing::info!("shutdown signal received");
}
