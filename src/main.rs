// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

use std::net::SocketAddr;
use std::sync::Arc;

use ap_gui_exporter::{AppState, Config, Result, create_router};
use tokio::sync::watch;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Config loading also reads .env, so RUST_LOG set there is honoured
    let config = Config::from_env();

    setup_tracing();

    tracing::info!("Read environment variables");
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("Virtual controller at {}", config.controller.vip);
    match config.fetch_timeout() {
        Some(timeout) => tracing::info!("GUI fetch timeout: {:?}", timeout),
        None => tracing::info!("GUI fetch timeout: none"),
    }

    let addr: SocketAddr = config.server_addr.parse().map_err(|e| {
        tracing::error!("Invalid server address: {}", e);
        e
    })?;

    let state = Arc::new(AppState::new(config)?);

    // Graceful shutdown on Ctrl+C
    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);

    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Shutdown signal received");
            let _ = shutdown_tx.send(true);
        }
    });

    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await.map_err(|e| {
        tracing::error!("Failed to bind address: {}", e);
        e
    })?;

    tracing::info!("AP GUI Exporter starting on {}", addr);
    tracing::info!("Endpoints:");
    tracing::info!("  - GET /aplist  - Reconstructed AP list (JSON)");
    tracing::info!("  - GET /metrics - Per-band connection counts");
    tracing::info!("  - GET /health  - Health check");

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = shutdown_rx.changed().await;
            tracing::info!("HTTP server shutting down");
        })
        .await
        .map_err(|e| {
            tracing::error!("Server error: {}", e);
            e
        })?;

    Ok(())
}

fn setup_tracing() {
    // RUST_LOG wins; default to "info"
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
