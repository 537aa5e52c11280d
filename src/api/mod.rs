// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! HTTP API module for the AP GUI exporter
//!
//! Every request rebuilds the AP list from the devices; nothing is cached.
//!
//! # Endpoints
//! - `GET /aplist` — reconstructed APs as JSON
//! - `GET /metrics` — per-band connection counts
//! - `GET /health` — health check

pub mod handlers;

use axum::{Router, routing::get};
use std::sync::Arc;

use crate::config::Config;
use crate::error::Result;
use crate::gui::GuiClient;

/// Application state shared with endpoints
pub struct AppState {
    pub config: Config,
    pub gui: Arc<GuiClient>,
}

impl AppState {
    /// Builds the state and the GUI client from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: Config) -> Result<Self> {
        let gui = GuiClient::new(config.controller.clone(), config.fetch_timeout())?;
        Ok(Self {
            config,
            gui: Arc::new(gui),
        })
    }
}

/// Creates the main Axum router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/aplist", get(handlers::aplist_handler))
        .route("/metrics", get(handlers::metrics_handler))
        .route("/health", get(handlers::health_check))
        .with_state(state)
}
