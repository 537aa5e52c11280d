// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! # AP GUI Exporter
//!
//! Exporter for wireless access points managed by a virtual controller.
//!
//! Neither the controller nor the APs offer a machine-readable API, so this
//! library scrapes their administration pages, joins the controller's AP
//! inventory with the connection counts each AP reports, and serves the
//! result as JSON and as Prometheus-style text.
//!
//! ## Main modules
//! - `api`: HTTP API handlers
//! - `collector`: retry and reconstruction of AP data
//! - `config`: configuration management
//! - `error`: error types
//! - `gui`: fetching and scraping of device GUIs
//! - `metrics`: exposition format rendering
//! - `prelude`: commonly used types and traits

mod api;
mod collector;
mod config;
mod error;
mod gui;
mod metrics;
pub mod prelude;

// Re-export commonly used types
/// Application configuration
pub use config::{Config, ControllerConfig};

/// Application error and result type
pub use error::{AppError, Result};

/// HTTP API router and state
pub use api::{AppState, create_router};

/// Reconstruction of AP data with immediate retries
pub use collector::{
    DETAIL_ATTEMPTS, INVENTORY_ATTEMPTS, RetryOutcome, reconstruct, retry_immediately,
};

/// Device GUI access and scraped data types
pub use gui::{
    ApDetail, ApGui, ApSummary, Band, GuiClient, ReconstructedAp, detail_from_page,
    inventory_from_page, parse_inventory_script,
};

/// Exposition rendering
pub use metrics::{METRIC_NAME, render_metrics};
