// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Prelude module for convenient imports
//!
//! This module re-exports commonly used types and traits for convenient use.
//! Users of the library can import everything they need with:
//!
//! ```rust
//! use ap_gui_exporter::prelude::*;
//! ```

// Core types
pub use crate::config::{Config, ControllerConfig};
pub use crate::error::{AppError, Result};

// Scraping and reconstruction
pub use crate::collector::{RetryOutcome, reconstruct, retry_immediately};
pub use crate::gui::{ApDetail, ApGui, ApSummary, Band, GuiClient, ReconstructedAp};

// Exposition
pub use crate::metrics::render_metrics;
