// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Metrics exposition for reconstructed AP data

mod exposition;

/// Line-oriented exposition of AP connection counts
pub use exposition::{METRIC_NAME, render_metrics};
