// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Text exposition of per-band connection counts

use std::fmt::Write;

use crate::gui::{Band, ReconstructedAp};

/// Metric name shared by every exported line
pub const METRIC_NAME: &str = "ap_active_connections";

/// Escapes a label value for the Prometheus text format
fn escape_label_value(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Renders one line per AP and band, 2.4GHz before 5GHz
#[must_use]
pub fn render_metrics(aps: &[ReconstructedAp]) -> String {
    let mut out = String::new();
    for ap in aps {
        let hostname = escape_label_value(&ap.summary.hostname);
        for band in Band::ALL {
            // Writing into a String cannot fail
            let _ = writeln!(
                out,
                "{METRIC_NAME}{{hostname=\"{hostname}\",frequency=\"{}\"}} {}",
                band.label(),
                ap.detail.connections(band)
            );
        }
    }
    out
}
