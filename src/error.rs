// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Error types for the AP GUI exporter

use thiserror::Error;

use crate::gui::Band;

/// Main application error type
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network or IO error
    #[error("IO error")]
    Io(#[from] std::io::Error),

    /// Address parsing error
    #[error("Address parse error")]
    AddrParse(#[from] std::net::AddrParseError),

    /// Transport-level failure while fetching a GUI page
    #[error("failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The controller page carried no `apListData` script
    #[error("could not find script node with apListData")]
    MissingInventoryScript,

    /// The inventory payload is not valid JSON after cleanup
    #[error("failed to parse apListData: {0}")]
    InventoryParse(#[from] serde_json::Error),

    /// A single inventory record does not match the positional layout
    #[error("apListData record {record}: field {index} {reason}")]
    InventoryRecord {
        record: usize,
        index: usize,
        reason: String,
    },

    /// One band's connection count could not be extracted from an AP page
    #[error("failed to find {band} connection count: {reason}")]
    Detail { band: Band, reason: String },
}

/// Convenient alias for Result with application error
pub type Result<T> = std::result::Result<T, AppError>;
