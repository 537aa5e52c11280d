// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Data scraped from the controller and AP GUIs

use serde::Serialize;
use std::fmt;

/// One AP as listed by the virtual controller
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApSummary {
    pub hostname: String,
    pub ip_address: String,
}

/// Connection counts read from an AP's own GUI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ApDetail {
    pub active_2_4ghz_connections: u32,
    pub active_5ghz_connections: u32,
}

impl ApDetail {
    #[must_use]
    pub fn connections(&self, band: Band) -> u32 {
        match band {
            Band::TwoPointFourGhz => self.active_2_4ghz_connections,
            Band::FiveGhz => self.active_5ghz_connections,
        }
    }
}

/// Summary joined with its detail; one row of `/aplist` output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReconstructedAp {
    #[serde(flatten)]
    pub summary: ApSummary,
    #[serde(flatten)]
    pub detail: ApDetail,
}

/// Radio band with an independently tracked connection count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Band {
    TwoPointFourGhz,
    FiveGhz,
}

impl Band {
    pub const ALL: [Band; 2] = [Band::TwoPointFourGhz, Band::FiveGhz];

    /// DOM id of the table row holding this band's connection count
    #[must_use]
    pub fn row_id(self) -> &'static str {
        match self {
            Band::TwoPointFourGhz => "2G_connect_count_form",
            Band::FiveGhz => "5G1_connect_count_form",
        }
    }

    /// Value of the `frequency` label in the exposition output
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Band::TwoPointFourGhz => "2.4GHz",
            Band::FiveGhz => "5GHz",
        }
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
