// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Scraping of the virtual controller and AP web GUIs
//!
//! None of these devices expose an API, so the state is read out of the
//! HTML the administration pages serve.

mod client;
mod detail;
mod inventory;
mod locator;
mod types;

// Re-export public types and functions
pub use client::{ApGui, GuiClient, detail_from_page, inventory_from_page};
pub use inventory::parse_inventory_script;
pub use types::{ApDetail, ApSummary, Band, ReconstructedAp};
