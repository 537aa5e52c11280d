// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Connection counts from an AP's `manage-system.html`

use regex::Regex;
use scraper::Html;
use std::sync::LazyLock;

use super::locator::{find_in_document, has_id};
use super::types::{ApDetail, Band};
use crate::error::{AppError, Result};

/// Position of the count cell among the row's child nodes
const COUNT_CELL_INDEX: usize = 3;

static NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[0-9]+").expect("number pattern is valid"));

fn band_error(band: Band, reason: impl Into<String>) -> AppError {
    AppError::Detail {
        band,
        reason: reason.into(),
    }
}

/// Reads one band's active connection count
///
/// Child nodes are counted as the parser produced them, text nodes included.
pub fn parse_band_count(document: &Html, band: Band) -> Result<u32> {
    let row = find_in_document(document, &has_id(band.row_id()))
        .ok_or_else(|| band_error(band, format!("no node with id={}", band.row_id())))?;

    let cell = row
        .children()
        .nth(COUNT_CELL_INDEX)
        .ok_or_else(|| band_error(band, "child of node at index 4 expected"))?;

    let text: String = cell
        .descendants()
        .filter_map(|node| node.value().as_text().map(|text| &**text))
        .collect();
    if text.is_empty() {
        return Err(band_error(band, "count cell has no text"));
    }

    let digits = NUMBER
        .find(&text)
        .ok_or_else(|| band_error(band, format!("no number in {text:?}")))?;

    digits
        .as_str()
        .parse()
        .map_err(|e| band_error(band, format!("invalid count {:?}: {e}", digits.as_str())))
}

/// Extracts both band counts; fails if either band is unreadable
pub fn parse_ap_detail(document: &Html) -> Result<ApDetail> {
    Ok(ApDetail {
        active_2_4ghz_connections: parse_band_count(document, Band::TwoPointFourGhz)?,
        active_5ghz_connections: parse_band_count(document, Band::FiveGhz)?,
    })
}
