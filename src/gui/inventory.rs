// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Decoding of the controller's `apListData` script
//!
//! The controller page embeds its AP table as a JavaScript statement:
//!
//! ```text
//! var apListData=[[...],[...],];
//! ```
//!
//! Every inner array is a positional record. The layout is not documented by
//! the vendor; the field positions below were read off the firmware's page
//! and break silently if a firmware update reorders them.

use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

use super::types::ApSummary;
use crate::error::{AppError, Result};

/// Statement prefix in front of the array literal
const STATEMENT_PREFIX: &str = "var apListData=";

/// Record position of the AP hostname
pub const HOSTNAME_INDEX: usize = 7;

/// Record position of the AP management IP address
pub const IP_ADDRESS_INDEX: usize = 13;

static TRAILING_COMMA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r",\s*\]\s*$").expect("trailing comma pattern is valid"));

/// Turns the script statement into a JSON array literal
fn clean_payload(script: &str) -> String {
    let payload = script.trim();
    let payload = payload.strip_prefix(STATEMENT_PREFIX).unwrap_or(payload);
    let payload = payload.strip_suffix(';').unwrap_or(payload);
    TRAILING_COMMA.replace(payload, "]").into_owned()
}

fn text_field(record_no: usize, record: &[Value], index: usize) -> Result<String> {
    match record.get(index) {
        Some(Value::String(text)) => Ok(text.clone()),
        Some(other) => Err(AppError::InventoryRecord {
            record: record_no,
            index,
            reason: format!("is not a string (found {other})"),
        }),
        None => Err(AppError::InventoryRecord {
            record: record_no,
            index,
            reason: format!("is missing (record has {} fields)", record.len()),
        }),
    }
}

/// Decodes the whole inventory or fails; never returns a partial list
pub fn parse_inventory_script(script: &str) -> Result<Vec<ApSummary>> {
    let payload = clean_payload(script);
    let records: Vec<Vec<Value>> = serde_json::from_str(&payload)?;

    tracing::trace!("apListData carries {} record(s)", records.len());

    records
        .iter()
        .enumerate()
        .map(|(record_no, record)| {
            Ok(ApSummary {
                hostname: text_field(record_no, record, HOSTNAME_INDEX)?,
                ip_address: text_field(record_no, record, IP_ADDRESS_INDEX)?,
            })
        })
        .collect()
}
