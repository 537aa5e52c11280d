// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! AP data reconstruction
//!
//! Joins the controller's inventory with the detail scraped from every
//! listed AP. State is rebuilt from scratch on each call.

mod retry;

use std::sync::Arc;

use crate::error::Result;
use crate::gui::{ApDetail, ApGui, ApSummary, ReconstructedAp};

pub use retry::{RetryOutcome, retry_immediately};

/// Attempts for the controller inventory fetch
pub const INVENTORY_ATTEMPTS: usize = 3;

/// Attempts for each per-AP detail fetch
pub const DETAIL_ATTEMPTS: usize = 5;

/// Fetches one AP's detail within its own retry budget
///
/// Exhausted retries are logged and reported as `None`.
async fn collect_detail<G: ApGui>(gui: &G, ap: &ApSummary) -> Option<ApDetail> {
    let outcome = retry_immediately(DETAIL_ATTEMPTS, || gui.fetch_detail(ap)).await;

    if let Some(e) = outcome.last_error() {
        tracing::warn!(
            "error fetching detail for {}: error after {} retries: {}",
            ap.hostname,
            outcome.error_count(),
            e
        );
        return None;
    }
    if let Some(e) = outcome.latest_error() {
        tracing::info!(
            "retried fetching detail for {} {} times, last error: {}",
            ap.hostname,
            outcome.error_count(),
            e
        );
    }

    outcome.into_result().ok()
}

/// Rebuilds the full AP list from the controller and every AP
///
/// The inventory is a hard dependency: once its retries are exhausted the
/// whole call fails. APs whose detail cannot be read are left out of the
/// result with a warning. One task is spawned per AP with no concurrency
/// limit, and the call waits for every task before returning.
///
/// # Errors
///
/// Returns the last inventory error when all inventory attempts fail.
pub async fn reconstruct<G: ApGui>(gui: Arc<G>) -> Result<Vec<ReconstructedAp>> {
    let inventory = {
        let gui = gui.as_ref();
        retry_immediately(INVENTORY_ATTEMPTS, || gui.fetch_inventory()).await
    };
    if let Some(e) = inventory.latest_error() {
        tracing::info!(
            "retried fetching AP info from controller {} times, last error: {}",
            inventory.error_count(),
            e
        );
    }
    let aps = inventory.into_result()?;

    tracing::debug!("Controller lists {} AP(s)", aps.len());

    let tasks: Vec<_> = aps
        .iter()
        .map(|ap| {
            let gui = gui.clone();
            let ap = ap.clone();
            tokio::spawn(async move { collect_detail(gui.as_ref(), &ap).await })
        })
        .collect();

    let mut reconstructed = Vec::with_capacity(aps.len());
    for (summary, task) in aps.into_iter().zip(tasks) {
        let detail = match task.await {
            Ok(detail) => detail,
            Err(e) => {
                tracing::warn!("detail task for {} did not complete: {}", summary.hostname, e);
                None
            }
        };

        match detail {
            Some(detail) => reconstructed.push(ReconstructedAp { summary, detail }),
            None => tracing::warn!("No details obtained for {}", summary.hostname),
        }
    }

    Ok(reconstructed)
}
