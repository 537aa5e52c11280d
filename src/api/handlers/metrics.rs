// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use super::reconstruction_failed;
use crate::api::AppState;
use crate::collector::reconstruct;
use crate::metrics::render_metrics;

/// GET /metrics
///
/// Two lines per AP, one for each band.
pub async fn metrics_handler(State(state): State<Arc<AppState>>) -> Response {
    tracing::debug!("/metrics reconstructing AP data");
    match reconstruct(state.gui.clone()).await {
        Ok(aps) => (
            StatusCode::OK,
            [("Content-Type", "text/plain; version=0.0.4")],
            render_metrics(&aps),
        )
            .into_response(),
        Err(e) => reconstruction_failed(&e),
    }
}
