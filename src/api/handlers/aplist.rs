// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use super::reconstruction_failed;
use crate::api::AppState;
use crate::collector::reconstruct;

/// GET /aplist
///
/// Reconstructs all APs and returns them as a JSON array.
pub async fn aplist_handler(State(state): State<Arc<AppState>>) -> Response {
    tracing::debug!("/aplist reconstructing AP data");
    match reconstruct(state.gui.clone()).await {
        Ok(aps) => Json(aps).into_response(),
        Err(e) => reconstruction_failed(&e),
    }
}
