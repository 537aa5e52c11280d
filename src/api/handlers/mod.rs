// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

mod aplist;
mod health;
mod metrics;

pub use aplist::aplist_handler;
pub use health::health_check;
pub use metrics::metrics_handler;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::error::AppError;

/// Plain-text 500 carrying the raw error message
fn reconstruction_failed(e: &AppError) -> Response {
    tracing::warn!("error fetching access points: {}", e);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        [("Content-Type", "text/plain; charset=utf-8")],
        e.to_string(),
    )
        .into_response()
}
