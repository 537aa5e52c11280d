// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! HTTP access to the controller and AP web GUIs

use scraper::Html;
use secrecy::ExposeSecret;
use std::time::Duration;

use super::detail::parse_ap_detail;
use super::inventory::parse_inventory_script;
use super::locator::{find_in_document, is_inventory_script, text_content};
use super::types::{ApDetail, ApSummary};
use crate::config::ControllerConfig;
use crate::error::{AppError, Result};

/// Source of inventory and per-AP detail
///
/// Implemented by [`GuiClient`] for real devices.
pub trait ApGui: Send + Sync + 'static {
    /// Lists the APs known to the controller
    fn fetch_inventory(&self) -> impl Future<Output = Result<Vec<ApSummary>>> + Send;

    /// Reads connection counts from one AP's own GUI
    fn fetch_detail(&self, ap: &ApSummary) -> impl Future<Output = Result<ApDetail>> + Send;
}

/// Controller page listing all managed APs
#[must_use]
pub fn controller_url(vip: &str) -> String {
    format!("http://{vip}/top-virtual-controller.html")
}

/// Per-AP page holding the band connection counts
#[must_use]
pub fn ap_url(ip_address: &str) -> String {
    format!("http://{ip_address}/manage-system.html")
}

/// Extracts the inventory from a controller page body
pub fn inventory_from_page(body: &str) -> Result<Vec<ApSummary>> {
    let document = Html::parse_document(body);
    let script = find_in_document(&document, &is_inventory_script)
        .ok_or(AppError::MissingInventoryScript)?;
    parse_inventory_script(&text_content(&script))
}

/// Extracts both band counts from an AP page body
pub fn detail_from_page(body: &str) -> Result<ApDetail> {
    let document = Html::parse_document(body);
    parse_ap_detail(&document)
}

/// Basic-auth client for the device GUIs
///
/// The same credentials are used for the controller and every AP.
#[derive(Clone)]
pub struct GuiClient {
    http: reqwest::Client,
    controller: ControllerConfig,
}

impl GuiClient {
    /// Creates a client; `timeout` bounds every single fetch when set
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(controller: ControllerConfig, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| AppError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { http, controller })
    }

    /// Fetches a page and returns its body
    ///
    /// The status code is not checked; only transport failures are errors.
    pub async fn fetch_page(&self, url: &str) -> Result<String> {
        tracing::trace!("GET {}", url);
        let fetch_error = |source| AppError::Fetch {
            url: url.to_string(),
            source,
        };

        let response = self
            .http
            .get(url)
            .basic_auth(
                &self.controller.username,
                Some(self.controller.password.expose_secret()),
            )
            .send()
            .await
            .map_err(fetch_error)?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!("{} answered {}", url, status);
        }

        response.text().await.map_err(fetch_error)
    }
}

impl ApGui for GuiClient {
    async fn fetch_inventory(&self) -> Result<Vec<ApSummary>> {
        let body = self.fetch_page(&controller_url(&self.controller.vip)).await?;
        inventory_from_page(&body)
    }

    async fn fetch_detail(&self, ap: &ApSummary) -> Result<ApDetail> {
        let body = self.fetch_page(&ap_url(&ap.ip_address)).await?;
        let detail = detail_from_page(&body)?;
        tracing::debug!(
            "AP {}: {} clients on 2.4GHz, {} on 5GHz",
            ap.hostname,
            detail.active_2_4ghz_connections,
            detail.active_5ghz_connections
        );
        Ok(detail)
    }
}
