// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Configuration module for the AP GUI exporter
//!
//! Loads configuration from environment variables (and an optional `.env`).

use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;

use crate::error::{AppError, Result};


/// Default configuration values
pub mod defaults {
    pub const PORT: u16 = 8080;
    pub const LISTEN_HOST: &str = "0.0.0.0";
}

/// Environment variable names used by the application
pub mod env_vars {
    pub const CONTROLLER_VIP: &str = "VIRTUAL_CONTROLLER_VIP";
    pub const CONTROLLER_USER: &str = "VIRTUAL_CONTROLLER_GUI_USER";
    pub const CONTROLLER_PASS: &str = "VIRTUAL_CONTROLLER_GUI_PASS";
    pub const PORT: &str = "PORT";
    pub const FETCH_TIMEOUT_SECONDS: &str = "FETCH_TIMEOUT_SECONDS";
}

/// Virtual controller address and GUI credentials
///
/// The credentials are shared by the controller and all managed APs.
#[derive(Debug, Clone)]
pub struct ControllerConfig {
    pub vip: String,
    pub username: String,
    pub password: SecretString,
}

impl ControllerConfig {
    /// Validates controller configuration
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.vip.trim().is_empty() {
            return Err("Controller VIP cannot be empty".to_string());
        }

        if self.username.trim().is_empty() {
            return Err("GUI username cannot be empty".to_string());
        }

        if self.password.expose_secret().is_empty() {
            return Err("GUI password cannot be empty".to_string());
        }

        Ok(())
    }
}

/// Application-wide configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub server_addr: String,
    pub controller: ControllerConfig,
    pub fetch_timeout_secs: Option<u64>,
}

impl Config {
    /// Loads configuration from environment variables
    ///
    /// A `.env` file is loaded first when present; real variables win.
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is missing or empty.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary variable lookup
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is missing or empty.
    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |key: &str| {
            lookup(key)
                .filter(|value| !value.is_empty())
                .ok_or_else(|| AppError::Config(format!("{key} is required")))
        };

        let controller = ControllerConfig {
            vip: require(env_vars::CONTROLLER_VIP)?,
            username: require(env_vars::CONTROLLER_USER)?,
            password: SecretString::from(require(env_vars::CONTROLLER_PASS)?),
        };
        controller.validate().map_err(AppError::Config)?;

        let port = lookup(env_vars::PORT)
            .and_then(|v| v.parse::<u16>().ok())
            .unwrap_or(defaults::PORT);

        let fetch_timeout_secs = lookup(env_vars::FETCH_TIMEOUT_SECONDS)
            .and_then(|v| v.parse::<u64>().ok())
            .filter(|secs| *secs > 0);

        Ok(Config {
            server_addr: format!("{}:{port}", defaults::LISTEN_HOST),
            controller,
            fetch_timeout_secs,
        })
    }

    /// Per-fetch timeout, if one is configured
    #[must_use]
    pub fn fetch_timeout(&self) -> Option<Duration> {
        self.fetch_timeout_secs.map(Duration::from_secs)
    }
}
