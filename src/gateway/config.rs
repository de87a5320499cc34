// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Gateway configuration.

use crate::protocol::HttpConfig;
use crate::types::{LightThreshold, TemperatureThresholds};

/// Configuration for a [`Gateway`](super::Gateway).
///
/// # Examples
///
/// ```
/// use esp32_gateway::GatewayConfig;
/// use esp32_gateway::types::TemperatureThresholds;
///
/// // Device at its factory address, fixed thresholds
/// let config = GatewayConfig::default();
/// assert_eq!(config.http().base_url(), "http://10.100.21.50");
/// assert!(!config.sync_thresholds());
///
/// // Device elsewhere, threshold updates also relabel readings
/// let config = GatewayConfig::device("esp32.local")
///     .with_sync_thresholds(true)
///     .with_temperature_thresholds(TemperatureThresholds::new(15.0, 25.0));
/// assert!(config.sync_thresholds());
/// ```
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    http: HttpConfig,
    sync_thresholds: bool,
    temperature: TemperatureThresholds,
    light: LightThreshold,
}

impl GatewayConfig {
    /// Address the device answers on out of the box.
    pub const DEFAULT_DEVICE: &'static str = "10.100.21.50";

    /// Creates a configuration from a full HTTP configuration.
    #[must_use]
    pub fn new(http: HttpConfig) -> Self {
        Self {
            http,
            sync_thresholds: false,
            temperature: TemperatureThresholds::DEFAULT,
            light: LightThreshold::DEFAULT,
        }
    }

    /// Creates a configuration for the device at `host`.
    #[must_use]
    pub fn device(host: impl Into<String>) -> Self {
        Self::new(HttpConfig::new(host))
    }

    /// When enabled, accepted threshold updates also change the table used
    /// to label readings.
    #[must_use]
    pub fn with_sync_thresholds(mut self, enabled: bool) -> Self {
        self.sync_thresholds = enabled;
        self
    }

    /// Sets the initial temperature boundaries.
    #[must_use]
    pub fn with_temperature_thresholds(mut self, thresholds: TemperatureThresholds) -> Self {
        self.temperature = thresholds;
        self
    }

    /// Sets the initial light boundary.
    #[must_use]
    pub fn with_light_threshold(mut self, threshold: LightThreshold) -> Self {
        self.light = threshold;
        self
    }

    /// Returns the HTTP configuration.
    #[must_use]
    pub fn http(&self) -> &HttpConfig {
        &self.http
    }

    /// Returns whether threshold syncing is enabled.
    #[must_use]
    pub fn sync_thresholds(&self) -> bool {
        self.sync_thresholds
    }

    /// Returns the initial temperature boundaries.
    #[must_use]
    pub fn temperature_thresholds(&self) -> TemperatureThresholds {
        self.temperature
    }

    /// Returns the initial light boundary.
    #[must_use]
    pub fn light_threshold(&self) -> LightThreshold {
        self.light
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self::device(Self::DEFAULT_DEVICE)
    }
}
