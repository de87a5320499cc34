// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The gateway: one method per exposed endpoint.
//!
//! Every method performs at most one device call. Methods built on
//! [`Gateway::forward`] never fail: transport problems become an in-band
//! [`DeviceResponse::Unreachable`] record. [`Gateway::control_led`] is the
//! exception and returns the device failure as an [`Error`].

mod config;

use std::sync::Arc;

pub use config::GatewayConfig;

use crate::command::{DeviceCommand, LedCommand, ModeCommand, SensorCommand, ThresholdCommand};
use crate::error::{Error, Result};
use crate::protocol::{DeviceResponse, HttpClient};
use crate::response::{
    LedResponse, LightConfigResponse, LightReading, Outcome, Rejection,
    TemperatureConfigResponse, TemperatureReading,
};
use crate::state::ThresholdStore;
use crate::types::{LedId, LedState, LightThreshold, Mode, TemperatureThresholds};

/// HTTP façade in front of one device.
///
/// Cloning is cheap: clones share the HTTP connection pool and the
/// threshold table.
///
/// # Examples
///
/// ```no_run
/// use esp32_gateway::{Gateway, GatewayConfig};
///
/// # async fn example() -> esp32_gateway::Result<()> {
/// let gateway = Gateway::new(GatewayConfig::device("10.100.21.50"))?;
///
/// let reading = gateway.temperature().await;
/// println!("{:?} -> {}", reading.celsius(), reading.status().as_str());
///
/// let outcome = gateway.control_led("1R", "on").await?;
/// assert!(!outcome.is_rejected());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Gateway {
    client: HttpClient,
    thresholds: Arc<ThresholdStore>,
    sync_thresholds: bool,
}

impl Gateway {
    /// Creates a gateway from its configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the device address is invalid or the HTTP client
    /// cannot be created.
    pub fn new(config: GatewayConfig) -> Result<Self> {
        let thresholds = ThresholdStore::new(
            config.temperature_thresholds(),
            config.light_threshold(),
        );
        let sync_thresholds = config.sync_thresholds();
        let client = config.http().clone().into_client()?;

        Ok(Self {
            client,
            thresholds: Arc::new(thresholds),
            sync_thresholds,
        })
    }

    /// Returns the device base URL.
    #[must_use]
    pub fn device_url(&self) -> &str {
        self.client.base_url()
    }

    /// Returns the threshold table used to label readings.
    #[must_use]
    pub fn thresholds(&self) -> &ThresholdStore {
        &self.thresholds
    }

    /// Sends one command and returns the device body, or an unreachable
    /// record if anything went wrong on the way.
    pub async fn forward<C: DeviceCommand + Sync>(&self, command: &C) -> DeviceResponse {
        self.client
            .send_json(command)
            .await
            .inspect_err(|e| tracing::warn!(path = command.path(), error = %e, "Device unreachable"))
            .into()
    }

    /// Reads and labels the temperature sensor.
    pub async fn temperature(&self) -> TemperatureReading {
        let response = self.forward(&SensorCommand::Temperature).await;
        TemperatureReading::from_device(&response, &self.thresholds.temperature())
    }

    /// Reads and labels the light sensor.
    pub async fn light(&self) -> LightReading {
        let response = self.forward(&SensorCommand::Light).await;
        LightReading::from_device(&response, &self.thresholds.light())
    }

    /// Pushes temperature boundaries to the device and echoes them.
    pub async fn set_temperature_thresholds(
        &self,
        thresholds: TemperatureThresholds,
    ) -> TemperatureConfigResponse {
        let response = self
            .forward(&ThresholdCommand::Temperature(thresholds))
            .await;
        if self.sync_thresholds && !response.is_error() {
            self.thresholds.set_temperature(thresholds);
        }
        TemperatureConfigResponse::new(thresholds, response)
    }

    /// Pushes the light boundary to the device and echoes it.
    pub async fn set_light_threshold(&self, threshold: LightThreshold) -> LightConfigResponse {
        let response = self.forward(&ThresholdCommand::Light(threshold)).await;
        if self.sync_thresholds && !response.is_error() {
            self.thresholds.set_light(threshold);
        }
        LightConfigResponse::new(threshold, response)
    }

    /// Returns the device's current mode, as reported by the device.
    pub async fn mode(&self) -> DeviceResponse {
        self.forward(&ModeCommand::Get).await
    }

    /// Forces the device mode.
    ///
    /// Values other than `auto` and `manual` are rejected without calling
    /// the device.
    pub async fn set_mode(&self, value: &str) -> Outcome<DeviceResponse> {
        let mode = match value.parse::<Mode>() {
            Ok(mode) => mode,
            Err(e) => {
                tracing::debug!(error = %e, "Rejecting mode");
                return Outcome::Rejected(e.into());
            }
        };
        Outcome::Completed(self.forward(&ModeCommand::Set(mode)).await)
    }

    /// Switches an LED.
    ///
    /// The identifier is checked before the state; either being invalid
    /// yields a [`Rejection`] without calling the device.
    ///
    /// # Errors
    ///
    /// Unlike the other operations, a device failure is returned as an
    /// error rather than folded into the response.
    pub async fn control_led(&self, led_id: &str, state: &str) -> Result<Outcome<LedResponse>> {
        let command = match parse_led_command(led_id, state) {
            Ok(command) => command,
            Err(rejection) => {
                tracing::debug!(led_id, state, error = rejection.message(), "Rejecting LED command");
                return Ok(Outcome::Rejected(rejection));
            }
        };

        let body = self.client.send_json(&command).await.inspect_err(
            |e: &Error| tracing::warn!(led = %command.led(), error = %e, "LED command failed"),
        )?;

        Ok(Outcome::Completed(LedResponse::new(command, body)))
    }
}

fn parse_led_command(led_id: &str, state: &str) -> std::result::Result<LedCommand, Rejection> {
    let led: LedId = led_id.parse()?;
    let state: LedState = state.parse()?;
    Ok(LedCommand::new(led, state))
}
