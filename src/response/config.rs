// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Threshold configuration echoes.

use serde::Serialize;

use crate::protocol::DeviceResponse;
use crate::types::{LightThreshold, TemperatureThresholds};

/// Echo of a temperature threshold update.
///
/// Serializes as `{"TEMP_MIN": .., "TEMP_MAX": .., "esp32_response": ..}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemperatureConfigResponse {
    #[serde(rename = "TEMP_MIN")]
    min: f64,
    #[serde(rename = "TEMP_MAX")]
    max: f64,
    esp32_response: DeviceResponse,
}

impl TemperatureConfigResponse {
    /// Creates a new echo.
    #[must_use]
    pub fn new(thresholds: TemperatureThresholds, esp32_response: DeviceResponse) -> Self {
        Self {
            min: thresholds.min,
            max: thresholds.max,
            esp32_response,
        }
    }

    /// Returns the device's answer.
    #[must_use]
    pub fn esp32_response(&self) -> &DeviceResponse {
        &self.esp32_response
    }
}

/// Echo of a light threshold update.
///
/// Serializes as `{"LDR_min": .., "esp32_response": ..}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LightConfigResponse {
    #[serde(rename = "LDR_min")]
    min: f64,
    esp32_response: DeviceResponse,
}

impl LightConfigResponse {
    /// Creates a new echo.
    #[must_use]
    pub fn new(threshold: LightThreshold, esp32_response: DeviceResponse) -> Self {
        Self {
            min: threshold.min,
            esp32_response,
        }
    }

    /// Returns the device's answer.
    #[must_use]
    pub fn esp32_response(&self) -> &DeviceResponse {
        &self.esp32_response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn temperature_echo_shape() {
        let echo = TemperatureConfigResponse::new(
            TemperatureThresholds::new(12.0, 28.5),
            DeviceResponse::Body(json!({"ok": true})),
        );
        assert_eq!(
            serde_json::to_value(&echo).unwrap(),
            json!({"TEMP_MIN": 12.0, "TEMP_MAX": 28.5, "esp32_response": {"ok": true}})
        );
    }

    #[test]
    fn light_echo_embeds_unreachable_record() {
        let echo = LightConfigResponse::new(
            LightThreshold::new(15.0),
            DeviceResponse::unreachable("connection refused"),
        );
        assert_eq!(
            serde_json::to_value(&echo).unwrap(),
            json!({
                "LDR_min": 15.0,
                "esp32_response": {"error": "device unreachable", "details": "connection refused"}
            })
        );
    }
}
