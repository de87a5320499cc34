// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Sensor readings and their status labels.

use serde::Serialize;
use serde_json::Value;

use crate::protocol::DeviceResponse;
use crate::types::{LightThreshold, TemperatureThresholds};

/// Value of the `source` field in every reading envelope.
pub const SOURCE: &str = "ESP32";

/// Label attached to a temperature reading.
///
/// Comparisons are strict, so a reading equal to a boundary is
/// [`Normal`](Self::Normal).
///
/// # Examples
///
/// ```
/// use esp32_gateway::response::TemperatureStatus;
/// use esp32_gateway::types::TemperatureThresholds;
///
/// let t = TemperatureThresholds::default();
/// assert_eq!(TemperatureStatus::classify(Some(9.9), &t), TemperatureStatus::Low);
/// assert_eq!(TemperatureStatus::classify(Some(10.0), &t), TemperatureStatus::Normal);
/// assert_eq!(TemperatureStatus::classify(Some(30.1), &t), TemperatureStatus::High);
/// assert_eq!(TemperatureStatus::classify(None, &t).as_str(), "sensor unavailable");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureStatus {
    /// No usable reading.
    #[serde(rename = "sensor unavailable")]
    Unavailable,
    /// Below the lower boundary.
    Low,
    /// Within the boundaries, inclusive.
    Normal,
    /// Above the upper boundary.
    High,
}

impl TemperatureStatus {
    /// Classifies a reading. A missing reading wins over any comparison.
    #[must_use]
    pub fn classify(celsius: Option<f64>, thresholds: &TemperatureThresholds) -> Self {
        match celsius {
            None => Self::Unavailable,
            Some(t) if t < thresholds.min => Self::Low,
            Some(t) if t > thresholds.max => Self::High,
            Some(_) => Self::Normal,
        }
    }

    /// Returns the label as it appears in responses.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unavailable => "sensor unavailable",
            Self::Low => "low",
            Self::Normal => "normal",
            Self::High => "high",
        }
    }
}

/// Label attached to a light reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LightStatus {
    /// No usable reading.
    #[serde(rename = "sensor unavailable")]
    Unavailable,
    /// Resistance below the boundary.
    Dark,
    /// Resistance at or above the boundary.
    Normal,
}

impl LightStatus {
    /// Classifies a photoresistor reading in ohms.
    #[must_use]
    pub fn classify(res_ohm: Option<f64>, threshold: &LightThreshold) -> Self {
        match res_ohm {
            None => Self::Unavailable,
            Some(r) if r < threshold.min => Self::Dark,
            Some(_) => Self::Normal,
        }
    }

    /// Returns the label as it appears in responses.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unavailable => "sensor unavailable",
            Self::Dark => "dark",
            Self::Normal => "normal",
        }
    }
}

/// Envelope returned by the temperature endpoint.
///
/// Serializes as
/// `{"temperature_celsius": <raw|null>, "etat": <label>, "source": "ESP32"}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemperatureReading {
    temperature_celsius: Option<Value>,
    etat: TemperatureStatus,
    source: &'static str,
}

impl TemperatureReading {
    /// Field read from the device body.
    pub const FIELD: &'static str = "celsius";

    /// Builds the envelope from the device's answer.
    ///
    /// The raw `celsius` value is echoed as-is; a value that is not a number
    /// is classified as unavailable.
    #[must_use]
    pub fn from_device(response: &DeviceResponse, thresholds: &TemperatureThresholds) -> Self {
        let raw = response.field(Self::FIELD).cloned();
        let etat = TemperatureStatus::classify(raw.as_ref().and_then(Value::as_f64), thresholds);
        Self {
            temperature_celsius: raw,
            etat,
            source: SOURCE,
        }
    }

    /// Returns the reading in degrees Celsius, if numeric.
    #[must_use]
    pub fn celsius(&self) -> Option<f64> {
        self.temperature_celsius.as_ref().and_then(Value::as_f64)
    }

    /// Returns the status label.
    #[must_use]
    pub fn status(&self) -> TemperatureStatus {
        self.etat
    }
}

/// Envelope returned by the light endpoint.
///
/// Serializes as
/// `{"resistance_ohm": <raw|null>, "etat": <label>, "source": "ESP32"}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LightReading {
    resistance_ohm: Option<Value>,
    etat: LightStatus,
    source: &'static str,
}

impl LightReading {
    /// Field read from the device body.
    pub const FIELD: &'static str = "res_ohm";

    /// Builds the envelope from the device's answer.
    #[must_use]
    pub fn from_device(response: &DeviceResponse, threshold: &LightThreshold) -> Self {
        let raw = response.field(Self::FIELD).cloned();
        let etat = LightStatus::classify(raw.as_ref().and_then(Value::as_f64), threshold);
        Self {
            resistance_ohm: raw,
            etat,
            source: SOURCE,
        }
    }

    /// Returns the resistance in ohms, if numeric.
    #[must_use]
    pub fn res_ohm(&self) -> Option<f64> {
        self.resistance_ohm.as_ref().and_then(Value::as_f64)
    }

    /// Returns the status label.
    #[must_use]
    pub fn status(&self) -> LightStatus {
        self.etat
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const T: TemperatureThresholds = TemperatureThresholds::DEFAULT;
    const L: LightThreshold = LightThreshold::DEFAULT;

    #[test]
    fn temperature_buckets() {
        let cases = [
            (-40.0, TemperatureStatus::Low),
            (9.99, TemperatureStatus::Low),
            (10.0, TemperatureStatus::Normal),
            (21.5, TemperatureStatus::Normal),
            (30.0, TemperatureStatus::Normal),
            (30.01, TemperatureStatus::High),
            (85.0, TemperatureStatus::High),
        ];
        for (value, expected) in cases {
            assert_eq!(
                TemperatureStatus::classify(Some(value), &T),
                expected,
                "{value}"
            );
        }
    }

    #[test]
    fn light_buckets() {
        assert_eq!(LightStatus::classify(Some(0.0), &L), LightStatus::Dark);
        assert_eq!(LightStatus::classify(Some(19.9), &L), LightStatus::Dark);
        assert_eq!(LightStatus::classify(Some(20.0), &L), LightStatus::Normal);
        assert_eq!(LightStatus::classify(Some(5000.0), &L), LightStatus::Normal);
        assert_eq!(LightStatus::classify(None, &L), LightStatus::Unavailable);
    }

    #[test]
    fn custom_thresholds_move_the_boundaries() {
        let t = TemperatureThresholds::new(0.0, 5.0);
        assert_eq!(TemperatureStatus::classify(Some(6.0), &t), TemperatureStatus::High);
        assert_eq!(TemperatureStatus::classify(Some(-1.0), &t), TemperatureStatus::Low);
    }

    #[test]
    fn temperature_envelope_from_body() {
        let response = DeviceResponse::Body(json!({"celsius": 22}));
        let reading = TemperatureReading::from_device(&response, &T);
        assert_eq!(
            serde_json::to_value(&reading).unwrap(),
            json!({"temperature_celsius": 22, "etat": "normal", "source": "ESP32"})
        );
        assert_eq!(reading.celsius(), Some(22.0));
    }

    #[test]
    fn temperature_envelope_when_unreachable() {
        let response = DeviceResponse::unreachable("timed out");
        let reading = TemperatureReading::from_device(&response, &T);
        assert_eq!(
            serde_json::to_value(&reading).unwrap(),
            json!({"temperature_celsius": null, "etat": "sensor unavailable", "source": "ESP32"})
        );
    }

    #[test]
    fn non_numeric_reading_is_unavailable_but_echoed() {
        let response = DeviceResponse::Body(json!({"celsius": "n/a"}));
        let reading = TemperatureReading::from_device(&response, &T);
        assert_eq!(reading.status(), TemperatureStatus::Unavailable);
        assert_eq!(
            serde_json::to_value(&reading).unwrap()["temperature_celsius"],
            json!("n/a")
        );
    }

    #[test]
    fn light_envelope_dark() {
        let response = DeviceResponse::Body(json!({"res_ohm": 12.5, "raw": 3400}));
        let reading = LightReading::from_device(&response, &L);
        assert_eq!(
            serde_json::to_value(&reading).unwrap(),
            json!({"resistance_ohm": 12.5, "etat": "dark", "source": "ESP32"})
        );
    }

    #[test]
    fn light_envelope_missing_field() {
        let response = DeviceResponse::Body(json!({}));
        let reading = LightReading::from_device(&response, &L);
        assert_eq!(reading.status(), LightStatus::Unavailable);
        assert_eq!(reading.res_ohm(), None);
    }

    #[test]
    fn labels_match_serialized_form() {
        for status in [
            TemperatureStatus::Unavailable,
            TemperatureStatus::Low,
            TemperatureStatus::Normal,
            TemperatureStatus::High,
        ] {
            assert_eq!(serde_json::to_value(status).unwrap(), json!(status.as_str()));
        }
        for status in [LightStatus::Unavailable, LightStatus::Dark, LightStatus::Normal] {
            assert_eq!(serde_json::to_value(status).unwrap(), json!(status.as_str()));
        }
    }
}
