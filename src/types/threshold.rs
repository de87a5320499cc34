// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Sensor threshold values.

use serde::{Deserialize, Serialize};

/// Temperature boundaries in degrees Celsius.
///
/// Readings strictly below `min` are low, strictly above `max` are high.
///
/// # Examples
///
/// ```
/// use esp32_gateway::types::TemperatureThresholds;
///
/// let t = TemperatureThresholds::default();
/// assert_eq!(t.min, 10.0);
/// assert_eq!(t.max, 30.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemperatureThresholds {
    /// Lower boundary.
    pub min: f64,
    /// Upper boundary.
    pub max: f64,
}

impl TemperatureThresholds {
    /// Boundaries used when nothing else is configured.
    pub const DEFAULT: Self = Self {
        min: 10.0,
        max: 30.0,
    };

    /// Creates a new pair of boundaries.
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

impl Default for TemperatureThresholds {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Light sensor boundary, as a photoresistor resistance in ohms.
///
/// Readings strictly below `min` are dark.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LightThreshold {
    /// Lower boundary.
    pub min: f64,
}

impl LightThreshold {
    /// Boundary used when nothing else is configured.
    pub const DEFAULT: Self = Self { min: 20.0 };

    /// Creates a new boundary.
    #[must_use]
    pub const fn new(min: f64) -> Self {
        Self { min }
    }
}

impl Default for LightThreshold {
    fn default() -> Self {
        Self::DEFAULT
    }
}
