// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Shared threshold table read by the classifiers.

use parking_lot::RwLock;

use crate::types::{LightThreshold, TemperatureThresholds};

/// Thresholds used to label sensor readings.
///
/// Reads take a snapshot; writes replace one table entry at a time. Locks
/// are never held across an await point.
///
/// # Examples
///
/// ```
/// use esp32_gateway::state::ThresholdStore;
/// use esp32_gateway::types::{LightThreshold, TemperatureThresholds};
///
/// let store = ThresholdStore::default();
/// assert_eq!(store.temperature(), TemperatureThresholds::DEFAULT);
///
/// store.set_light(LightThreshold::new(50.0));
/// assert_eq!(store.light().min, 50.0);
/// ```
#[derive(Debug, Default)]
pub struct ThresholdStore {
    temperature: RwLock<TemperatureThresholds>,
    light: RwLock<LightThreshold>,
}

impl ThresholdStore {
    /// Creates a store seeded with the given values.
    #[must_use]
    pub fn new(temperature: TemperatureThresholds, light: LightThreshold) -> Self {
        Self {
            temperature: RwLock::new(temperature),
            light: RwLock::new(light),
        }
    }

    /// Returns the current temperature boundaries.
    #[must_use]
    pub fn temperature(&self) -> TemperatureThresholds {
        *self.temperature.read()
    }

    /// Returns the current light boundary.
    #[must_use]
    pub fn light(&self) -> LightThreshold {
        *self.light.read()
    }

    /// Replaces the temperature boundaries.
    pub fn set_temperature(&self, thresholds: TemperatureThresholds) {
        tracing::debug!(min = thresholds.min, max = thresholds.max, "Updating temperature thresholds");
        *self.temperature.write() = thresholds;
    }

    /// Replaces the light boundary.
    pub fn set_light(&self, threshold: LightThreshold) {
        tracing::debug!(min = threshold.min, "Updating light threshold");
        *self.light.write() = threshold;
    }
}
