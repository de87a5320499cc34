// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Threshold configuration commands.

use std::time::Duration;

use super::{DeviceCommand, format_float};
use crate::types::{LightThreshold, TemperatureThresholds};

/// Pushes new sensor thresholds to the device firmware.
///
/// # Examples
///
/// ```
/// use esp32_gateway::command::{DeviceCommand, ThresholdCommand};
/// use esp32_gateway::types::TemperatureThresholds;
///
/// let cmd = ThresholdCommand::Temperature(TemperatureThresholds::new(12.0, 28.5));
/// assert_eq!(cmd.to_request_path(), "/config/temp?min=12.0&max=28.5");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ThresholdCommand {
    /// Set the low/high temperature boundaries.
    Temperature(TemperatureThresholds),
    /// Set the dark boundary of the light sensor.
    Light(LightThreshold),
}

impl DeviceCommand for ThresholdCommand {
    fn path(&self) -> &'static str {
        match self {
            Self::Temperature(_) => "/config/temp",
            Self::Light(_) => "/config/ldr",
        }
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::Temperature(t) => vec![("min", format_float(t.min)), ("max", format_float(t.max))],
            Self::Light(l) => vec![("min", format_float(l.min))],
        }
    }

    fn timeout(&self) -> Option<Duration> {
        match self {
            Self::Temperature(_) => Some(Duration::from_secs(2)),
            Self::Light(_) => Some(Duration::from_secs(10)),
        }
    }
}
