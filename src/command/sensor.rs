// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Sensor read commands.

use std::time::Duration;

use super::DeviceCommand;

/// Reads one of the device's sensors.
///
/// The light sensor samples for several seconds before answering, hence
/// its longer timeout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorCommand {
    /// Temperature in degrees Celsius (`celsius` field).
    Temperature,
    /// Photoresistor resistance in ohms (`res_ohm` field).
    Light,
}

impl DeviceCommand for SensorCommand {
    fn path(&self) -> &'static str {
        match self {
            Self::Temperature => "/temp",
            Self::Light => "/ldr",
        }
    }

    fn timeout(&self) -> Option<Duration> {
        match self {
            Self::Temperature => Some(Duration::from_secs(2)),
            Self::Light => Some(Duration::from_secs(10)),
        }
    }
}
