// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device operating mode.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ValueError;

/// Operating mode of the device.
///
/// In `auto` mode the firmware drives the LEDs from its own sensor
/// thresholds; in `manual` mode only explicit LED commands change them.
///
/// # Examples
///
/// ```
/// use esp32_gateway::types::Mode;
///
/// assert_eq!("auto".parse::<Mode>().unwrap(), Mode::Auto);
/// assert_eq!(Mode::Manual.as_str(), "manual");
/// assert!("bogus".parse::<Mode>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Firmware-controlled.
    Auto,
    /// Caller-controlled.
    Manual,
}

impl Mode {
    /// Returns the mode as sent to the device.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Manual => "manual",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(Self::Auto),
            "manual" => Ok(Self::Manual),
            _ => Err(ValueError::InvalidMode(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_round_trips_through_str() {
        for mode in [Mode::Auto, Mode::Manual] {
            assert_eq!(mode.to_string().parse::<Mode>().unwrap(), mode);
        }
    }

    #[test]
    fn mode_is_case_sensitive() {
        assert_eq!(
            "Auto".parse::<Mode>(),
            Err(ValueError::InvalidMode("Auto".to_string()))
        );
    }
}
