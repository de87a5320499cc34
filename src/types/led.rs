// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! LED identifiers and states.
//!
//! The board carries two bicolour LEDs. Each colour is addressed separately
//! (`1R`, `1V`, `2R`, `2V`) and `all` addresses every channel at once.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ValueError;

/// One LED channel on the device, or all of them.
///
/// # Examples
///
/// ```
/// use esp32_gateway::types::LedId;
///
/// let led: LedId = "1R".parse().unwrap();
/// assert_eq!(led, LedId::OneRed);
/// assert_eq!(led.as_str(), "1R");
///
/// // Identifiers are case-sensitive
/// assert!("1r".parse::<LedId>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LedId {
    /// Red channel of LED 1.
    #[serde(rename = "1R")]
    OneRed,
    /// Green channel of LED 1.
    #[serde(rename = "1V")]
    OneGreen,
    /// Red channel of LED 2.
    #[serde(rename = "2R")]
    TwoRed,
    /// Green channel of LED 2.
    #[serde(rename = "2V")]
    TwoGreen,
    /// Every channel.
    #[serde(rename = "all")]
    All,
}

impl LedId {
    /// Every valid identifier, in the order the device documents them.
    pub const VALID: [Self; 5] = [
        Self::OneRed,
        Self::OneGreen,
        Self::TwoRed,
        Self::TwoGreen,
        Self::All,
    ];

    /// Returns the identifier as sent to the device.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::OneRed => "1R",
            Self::OneGreen => "1V",
            Self::TwoRed => "2R",
            Self::TwoGreen => "2V",
            Self::All => "all",
        }
    }
}

impl fmt::Display for LedId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LedId {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::VALID
            .into_iter()
            .find(|led| led.as_str() == s)
            .ok_or_else(|| ValueError::UnknownLed(s.to_string()))
    }
}

/// Requested LED state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LedState {
    /// Switch the LED on.
    On,
    /// Switch the LED off.
    Off,
    /// Invert the current state.
    Toggle,
}

impl LedState {
    /// Returns the state as sent to the device.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::On => "on",
            Self::Off => "off",
            Self::Toggle => "toggle",
        }
    }
}

impl fmt::Display for LedState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LedState {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "on" => Ok(Self::On),
            "off" => Ok(Self::Off),
            "toggle" => Ok(Self::Toggle),
            _ => Err(ValueError::InvalidLedState(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn led_id_parses_every_valid_identifier() {
        for led in LedId::VALID {
            assert_eq!(led.as_str().parse::<LedId>().unwrap(), led);
        }
    }

    #[test]
    fn led_id_rejects_unknown() {
        assert_eq!(
            "3X".parse::<LedId>(),
            Err(ValueError::UnknownLed("3X".to_string()))
        );
        assert!("ALL".parse::<LedId>().is_err());
        assert!("".parse::<LedId>().is_err());
    }

    #[test]
    fn led_id_serializes_as_device_string() {
        let json = serde_json::to_value(LedId::VALID).unwrap();
        assert_eq!(json, serde_json::json!(["1R", "1V", "2R", "2V", "all"]));
    }

    #[test]
    fn led_state_from_str() {
        assert_eq!("on".parse::<LedState>().unwrap(), LedState::On);
        assert_eq!("off".parse::<LedState>().unwrap(), LedState::Off);
        assert_eq!("toggle".parse::<LedState>().unwrap(), LedState::Toggle);
    }

    #[test]
    fn led_state_rejects_other_spellings() {
        assert!("ON".parse::<LedState>().is_err());
        assert!("bogus-state".parse::<LedState>().is_err());
    }

    #[test]
    fn led_state_display() {
        assert_eq!(LedState::Toggle.to_string(), "toggle");
    }
}
