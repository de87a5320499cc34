// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Local error objects for invalid input.
//!
//! These are produced before any request is sent to the device and are
//! returned in-band, like every other gateway answer.

use serde::Serialize;

use crate::error::ValueError;
use crate::types::LedId;

/// Input rejected by the gateway itself.
///
/// # Examples
///
/// ```
/// use esp32_gateway::response::Rejection;
/// use serde_json::json;
///
/// let rejection = Rejection::unknown_led("3X");
/// assert_eq!(
///     serde_json::to_value(&rejection).unwrap(),
///     json!({
///         "error": "unknown led",
///         "led_id": "3X",
///         "valid_leds": ["1R", "1V", "2R", "2V", "all"]
///     })
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Rejection {
    /// The mode is not `auto` or `manual`.
    InvalidMode {
        /// Fixed message.
        error: &'static str,
    },
    /// The LED identifier is unknown.
    UnknownLed {
        /// Fixed message.
        error: &'static str,
        /// The identifier that was given.
        led_id: String,
        /// Every accepted identifier.
        valid_leds: [LedId; 5],
    },
    /// The LED state is not `on`, `off` or `toggle`.
    InvalidState {
        /// Fixed message.
        error: &'static str,
    },
}

impl Rejection {
    /// Creates an invalid-mode rejection.
    #[must_use]
    pub const fn invalid_mode() -> Self {
        Self::InvalidMode {
            error: "invalid mode (auto/manual)",
        }
    }

    /// Creates an unknown-LED rejection for the given identifier.
    #[must_use]
    pub fn unknown_led(led_id: impl Into<String>) -> Self {
        Self::UnknownLed {
            error: "unknown led",
            led_id: led_id.into(),
            valid_leds: LedId::VALID,
        }
    }

    /// Creates an invalid-state rejection.
    #[must_use]
    pub const fn invalid_state() -> Self {
        Self::InvalidState {
            error: "invalid state",
        }
    }

    /// Returns the `error` message.
    #[must_use]
    pub fn message(&self) -> &'static str {
        match self {
            Self::InvalidMode { error }
            | Self::UnknownLed { error, .. }
            | Self::InvalidState { error } => *error,
        }
    }
}

impl From<ValueError> for Rejection {
    fn from(err: ValueError) -> Self {
        match err {
            ValueError::UnknownLed(id) => Self::unknown_led(id),
            ValueError::InvalidLedState(_) => Self::invalid_state(),
            ValueError::InvalidMode(_) => Self::invalid_mode(),
        }
    }
}
