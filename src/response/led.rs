// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! LED control result.

use serde::Serialize;
use serde_json::Value;

use crate::command::LedCommand;
use crate::types::{LedId, LedState};

/// Result of a successful LED command.
///
/// Serializes as `{"led": "1R", "state": "on", "esp32_response": {..}}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LedResponse {
    led: LedId,
    state: LedState,
    esp32_response: Value,
}

impl LedResponse {
    /// Creates a new result for the given command.
    #[must_use]
    pub fn new(command: LedCommand, esp32_response: Value) -> Self {
        Self {
            led: command.led(),
            state: command.state(),
            esp32_response,
        }
    }

    /// Returns the targeted LED.
    #[must_use]
    pub fn led(&self) -> LedId {
        self.led
    }

    /// Returns the requested state.
    #[must_use]
    pub fn state(&self) -> LedState {
        self.state
    }

    /// Returns the device's raw answer.
    #[must_use]
    pub fn esp32_response(&self) -> &Value {
        &self.esp32_response
    }
}
