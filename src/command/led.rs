// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! LED control command.

use std::time::Duration;

use super::DeviceCommand;
use crate::types::{LedId, LedState};

/// Switches one LED channel (or all of them).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedCommand {
    led: LedId,
    state: LedState,
}

impl LedCommand {
    /// Device-side timeout; `all` walks every channel before answering.
    pub const TIMEOUT: Duration = Duration::from_secs(20);

    /// Creates a new LED command.
    #[must_use]
    pub const fn new(led: LedId, state: LedState) -> Self {
        Self { led, state }
    }

    /// Returns the targeted LED.
    #[must_use]
    pub const fn led(&self) -> LedId {
        self.led
    }

    /// Returns the requested state.
    #[must_use]
    pub const fn state(&self) -> LedState {
        self.state
    }
}

impl DeviceCommand for LedCommand {
    fn path(&self) -> &'static str {
        "/led"
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        vec![
            ("id", self.led.as_str().to_string()),
            ("state", self.state.as_str().to_string()),
        ]
    }

    fn timeout(&self) -> Option<Duration> {
        Some(Self::TIMEOUT)
    }

    // The device body is relayed as-is, error statuses included.
    fn checks_status(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn led_command_query() {
        let cmd = LedCommand::new(LedId::All, LedState::Toggle);
        assert_eq!(cmd.to_request_path(), "/led?id=all&state=toggle");
        assert_eq!(cmd.timeout(), Some(Duration::from_secs(20)));
        assert!(!cmd.checks_status());
    }

    #[test]
    fn led_command_accessors() {
        let cmd = LedCommand::new(LedId::TwoGreen, LedState::Off);
        assert_eq!(cmd.led(), LedId::TwoGreen);
        assert_eq!(cmd.state(), LedState::Off);
    }
}
