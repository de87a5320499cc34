// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device command definitions.
//!
//! Every call the gateway makes against the device is a typed command that
//! knows its path, its query parameters and how long the device may take to
//! answer.
//!
//! # Available Commands
//!
//! | Command Type | Device path | Timeout |
//! |-------------|-------------|---------|
//! | [`SensorCommand::Temperature`] | `/temp` | 2 s |
//! | [`SensorCommand::Light`] | `/ldr` | 10 s |
//! | [`ThresholdCommand::Temperature`] | `/config/temp?min=&max=` | 2 s |
//! | [`ThresholdCommand::Light`] | `/config/ldr?min=` | 10 s |
//! | [`ModeCommand`] | `/mode` or `/mode?set=` | 2 s |
//! | [`LedCommand`] | `/led?id=&state=` | 20 s |
//!
//! # Examples
//!
//! ```
//! use esp32_gateway::command::{DeviceCommand, LedCommand};
//! use esp32_gateway::types::{LedId, LedState};
//!
//! let cmd = LedCommand::new(LedId::OneRed, LedState::On);
//! assert_eq!(cmd.path(), "/led");
//! assert_eq!(cmd.to_request_path(), "/led?id=1R&state=on");
//! ```

mod led;
mod mode;
mod sensor;
mod threshold;

use std::time::Duration;

pub use led::LedCommand;
pub use mode::ModeCommand;
pub use sensor::SensorCommand;
pub use threshold::ThresholdCommand;

/// A request that can be sent to the device.
pub trait DeviceCommand {
    /// Returns the device path, starting with `/`.
    fn path(&self) -> &'static str;

    /// Returns the query parameters, in order.
    fn query(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }

    /// Returns the timeout for this call.
    ///
    /// `None` uses the client's configured default.
    fn timeout(&self) -> Option<Duration> {
        None
    }

    /// Returns `true` if a non-success HTTP status counts as a failure.
    ///
    /// Commands that return `false` hand the device's body back whatever
    /// the status code.
    fn checks_status(&self) -> bool {
        true
    }

    /// Returns the path with its percent-encoded query string.
    fn to_request_path(&self) -> String {
        let query = self.query();
        if query.is_empty() {
            return self.path().to_string();
        }

        let encoded = query
            .iter()
            .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&");

        format!("{}?{encoded}", self.path())
    }
}

/// Formats a float the way the firmware's existing clients send it.
///
/// Integral values keep one decimal (`10.0`); others use the shortest
/// representation that round-trips (`10.25`).
#[allow(clippy::float_cmp)]
pub(crate) fn format_float(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Mode;

    #[test]
    fn request_path_without_query() {
        assert_eq!(SensorCommand::Temperature.to_request_path(), "/temp");
    }

    #[test]
    fn request_path_encodes_values() {
        struct Raw;
        impl DeviceCommand for Raw {
            fn path(&self) -> &'static str {
                "/raw"
            }
            fn query(&self) -> Vec<(&'static str, String)> {
                vec![("v", "a b&c".to_string())]
            }
        }
        assert_eq!(Raw.to_request_path(), "/raw?v=a%20b%26c");
    }

    #[test]
    fn request_path_with_single_param() {
        assert_eq!(
            ModeCommand::Set(Mode::Manual).to_request_path(),
            "/mode?set=manual"
        );
    }

    #[test]
    fn format_float_keeps_one_decimal_for_integers() {
        assert_eq!(format_float(10.0), "10.0");
        assert_eq!(format_float(-5.0), "-5.0");
        assert_eq!(format_float(0.0), "0.0");
    }

    #[test]
    fn format_float_fractional() {
        assert_eq!(format_float(10.5), "10.5");
        assert_eq!(format_float(0.1), "0.1");
    }
}
