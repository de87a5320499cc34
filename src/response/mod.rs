// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Response envelopes returned by the gateway.
//!
//! Every envelope serializes to the exact JSON shape clients of the device
//! already consume, including the French `etat` key and the uppercase
//! threshold echoes.

mod config;
mod led;
mod reading;
mod rejection;

pub use config::{LightConfigResponse, TemperatureConfigResponse};
pub use led::LedResponse;
pub use reading::{LightReading, LightStatus, SOURCE, TemperatureReading, TemperatureStatus};
pub use rejection::Rejection;

use serde::Serialize;

/// Result of an operation that validates its input first.
///
/// Serializes transparently as either the completed value or the
/// [`Rejection`] object.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Outcome<T> {
    /// Input was valid and the device was called.
    Completed(T),
    /// Input was rejected locally; the device was not called.
    Rejected(Rejection),
}

impl<T> Outcome<T> {
    /// Returns `true` if the input was rejected.
    #[must_use]
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }

    /// Returns the completed value, if any.
    #[must_use]
    pub fn completed(self) -> Option<T> {
        match self {
            Self::Completed(value) => Some(value),
            Self::Rejected(_) => None,
        }
    }
}
