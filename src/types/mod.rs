// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for device control.
//!
//! Each type only admits values the device firmware understands, so invalid
//! input is rejected before any request leaves the gateway.
//!
//! # Types
//!
//! - [`LedId`] - LED channel (`1R`, `1V`, `2R`, `2V`, `all`)
//! - [`LedState`] - `on`, `off` or `toggle`
//! - [`Mode`] - `auto` or `manual`
//! - [`TemperatureThresholds`] - low/high temperature boundaries
//! - [`LightThreshold`] - dark boundary for the light sensor

mod led;
mod mode;
mod threshold;

pub use led::{LedId, LedState};
pub use mode::Mode;
pub use threshold::{LightThreshold, TemperatureThresholds};
