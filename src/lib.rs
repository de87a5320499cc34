// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `esp32_gateway` - An HTTP façade for an ESP32 sensor board.
//!
//! The gateway forwards sensor reads and actuator commands to a single
//! device over HTTP, reshapes the device's JSON into stable envelopes and
//! labels readings against a threshold table.
//!
//! # Supported Features
//!
//! - **Sensors**: temperature (`low`/`normal`/`high`) and light (`dark`/`normal`)
//! - **Thresholds**: push new boundaries to the firmware
//! - **Mode**: read or force `auto`/`manual`
//! - **LEDs**: switch `1R`, `1V`, `2R`, `2V` or `all` on, off, or toggle
//!
//! # Quick Start
//!
//! ## As a library
//!
//! ```no_run
//! use esp32_gateway::{Gateway, GatewayConfig};
//!
//! #[tokio::main]
//! async fn main() -> esp32_gateway::Result<()> {
//!     let gateway = Gateway::new(GatewayConfig::device("10.100.21.50"))?;
//!
//!     let reading = gateway.temperature().await;
//!     println!("{}", serde_json::to_string(&reading).unwrap());
//!
//!     gateway.control_led("all", "toggle").await?;
//!     Ok(())
//! }
//! ```
//!
//! ## As a server
//!
//! With the default `server` feature, [`server::build_router`] returns an
//! axum router exposing every operation; the `esp32-gateway` binary serves
//! it.

pub mod command;
pub mod error;
mod gateway;
pub mod protocol;
pub mod response;
#[cfg(feature = "server")]
pub mod server;
pub mod state;
pub mod types;

pub use command::{DeviceCommand, LedCommand, ModeCommand, SensorCommand, ThresholdCommand};
pub use error::{Error, ParseError, ProtocolError, Result, ValueError};
pub use gateway::{Gateway, GatewayConfig};
pub use protocol::{DeviceResponse, HttpClient, HttpConfig, Unreachable};
pub use response::{
    LedResponse, LightConfigResponse, LightReading, LightStatus, Outcome, Rejection,
    TemperatureConfigResponse, TemperatureReading, TemperatureStatus,
};
pub use state::ThresholdStore;
pub use types::{LedId, LedState, LightThreshold, Mode, TemperatureThresholds};
