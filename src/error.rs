// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the gateway.
//!
//! Input validation failures ([`ValueError`]) never reach the device. Transport
//! and decoding failures ([`ProtocolError`], [`ParseError`]) are what the
//! gateway reports as "device unreachable".

use thiserror::Error;

/// The main error type for this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// Error occurred while talking to the device.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// The device answered with a body that is not valid JSON.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
}

impl Error {
    /// Returns `true` if this error means the device could not be reached
    /// or did not answer with usable JSON.
    #[must_use]
    pub fn is_unreachable(&self) -> bool {
        matches!(self, Self::Protocol(_) | Self::Parse(_))
    }
}

/// Errors raised when a path or query value is outside its allowed set.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// The LED identifier is not one the device knows.
    #[error("unknown led: {0}")]
    UnknownLed(String),

    /// The LED state is not `on`, `off` or `toggle`.
    #[error("invalid led state: {0}")]
    InvalidLedState(String),

    /// The mode is not `auto` or `manual`.
    #[error("invalid mode: {0}")]
    InvalidMode(String),
}

/// Errors related to HTTP communication with the device.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// The request could not be sent or the response could not be read.
    ///
    /// Covers refused connections and timeouts.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The device answered with a non-success status.
    #[error("HTTP {code} - {reason}")]
    Status {
        /// Numeric status code.
        code: u16,
        /// Canonical reason phrase.
        reason: String,
    },

    /// Invalid URL or address.
    #[error("invalid address: {0}")]
    InvalidAddress(String),
}

/// Errors related to decoding device responses.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for this crate.
pub type Result<T> = std::result::Result<T, Error>;
