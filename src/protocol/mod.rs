// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Outbound HTTP communication with the device.
//!
//! [`HttpClient`] sends [`DeviceCommand`](crate::command::DeviceCommand)s as
//! plain GET requests. [`DeviceResponse`] is what forwarding endpoints hand
//! back to callers: either the device's JSON body, or an [`Unreachable`]
//! record when the call failed.

mod http;

pub use http::{HttpClient, HttpConfig};

use serde::Serialize;
use serde_json::Value;

use crate::error::{Error, ParseError};

/// Raw response from a device command.
#[derive(Debug, Clone)]
pub struct CommandResponse {
    body: String,
}

impl CommandResponse {
    /// Creates a new command response with the given body.
    #[must_use]
    pub fn new(body: String) -> Self {
        Self { body }
    }

    /// Parses the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if the body is not valid JSON for `T`.
    pub fn parse<T: serde::de::DeserializeOwned>(&self) -> Result<T, ParseError> {
        serde_json::from_str(&self.body).map_err(Into::into)
    }
}

/// In-band error record returned when the device cannot be reached.
///
/// Serializes as `{"error": "device unreachable", "details": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Unreachable {
    error: &'static str,
    details: String,
}

impl Unreachable {
    /// Value of the `error` field.
    pub const ERROR: &'static str = "device unreachable";

    /// Creates a new record with the given failure description.
    #[must_use]
    pub fn new(details: impl Into<String>) -> Self {
        Self {
            error: Self::ERROR,
            details: details.into(),
        }
    }

    /// Returns the failure description.
    #[must_use]
    pub fn details(&self) -> &str {
        &self.details
    }
}

/// Outcome of forwarding one call to the device.
///
/// Serializes transparently: the device body as-is, or the
/// [`Unreachable`] record.
///
/// # Examples
///
/// ```
/// use esp32_gateway::protocol::DeviceResponse;
/// use serde_json::json;
///
/// let ok = DeviceResponse::Body(json!({"celsius": 21.5}));
/// assert_eq!(ok.field("celsius"), Some(&json!(21.5)));
///
/// let down = DeviceResponse::unreachable("connection refused");
/// assert!(down.is_unreachable());
/// assert_eq!(down.field("celsius"), None);
/// assert_eq!(
///     serde_json::to_value(&down).unwrap(),
///     json!({"error": "device unreachable", "details": "connection refused"})
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DeviceResponse {
    /// Parsed JSON body returned by the device.
    Body(Value),
    /// The call failed before a usable body was received.
    Unreachable(Unreachable),
}

impl DeviceResponse {
    /// Creates an unreachable response with the given failure description.
    #[must_use]
    pub fn unreachable(details: impl Into<String>) -> Self {
        Self::Unreachable(Unreachable::new(details))
    }

    /// Returns `true` if the device could not be reached.
    #[must_use]
    pub fn is_unreachable(&self) -> bool {
        matches!(self, Self::Unreachable(_))
    }

    /// Returns `true` if the response carries an `error` key, whether it
    /// was produced locally or by the device itself.
    #[must_use]
    pub fn is_error(&self) -> bool {
        match self {
            Self::Body(body) => body.get("error").is_some(),
            Self::Unreachable(_) => true,
        }
    }

    /// Looks up a top-level field of the device body.
    ///
    /// Always `None` for unreachable responses and non-object bodies.
    #[must_use]
    pub fn field(&self, key: &str) -> Option<&Value> {
        match self {
            Self::Body(body) => body.get(key),
            Self::Unreachable(_) => None,
        }
    }
}

impl From<Result<Value, Error>> for DeviceResponse {
    fn from(result: Result<Value, Error>) -> Self {
        match result {
            Ok(body) => Self::Body(body),
            Err(e) => Self::unreachable(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn command_response_parse() {
        let response = CommandResponse::new(r#"{"mode":"auto"}"#.to_string());
        let value: Value = response.parse().unwrap();
        assert_eq!(value, json!({"mode": "auto"}));
    }

    #[test]
    fn command_response_parse_invalid() {
        let response = CommandResponse::new("<html>".to_string());
        assert!(response.parse::<Value>().is_err());
    }

    #[test]
    fn body_serializes_verbatim() {
        let body = json!({"mode": "manual", "extra": [1, 2]});
        let response = DeviceResponse::Body(body.clone());
        assert_eq!(serde_json::to_value(&response).unwrap(), body);
        assert!(!response.is_error());
    }

    #[test]
    fn device_side_error_is_reported() {
        let response = DeviceResponse::Body(json!({"error": "bad param"}));
        assert!(response.is_error());
        assert!(!response.is_unreachable());
    }

    #[test]
    fn non_object_body_has_no_fields() {
        let response = DeviceResponse::Body(json!([1, 2, 3]));
        assert_eq!(response.field("celsius"), None);
    }

    #[test]
    fn from_error_result_is_unreachable() {
        let err = serde_json::from_str::<Value>("nope").unwrap_err();
        let response = DeviceResponse::from(Err(Error::Parse(err.into())));
        match response {
            DeviceResponse::Unreachable(record) => {
                assert!(record.details().starts_with("parse error"));
            }
            DeviceResponse::Body(_) => panic!("expected unreachable"),
        }
    }
}
