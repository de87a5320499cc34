// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP request handlers.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use serde_json::{Value, json};

use super::AppState;
use crate::error::Error;
use crate::protocol::{DeviceResponse, Unreachable};
use crate::response::{
    LedResponse, LightConfigResponse, LightReading, Outcome, TemperatureConfigResponse,
    TemperatureReading,
};
use crate::types::{LightThreshold, TemperatureThresholds};

/// Failed LED device call, answered with 502 Bad Gateway.
#[derive(Debug)]
pub struct ApiError {
    body: Unreachable,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (StatusCode::BAD_GATEWAY, Json(self.body)).into_response()
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self {
            body: Unreachable::new(err.to_string()),
        }
    }
}

/// Query of `POST /config/temperature`.
#[derive(Debug, Deserialize)]
pub struct TemperatureParams {
    min: f64,
    max: f64,
}

/// Query of `POST /config/luminosite`.
#[derive(Debug, Deserialize)]
pub struct LightParams {
    min: f64,
}

/// GET /temperature
pub async fn temperature(State(state): State<Arc<AppState>>) -> Json<TemperatureReading> {
    Json(state.gateway().temperature().await)
}

/// GET /luminosite
pub async fn light(State(state): State<Arc<AppState>>) -> Json<LightReading> {
    Json(state.gateway().light().await)
}

/// POST /config/temperature
pub async fn set_temperature(
    State(state): State<Arc<AppState>>,
    Query(params): Query<TemperatureParams>,
) -> Json<TemperatureConfigResponse> {
    let thresholds = TemperatureThresholds::new(params.min, params.max);
    Json(state.gateway().set_temperature_thresholds(thresholds).await)
}

/// POST /config/luminosite
pub async fn set_light(
    State(state): State<Arc<AppState>>,
    Query(params): Query<LightParams>,
) -> Json<LightConfigResponse> {
    let threshold = LightThreshold::new(params.min);
    Json(state.gateway().set_light_threshold(threshold).await)
}

/// GET /mode
pub async fn mode(State(state): State<Arc<AppState>>) -> Json<DeviceResponse> {
    Json(state.gateway().mode().await)
}

/// POST /mode/{value}
pub async fn set_mode(
    State(state): State<Arc<AppState>>,
    Path(value): Path<String>,
) -> Json<Outcome<DeviceResponse>> {
    Json(state.gateway().set_mode(&value).await)
}

/// POST /led/{id}/{state}
pub async fn control_led(
    State(state): State<Arc<AppState>>,
    Path((led_id, led_state)): Path<(String, String)>,
) -> Result<Json<Outcome<LedResponse>>, ApiError> {
    let outcome = state.gateway().control_led(&led_id, &led_state).await?;
    Ok(Json(outcome))
}

/// GET /health
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// GET /info
pub async fn info(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "device": state.gateway().device_url(),
        "endpoints": [
            "/temperature",
            "/luminosite",
            "/config/temperature",
            "/config/luminosite",
            "/mode",
            "/mode/{value}",
            "/led/{id}/{state}",
            "/health",
            "/info"
        ]
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_is_bad_gateway() {
        let json_err = serde_json::from_str::<Value>("x").unwrap_err();
        let err = ApiError::from(Error::Parse(json_err.into()));
        assert_eq!(
            err.body.details(),
            "parse error: JSON parse error: expected value at line 1 column 1"
        );
        assert_eq!(err.into_response().status(), StatusCode::BAD_GATEWAY);
    }
}
