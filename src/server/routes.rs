// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Route definitions.

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};

use super::AppState;
use super::handlers;

/// Device routes.
pub fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/temperature", get(handlers::temperature))
        .route("/luminosite", get(handlers::light))
        .route("/config/temperature", post(handlers::set_temperature))
        .route("/config/luminosite", post(handlers::set_light))
        .route("/mode", get(handlers::mode))
        .route("/mode/:value", post(handlers::set_mode))
        .route("/led/:led_id/:state", post(handlers::control_led))
}

/// Gateway self-description routes.
pub fn service_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/info", get(handlers::info))
}
