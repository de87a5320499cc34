// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Inbound HTTP surface.
//!
//! # Endpoints
//!
//! - `GET /temperature` - Labelled temperature reading
//! - `GET /luminosite` - Labelled light reading
//! - `POST /config/temperature?min=&max=` - Push temperature thresholds
//! - `POST /config/luminosite?min=` - Push light threshold
//! - `GET /mode` - Current device mode
//! - `POST /mode/{value}` - Force `auto` or `manual`
//! - `POST /led/{id}/{state}` - Switch an LED
//! - `GET /health` - Liveness check
//! - `GET /info` - Gateway info
//!
//! Failures are reported in-band with HTTP 200, except a failed LED device
//! call which answers HTTP 502.

mod handlers;
mod routes;

use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;

pub use handlers::ApiError;

use crate::Gateway;

/// Shared application state.
#[derive(Debug)]
pub struct AppState {
    gateway: Gateway,
}

impl AppState {
    /// Wraps a gateway for use by the handlers.
    #[must_use]
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    /// Returns the gateway.
    #[must_use]
    pub fn gateway(&self) -> &Gateway {
        &self.gateway
    }
}

/// Builds the full router with request tracing.
pub fn build_router(gateway: Gateway) -> Router {
    let state = Arc::new(AppState::new(gateway));

    Router::new()
        .merge(routes::api_routes())
        .merge(routes::service_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
