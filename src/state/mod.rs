// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Gateway-side state shared between requests.
//!
//! The only such state is the [`ThresholdStore`]. It starts from the fixed
//! firmware table and changes only when threshold syncing is enabled in
//! [`GatewayConfig`](crate::GatewayConfig).

mod threshold_store;

pub use threshold_store::ThresholdStore;
