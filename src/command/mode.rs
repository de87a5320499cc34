// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Mode query and selection.

use std::time::Duration;

use super::DeviceCommand;
use crate::types::Mode;

/// Reads or forces the device operating mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeCommand {
    /// Query the current mode.
    Get,
    /// Force a mode.
    Set(Mode),
}

impl DeviceCommand for ModeCommand {
    fn path(&self) -> &'static str {
        "/mode"
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::Get => Vec::new(),
            Self::Set(mode) => vec![("set", mode.as_str().to_string())],
        }
    }

    fn timeout(&self) -> Option<Duration> {
        Some(Duration::from_secs(2))
    }
}
