// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of smart-edge and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::time::Duration;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::draw::CurveKind;
use crate::error::RoutingError;
use crate::routing::search::PathFinderKind;

pub const DEFAULT_GRID_RATIO: f64 = 10.0;
pub const DEFAULT_NODE_PADDING: f64 = 10.0;
pub const DEFAULT_DEBOUNCE_MS: u64 = 200;

/// Per-call routing configuration.
///
/// Keys use the host's camelCase spelling so a host can hand its option object over
/// unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct SmartEdgeOptions {
    /// Canvas units per grid cell. Smaller is more precise but slower.
    pub grid_ratio: f64,
    /// Clearance added around every node before it becomes an obstacle.
    pub node_padding: f64,
    /// Host-side recompute throttle in milliseconds. Not read by the router.
    pub debounce_time: u64,
    pub path_finder: PathFinderKind,
    pub curve: CurveKind,
}

impl Default for SmartEdgeOptions {
    fn default() -> Self {
        Self {
            grid_ratio: DEFAULT_GRID_RATIO,
            node_padding: DEFAULT_NODE_PADDING,
            debounce_time: DEFAULT_DEBOUNCE_MS,
            path_finder: PathFinderKind::default(),
            curve: CurveKind::default(),
        }
    }
}

impl SmartEdgeOptions {
    pub fn validate(&self) -> Result<(), RoutingError> {
        if !self.grid_ratio.is_finite() || self.grid_ratio <= 0.0 {
            return Err(RoutingError::invalid_geometry(format!(
                "grid ratio must be a positive finite number, got {}",
                self.grid_ratio
            )));
        }
        if !self.node_padding.is_finite() {
            return Err(RoutingError::invalid_geometry(format!(
                "node padding must be finite, got {}",
                self.node_padding
            )));
        }
        Ok(())
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_time)
    }
}
