// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of smart-edge and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

/// Which end of an edge a diagnostic refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Source,
    Target,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Source => f.write_str("source"),
            Self::Target => f.write_str("target"),
        }
    }
}

/// Failures of a single routing computation.
///
/// An unreachable target is not an error: it yields an empty path.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RoutingError {
    #[error("invalid geometry: {reason}")]
    InvalidGeometry { reason: String },

    #[error("{endpoint} endpoint at ({x}, {y}) has no free grid cell within {radius} cells")]
    UnroutableEndpoint { endpoint: Endpoint, x: f64, y: f64, radius: usize },

    #[error("routing grid of {columns}x{rows} cells exceeds the limit of {limit} cells")]
    GridTooLarge { columns: usize, rows: usize, limit: usize },
}

impl RoutingError {
    pub(crate) fn invalid_geometry(reason: impl Into<String>) -> Self {
        Self::InvalidGeometry { reason: reason.into() }
    }
}
