// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of smart-edge and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! SVG path data for routed edges.
//!
//! Drawers see the polyline `source, waypoints.., target` and return the `d` attribute of an
//! SVG `<path>`. Output is deterministic: the same points always give the same bytes.

use std::fmt::{self, Write as _};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::geometry::CanvasPoint;

/// Turns a routed polyline into a drawable path description.
pub trait CurveDrawer: Send + Sync {
    fn draw(
        &self,
        source: &CanvasPoint,
        target: &CanvasPoint,
        waypoints: &[CanvasPoint],
    ) -> String;
}

/// Straight segments through every waypoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StraightCurveDrawer;

impl CurveDrawer for StraightCurveDrawer {
    fn draw(
        &self,
        source: &CanvasPoint,
        target: &CanvasPoint,
        waypoints: &[CanvasPoint],
    ) -> String {
        straight_path(source, target, waypoints).unwrap_or_default()
    }
}

fn straight_path(
    source: &CanvasPoint,
    target: &CanvasPoint,
    waypoints: &[CanvasPoint],
) -> Result<String, fmt::Error> {
    let mut out = String::with_capacity(16 * (waypoints.len() + 2));
    out.push('M');
    push_point(&mut out, source)?;
    for point in waypoints.iter().chain(std::iter::once(target)) {
        out.push_str(" L");
        push_point(&mut out, point)?;
    }
    Ok(out)
}

/// Rounds every corner with a quadratic Bézier whose control point is the corner itself and
/// whose ends are the midpoints of the adjacent segments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SmoothCurveDrawer;

impl CurveDrawer for SmoothCurveDrawer {
    fn draw(
        &self,
        source: &CanvasPoint,
        target: &CanvasPoint,
        waypoints: &[CanvasPoint],
    ) -> String {
        smooth_path(source, target, waypoints).unwrap_or_default()
    }
}

fn smooth_path(
    source: &CanvasPoint,
    target: &CanvasPoint,
    waypoints: &[CanvasPoint],
) -> Result<String, fmt::Error> {
    let points = std::iter::once(source)
        .chain(waypoints.iter())
        .chain(std::iter::once(target))
        .collect::<Vec<_>>();

    let mut out = String::with_capacity(32 * points.len());
    out.push('M');
    push_point(&mut out, points[0])?;

    let last = points.len() - 1;
    for idx in 0..last {
        if idx == 0 {
            out.push_str(" L");
        } else {
            out.push_str(" Q");
            push_point(&mut out, points[idx])?;
        }
        push_point(&mut out, &points[idx].midpoint(points[idx + 1]))?;
    }

    out.push_str(" L");
    push_point(&mut out, points[last])?;
    Ok(out)
}

/// Built-in drawers selectable from configuration.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum CurveKind {
    #[default]
    Smooth,
    Straight,
}

impl CurveKind {
    pub fn drawer(self) -> Box<dyn CurveDrawer> {
        match self {
            Self::Smooth => Box::new(SmoothCurveDrawer),
            Self::Straight => Box::new(StraightCurveDrawer),
        }
    }
}

fn push_point(out: &mut String, point: &CanvasPoint) -> fmt::Result {
    out.push(' ');
    push_coord(out, point.x)?;
    out.push(',');
    push_coord(out, point.y)
}

/// Integral values print without a fraction; everything else uses the shortest
/// representation that reads back to the same `f64`.
pub(crate) fn push_coord(out: &mut String, value: f64) -> fmt::Result {
    const EXACT_INT_LIMIT: f64 = 9_007_199_254_740_992.0;
    if value.fract() == 0.0 && value.abs() < EXACT_INT_LIMIT {
        out.push_str(itoa::Buffer::new().format(value as i64));
        return Ok(());
    }
    write!(out, "{value}")
}
