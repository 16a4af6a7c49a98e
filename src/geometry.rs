// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of smart-edge and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Canvas-space primitives: rectangles, connection points and pitch rounding.
//!
//! Canvas coordinates follow the usual screen convention: `x` grows to the right and
//! `y` grows downward.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::RoutingError;

/// The face of a node a connection point is attached to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Top,
    Right,
    Bottom,
}

impl Side {
    /// Unit grid step along the face's outward normal.
    pub fn outward(self) -> (i32, i32) {
        match self {
            Self::Left => (-1, 0),
            Self::Top => (0, -1),
            Self::Right => (1, 0),
            Self::Bottom => (0, 1),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Top => "top",
            Self::Right => "right",
            Self::Bottom => "bottom",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct CanvasPoint {
    pub x: f64,
    pub y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub side: Option<Side>,
}

impl CanvasPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, side: None }
    }

    pub fn with_side(x: f64, y: f64, side: Side) -> Self {
        Self { x, y, side: Some(side) }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    pub fn midpoint(&self, other: &Self) -> Self {
        Self::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
}

/// Axis-aligned rectangle in canvas units.
///
/// Always satisfies `x_min <= x_max` and `y_min <= y_max` with finite bounds; every
/// constructor that could break this returns [`RoutingError::InvalidGeometry`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    x_min: f64,
    y_min: f64,
    x_max: f64,
    y_max: f64,
}

impl Rect {
    pub fn new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Result<Self, RoutingError> {
        if !(x_min.is_finite() && y_min.is_finite() && x_max.is_finite() && y_max.is_finite()) {
            return Err(RoutingError::invalid_geometry(format!(
                "rectangle ({x_min}, {y_min})..({x_max}, {y_max}) has non-finite bounds"
            )));
        }
        if x_min > x_max || y_min > y_max {
            return Err(RoutingError::invalid_geometry(format!(
                "rectangle ({x_min}, {y_min})..({x_max}, {y_max}) is inverted"
            )));
        }
        Ok(Self { x_min, y_min, x_max, y_max })
    }

    pub fn from_origin_size(x: f64, y: f64, width: f64, height: f64) -> Result<Self, RoutingError> {
        Self::new(x, y, x + width, y + height)
    }

    /// The empty rectangle at the origin.
    pub fn zero() -> Self {
        Self { x_min: 0.0, y_min: 0.0, x_max: 0.0, y_max: 0.0 }
    }

    pub fn x_min(&self) -> f64 {
        self.x_min
    }

    pub fn y_min(&self) -> f64 {
        self.y_min
    }

    pub fn x_max(&self) -> f64 {
        self.x_max
    }

    pub fn y_max(&self) -> f64 {
        self.y_max
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    pub fn has_area(&self) -> bool {
        self.width() > 0.0 && self.height() > 0.0
    }

    pub fn union(&self, other: &Self) -> Self {
        Self {
            x_min: self.x_min.min(other.x_min),
            y_min: self.y_min.min(other.y_min),
            x_max: self.x_max.max(other.x_max),
            y_max: self.y_max.max(other.y_max),
        }
    }

    /// Grows the rectangle by `margin` on every side. Negative margins shrink it and fail
    /// once the rectangle would invert.
    pub fn expand(&self, margin: f64) -> Result<Self, RoutingError> {
        Self::new(
            self.x_min - margin,
            self.y_min - margin,
            self.x_max + margin,
            self.y_max + margin,
        )
    }

    /// Snaps every edge outward to the nearest multiple of `pitch`.
    pub fn round_out(&self, pitch: f64) -> Self {
        Self {
            x_min: round_down(self.x_min, pitch),
            y_min: round_down(self.y_min, pitch),
            x_max: round_up(self.x_max, pitch),
            y_max: round_up(self.y_max, pitch),
        }
    }

    /// Closed containment: points on the boundary are inside.
    pub fn contains_point(&self, point: &CanvasPoint) -> bool {
        point.x >= self.x_min
            && point.x <= self.x_max
            && point.y >= self.y_min
            && point.y <= self.y_max
    }

    /// True if the open interiors intersect. Rectangles that only share an edge or a
    /// corner do not overlap.
    pub fn overlaps_interior(&self, other: &Self) -> bool {
        self.x_min < other.x_max
            && other.x_min < self.x_max
            && self.y_min < other.y_max
            && other.y_min < self.y_max
    }
}

/// Largest multiple of `pitch` that is `<= value`.
pub fn round_down(value: f64, pitch: f64) -> f64 {
    (value / pitch).floor() * pitch
}

/// Smallest multiple of `pitch` that is `>= value`.
pub fn round_up(value: f64, pitch: f64) -> f64 {
    (value / pitch).ceil() * pitch
}

/// Number of whole pitches nearest to `value`, halves rounded away from zero.
pub fn nearest_step(value: f64, pitch: f64) -> f64 {
    (value / pitch).round()
}
