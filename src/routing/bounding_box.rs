// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of smart-edge and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::error::RoutingError;
use crate::geometry::{CanvasPoint, Rect, Side};

/// A node as the host lays it out: top-left position plus size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl NodeBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    pub fn rect(&self) -> Result<Rect, RoutingError> {
        if !(self.width.is_finite() && self.height.is_finite()) {
            return Err(RoutingError::invalid_geometry(format!(
                "node at ({}, {}) has a non-finite size",
                self.x, self.y
            )));
        }
        if self.width < 0.0 || self.height < 0.0 {
            return Err(RoutingError::invalid_geometry(format!(
                "node at ({}, {}) has a negative size {}x{}",
                self.x, self.y, self.width, self.height
            )));
        }
        Rect::from_origin_size(self.x, self.y, self.width, self.height)
    }

    /// Midpoint of the given face, tagged with that face.
    pub fn anchor(&self, side: Side) -> CanvasPoint {
        let (x, y) = match side {
            Side::Left => (self.x, self.y + self.height / 2.0),
            Side::Right => (self.x + self.width, self.y + self.height / 2.0),
            Side::Top => (self.x + self.width / 2.0, self.y),
            Side::Bottom => (self.x + self.width / 2.0, self.y + self.height),
        };
        CanvasPoint::with_side(x, y, side)
    }
}

/// Obstacles plus the canvas rectangle the routing grid is laid over.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundingBoxes {
    canvas: Rect,
    obstacles: Vec<Rect>,
}

impl BoundingBoxes {
    pub fn canvas(&self) -> &Rect {
        &self.canvas
    }

    pub fn obstacles(&self) -> &[Rect] {
        &self.obstacles
    }

    /// No nodes means nothing to route around and no canvas to route on.
    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }
}

/// Free lane kept around the outermost obstacles so routes can pass them.
pub fn routing_margin(padding: f64, grid_ratio: f64) -> f64 {
    (2.0 * padding).max(grid_ratio)
}

/// Pads every node into an obstacle and derives the grid-aligned canvas around them.
///
/// An empty node list is not an error: it yields no obstacles and a zero canvas, which
/// callers treat as "no route possible".
pub fn build_boxes(
    nodes: &[NodeBox],
    padding: f64,
    grid_ratio: f64,
) -> Result<BoundingBoxes, RoutingError> {
    if !grid_ratio.is_finite() || grid_ratio <= 0.0 {
        return Err(RoutingError::invalid_geometry(format!(
            "grid ratio must be a positive finite number, got {grid_ratio}"
        )));
    }
    if !padding.is_finite() {
        return Err(RoutingError::invalid_geometry(format!(
            "node padding must be finite, got {padding}"
        )));
    }

    let mut obstacles = Vec::<Rect>::with_capacity(nodes.len());
    let mut extent: Option<Rect> = None;
    for node in nodes {
        let obstacle = node.rect()?.expand(padding)?;
        extent = Some(match extent {
            Some(extent) => extent.union(&obstacle),
            None => obstacle,
        });
        obstacles.push(obstacle);
    }

    let Some(extent) = extent else {
        return Ok(BoundingBoxes { canvas: Rect::zero(), obstacles });
    };

    let canvas = extent.expand(routing_margin(padding, grid_ratio))?.round_out(grid_ratio);
    Ok(BoundingBoxes { canvas, obstacles })
}
