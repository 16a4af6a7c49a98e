// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of smart-edge and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Obstacle-avoiding edge routing.
//!
//! A routing call runs to completion on its own buffers: node boxes become padded obstacles,
//! the canvas is laid out as an occupancy grid, a [`PathFinder`] searches it, and the corner
//! cells of the result are mapped back into canvas space.

pub mod bounding_box;
pub mod coords;
pub mod grid;
pub mod search;

pub use bounding_box::{build_boxes, routing_margin, BoundingBoxes, NodeBox};
pub use coords::{graph_to_grid_point, grid_to_graph_point, GridCell};
pub use grid::{
    create_grid, create_grid_with_nudge_radius, nudge_radius_for, GridSetup, OccupancyGrid,
    DEFAULT_NUDGE_RADIUS, MAX_GRID_CELLS,
};
pub use search::{
    compress_to_polyline, AStarFinder, Connectivity, GridPath, PathFinder, PathFinderKind,
};

use crate::error::RoutingError;
use crate::geometry::{CanvasPoint, Rect};
use crate::options::SmartEdgeOptions;

/// Outcome of one routing call.
#[derive(Debug, Clone, PartialEq)]
pub struct SmartEdgeRoute {
    canvas: Rect,
    endpoints: Option<(GridCell, GridCell)>,
    path: GridPath,
    waypoints: Vec<CanvasPoint>,
    label: Option<CanvasPoint>,
}

impl SmartEdgeRoute {
    fn unroutable(canvas: Rect) -> Self {
        Self { canvas, endpoints: None, path: GridPath::empty(), waypoints: Vec::new(), label: None }
    }

    pub fn canvas(&self) -> &Rect {
        &self.canvas
    }

    /// Resolved start cell, absent when there was no grid to route on.
    pub fn start(&self) -> Option<GridCell> {
        self.endpoints.map(|(start, _)| start)
    }

    pub fn end(&self) -> Option<GridCell> {
        self.endpoints.map(|(_, end)| end)
    }

    pub fn path(&self) -> &GridPath {
        &self.path
    }

    /// Canvas positions of the smoothed path, in order.
    pub fn waypoints(&self) -> &[CanvasPoint] {
        &self.waypoints
    }

    /// Where a label sits: the canvas position of the middle cell of the full path.
    pub fn label(&self) -> Option<CanvasPoint> {
        self.label
    }

    pub fn needs_fallback(&self) -> bool {
        self.path.needs_fallback()
    }
}

/// Routes one edge between `source` and `target` around `nodes`.
///
/// Zero nodes is not an error: the route comes back empty. Endpoints are never moved off
/// their canvas position; only their grid cells are nudged out of obstacles.
pub fn route_smart_edge(
    nodes: &[NodeBox],
    source: &CanvasPoint,
    target: &CanvasPoint,
    options: &SmartEdgeOptions,
    finder: &dyn PathFinder,
) -> Result<SmartEdgeRoute, RoutingError> {
    options.validate()?;
    let boxes = build_boxes(nodes, options.node_padding, options.grid_ratio)?;
    route_with_boxes(&boxes, source, target, options, finder)
}

/// Like [`route_smart_edge`], but also hands back the occupancy grid the route was searched
/// on. Useful for debugging pictures.
pub fn route_smart_edge_with_grid(
    nodes: &[NodeBox],
    source: &CanvasPoint,
    target: &CanvasPoint,
    options: &SmartEdgeOptions,
    finder: &dyn PathFinder,
) -> Result<(SmartEdgeRoute, Option<OccupancyGrid>), RoutingError> {
    options.validate()?;
    let boxes = build_boxes(nodes, options.node_padding, options.grid_ratio)?;
    route_on_boxes(&boxes, source, target, options, finder)
}

/// Routes against prebuilt boxes, so a batch of edges can share one obstacle set.
pub(crate) fn route_with_boxes(
    boxes: &BoundingBoxes,
    source: &CanvasPoint,
    target: &CanvasPoint,
    options: &SmartEdgeOptions,
    finder: &dyn PathFinder,
) -> Result<SmartEdgeRoute, RoutingError> {
    route_on_boxes(boxes, source, target, options, finder).map(|(route, _)| route)
}

pub(crate) fn route_on_boxes(
    boxes: &BoundingBoxes,
    source: &CanvasPoint,
    target: &CanvasPoint,
    options: &SmartEdgeOptions,
    finder: &dyn PathFinder,
) -> Result<(SmartEdgeRoute, Option<OccupancyGrid>), RoutingError> {
    for (name, point) in [("source", source), ("target", target)] {
        if !point.is_finite() {
            return Err(RoutingError::invalid_geometry(format!(
                "{name} point ({}, {}) is not finite",
                point.x, point.y
            )));
        }
    }
    if boxes.is_empty() {
        tracing::debug!("no nodes to route around");
        return Ok((SmartEdgeRoute::unroutable(*boxes.canvas()), None));
    }

    let nudge_radius = nudge_radius_for(options.node_padding, options.grid_ratio);
    let setup = create_grid_with_nudge_radius(
        boxes.canvas(),
        boxes.obstacles(),
        source,
        target,
        options.grid_ratio,
        nudge_radius,
    )?;
    let (grid, start, end) = setup.into_parts();

    let path = finder.find_path_leaving(&grid, start, end, source.side);
    let waypoints = path.smoothed().iter().map(|&cell| grid.cell_to_point(cell)).collect();
    let label = path.full().get(path.full().len() / 2).map(|&cell| grid.cell_to_point(cell));

    tracing::debug!(
        full = path.full().len(),
        smoothed = path.smoothed().len(),
        fallback = path.needs_fallback(),
        "routed edge"
    );

    let route = SmartEdgeRoute {
        canvas: *boxes.canvas(),
        endpoints: Some((start, end)),
        path,
        waypoints,
        label,
    };
    Ok((route, Some(grid)))
}
