// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of smart-edge and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use smallvec::SmallVec;

use super::coords::{graph_to_grid_point, grid_to_graph_point, GridCell};
use crate::error::{Endpoint, RoutingError};
use crate::geometry::{CanvasPoint, Rect, Side};

/// Refuse grids larger than this many cells instead of allocating them.
pub const MAX_GRID_CELLS: usize = 1 << 20;

/// Nudge radius used by [`create_grid`].
pub const DEFAULT_NUDGE_RADIUS: usize = 8;

const MAX_NUDGE_RADIUS: usize = 64;
const NUDGE_SLACK: usize = 2;


/// Flat occupancy grid over the canvas.
///
/// Cell `(col, row)` owns the canvas square starting at its lattice point and extending
/// one grid ratio right and down. Storage is row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct OccupancyGrid {
    x_min: f64,
    y_min: f64,
    grid_ratio: f64,
    columns: usize,
    rows: usize,
    blocked: Vec<u8>,
}

impl OccupancyGrid {
    fn empty(x_min: f64, y_min: f64, grid_ratio: f64, columns: usize, rows: usize) -> Self {
        Self { x_min, y_min, grid_ratio, columns, rows, blocked: vec![0u8; columns * rows] }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn len(&self) -> usize {
        self.blocked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocked.is_empty()
    }

    pub fn x_min(&self) -> f64 {
        self.x_min
    }

    pub fn y_min(&self) -> f64 {
        self.y_min
    }

    pub fn grid_ratio(&self) -> f64 {
        self.grid_ratio
    }

    pub fn contains(&self, cell: GridCell) -> bool {
        self.idx_of(cell).is_some()
    }

    pub fn idx_of(&self, cell: GridCell) -> Option<usize> {
        if cell.col() < 0 || cell.row() < 0 {
            return None;
        }
        let (col, row) = (cell.col() as usize, cell.row() as usize);
        if col >= self.columns || row >= self.rows {
            return None;
        }
        Some(row * self.columns + col)
    }

    pub fn cell_of(&self, idx: usize) -> GridCell {
        GridCell::new((idx % self.columns) as i32, (idx / self.columns) as i32)
    }

    /// Cells outside the grid count as blocked.
    pub fn is_blocked(&self, cell: GridCell) -> bool {
        match self.idx_of(cell) {
            Some(idx) => self.blocked[idx] != 0,
            None => true,
        }
    }

    pub fn is_free(&self, cell: GridCell) -> bool {
        !self.is_blocked(cell)
    }

    pub(crate) fn is_blocked_idx(&self, idx: usize) -> bool {
        self.blocked[idx] != 0
    }

    pub fn blocked_count(&self) -> usize {
        self.blocked.iter().filter(|&&b| b != 0).count()
    }

    pub fn cell_to_point(&self, cell: GridCell) -> CanvasPoint {
        grid_to_graph_point(cell, self.x_min, self.y_min, self.grid_ratio)
    }

    pub fn point_to_cell(&self, point: &CanvasPoint) -> GridCell {
        graph_to_grid_point(point, self.x_min, self.y_min, self.grid_ratio)
    }

    /// Blocks every cell whose square overlaps the obstacle's interior.
    fn mark_obstacle(&mut self, obstacle: &Rect) {
        if !obstacle.has_area() {
            return;
        }
        let columns = self.span(obstacle.x_min(), obstacle.x_max(), self.x_min, self.columns);
        let rows = self.span(obstacle.y_min(), obstacle.y_max(), self.y_min, self.rows);
        let (Some((col_start, col_end)), Some((row_start, row_end))) = (columns, rows) else {
            return;
        };

        for row in row_start..row_end {
            let offset = row * self.columns;
            for col in col_start..col_end {
                self.blocked[offset + col] = 1;
            }
        }
    }

    /// Half-open index range of cells along one axis whose extent overlaps `(lo, hi)`.
    fn span(&self, lo: f64, hi: f64, origin: f64, count: usize) -> Option<(usize, usize)> {
        let ratio = self.grid_ratio;
        // Start one cell early and settle with the exact test so float error in the
        // division cannot drop a boundary cell.
        let mut start = (((lo - origin) / ratio).floor() as i64 - 1).max(0) as usize;
        while start < count && origin + (start as f64 + 1.0) * ratio <= lo {
            start += 1;
        }
        let mut end = start;
        while end < count && origin + end as f64 * ratio < hi {
            end += 1;
        }
        (start < end).then_some((start, end))
    }

    #[cfg(test)]
    pub(crate) fn from_ascii(picture: &str) -> Self {
        let lines = picture.lines().map(str::trim).filter(|l| !l.is_empty()).collect::<Vec<_>>();
        let rows = lines.len();
        let columns = lines.first().map(|l| l.chars().count()).unwrap_or(0);
        let mut grid = Self::empty(0.0, 0.0, 1.0, columns, rows);
        for (row, line) in lines.iter().enumerate() {
            assert_eq!(line.chars().count(), columns, "ragged grid picture");
            for (col, ch) in line.chars().enumerate() {
                if ch == '#' {
                    grid.blocked[row * columns + col] = 1;
                }
            }
        }
        grid
    }
}

/// A built grid plus the resolved start and end cells.
#[derive(Debug, Clone, PartialEq)]
pub struct GridSetup {
    grid: OccupancyGrid,
    start: GridCell,
    end: GridCell,
}

impl GridSetup {
    pub fn grid(&self) -> &OccupancyGrid {
        &self.grid
    }

    pub fn start(&self) -> GridCell {
        self.start
    }

    pub fn end(&self) -> GridCell {
        self.end
    }

    pub fn into_parts(self) -> (OccupancyGrid, GridCell, GridCell) {
        (self.grid, self.start, self.end)
    }
}

/// Nudge radius for endpoints sitting on a node padded by `padding`.
pub fn nudge_radius_for(padding: f64, grid_ratio: f64) -> usize {
    let cells = (padding.max(0.0) / grid_ratio).ceil();
    if !cells.is_finite() || cells >= MAX_NUDGE_RADIUS as f64 {
        return MAX_NUDGE_RADIUS;
    }
    (cells as usize).saturating_add(NUDGE_SLACK).min(MAX_NUDGE_RADIUS)
}

/// Builds the occupancy grid and resolves both endpoints with the default nudge radius.
pub fn create_grid(
    canvas: &Rect,
    obstacles: &[Rect],
    source: &CanvasPoint,
    target: &CanvasPoint,
    grid_ratio: f64,
) -> Result<GridSetup, RoutingError> {
    create_grid_with_nudge_radius(
        canvas,
        obstacles,
        source,
        target,
        grid_ratio,
        DEFAULT_NUDGE_RADIUS,
    )
}

pub fn create_grid_with_nudge_radius(
    canvas: &Rect,
    obstacles: &[Rect],
    source: &CanvasPoint,
    target: &CanvasPoint,
    grid_ratio: f64,
    nudge_radius: usize,
) -> Result<GridSetup, RoutingError> {
    if !grid_ratio.is_finite() || grid_ratio <= 0.0 {
        return Err(RoutingError::invalid_geometry(format!(
            "grid ratio must be a positive finite number, got {grid_ratio}"
        )));
    }
    if !canvas.has_area() {
        return Err(RoutingError::invalid_geometry(format!(
            "canvas {}x{} has no area",
            canvas.width(),
            canvas.height()
        )));
    }

    let columns = (canvas.width() / grid_ratio).ceil() as usize;
    let rows = (canvas.height() / grid_ratio).ceil() as usize;
    match columns.checked_mul(rows) {
        Some(cells) if cells <= MAX_GRID_CELLS => {}
        _ => return Err(RoutingError::GridTooLarge { columns, rows, limit: MAX_GRID_CELLS }),
    }

    let mut grid = OccupancyGrid::empty(canvas.x_min(), canvas.y_min(), grid_ratio, columns, rows);
    for obstacle in obstacles {
        grid.mark_obstacle(obstacle);
    }

    let source_cell = locate(&grid, canvas, source, Endpoint::Source)?;
    let target_cell = locate(&grid, canvas, target, Endpoint::Target)?;

    let start = resolve(&grid, source_cell, source, Endpoint::Source, nudge_radius)?;
    let end = if target_cell == source_cell {
        start
    } else {
        resolve(&grid, target_cell, target, Endpoint::Target, nudge_radius)?
    };

    tracing::debug!(
        columns,
        rows,
        blocked = grid.blocked_count(),
        %start,
        %end,
        "built routing grid"
    );

    Ok(GridSetup { grid, start, end })
}

fn locate(
    grid: &OccupancyGrid,
    canvas: &Rect,
    point: &CanvasPoint,
    endpoint: Endpoint,
) -> Result<GridCell, RoutingError> {
    if !point.is_finite() || !canvas.contains_point(point) {
        return Err(RoutingError::invalid_geometry(format!(
            "{endpoint} point ({}, {}) lies outside the canvas ({}, {})..({}, {})",
            point.x,
            point.y,
            canvas.x_min(),
            canvas.y_min(),
            canvas.x_max(),
            canvas.y_max()
        )));
    }

    // Points on the far canvas edges round one past the last cell.
    let cell = grid.point_to_cell(point);
    let max_col = grid.columns().saturating_sub(1) as i32;
    let max_row = grid.rows().saturating_sub(1) as i32;
    Ok(GridCell::new(cell.col().clamp(0, max_col), cell.row().clamp(0, max_row)))
}

fn resolve(
    grid: &OccupancyGrid,
    cell: GridCell,
    point: &CanvasPoint,
    endpoint: Endpoint,
    nudge_radius: usize,
) -> Result<GridCell, RoutingError> {
    match nudge_endpoint(grid, cell, point.side, nudge_radius) {
        Some(resolved) => {
            if resolved != cell {
                tracing::debug!(
                    %endpoint,
                    from = %cell,
                    to = %resolved,
                    "nudged endpoint out of obstacle"
                );
            }
            Ok(resolved)
        }
        None => {
            tracing::warn!(
                %endpoint,
                x = point.x,
                y = point.y,
                radius = nudge_radius,
                "endpoint is enclosed by obstacles"
            );
            Err(RoutingError::UnroutableEndpoint {
                endpoint,
                x: point.x,
                y: point.y,
                radius: nudge_radius,
            })
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Nudge {
    AtPoint,
    Nudging { radius: usize },
    Resolved(GridCell),
    Failed,
}

/// Offsets on the square ring at Chebyshev distance `radius`, ordered by Manhattan distance
/// and then clockwise from the right, so the axis cells come first as right, bottom, left, top.
fn ring_offsets(radius: i32) -> SmallVec<[(i32, i32); 16]> {
    let mut ring = SmallVec::<[(i32, i32); 16]>::new();
    for dr in -radius..=radius {
        for dc in -radius..=radius {
            if dc.abs().max(dr.abs()) == radius {
                ring.push((dc, dr));
            }
        }
    }
    ring.sort_by_key(|&(dc, dr)| {
        let (quadrant, rank) = match (dc, dr) {
            (dc, dr) if dc > 0 && dr >= 0 => (0, dr),
            (dc, dr) if dc <= 0 && dr > 0 => (1, -dc),
            (dc, dr) if dc < 0 && dr <= 0 => (2, -dr),
            (dc, _) => (3, dc),
        };
        (dc.abs() + dr.abs(), quadrant, rank)
    });
    ring
}

/// Walks outward from `cell` along the side's normal, or over whole rings of cells
/// without a side, until a free cell turns up.
fn nudge_endpoint(
    grid: &OccupancyGrid,
    cell: GridCell,
    side: Option<Side>,
    max_radius: usize,
) -> Option<GridCell> {
    let mut state = Nudge::AtPoint;
    loop {
        state = match state {
            Nudge::AtPoint if grid.is_free(cell) => Nudge::Resolved(cell),
            Nudge::AtPoint => Nudge::Nudging { radius: 1 },
            Nudge::Nudging { radius } if radius > max_radius => Nudge::Failed,
            Nudge::Nudging { radius } => {
                let step = radius as i32;
                let candidates: SmallVec<[(i32, i32); 16]> = match side {
                    Some(side) => {
                        let (dc, dr) = side.outward();
                        SmallVec::from_slice(&[(dc * step, dr * step)])
                    }
                    None => ring_offsets(step),
                };

                let mut any_inside = false;
                let mut found = None;
                for (dc, dr) in candidates {
                    let candidate = cell.offset(dc, dr);
                    if !grid.contains(candidate) {
                        continue;
                    }
                    any_inside = true;
                    if grid.is_free(candidate) {
                        found = Some(candidate);
                        break;
                    }
                }
                match found {
                    Some(candidate) => Nudge::Resolved(candidate),
                    None if any_inside => Nudge::Nudging { radius: radius + 1 },
                    None => Nudge::Failed,
                }
            }
            Nudge::Resolved(resolved) => return Some(resolved),
            Nudge::Failed => return None,
        };
    }
}

#[cfg(test)]
mod tests;
