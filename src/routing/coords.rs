// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of smart-edge and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Conversion between grid cells and canvas coordinates.
//!
//! A cell `(col, row)` stands for the canvas lattice point
//! `(x_min + col * grid_ratio, y_min + row * grid_ratio)`. Going from canvas to grid
//! rounds to the nearest lattice point, so a point survives the round trip within
//! `grid_ratio / 2` per axis and a cell survives it exactly.

use crate::geometry::{nearest_step, CanvasPoint};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridCell {
    col: i32,
    row: i32,
}

impl GridCell {
    pub fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    pub fn col(&self) -> i32 {
        self.col
    }

    pub fn row(&self) -> i32 {
        self.row
    }

    pub(crate) fn offset(self, dc: i32, dr: i32) -> Self {
        Self { col: self.col + dc, row: self.row + dr }
    }

    /// True for 4- or 8-neighbors (a cell is not adjacent to itself).
    pub fn is_adjacent(&self, other: &Self, diagonal: bool) -> bool {
        let dc = self.col.abs_diff(other.col);
        let dr = self.row.abs_diff(other.row);
        match (dc, dr) {
            (1, 0) | (0, 1) => true,
            (1, 1) => diagonal,
            _ => false,
        }
    }
}

impl std::fmt::Display for GridCell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

pub fn grid_to_graph_point(cell: GridCell, x_min: f64, y_min: f64, grid_ratio: f64) -> CanvasPoint {
    CanvasPoint::new(
        x_min + f64::from(cell.col) * grid_ratio,
        y_min + f64::from(cell.row) * grid_ratio,
    )
}

/// Nearest cell to `point`. The result is not clamped to any grid.
pub fn graph_to_grid_point(point: &CanvasPoint, x_min: f64, y_min: f64, grid_ratio: f64) -> GridCell {
    GridCell::new(
        nearest_step(point.x - x_min, grid_ratio) as i32,
        nearest_step(point.y - y_min, grid_ratio) as i32,
    )
}
