// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of smart-edge and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::{Canvas, CanvasError};
use crate::routing::{GridCell, OccupancyGrid, SmartEdgeRoute};

pub const BLOCKED: char = '#';
pub const FREE: char = '.';
pub const PATH: char = '*';
pub const WAYPOINT: char = 'o';
pub const START: char = 'S';
pub const END: char = 'E';

/// Draws the grid one character per cell, then the full path, the smoothed corners and
/// finally the start and end cells on top.
pub fn render_route_ascii(
    grid: &OccupancyGrid,
    route: &SmartEdgeRoute,
) -> Result<String, CanvasError> {
    let mut canvas = Canvas::new_filled(grid.columns(), grid.rows(), FREE)?;
    for idx in 0..grid.len() {
        let cell = grid.cell_of(idx);
        if grid.is_blocked(cell) {
            set_cell(&mut canvas, cell, BLOCKED)?;
        }
    }

    for &cell in route.path().full() {
        set_cell(&mut canvas, cell, PATH)?;
    }
    for &cell in route.path().smoothed() {
        set_cell(&mut canvas, cell, WAYPOINT)?;
    }
    if let Some(start) = route.start() {
        set_cell(&mut canvas, start, START)?;
    }
    if let Some(end) = route.end() {
        set_cell(&mut canvas, end, END)?;
    }

    Ok(canvas.to_text())
}

fn set_cell(canvas: &mut Canvas, cell: GridCell, ch: char) -> Result<(), CanvasError> {
    let x = usize::try_from(cell.col()).unwrap_or(usize::MAX);
    let y = usize::try_from(cell.row()).unwrap_or(usize::MAX);
    canvas.set(x, y, ch)
}
