// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of smart-edge and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Shortest-path search over an [`OccupancyGrid`].

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::coords::GridCell;
use super::grid::OccupancyGrid;
use crate::geometry::Side;

const STRAIGHT_COST: u64 = 10;
const DIAGONAL_COST: u64 = 14;

// Orthogonal moves come first so a side's outward step is always a valid heading.
const MOVES: [(i32, i32); 8] =
    [(1, 0), (0, 1), (-1, 0), (0, -1), (1, 1), (-1, 1), (-1, -1), (1, -1)];

/// Full cell-by-cell route plus its corner-only reduction.
///
/// Length semantics of the smoothed path: 0 = no route, 1 = start equals end,
/// 2 = a straight segment, 3 or more = a routed path with corners.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GridPath {
    full: Vec<GridCell>,
    smoothed: Vec<GridCell>,
}

impl GridPath {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_full(full: Vec<GridCell>) -> Self {
        let smoothed = compress_to_polyline(&full);
        Self { full, smoothed }
    }

    pub fn full(&self) -> &[GridCell] {
        &self.full
    }

    pub fn smoothed(&self) -> &[GridCell] {
        &self.smoothed
    }

    pub fn is_empty(&self) -> bool {
        self.full.is_empty()
    }

    /// Nothing worth drawing as a routed curve; hosts draw a plain edge instead.
    pub fn needs_fallback(&self) -> bool {
        self.smoothed.len() <= 2
    }
}

/// A grid search strategy.
pub trait PathFinder: Send + Sync {
    fn find_path(&self, grid: &OccupancyGrid, start: GridCell, end: GridCell) -> GridPath;

    /// Like [`PathFinder::find_path`], with a hint that the route leaves `start` through
    /// the given node face. Strategies without a notion of heading ignore it.
    fn find_path_leaving(
        &self,
        grid: &OccupancyGrid,
        start: GridCell,
        end: GridCell,
        side: Option<Side>,
    ) -> GridPath {
        let _ = side;
        self.find_path(grid, start, end)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Connectivity {
    #[default]
    Orthogonal,
    /// Eight neighbors; diagonal steps may not cut past a blocked corner.
    Diagonal,
}

impl Connectivity {
    fn moves(self) -> &'static [(i32, i32)] {
        match self {
            Self::Orthogonal => &MOVES[..4],
            Self::Diagonal => &MOVES,
        }
    }

    fn heuristic(self, from: GridCell, to: GridCell) -> u64 {
        let dx = u64::from(from.col().abs_diff(to.col()));
        let dy = u64::from(from.row().abs_diff(to.row()));
        match self {
            Self::Orthogonal => STRAIGHT_COST * (dx + dy),
            Self::Diagonal => {
                let (lo, hi) = if dx < dy { (dx, dy) } else { (dy, dx) };
                STRAIGHT_COST * hi + (DIAGONAL_COST - STRAIGHT_COST) * lo
            }
        }
    }
}

/// Built-in search strategies selectable from configuration.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
pub enum PathFinderKind {
    #[default]
    #[serde(rename = "a-star")]
    AStar,
    #[serde(rename = "a-star-diagonal")]
    AStarDiagonal,
}

impl PathFinderKind {
    pub fn finder(self) -> AStarFinder {
        match self {
            Self::AStar => AStarFinder::new(Connectivity::Orthogonal),
            Self::AStarDiagonal => AStarFinder::new(Connectivity::Diagonal),
        }
    }
}

/// A* over (cell, heading) states with a lexicographic cost: path length first, number
/// of corners second. Among equally short routes the straightest one wins, and the
/// remaining ties resolve on `(f, h, state index)`, so the result never depends on
/// queue insertion order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AStarFinder {
    connectivity: Connectivity,
}

impl AStarFinder {
    pub fn new(connectivity: Connectivity) -> Self {
        Self { connectivity }
    }

    pub fn connectivity(&self) -> Connectivity {
        self.connectivity
    }

    fn search(
        &self,
        grid: &OccupancyGrid,
        start: GridCell,
        end: GridCell,
        side: Option<Side>,
    ) -> GridPath {
        if start == end {
            return GridPath::from_full(vec![start]);
        }
        let (Some(start_idx), Some(end_idx)) = (grid.idx_of(start), grid.idx_of(end)) else {
            return GridPath::empty();
        };
        if grid.is_blocked_idx(start_idx) || grid.is_blocked_idx(end_idx) {
            return GridPath::empty();
        }

        let moves = self.connectivity.moves();
        // One extra heading for "not moving yet" at the start.
        let headings = moves.len() + 1;
        let no_heading = moves.len();
        let initial_heading = side
            .and_then(|side| moves.iter().position(|&step| step == side.outward()))
            .unwrap_or(no_heading);

        // Corners are counted below the length unit: a route has fewer corners than the
        // grid has cells, so scaling lengths by `cells + 1` keeps the order lexicographic.
        let scale = grid.len() as u64 + 1;

        let state_count = grid.len() * headings;
        let mut best = vec![u64::MAX; state_count];
        let mut prev_heading = vec![u8::MAX; state_count];
        let mut heap = BinaryHeap::<Reverse<(u64, u64, usize)>>::new();

        let start_state = start_idx * headings + initial_heading;
        let h0 = self.connectivity.heuristic(start, end) * scale;
        best[start_state] = 0;
        heap.push(Reverse((h0, h0, start_state)));

        let mut expanded = 0usize;
        while let Some(Reverse((f_cost, h_cost, state))) = heap.pop() {
            let g_cost = f_cost - h_cost;
            if best[state] != g_cost {
                continue;
            }

            let cell_idx = state / headings;
            let heading = state % headings;
            if cell_idx == end_idx {
                let full = reconstruct(grid, moves, headings, start_state, state, &prev_heading);
                tracing::debug!(expanded, cells = full.len(), "path found");
                return GridPath::from_full(full);
            }
            expanded += 1;

            let cell = grid.cell_of(cell_idx);
            for (move_idx, &(dc, dr)) in moves.iter().enumerate() {
                let next = cell.offset(dc, dr);
                let Some(next_idx) = grid.idx_of(next) else {
                    continue;
                };
                if grid.is_blocked_idx(next_idx) {
                    continue;
                }
                let diagonal = dc != 0 && dr != 0;
                let cuts_corner =
                    grid.is_blocked(cell.offset(dc, 0)) || grid.is_blocked(cell.offset(0, dr));
                if diagonal && cuts_corner {
                    continue;
                }

                let step = if diagonal { DIAGONAL_COST } else { STRAIGHT_COST };
                let turn = u64::from(heading != no_heading && heading != move_idx);
                let next_cost = g_cost + step * scale + turn;
                let next_state = next_idx * headings + move_idx;
                if next_cost < best[next_state] {
                    best[next_state] = next_cost;
                    prev_heading[next_state] = heading as u8;
                    let h = self.connectivity.heuristic(next, end) * scale;
                    heap.push(Reverse((next_cost + h, h, next_state)));
                }
            }
        }

        tracing::debug!(expanded, %start, %end, "no path between endpoints");
        GridPath::empty()
    }
}

impl PathFinder for AStarFinder {
    fn find_path(&self, grid: &OccupancyGrid, start: GridCell, end: GridCell) -> GridPath {
        self.search(grid, start, end, None)
    }

    fn find_path_leaving(
        &self,
        grid: &OccupancyGrid,
        start: GridCell,
        end: GridCell,
        side: Option<Side>,
    ) -> GridPath {
        self.search(grid, start, end, side)
    }
}

fn reconstruct(
    grid: &OccupancyGrid,
    moves: &[(i32, i32)],
    headings: usize,
    start_state: usize,
    goal_state: usize,
    prev_heading: &[u8],
) -> Vec<GridCell> {
    let mut cells = Vec::<GridCell>::new();
    let mut state = goal_state;
    loop {
        let cell = grid.cell_of(state / headings);
        cells.push(cell);
        if state == start_state {
            break;
        }
        // Every state other than the start was entered by a real move.
        let (dc, dr) = moves[state % headings];
        let prev_cell = cell.offset(-dc, -dr);
        let Some(prev_idx) = grid.idx_of(prev_cell) else {
            break;
        };
        state = prev_idx * headings + usize::from(prev_heading[state]);
    }
    cells.reverse();
    cells
}

/// Collapses every collinear run to its end points, keeping first, last and each turn.
pub fn compress_to_polyline(path: &[GridCell]) -> Vec<GridCell> {
    match path.len() {
        0 => Vec::new(),
        1 => vec![path[0]],
        2 => vec![path[0], path[1]],
        _ => {
            let mut points = Vec::<GridCell>::new();
            points.push(path[0]);

            let direction = |a: GridCell, b: GridCell| (b.col() - a.col(), b.row() - a.row());
            let mut prev_dir = direction(path[0], path[1]);
            for idx in 1..path.len() - 1 {
                let dir = direction(path[idx], path[idx + 1]);
                if dir != prev_dir {
                    points.push(path[idx]);
                    prev_dir = dir;
                }
            }

            if let Some(last) = path.last() {
                points.push(*last);
            }
            points
        }
    }
}
