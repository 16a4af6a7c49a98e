// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of smart-edge and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::{
    create_grid, create_grid_with_nudge_radius, nudge_radius_for, OccupancyGrid, MAX_GRID_CELLS,
};
use crate::error::{Endpoint, RoutingError};
use crate::geometry::{CanvasPoint, Rect, Side};
use crate::routing::coords::GridCell;

fn rect(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Rect {
    Rect::new(x_min, y_min, x_max, y_max).expect("rect")
}

fn cell(col: i32, row: i32) -> GridCell {
    GridCell::new(col, row)
}

fn free_point(x: f64, y: f64) -> CanvasPoint {
    CanvasPoint::new(x, y)
}

#[test]
fn dimensions_round_up_partial_cells() {
    let canvas = rect(0.0, 0.0, 95.0, 40.0);
    let setup =
        create_grid(&canvas, &[], &free_point(0.0, 0.0), &free_point(90.0, 30.0), 10.0).expect("grid");
    assert_eq!((setup.grid().columns(), setup.grid().rows()), (10, 4));
    assert_eq!(setup.grid().blocked_count(), 0);
}

#[test]
fn blocks_cells_overlapping_obstacle_interiors_only() {
    let canvas = rect(0.0, 0.0, 100.0, 100.0);
    let obstacles = [rect(20.0, 20.0, 40.0, 40.0)];
    let setup =
        create_grid(&canvas, &obstacles, &free_point(0.0, 0.0), &free_point(90.0, 90.0), 10.0)
            .expect("grid");
    let grid = setup.grid();

    let blocked = (0..grid.len()).filter(|&idx| grid.is_blocked_idx(idx)).map(|idx| grid.cell_of(idx));
    assert_eq!(blocked.collect::<Vec<_>>(), vec![cell(2, 2), cell(3, 2), cell(2, 3), cell(3, 3)]);

    // Cells sharing only an edge with the obstacle stay free.
    assert!(grid.is_free(cell(4, 2)));
    assert!(grid.is_free(cell(2, 4)));
    assert!(grid.is_free(cell(1, 1)));
}

#[test]
fn unaligned_obstacles_block_every_touched_cell() {
    let canvas = rect(0.0, 0.0, 100.0, 100.0);
    let obstacles = [rect(25.0, 25.0, 31.0, 31.0)];
    let setup =
        create_grid(&canvas, &obstacles, &free_point(0.0, 0.0), &free_point(90.0, 90.0), 10.0)
            .expect("grid");
    assert_eq!(setup.grid().blocked_count(), 4);
    for c in [cell(2, 2), cell(3, 2), cell(2, 3), cell(3, 3)] {
        assert!(setup.grid().is_blocked(c), "{c} should be blocked");
    }
}

#[test]
fn obstacles_beyond_the_canvas_are_clipped() {
    let canvas = rect(0.0, 0.0, 50.0, 50.0);
    let obstacles = [rect(-100.0, -100.0, 15.0, 15.0), rect(200.0, 200.0, 300.0, 300.0)];
    let setup =
        create_grid(&canvas, &obstacles, &free_point(40.0, 40.0), &free_point(30.0, 40.0), 10.0)
            .expect("grid");
    assert_eq!(setup.grid().blocked_count(), 4);
    assert!(setup.grid().is_blocked(cell(0, 0)));
    assert!(setup.grid().is_blocked(cell(1, 1)));
}

#[test]
fn endpoints_inside_obstacles_are_nudged_along_their_side() {
    let canvas = rect(0.0, 0.0, 100.0, 100.0);
    let obstacles = [rect(20.0, 20.0, 60.0, 60.0)];
    let source = CanvasPoint::with_side(20.0, 40.0, Side::Left);
    let target = CanvasPoint::with_side(40.0, 20.0, Side::Top);

    let setup = create_grid(&canvas, &obstacles, &source, &target, 10.0).expect("grid");
    assert_eq!(setup.start(), cell(1, 4));
    assert_eq!(setup.end(), cell(4, 1));
}

#[test]
fn free_endpoints_are_not_moved() {
    let canvas = rect(0.0, 0.0, 100.0, 100.0);
    let obstacles = [rect(20.0, 20.0, 60.0, 60.0)];
    // The right border's cell starts at x = 60 and therefore lies outside the obstacle.
    let source = CanvasPoint::with_side(60.0, 40.0, Side::Right);
    let target = free_point(90.0, 90.0);

    let setup = create_grid(&canvas, &obstacles, &source, &target, 10.0).expect("grid");
    assert_eq!(setup.start(), cell(6, 4));
    assert_eq!(setup.end(), cell(9, 9));
}

#[test]
fn sideless_endpoints_search_rings_in_fixed_order() {
    let canvas = rect(0.0, 0.0, 100.0, 100.0);
    let obstacles = [rect(20.0, 20.0, 60.0, 60.0)];
    let setup =
        create_grid(&canvas, &obstacles, &free_point(40.0, 40.0), &free_point(90.0, 90.0), 10.0)
            .expect("grid");
    assert_eq!(setup.start(), cell(6, 4));
}

#[test]
fn sideless_endpoints_reach_diagonal_cells() {
    // Two obstacles meet at (10, 10) and leave only the top-left cell free.
    let canvas = rect(0.0, 0.0, 30.0, 30.0);
    let obstacles = [rect(10.0, 0.0, 30.0, 30.0), rect(0.0, 10.0, 30.0, 30.0)];
    let corner = free_point(10.0, 10.0);

    let setup = create_grid_with_nudge_radius(&canvas, &obstacles, &corner, &corner, 10.0, 2)
        .expect("grid");
    assert_eq!(setup.start(), cell(0, 0));
    assert_eq!(setup.end(), cell(0, 0));
}

#[test]
fn sideless_rings_prefer_axis_cells_over_diagonals() {
    let canvas = rect(0.0, 0.0, 50.0, 50.0);
    // Blocks only the start cell (2, 2); every ring-one cell is free.
    let obstacles = [rect(20.0, 20.0, 30.0, 30.0)];
    let setup = create_grid(
        &canvas,
        &obstacles,
        &free_point(20.0, 20.0),
        &free_point(0.0, 0.0),
        10.0,
    )
    .expect("grid");
    assert_eq!(setup.start(), cell(3, 2));

    // With the right cell blocked too, bottom comes next, still ahead of any diagonal.
    let obstacles = [rect(20.0, 20.0, 40.0, 30.0)];
    let setup = create_grid(
        &canvas,
        &obstacles,
        &free_point(20.0, 20.0),
        &free_point(0.0, 0.0),
        10.0,
    )
    .expect("grid");
    assert_eq!(setup.start(), cell(2, 3));
}

#[test]
fn enclosed_endpoints_fail_within_the_nudge_radius() {
    let canvas = rect(0.0, 0.0, 200.0, 200.0);
    let obstacles = [rect(20.0, 20.0, 180.0, 180.0)];
    let source = free_point(10.0, 10.0);
    let target = CanvasPoint::with_side(100.0, 100.0, Side::Right);

    let err = create_grid_with_nudge_radius(&canvas, &obstacles, &source, &target, 10.0, 2)
        .expect_err("enclosed");
    assert_eq!(
        err,
        RoutingError::UnroutableEndpoint { endpoint: Endpoint::Target, x: 100.0, y: 100.0, radius: 2 }
    );

    // A wide enough radius escapes the obstacle.
    let setup = create_grid_with_nudge_radius(&canvas, &obstacles, &source, &target, 10.0, 16)
        .expect("escaped");
    assert_eq!(setup.end(), cell(18, 10));
}

#[test]
fn nudging_stops_at_the_grid_border() {
    let canvas = rect(0.0, 0.0, 50.0, 50.0);
    let obstacles = [rect(0.0, 0.0, 50.0, 50.0)];
    let source = CanvasPoint::with_side(25.0, 25.0, Side::Bottom);
    let err = create_grid_with_nudge_radius(&canvas, &obstacles, &source, &source, 10.0, 64)
        .expect_err("no free cell");
    assert!(matches!(err, RoutingError::UnroutableEndpoint { endpoint: Endpoint::Source, .. }));
}

#[test]
fn coincident_endpoints_share_one_cell() {
    let canvas = rect(0.0, 0.0, 100.0, 100.0);
    let obstacles = [rect(20.0, 20.0, 60.0, 60.0)];
    let point = CanvasPoint::with_side(20.0, 40.0, Side::Left);
    let other_side = CanvasPoint::with_side(20.0, 40.0, Side::Top);

    let setup = create_grid(&canvas, &obstacles, &point, &other_side, 10.0).expect("grid");
    assert_eq!(setup.start(), setup.end());
    assert_eq!(setup.start(), cell(1, 4));
}

#[test]
fn far_edge_points_clamp_to_the_last_cell() {
    let canvas = rect(0.0, 0.0, 100.0, 100.0);
    let setup =
        create_grid(&canvas, &[], &free_point(100.0, 100.0), &free_point(0.0, 0.0), 10.0).expect("grid");
    assert_eq!(setup.start(), cell(9, 9));
    assert_eq!(setup.end(), cell(0, 0));
}

#[test]
fn rejects_invalid_inputs() {
    let canvas = rect(0.0, 0.0, 100.0, 100.0);
    let inside = free_point(50.0, 50.0);

    let outside = free_point(100.5, 50.0);
    assert!(matches!(
        create_grid(&canvas, &[], &outside, &inside, 10.0),
        Err(RoutingError::InvalidGeometry { .. })
    ));
    assert!(matches!(
        create_grid(&canvas, &[], &inside, &free_point(f64::NAN, 0.0), 10.0),
        Err(RoutingError::InvalidGeometry { .. })
    ));
    assert!(matches!(
        create_grid(&Rect::zero(), &[], &free_point(0.0, 0.0), &free_point(0.0, 0.0), 10.0),
        Err(RoutingError::InvalidGeometry { .. })
    ));
    assert!(matches!(
        create_grid(&canvas, &[], &inside, &inside, -1.0),
        Err(RoutingError::InvalidGeometry { .. })
    ));
}

#[test]
fn refuses_pathologically_large_grids() {
    let canvas = rect(0.0, 0.0, 1.0e6, 1.0e6);
    let err = create_grid(&canvas, &[], &free_point(0.0, 0.0), &free_point(1.0, 1.0), 1.0)
        .expect_err("too large");
    assert_eq!(
        err,
        RoutingError::GridTooLarge { columns: 1_000_000, rows: 1_000_000, limit: MAX_GRID_CELLS }
    );
}

#[test]
fn identical_inputs_build_identical_grids() {
    let canvas = rect(-37.0, -12.0, 413.0, 288.0);
    let obstacles = [rect(3.3, 7.7, 90.1, 66.6), rect(120.0, -5.0, 180.0, 260.0)];
    let source = CanvasPoint::with_side(90.1, 30.0, Side::Right);
    let target = CanvasPoint::with_side(120.0, 200.0, Side::Left);

    let first = create_grid(&canvas, &obstacles, &source, &target, 7.5).expect("grid");
    let second = create_grid(&canvas, &obstacles, &source, &target, 7.5).expect("grid");
    assert_eq!(first, second);
}

#[test]
fn nudge_radius_scales_with_padding() {
    assert_eq!(nudge_radius_for(0.0, 10.0), 2);
    assert_eq!(nudge_radius_for(10.0, 10.0), 3);
    assert_eq!(nudge_radius_for(25.0, 10.0), 5);
    assert_eq!(nudge_radius_for(-5.0, 10.0), 2);
    assert_eq!(nudge_radius_for(1.0e9, 1.0e-9), 64);
    assert_eq!(nudge_radius_for(10.0, 1.0e-300), 64);
    assert_eq!(nudge_radius_for(1.0e20, 1.0), 64);
    assert_eq!(nudge_radius_for(f64::MAX, f64::MIN_POSITIVE), 64);
}

#[test]
fn ascii_pictures_build_test_grids() {
    let grid = OccupancyGrid::from_ascii(
        "
        ..#
        #..
        ",
    );
    assert_eq!((grid.columns(), grid.rows()), (3, 2));
    assert!(grid.is_blocked(cell(2, 0)));
    assert!(grid.is_blocked(cell(0, 1)));
    assert!(grid.is_free(cell(1, 1)));
    assert!(grid.is_blocked(cell(3, 0)), "outside the grid counts as blocked");
}
