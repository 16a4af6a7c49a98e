// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of smart-edge and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use smart_edge::model::EdgeId;
use smart_edge::router::EdgeRequest;
use smart_edge::routing::NodeBox;
use smart_edge::Side;

pub fn checksum_waypoints(points: &[smart_edge::CanvasPoint]) -> u64 {
    let mut acc = points.len() as u64;
    for point in points {
        acc = acc.wrapping_mul(131).wrapping_add(point.x.to_bits());
        acc = acc.wrapping_mul(131).wrapping_add(point.y.to_bits());
    }
    acc
}

pub mod scene {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct LayoutParams {
        pub rows: usize,
        pub cols: usize,
        pub node_width: f64,
        pub node_height: f64,
        pub gap_x: f64,
        pub gap_y: f64,
        /// Every n-th edge skips a row, so it has to weave past the nodes in between.
        pub long_edge_every: usize,
    }

    impl LayoutParams {
        pub const fn new(rows: usize, cols: usize, gap_x: f64, gap_y: f64) -> Self {
            Self {
                rows,
                cols,
                node_width: 120.0,
                node_height: 40.0,
                gap_x,
                gap_y,
                long_edge_every: 3,
            }
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Case {
        Small,
        MediumDense,
        LargeSparse,
    }

    impl Case {
        pub const fn id(self) -> &'static str {
            match self {
                Self::Small => "small",
                Self::MediumDense => "medium_dense",
                Self::LargeSparse => "large_sparse",
            }
        }

        pub const fn params(self) -> LayoutParams {
            match self {
                Self::Small => LayoutParams::new(3, 3, 80.0, 60.0),
                Self::MediumDense => LayoutParams::new(8, 8, 40.0, 40.0),
                Self::LargeSparse => LayoutParams::new(14, 12, 120.0, 90.0),
            }
        }
    }

    pub struct Fixture {
        pub nodes: Vec<NodeBox>,
        pub edges: Vec<EdgeRequest>,
    }

    pub fn fixture(case: Case) -> Fixture {
        grid_layout(case.params())
    }

    /// Nodes on a regular lattice; edges run from each node down to a node in a later row,
    /// with the target column scrambled deterministically.
    pub fn grid_layout(params: LayoutParams) -> Fixture {
        assert!(params.rows >= 2, "rows must be >= 2");
        assert!(params.cols >= 1, "cols must be >= 1");

        let mut nodes = Vec::<NodeBox>::with_capacity(params.rows * params.cols);
        for row in 0..params.rows {
            for col in 0..params.cols {
                let x = col as f64 * (params.node_width + params.gap_x);
                let y = row as f64 * (params.node_height + params.gap_y);
                nodes.push(NodeBox::new(x, y, params.node_width, params.node_height));
            }
        }

        let mut edges = Vec::<EdgeRequest>::new();
        for row in 0..params.rows - 1 {
            for col in 0..params.cols {
                let n = edges.len();
                let skip = if n % params.long_edge_every.max(1) == 0 { 2 } else { 1 };
                let target_row = (row + skip).min(params.rows - 1);
                let target_col = (col * 7 + row * 3 + 1) % params.cols;

                let source = nodes[row * params.cols + col].anchor(Side::Bottom);
                let target = nodes[target_row * params.cols + target_col].anchor(Side::Top);
                let id = EdgeId::new(format!("e{row}_{col}")).expect("valid edge id");
                edges.push(EdgeRequest { id, source, target });
            }
        }

        Fixture { nodes, edges }
    }
}
