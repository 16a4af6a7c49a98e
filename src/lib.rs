// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of smart-edge and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! smart-edge: obstacle-avoiding edge routing for node diagrams.
//!
//! The canvas around a set of nodes is discretized into an occupancy grid, the padded nodes
//! become blocked cells, and an A* search finds the shortest route with the fewest corners
//! between two connection points. Routes of two points or fewer are left to the host as
//! plain connectors; longer ones are drawn as SVG path data by a pluggable [`CurveDrawer`].
//!
//! ```
//! use smart_edge::{route_smart_edge, AStarFinder, NodeBox, Side, SmartEdgeOptions};
//!
//! let nodes = [NodeBox::new(0.0, 0.0, 100.0, 50.0), NodeBox::new(200.0, 0.0, 100.0, 50.0)];
//! let route = route_smart_edge(
//!     &nodes,
//!     &nodes[0].anchor(Side::Right),
//!     &nodes[1].anchor(Side::Left),
//!     &SmartEdgeOptions::default(),
//!     &AStarFinder::default(),
//! )?;
//! assert!(route.needs_fallback(), "nothing sits between the nodes");
//! # Ok::<(), smart_edge::RoutingError>(())
//! ```

pub mod draw;
pub mod error;
pub mod geometry;
pub mod model;
pub mod options;
pub mod render;
pub mod report;
pub mod router;
pub mod routing;

pub use draw::{CurveDrawer, CurveKind, SmoothCurveDrawer, StraightCurveDrawer};
pub use error::{Endpoint, RoutingError};
pub use geometry::{CanvasPoint, Rect, Side};
pub use options::SmartEdgeOptions;
pub use router::{
    EdgeOutcome, EdgeRendering, EdgeRequest, FallbackReason, RenderedEdge, SmartEdgeRouter,
};
pub use routing::{
    route_smart_edge, route_smart_edge_with_grid, AStarFinder, Connectivity, GridCell, GridPath,
    NodeBox, OccupancyGrid, PathFinder, PathFinderKind, SmartEdgeRoute,
};
