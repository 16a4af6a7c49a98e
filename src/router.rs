// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of smart-edge and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The host-facing edge router: routing plus the fallback decision plus curve drawing.

use rayon::prelude::*;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::draw::CurveDrawer;
use crate::error::RoutingError;
use crate::geometry::CanvasPoint;
use crate::model::EdgeId;
use crate::options::SmartEdgeOptions;
use crate::routing::{self, build_boxes, NodeBox, OccupancyGrid, PathFinder, SmartEdgeRoute};

/// Why a plain connector is drawn instead of a routed curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum FallbackReason {
    /// The grid search found no route.
    NoPath,
    /// Both endpoints resolved to one grid cell.
    SameCell,
    /// The route is a single straight segment.
    DirectLine,
}

impl FallbackReason {
    /// Decided from the smoothed path length alone.
    pub fn for_smoothed_len(len: usize) -> Option<Self> {
        match len {
            0 => Some(Self::NoPath),
            1 => Some(Self::SameCell),
            2 => Some(Self::DirectLine),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum EdgeRendering {
    Smart { svg_path: String, label: CanvasPoint },
    Fallback(FallbackReason),
}

impl EdgeRendering {
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }
}

/// One edge of a batch: endpoints already resolved to canvas points.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeRequest {
    pub id: EdgeId,
    pub source: CanvasPoint,
    pub target: CanvasPoint,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderedEdge {
    pub route: SmartEdgeRoute,
    pub rendering: EdgeRendering,
}

/// Per-edge result of a batch. A failing edge does not fail its siblings.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeOutcome {
    pub id: EdgeId,
    pub result: Result<RenderedEdge, RoutingError>,
}

/// Options plus the two pluggable strategies.
pub struct SmartEdgeRouter {
    options: SmartEdgeOptions,
    finder: Box<dyn PathFinder>,
    drawer: Box<dyn CurveDrawer>,
}

impl SmartEdgeRouter {
    pub fn new(
        options: SmartEdgeOptions,
        finder: Box<dyn PathFinder>,
        drawer: Box<dyn CurveDrawer>,
    ) -> Result<Self, RoutingError> {
        options.validate()?;
        Ok(Self { options, finder, drawer })
    }

    /// Uses the built-in strategies the options name.
    pub fn from_options(options: SmartEdgeOptions) -> Result<Self, RoutingError> {
        let finder = Box::new(options.path_finder.finder());
        let drawer = options.curve.drawer();
        Self::new(options, finder, drawer)
    }

    pub fn options(&self) -> &SmartEdgeOptions {
        &self.options
    }

    pub fn route(
        &self,
        nodes: &[NodeBox],
        source: &CanvasPoint,
        target: &CanvasPoint,
    ) -> Result<SmartEdgeRoute, RoutingError> {
        routing::route_smart_edge(nodes, source, target, &self.options, self.finder.as_ref())
    }

    /// Routes one edge and keeps the grid it was searched on.
    pub fn trace(
        &self,
        nodes: &[NodeBox],
        source: &CanvasPoint,
        target: &CanvasPoint,
    ) -> Result<(SmartEdgeRoute, Option<OccupancyGrid>), RoutingError> {
        routing::route_smart_edge_with_grid(
            nodes,
            source,
            target,
            &self.options,
            self.finder.as_ref(),
        )
    }

    /// Applies the fallback policy and draws the curve for a finished route.
    pub fn render(
        &self,
        route: &SmartEdgeRoute,
        source: &CanvasPoint,
        target: &CanvasPoint,
    ) -> EdgeRendering {
        if let Some(reason) = FallbackReason::for_smoothed_len(route.path().smoothed().len()) {
            return EdgeRendering::Fallback(reason);
        }
        let svg_path = self.drawer.draw(source, target, route.waypoints());
        let label = route.label().unwrap_or_else(|| source.midpoint(target));
        EdgeRendering::Smart { svg_path, label }
    }

    pub fn route_and_render(
        &self,
        nodes: &[NodeBox],
        source: &CanvasPoint,
        target: &CanvasPoint,
    ) -> Result<RenderedEdge, RoutingError> {
        let route = self.route(nodes, source, target)?;
        let rendering = self.render(&route, source, target);
        Ok(RenderedEdge { route, rendering })
    }

    /// Routes every edge against one shared obstacle set, in parallel.
    ///
    /// Only a broken node set fails the whole batch; outcomes keep the input order.
    pub fn render_all(
        &self,
        nodes: &[NodeBox],
        edges: &[EdgeRequest],
    ) -> Result<Vec<EdgeOutcome>, RoutingError> {
        let boxes = build_boxes(nodes, self.options.node_padding, self.options.grid_ratio)?;

        let outcomes: Vec<EdgeOutcome> = edges
            .par_iter()
            .map(|edge| {
                let result = routing::route_with_boxes(
                    &boxes,
                    &edge.source,
                    &edge.target,
                    &self.options,
                    self.finder.as_ref(),
                )
                .map(|route| {
                    let rendering = self.render(&route, &edge.source, &edge.target);
                    RenderedEdge { route, rendering }
                });
                EdgeOutcome { id: edge.id.clone(), result }
            })
            .collect();

        let failed = outcomes.iter().filter(|o| o.result.is_err()).count();
        let fallback = outcomes
            .iter()
            .filter(|o| matches!(&o.result, Ok(edge) if edge.rendering.is_fallback()))
            .count();
        tracing::info!(
            edges = outcomes.len(),
            smart = outcomes.len() - failed - fallback,
            fallback,
            failed,
            "rendered edges"
        );
        Ok(outcomes)
    }
}

impl std::fmt::Debug for SmartEdgeRouter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmartEdgeRouter").field("options", &self.options).finish_non_exhaustive()
    }
}
