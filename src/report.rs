// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of smart-edge and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Serializable summaries of routed edges, as printed by the command line tool.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::geometry::{CanvasPoint, Rect};
use crate::router::{EdgeOutcome, EdgeRendering, FallbackReason};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PointReport {
    pub x: f64,
    pub y: f64,
}

impl From<CanvasPoint> for PointReport {
    fn from(point: CanvasPoint) -> Self {
        Self { x: point.x, y: point.y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RectReport {
    pub x_min: f64,
    pub y_min: f64,
    pub x_max: f64,
    pub y_max: f64,
}

impl From<&Rect> for RectReport {
    fn from(rect: &Rect) -> Self {
        Self { x_min: rect.x_min(), y_min: rect.y_min(), x_max: rect.x_max(), y_max: rect.y_max() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum EdgeStatus {
    Smart,
    Fallback,
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EdgeReport {
    pub id: String,
    pub status: EdgeStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback: Option<FallbackReason>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub svg_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<PointReport>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canvas: Option<RectReport>,
    /// Number of cells on the full grid path.
    #[serde(default)]
    pub path_cells: usize,
    /// Canvas positions of the smoothed path.
    #[serde(default)]
    pub waypoints: Vec<PointReport>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl EdgeReport {
    pub fn from_outcome(outcome: &EdgeOutcome) -> Self {
        let id = outcome.id.to_string();
        let edge = match &outcome.result {
            Ok(edge) => edge,
            Err(err) => {
                return Self {
                    id,
                    status: EdgeStatus::Error,
                    fallback: None,
                    svg_path: None,
                    label: None,
                    canvas: None,
                    path_cells: 0,
                    waypoints: Vec::new(),
                    error: Some(err.to_string()),
                }
            }
        };

        let (status, fallback, svg_path, label) = match &edge.rendering {
            EdgeRendering::Smart { svg_path, label } => {
                (EdgeStatus::Smart, None, Some(svg_path.clone()), Some(PointReport::from(*label)))
            }
            EdgeRendering::Fallback(reason) => (EdgeStatus::Fallback, Some(*reason), None, None),
        };

        Self {
            id,
            status,
            fallback,
            svg_path,
            label,
            canvas: Some(RectReport::from(edge.route.canvas())),
            path_cells: edge.route.path().full().len(),
            waypoints: edge.route.waypoints().iter().copied().map(PointReport::from).collect(),
            error: None,
        }
    }
}

/// Per-edge reports plus totals for a whole scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SceneReport {
    pub edges: Vec<EdgeReport>,
    pub smart: usize,
    pub fallback: usize,
    pub failed: usize,
}

impl SceneReport {
    pub fn from_outcomes(outcomes: &[EdgeOutcome]) -> Self {
        let edges = outcomes.iter().map(EdgeReport::from_outcome).collect::<Vec<_>>();
        let count = |status: EdgeStatus| edges.iter().filter(|e| e.status == status).count();
        let smart = count(EdgeStatus::Smart);
        let fallback = count(EdgeStatus::Fallback);
        let failed = count(EdgeStatus::Error);
        Self { edges, smart, fallback, failed }
    }
}
