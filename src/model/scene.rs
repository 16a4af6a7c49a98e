// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of smart-edge and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::{BTreeMap, BTreeSet};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::ids::{EdgeId, NodeId};
use crate::geometry::{CanvasPoint, Side};
use crate::options::SmartEdgeOptions;
use crate::router::EdgeRequest;
use crate::routing::NodeBox;

/// A laid-out node: top-left corner plus size, in canvas units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct SceneNode {
    pub id: NodeId,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl SceneNode {
    pub fn node_box(&self) -> NodeBox {
        NodeBox::new(self.x, self.y, self.width, self.height)
    }
}

/// The midpoint of one face of a scene node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct NodeAnchor {
    pub node: NodeId,
    pub side: Side,
}

/// Where an edge starts or ends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum EndpointSpec {
    Anchor(NodeAnchor),
    Point(CanvasPoint),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct SceneEdge {
    pub id: EdgeId,
    pub source: EndpointSpec,
    pub target: EndpointSpec,
}

/// Everything one routing run needs: options, nodes and the edges between them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct Scene {
    #[serde(default)]
    options: SmartEdgeOptions,
    nodes: Vec<SceneNode>,
    #[serde(default)]
    edges: Vec<SceneEdge>,
}

#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    #[error("invalid scene json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("duplicate node id `{id}`")]
    DuplicateNode { id: NodeId },

    #[error("duplicate edge id `{id}`")]
    DuplicateEdge { id: EdgeId },

    #[error("edge `{edge}` references unknown node `{node}`")]
    UnknownNode { edge: EdgeId, node: NodeId },
}

impl Scene {
    pub fn new(
        options: SmartEdgeOptions,
        nodes: Vec<SceneNode>,
        edges: Vec<SceneEdge>,
    ) -> Result<Self, SceneError> {
        let scene = Self { options, nodes, edges };
        scene.validate()?;
        Ok(scene)
    }

    pub fn from_json(json: &str) -> Result<Self, SceneError> {
        let scene: Self = serde_json::from_str(json)?;
        scene.validate()?;
        Ok(scene)
    }

    pub fn options(&self) -> &SmartEdgeOptions {
        &self.options
    }

    pub fn nodes(&self) -> &[SceneNode] {
        &self.nodes
    }

    pub fn edges(&self) -> &[SceneEdge] {
        &self.edges
    }

    /// Ids must be unique and every anchor must name an existing node.
    pub fn validate(&self) -> Result<(), SceneError> {
        let mut node_ids = BTreeSet::<&NodeId>::new();
        for node in &self.nodes {
            if !node_ids.insert(&node.id) {
                return Err(SceneError::DuplicateNode { id: node.id.clone() });
            }
        }

        let mut edge_ids = BTreeSet::<&EdgeId>::new();
        for edge in &self.edges {
            if !edge_ids.insert(&edge.id) {
                return Err(SceneError::DuplicateEdge { id: edge.id.clone() });
            }
            for endpoint in [&edge.source, &edge.target] {
                if let EndpointSpec::Anchor(anchor) = endpoint {
                    if !node_ids.contains(&anchor.node) {
                        return Err(SceneError::UnknownNode {
                            edge: edge.id.clone(),
                            node: anchor.node.clone(),
                        });
                    }
                }
            }
        }
        Ok(())
    }

    pub fn node_boxes(&self) -> Vec<NodeBox> {
        self.nodes.iter().map(SceneNode::node_box).collect()
    }

    /// Resolves every edge's endpoints to canvas points, in edge order.
    pub fn edge_requests(&self) -> Result<Vec<EdgeRequest>, SceneError> {
        let by_id = self.nodes.iter().map(|node| (&node.id, node)).collect::<BTreeMap<_, _>>();

        let resolve = |edge: &SceneEdge, spec: &EndpointSpec| -> Result<CanvasPoint, SceneError> {
            match spec {
                EndpointSpec::Point(point) => Ok(*point),
                EndpointSpec::Anchor(anchor) => by_id
                    .get(&anchor.node)
                    .map(|node| node.node_box().anchor(anchor.side))
                    .ok_or_else(|| SceneError::UnknownNode {
                        edge: edge.id.clone(),
                        node: anchor.node.clone(),
                    }),
            }
        };

        self.edges
            .iter()
            .map(|edge| {
                Ok(EdgeRequest {
                    id: edge.id.clone(),
                    source: resolve(edge, &edge.source)?,
                    target: resolve(edge, &edge.target)?,
                })
            })
            .collect()
    }
}
