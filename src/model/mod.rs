// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of smart-edge and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Scene description types: nodes, edges and their identifiers.

pub mod ids;
pub mod scene;

pub use ids::{EdgeId, EdgeIdTag, Id, IdError, NodeId, NodeIdTag};
pub use scene::{EndpointSpec, NodeAnchor, Scene, SceneEdge, SceneError, SceneNode};
