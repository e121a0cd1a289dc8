// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Flashtree-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Flashtree and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Render-ready output for deck layouts.
//!
//! The scene is what a node-and-edge canvas consumes (positions, labels, style hints); the
//! outline is a plain-text view of the same scene for terminals and snapshots.

pub mod outline;
pub mod scene;
mod text;

pub use outline::render_outline;
pub use scene::{
    scene_schema, EdgeLabelStyle, NodeStyle, Scene, SceneBounds, SceneEdge, SceneNode,
    EDGE_MARKER_END, NODE_MIN_HEIGHT, NODE_MIN_WIDTH,
};
