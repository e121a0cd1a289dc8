// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Flashtree-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Flashtree and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Selection bridge between the rendered scene and application state.
//!
//! Clicking a node reports its card id to a [`SelectionSink`]. The application owns the sink;
//! [`SelectionState`] is the plain in-memory one.

use crate::model::CardId;
use crate::render::Scene;

pub trait SelectionSink {
    fn select(&mut self, id: Option<CardId>);
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    rev: u64,
    selected: Option<CardId>,
}

impl SelectionState {
    pub fn rev(&self) -> u64 {
        self.rev
    }

    pub fn selected(&self) -> Option<&CardId> {
        self.selected.as_ref()
    }
}

impl SelectionSink for SelectionState {
    fn select(&mut self, id: Option<CardId>) {
        if self.selected == id {
            return;
        }
        self.selected = id;
        self.rev = self.rev.wrapping_add(1);
    }
}

impl<F> SelectionSink for F
where
    F: FnMut(Option<CardId>),
{
    fn select(&mut self, id: Option<CardId>) {
        self(id)
    }
}

/// Forwards a node click to `sink`. Returns `false` when the scene has no such node.
pub fn select_node(scene: &Scene, node_id: &str, sink: &mut impl SelectionSink) -> bool {
    let Some(node) = scene.node(node_id) else {
        return false;
    };
    match CardId::new(node.id.clone()) {
        Ok(id) => {
            sink.select(Some(id));
            true
        }
        Err(err) => {
            tracing::debug!(node = node_id, "ignoring click on node with invalid id: {err}");
            false
        }
    }
}

/// Hit-tests a click at canvas coordinates and forwards the hit node, if any.
pub fn click_at(scene: &Scene, x: f64, y: f64, sink: &mut impl SelectionSink) -> bool {
    match scene.node_at(x, y) {
        Some(node) => {
            let node_id = node.id.clone();
            select_node(scene, &node_id, sink)
        }
        None => false,
    }
}
