// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Flashtree-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Flashtree and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::{BTreeMap, VecDeque};

use crate::model::{Branch, CardId, Flashcard};
use crate::query::roots;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutSpacing {
    pub x_gap: f64,
    pub y_gap: f64,
}

impl Default for LayoutSpacing {
    fn default() -> Self {
        Self {
            x_gap: 280.0,
            y_gap: 200.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutEdge {
    id: String,
    source: CardId,
    target: CardId,
    branch: Branch,
}

impl LayoutEdge {
    fn new(source: &CardId, target: &CardId, branch: Branch) -> Self {
        Self {
            id: format!("{source}->{target}:{}", branch.code()),
            source: source.clone(),
            target: target.clone(),
            branch,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn source(&self) -> &CardId {
        &self.source
    }

    pub fn target(&self) -> &CardId {
        &self.target
    }

    pub fn branch(&self) -> Branch {
        self.branch
    }

    pub fn label(&self) -> &'static str {
        self.branch.label()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeckLayout {
    layers: Vec<Vec<CardId>>,
    layer_by_id: BTreeMap<CardId, usize>,
    positions: BTreeMap<CardId, Position>,
    edges: Vec<LayoutEdge>,
    dangling_edges: Vec<LayoutEdge>,
}

impl DeckLayout {
    /// Card ids grouped by row; within a row, ids keep input order.
    pub fn layers(&self) -> &[Vec<CardId>] {
        &self.layers
    }

    pub fn layer_of(&self, id: &CardId) -> Option<usize> {
        self.layer_by_id.get(id).copied()
    }

    pub fn positions(&self) -> &BTreeMap<CardId, Position> {
        &self.positions
    }

    pub fn position(&self, id: &CardId) -> Option<Position> {
        self.positions.get(id).copied()
    }

    /// Placed card ids, row by row.
    pub fn nodes(&self) -> impl Iterator<Item = &CardId> + '_ {
        self.layers.iter().flatten()
    }

    pub fn node_count(&self) -> usize {
        self.positions.len()
    }

    pub fn edges(&self) -> &[LayoutEdge] {
        &self.edges
    }

    /// Edges whose target is not in the deck. They are kept out of [`Self::edges`].
    pub fn dangling_edges(&self) -> &[LayoutEdge] {
        &self.dangling_edges
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Lays out a deck with the default spacing.
pub fn layout_cards(cards: &[Flashcard]) -> DeckLayout {
    layout_cards_with(cards, LayoutSpacing::default())
}

/// Layered top-down layout of a card deck.
///
/// - Roots are cards no other card points at; they form row 0.
/// - Rows below are assigned breadth-first from the roots, `false` child before `true` child.
///   Each card is assigned at most once, which is what bounds the walk on cyclic decks.
/// - Cards the walk never reaches (fully cyclic components) fall back to row 0.
/// - Every row is centered on `x = 0`.
///
/// Duplicate ids: the first occurrence wins and later copies are ignored.
pub fn layout_cards_with(cards: &[Flashcard], spacing: LayoutSpacing) -> DeckLayout {
    let mut by_id = BTreeMap::<&CardId, &Flashcard>::new();
    let mut order = Vec::<&Flashcard>::with_capacity(cards.len());
    for card in cards {
        if by_id.contains_key(card.id()) {
            tracing::warn!(card = %card.id(), "duplicate card id; keeping first occurrence");
            continue;
        }
        by_id.insert(card.id(), card);
        order.push(card);
    }

    let mut layer_by_id = BTreeMap::<CardId, usize>::new();
    let mut queue = VecDeque::<&Flashcard>::new();
    for root in roots(cards) {
        if let Some(card) = by_id.get(&root) {
            queue.push_back(*card);
        }
        layer_by_id.insert(root, 0);
    }
    let root_count = queue.len();

    while let Some(card) = queue.pop_front() {
        let next_layer = layer_by_id.get(card.id()).copied().unwrap_or(0) + 1;
        for (_, child_id) in card.children().iter() {
            let Some(child) = by_id.get(child_id) else {
                continue;
            };
            if layer_by_id.contains_key(child_id) {
                continue;
            }
            layer_by_id.insert(child_id.clone(), next_layer);
            queue.push_back(*child);
        }
    }

    let mut layers = Vec::<Vec<CardId>>::new();
    for card in &order {
        let layer = *layer_by_id.entry(card.id().clone()).or_insert(0);
        if layers.len() <= layer {
            layers.resize_with(layer + 1, Vec::new);
        }
        layers[layer].push(card.id().clone());
    }

    let mut positions = BTreeMap::<CardId, Position>::new();
    for (layer, ids) in layers.iter().enumerate() {
        let total_width = ids.len().saturating_sub(1) as f64 * spacing.x_gap;
        let start_x = -total_width / 2.0;
        for (idx, id) in ids.iter().enumerate() {
            positions.insert(
                id.clone(),
                Position {
                    x: start_x + idx as f64 * spacing.x_gap,
                    y: layer as f64 * spacing.y_gap,
                },
            );
        }
    }

    let mut edges = Vec::<LayoutEdge>::new();
    let mut dangling_edges = Vec::<LayoutEdge>::new();
    for card in &order {
        for (branch, child_id) in card.children().iter() {
            let edge = LayoutEdge::new(card.id(), child_id, branch);
            if by_id.contains_key(child_id) {
                edges.push(edge);
            } else {
                tracing::debug!(edge = edge.id(), "dropping edge to missing card");
                dangling_edges.push(edge);
            }
        }
    }

    tracing::debug!(
        cards = order.len(),
        roots = root_count,
        layers = layers.len(),
        edges = edges.len(),
        dangling = dangling_edges.len(),
        "laid out deck"
    );

    DeckLayout {
        layers,
        layer_by_id,
        positions,
        edges,
        dangling_edges,
    }
}
