// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Flashtree-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Flashtree and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::Serialize;

use crate::layout::DeckLayout;
use crate::model::{CardId, Flashcard};

pub const NODE_MIN_WIDTH: f64 = 220.0;
pub const NODE_MIN_HEIGHT: f64 = 72.0;
pub const EDGE_MARKER_END: &str = "arrowclosed";

/// Node and edge list handed to a diagram renderer.
#[derive(Debug, Clone, PartialEq, Default, Serialize, JsonSchema)]
pub struct Scene {
    pub nodes: Vec<SceneNode>,
    pub edges: Vec<SceneEdge>,
}

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SceneNode {
    pub id: String,
    pub label: String,
    pub index: u64,
    /// Layout row, counted from the top.
    pub layer: usize,
    pub x: f64,
    pub y: f64,
    pub style: NodeStyle,
}

impl SceneNode {
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x
            && x <= self.x + self.style.min_width
            && y >= self.y
            && y <= self.y + self.style.min_height
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct NodeStyle {
    pub background: String,
    pub color: String,
    pub border: String,
    pub border_radius: u32,
    pub padding: u32,
    pub min_width: f64,
    pub min_height: f64,
}

impl Default for NodeStyle {
    fn default() -> Self {
        Self {
            background: "var(--card)".to_owned(),
            color: "var(--fg)".to_owned(),
            border: "1px solid #0002".to_owned(),
            border_radius: 12,
            padding: 12,
            min_width: NODE_MIN_WIDTH,
            min_height: NODE_MIN_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SceneEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    pub label: String,
    pub marker_end: String,
    pub label_style: EdgeLabelStyle,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EdgeLabelStyle {
    pub font_size: u32,
    pub color: String,
    pub bg_padding: [u32; 2],
    pub bg_border_radius: u32,
}

impl Default for EdgeLabelStyle {
    fn default() -> Self {
        Self {
            font_size: 11,
            color: "var(--fg)".to_owned(),
            bg_padding: [4, 2],
            bg_border_radius: 8,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneBounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl SceneBounds {
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

impl Scene {
    /// Builds the renderer scene for `layout`, which must have been computed from `cards`.
    ///
    /// Nodes are emitted row by row in layout order. Cards missing from the layout are skipped.
    pub fn from_layout(cards: &[Flashcard], layout: &DeckLayout) -> Self {
        let mut by_id = BTreeMap::<&CardId, &Flashcard>::new();
        for card in cards {
            by_id.entry(card.id()).or_insert(card);
        }

        let nodes = layout
            .nodes()
            .filter_map(|id| {
                let card = by_id.get(id)?;
                let position = layout.position(id)?;
                Some(SceneNode {
                    id: id.to_string(),
                    label: node_label(card),
                    index: card.index(),
                    layer: layout.layer_of(id)?,
                    x: position.x,
                    y: position.y,
                    style: NodeStyle::default(),
                })
            })
            .collect();

        let edges = layout
            .edges()
            .iter()
            .map(|edge| SceneEdge {
                id: edge.id().to_owned(),
                source: edge.source().to_string(),
                target: edge.target().to_string(),
                label: edge.label().to_owned(),
                marker_end: EDGE_MARKER_END.to_owned(),
                label_style: EdgeLabelStyle::default(),
            })
            .collect();

        Self { nodes, edges }
    }

    pub fn node(&self, id: &str) -> Option<&SceneNode> {
        self.nodes.iter().find(|node| node.id == id)
    }

    /// Hit-tests a canvas point; when node boxes overlap the last placed node wins.
    pub fn node_at(&self, x: f64, y: f64) -> Option<&SceneNode> {
        self.nodes.iter().rev().find(|node| node.contains(x, y))
    }

    /// Bounding box of all node boxes, for fit-to-view.
    pub fn bounds(&self) -> Option<SceneBounds> {
        let mut nodes = self.nodes.iter();
        let first = nodes.next()?;
        let mut bounds = SceneBounds {
            min_x: first.x,
            min_y: first.y,
            max_x: first.x + first.style.min_width,
            max_y: first.y + first.style.min_height,
        };
        for node in nodes {
            bounds.min_x = bounds.min_x.min(node.x);
            bounds.min_y = bounds.min_y.min(node.y);
            bounds.max_x = bounds.max_x.max(node.x + node.style.min_width);
            bounds.max_y = bounds.max_y.max(node.y + node.style.min_height);
        }
        Some(bounds)
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

fn node_label(card: &Flashcard) -> String {
    if card.title().trim().is_empty() {
        format!("#{}", card.index())
    } else {
        card.title().to_owned()
    }
}

/// JSON schema of [`Scene`], for renderer integrations.
pub fn scene_schema() -> schemars::Schema {
    schemars::schema_for!(Scene)
}

#[cfg(test)]
mod tests {
    use super::{scene_schema, Scene, NODE_MIN_HEIGHT, NODE_MIN_WIDTH};
    use crate::layout::layout_cards;
    use crate::model::fixtures::{card, deck_small_tree};
    use crate::model::Flashcard;

    fn scene_for(deck: &[Flashcard]) -> Scene {
        Scene::from_layout(deck, &layout_cards(deck))
    }

    #[test]
    fn builds_nodes_row_by_row_with_titles() {
        let scene = scene_for(&deck_small_tree());

        let placed = scene
            .nodes
            .iter()
            .map(|node| (node.id.as_str(), node.label.as_str(), node.x, node.y))
            .collect::<Vec<_>>();
        assert_eq!(
            placed,
            vec![
                ("a", "A", 0.0, 0.0),
                ("b", "B", -140.0, 200.0),
                ("c", "C", 140.0, 200.0),
                ("d", "D", 0.0, 400.0),
            ]
        );
    }

    #[test]
    fn edges_carry_labels_and_arrow_markers() {
        let scene = scene_for(&deck_small_tree());
        let edges = scene
            .edges
            .iter()
            .map(|edge| (edge.id.as_str(), edge.label.as_str(), edge.marker_end.as_str()))
            .collect::<Vec<_>>();
        assert_eq!(
            edges,
            vec![
                ("a->b:F", "false", "arrowclosed"),
                ("a->c:T", "true", "arrowclosed"),
                ("b->d:T", "true", "arrowclosed"),
            ]
        );
    }

    #[test]
    fn untitled_cards_are_labeled_by_index() {
        let mut untitled = card("x", 5);
        untitled.set_title("  ");
        let scene = scene_for(&[untitled]);
        assert_eq!(scene.nodes[0].label, "#5");
    }

    #[test]
    fn hit_testing_maps_points_to_nodes() {
        let scene = scene_for(&deck_small_tree());

        assert_eq!(scene.node_at(10.0, 10.0).map(|n| n.id.as_str()), Some("a"));
        assert_eq!(scene.node_at(-130.0, 250.0).map(|n| n.id.as_str()), Some("b"));
        assert_eq!(scene.node_at(-500.0, -500.0), None);
        assert_eq!(scene.node_at(0.0, 100.0), None);
    }

    #[test]
    fn bounds_cover_every_node_box() {
        let scene = scene_for(&deck_small_tree());
        let bounds = scene.bounds().expect("bounds");
        assert_eq!(bounds.min_x, -140.0);
        assert_eq!(bounds.min_y, 0.0);
        assert_eq!(bounds.max_x, 140.0 + NODE_MIN_WIDTH);
        assert_eq!(bounds.max_y, 400.0 + NODE_MIN_HEIGHT);

        assert_eq!(Scene::default().bounds(), None);
    }

    #[test]
    fn serializes_renderer_field_names() {
        let scene = scene_for(&deck_small_tree());
        let json = serde_json::to_value(&scene).expect("json");
        assert_eq!(json["nodes"][0]["style"]["minWidth"], 220.0);
        assert_eq!(json["nodes"][3]["layer"], 2);
        assert_eq!(json["edges"][0]["markerEnd"], "arrowclosed");
        assert_eq!(json["edges"][0]["labelStyle"]["bgPadding"][0], 4);
    }

    #[test]
    fn schema_describes_nodes_and_edges() {
        let schema = serde_json::to_value(scene_schema()).expect("schema json");
        assert!(schema["properties"]["nodes"].is_object());
        assert!(schema["properties"]["edges"].is_object());
    }
}
