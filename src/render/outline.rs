// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Flashtree-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Flashtree and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt::Write as _;

use super::scene::Scene;
use super::text::{single_line, truncate_with_ellipsis};

const MAX_LABEL_LEN: usize = 32;

/// Deterministic text outline of a scene: one line per row, then one line per edge.
pub fn render_outline(scene: &Scene) -> String {
    let mut out = String::new();

    let mut current: Option<usize> = None;
    for node in &scene.nodes {
        let label = truncate_with_ellipsis(&single_line(&node.label), MAX_LABEL_LEN);
        if current == Some(node.layer) {
            let _ = write!(out, " | [{}] {label}", node.index);
        } else {
            if current.is_some() {
                out.push('\n');
            }
            let _ = write!(out, "row {}: [{}] {label}", node.layer, node.index);
        }
        current = Some(node.layer);
    }

    for edge in &scene.edges {
        if !out.is_empty() {
            out.push('\n');
        }
        let _ = write!(out, "{} -{}-> {}", edge.source, edge.label, edge.target);
    }

    out
}
