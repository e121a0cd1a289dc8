// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Flashtree-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Flashtree and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Flashtree lays out and stores binary-branching flashcard decks.
//!
//! Cards point at up to two children (`false` / `true`). [`layout::layout_cards`] turns a deck
//! into rows of placed nodes and labeled edges; [`render::Scene`] packages that for a canvas,
//! [`ui`] bridges clicks back to a selection, and [`store`] persists decks per workspace.

pub mod layout;
pub mod model;
pub mod query;
pub mod render;
pub mod store;
pub mod ui;
