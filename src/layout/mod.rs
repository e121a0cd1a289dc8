// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Flashtree-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Flashtree and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Layout algorithms for card decks.
//!
//! This module turns a flat card list into rows of placed nodes plus labeled branch edges.

pub mod deck;

pub use deck::{layout_cards, layout_cards_with, DeckLayout, LayoutEdge, LayoutSpacing, Position};
