// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Flashtree-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Flashtree and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Read-only queries over card decks.
//!
//! Search filtering for the index list plus the degree/root views the layout is built on.

pub mod graph;
pub mod search;

pub use graph::{degrees, roots, CardDegree};
pub use search::{filter_cards, CardQuery};
