// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Flashtree-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Flashtree and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::{BTreeMap, BTreeSet};

use crate::model::{CardId, Flashcard};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CardDegree {
    pub in_degree: usize,
    pub out_degree: usize,
}

/// Branch degrees per card, counting only references to cards present in the deck.
///
/// Duplicate ids are counted once (first occurrence).
pub fn degrees(cards: &[Flashcard]) -> BTreeMap<CardId, CardDegree> {
    let mut degrees = BTreeMap::<CardId, CardDegree>::new();
    let mut counted = Vec::<&Flashcard>::with_capacity(cards.len());
    for card in cards {
        if degrees.contains_key(card.id()) {
            continue;
        }
        degrees.insert(card.id().clone(), CardDegree::default());
        counted.push(card);
    }

    for card in counted {
        for (_, child) in card.children().iter() {
            if !degrees.contains_key(child) {
                continue;
            }
            if let Some(from) = degrees.get_mut(card.id()) {
                from.out_degree += 1;
            }
            if let Some(to) = degrees.get_mut(child) {
                to.in_degree += 1;
            }
        }
    }

    degrees
}

/// Cards nothing points at, in input order. These form row 0 of the deck layout.
pub fn roots(cards: &[Flashcard]) -> Vec<CardId> {
    let degrees = degrees(cards);
    let mut seen = BTreeSet::<&CardId>::new();
    let mut roots = Vec::new();
    for card in cards {
        if !seen.insert(card.id()) {
            continue;
        }
        if degrees
            .get(card.id())
            .is_some_and(|degree| degree.in_degree == 0)
        {
            roots.push(card.id().clone());
        }
    }
    roots
}
