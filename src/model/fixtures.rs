// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Flashtree-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Flashtree and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![cfg(test)]

use super::card::{Branch, Bullet, Flashcard};
use super::ids::CardId;

pub(crate) fn cid(value: &str) -> CardId {
    CardId::new(value).expect("card id")
}

pub(crate) fn card(id: &str, index: u64) -> Flashcard {
    Flashcard::new(cid(id), index, id.to_uppercase())
}

/// `a` branches to `b` (false) and `c` (true); `b` continues to `d` on true.
pub(crate) fn deck_small_tree() -> Vec<Flashcard> {
    vec![
        card("a", 1)
            .with_bullet(Bullet::new("starts here", true))
            .with_child(Branch::False, cid("b"))
            .with_child(Branch::True, cid("c")),
        card("b", 2).with_child(Branch::True, cid("d")),
        card("c", 3).with_bullet(Bullet::new("leaf", false)),
        card("d", 4),
    ]
}

/// `a <-> b` with no root anywhere.
pub(crate) fn deck_two_cycle() -> Vec<Flashcard> {
    vec![
        card("a", 1).with_child(Branch::True, cid("b")),
        card("b", 2).with_child(Branch::False, cid("a")),
    ]
}
