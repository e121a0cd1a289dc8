// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Flashtree-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Flashtree and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::Flashcard;

/// A parsed search box query.
///
/// All-digit queries look a card up by its display index; anything else is a case-insensitive
/// substring match over the title and bullet texts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardQuery {
    All,
    Index(u64),
    Text(String),
}

impl CardQuery {
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Self::All;
        }
        if trimmed.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(index) = trimmed.parse::<u64>() {
                return Self::Index(index);
            }
        }
        Self::Text(trimmed.to_lowercase())
    }

    pub fn matches(&self, card: &Flashcard) -> bool {
        match self {
            Self::All => true,
            Self::Index(index) => card.index() == *index,
            Self::Text(needle) => {
                card.title().to_lowercase().contains(needle.as_str())
                    || card
                        .bullets()
                        .iter()
                        .any(|bullet| bullet.text().to_lowercase().contains(needle.as_str()))
            }
        }
    }
}

/// Cards matching `query`, in input order.
pub fn filter_cards<'a>(cards: &'a [Flashcard], query: &CardQuery) -> Vec<&'a Flashcard> {
    cards.iter().filter(|card| query.matches(card)).collect()
}
