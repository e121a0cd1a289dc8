// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Flashtree-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Flashtree and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Persistence for card decks.
//!
//! [`FlashcardStore`] is the contract the editor needs from its backend, scoped by
//! workspace. [`WorkspaceFolder`] implements it on a local folder (one JSON file per workspace).

pub mod workspace_folder;

pub use workspace_folder::{StoreError, WorkspaceFolder, WriteDurability};

use std::collections::BTreeSet;

use crate::model::{CardId, Flashcard, WorkspaceId};

pub trait FlashcardStore {
    /// All cards of a workspace, ordered by index (ties by id).
    fn load_cards(&self, workspace: &WorkspaceId) -> Result<Vec<Flashcard>, StoreError>;

    /// Inserts `card`, or replaces the stored card with the same id.
    fn upsert_card(&mut self, workspace: &WorkspaceId, card: &Flashcard)
        -> Result<(), StoreError>;

    /// Removes a card and clears every `false`/`true` slot that pointed at it.
    /// Returns `false` when no card had that id.
    fn delete_card(&mut self, workspace: &WorkspaceId, id: &CardId) -> Result<bool, StoreError>;

    /// Cards matching a search box query (see [`crate::query::CardQuery`]), in load order.
    fn search(&self, workspace: &WorkspaceId, query: &str) -> Result<Vec<Flashcard>, StoreError>;

    /// Stores and returns a [`Flashcard::draft`] numbered one past the highest index.
    ///
    /// If the numbered id is already taken the index keeps counting up until it is free, so an
    /// existing card is never replaced.
    fn create_card(&mut self, workspace: &WorkspaceId) -> Result<Flashcard, StoreError> {
        let cards = self.load_cards(workspace)?;
        let taken = cards.iter().map(Flashcard::id).collect::<BTreeSet<_>>();
        let mut index = cards.iter().map(Flashcard::index).max().unwrap_or(0).saturating_add(1);
        while index < u64::MAX && taken.contains(&CardId::numbered(index)) {
            index += 1;
        }

        let draft = Flashcard::draft(index);
        self.upsert_card(workspace, &draft)?;
        Ok(draft)
    }
}
