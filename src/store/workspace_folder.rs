// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Flashtree-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Flashtree and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt::Write as _;
use std::fs;
use std::io;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use thiserror::Error;

use super::FlashcardStore;
use crate::model::{CardId, CardRow, DecodeError, Flashcard, WorkspaceId};
use crate::query::{filter_cards, CardQuery};

const CARDS_FILENAME: &str = "flashcards.json";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("json error at {path:?}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("cannot decode card row #{position} in {path:?}: {source}")]
    Decode {
        path: PathBuf,
        position: usize,
        #[source]
        source: DecodeError,
    },
    #[error("refusing to write through symlink at {path:?}")]
    SymlinkRefused { path: PathBuf },
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum WriteDurability {
    /// Writes a temp file and renames it into place, without fsync.
    #[default]
    BestEffort,

    /// Also flushes the file and the rename to stable storage where the platform allows.
    Durable,
}

/// A folder holding one subfolder per workspace:
///
/// ```text
/// <root>/<workspace>/flashcards.json
/// ```
///
/// The JSON file is an array of [`CardRow`]s. A workspace without the file is empty.
#[derive(Debug, Clone)]
pub struct WorkspaceFolder {
    root: PathBuf,
    durability: WriteDurability,
}

impl WorkspaceFolder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            durability: WriteDurability::default(),
        }
    }

    pub fn with_durability(mut self, durability: WriteDurability) -> Self {
        self.durability = durability;
        self
    }

    pub fn durability(&self) -> WriteDurability {
        self.durability
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn workspace_dir(&self, workspace: &WorkspaceId) -> PathBuf {
        self.root.join(encode_persisted_id_segment(workspace.as_str()))
    }

    pub fn cards_path(&self, workspace: &WorkspaceId) -> PathBuf {
        self.workspace_dir(workspace).join(CARDS_FILENAME)
    }

    /// Raw rows as stored, in file order.
    pub fn load_rows(&self, workspace: &WorkspaceId) -> Result<Vec<CardRow>, StoreError> {
        let path = self.cards_path(workspace);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(source) if source.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(workspace = %workspace, "no cards file; workspace is empty");
                return Ok(Vec::new());
            }
            Err(source) => return Err(StoreError::Io { path, source }),
        };

        serde_json::from_str(&raw).map_err(|source| StoreError::Json { path, source })
    }

    pub fn save_rows(&self, workspace: &WorkspaceId, rows: &[CardRow]) -> Result<(), StoreError> {
        let path = self.cards_path(workspace);
        let json = serde_json::to_string_pretty(rows).map_err(|source| StoreError::Json {
            path: path.clone(),
            source,
        })?;

        write_atomic(
            &self.workspace_dir(workspace),
            &path,
            format!("{json}\n").as_bytes(),
            self.durability,
        )
    }
}

impl FlashcardStore for WorkspaceFolder {
    fn load_cards(&self, workspace: &WorkspaceId) -> Result<Vec<Flashcard>, StoreError> {
        let rows = self.load_rows(workspace)?;
        let mut cards = Vec::with_capacity(rows.len());
        for (position, row) in rows.into_iter().enumerate() {
            let card = row.decode().map_err(|source| StoreError::Decode {
                path: self.cards_path(workspace),
                position,
                source,
            })?;
            cards.push(card);
        }

        cards.sort_by(|a, b| a.index().cmp(&b.index()).then_with(|| a.id().cmp(b.id())));
        tracing::debug!(workspace = %workspace, cards = cards.len(), "loaded cards");
        Ok(cards)
    }

    fn upsert_card(
        &mut self,
        workspace: &WorkspaceId,
        card: &Flashcard,
    ) -> Result<(), StoreError> {
        let mut rows = self.load_rows(workspace)?;
        let row = CardRow::from(card);
        match rows.iter_mut().find(|existing| existing.id == row.id) {
            Some(existing) => *existing = row,
            None => rows.push(row),
        }
        self.save_rows(workspace, &rows)?;
        tracing::info!(workspace = %workspace, card = %card.id(), "upserted card");
        Ok(())
    }

    fn delete_card(&mut self, workspace: &WorkspaceId, id: &CardId) -> Result<bool, StoreError> {
        let mut rows = self.load_rows(workspace)?;
        let before = rows.len();
        rows.retain(|row| row.id != id.as_str());
        if rows.len() == before {
            return Ok(false);
        }

        let mut unlinked = 0usize;
        for children in rows
            .iter_mut()
            .filter_map(|row| row.data.as_mut()?.children.as_mut())
        {
            for slot in [&mut children.on_false, &mut children.on_true] {
                if slot.as_deref() == Some(id.as_str()) {
                    *slot = None;
                    unlinked += 1;
                }
            }
        }

        self.save_rows(workspace, &rows)?;
        tracing::info!(workspace = %workspace, card = %id, unlinked, "deleted card");
        Ok(true)
    }

    fn search(&self, workspace: &WorkspaceId, query: &str) -> Result<Vec<Flashcard>, StoreError> {
        let cards = self.load_cards(workspace)?;
        Ok(filter_cards(&cards, &CardQuery::parse(query))
            .into_iter()
            .cloned()
            .collect())
    }
}

// Filesystem helpers for `WorkspaceFolder`.
include!("workspace_folder/helpers.rs");

#[cfg(test)]
mod tests;
