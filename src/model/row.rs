// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Flashtree-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Flashtree and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Stored row shape and the decode step into [`Flashcard`].
//!
//! Rows come from an independently edited store, so every field below `data` is optional and
//! `null` is accepted wherever a field may be missing. Only the row's own id and index are
//! validated strictly; empty child or parent references degrade to "absent".

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::card::{Branch, Bullet, Flashcard};
use super::ids::{CardId, IdError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRow {
    pub id: String,
    pub idx: i64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub data: Option<CardRowData>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRowData {
    #[serde(default)]
    pub bullets: Option<Vec<BulletRow>>,
    #[serde(default)]
    pub children: Option<ChildrenRow>,
    #[serde(default, rename = "parentId")]
    pub parent_id: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChildrenRow {
    #[serde(default, rename = "false")]
    pub on_false: Option<String>,
    #[serde(default, rename = "true")]
    pub on_true: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulletRow {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub value: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("invalid card id {value:?}: {source}")]
    InvalidId {
        value: String,
        #[source]
        source: IdError,
    },
    #[error("card {id} has non-positive index {idx}")]
    NonPositiveIndex { id: String, idx: i64 },
}

impl CardRow {
    pub fn decode(self) -> Result<Flashcard, DecodeError> {
        let id = CardId::new(self.id.clone()).map_err(|source| DecodeError::InvalidId {
            value: self.id.clone(),
            source,
        })?;
        let index = u64::try_from(self.idx)
            .ok()
            .filter(|idx| *idx > 0)
            .ok_or_else(|| DecodeError::NonPositiveIndex {
                id: self.id.clone(),
                idx: self.idx,
            })?;

        let mut card = Flashcard::new(id, index, self.title.unwrap_or_default());
        let data = self.data.unwrap_or_default();

        *card.bullets_mut() = data
            .bullets
            .unwrap_or_default()
            .into_iter()
            .map(|bullet| Bullet::new(bullet.text, bullet.value))
            .collect();

        let children = data.children.unwrap_or_default();
        for (branch, raw) in [
            (Branch::False, children.on_false),
            (Branch::True, children.on_true),
        ] {
            card.children_mut().set(branch, optional_ref(raw));
        }

        card.set_parent_id(optional_ref(data.parent_id));
        *card.tags_mut() = data.tags.unwrap_or_default();

        Ok(card)
    }
}

// The store writes `""` as well as `null` for an unset slot.
fn optional_ref(raw: Option<String>) -> Option<CardId> {
    raw.and_then(|value| CardId::new(value).ok())
}

impl From<&Flashcard> for CardRow {
    fn from(card: &Flashcard) -> Self {
        let children = card.children();
        Self {
            id: card.id().to_string(),
            idx: i64::try_from(card.index()).unwrap_or(i64::MAX),
            title: Some(card.title().to_owned()),
            data: Some(CardRowData {
                bullets: Some(
                    card.bullets()
                        .iter()
                        .map(|bullet| BulletRow {
                            text: bullet.text().to_owned(),
                            value: bullet.value(),
                        })
                        .collect(),
                ),
                children: Some(ChildrenRow {
                    on_false: children.get(Branch::False).map(ToString::to_string),
                    on_true: children.get(Branch::True).map(ToString::to_string),
                }),
                parent_id: card.parent_id().map(ToString::to_string),
                tags: Some(card.tags().to_vec()),
            }),
        }
    }
}
