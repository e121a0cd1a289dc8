// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Flashtree-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Flashtree and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::borrow::Borrow;
use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdError {
    #[error("id must not be empty")]
    Empty,
    #[error("workspace id must not contain '/'")]
    ContainsSlash,
}

/// What a kind of id accepts. Every kind rejects the empty string.
pub trait IdKind {
    fn check(value: &str) -> Result<(), IdError> {
        if value.is_empty() {
            return Err(IdError::Empty);
        }
        Ok(())
    }
}

/// A typed, opaque identifier. The value is never interpreted beyond [`IdKind::check`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id<K> {
    value: String,
    _kind: PhantomData<fn() -> K>,
}

impl<K: IdKind> Id<K> {
    pub fn new(value: impl Into<String>) -> Result<Self, IdError> {
        let value = value.into();
        K::check(&value)?;
        Ok(Self::unchecked(value))
    }
}

impl<K> Id<K> {
    fn unchecked(value: String) -> Self {
        Self {
            value,
            _kind: PhantomData,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn into_string(self) -> String {
        self.value
    }
}

impl<K> fmt::Display for Id<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl<K> AsRef<str> for Id<K> {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl<K> Borrow<str> for Id<K> {
    fn borrow(&self) -> &str {
        &self.value
    }
}

impl<K: IdKind> FromStr for Id<K> {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl<K: IdKind> TryFrom<String> for Id<K> {
    type Error = IdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Card ids are any non-empty string (stored rows usually carry UUIDs).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CardKind {}
impl IdKind for CardKind {}
pub type CardId = Id<CardKind>;

impl CardId {
    /// Id given to cards created locally: `card_` plus the index, zero-padded to four digits.
    pub fn numbered(index: u64) -> Self {
        Self::unchecked(format!("card_{index:04}"))
    }
}

/// Workspace ids also name a folder, so they must stay a single path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum WorkspaceKind {}
impl IdKind for WorkspaceKind {
    fn check(value: &str) -> Result<(), IdError> {
        if value.is_empty() {
            return Err(IdError::Empty);
        }
        if value.contains('/') {
            return Err(IdError::ContainsSlash);
        }
        Ok(())
    }
}
pub type WorkspaceId = Id<WorkspaceKind>;
