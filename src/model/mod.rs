// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Flashtree-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Flashtree and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! Cards are binary-branching records; the stored row shape and its decode step live in [`row`].

pub mod card;
pub(crate) mod fixtures;
pub mod ids;
pub mod row;

pub use card::{Branch, Bullet, Children, Flashcard};
pub use ids::{CardId, Id, IdError, IdKind, WorkspaceId};
pub use row::{BulletRow, CardRow, CardRowData, ChildrenRow, DecodeError};
