// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Flashtree-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Flashtree and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use super::ids::CardId;

/// Which of a card's two outgoing references to follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Branch {
    False,
    True,
}

impl Branch {
    /// Traversal order used everywhere a card's children are visited.
    pub const ALL: [Branch; 2] = [Branch::False, Branch::True];

    pub fn from_bool(value: bool) -> Self {
        if value {
            Self::True
        } else {
            Self::False
        }
    }

    pub fn as_bool(self) -> bool {
        matches!(self, Self::True)
    }

    /// Edge label shown by the renderer.
    pub fn label(self) -> &'static str {
        match self {
            Self::False => "false",
            Self::True => "true",
        }
    }

    /// One-letter suffix used in edge ids.
    pub fn code(self) -> char {
        match self {
            Self::False => 'F',
            Self::True => 'T',
        }
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Children {
    on_false: Option<CardId>,
    on_true: Option<CardId>,
}

impl Children {
    pub fn new(on_false: Option<CardId>, on_true: Option<CardId>) -> Self {
        Self { on_false, on_true }
    }

    pub fn get(&self, branch: Branch) -> Option<&CardId> {
        match branch {
            Branch::False => self.on_false.as_ref(),
            Branch::True => self.on_true.as_ref(),
        }
    }

    pub fn set(&mut self, branch: Branch, child: Option<CardId>) {
        match branch {
            Branch::False => self.on_false = child,
            Branch::True => self.on_true = child,
        }
    }

    /// Present children, `false` branch first.
    pub fn iter(&self) -> impl Iterator<Item = (Branch, &CardId)> + '_ {
        Branch::ALL
            .into_iter()
            .filter_map(move |branch| self.get(branch).map(|child| (branch, child)))
    }

    pub fn is_empty(&self) -> bool {
        self.on_false.is_none() && self.on_true.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bullet {
    text: String,
    value: bool,
}

impl Bullet {
    pub fn new(text: impl Into<String>, value: bool) -> Self {
        Self {
            text: text.into(),
            value,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn value(&self) -> bool {
        self.value
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flashcard {
    id: CardId,
    index: u64,
    title: String,
    bullets: Vec<Bullet>,
    children: Children,
    parent_id: Option<CardId>,
    tags: Vec<String>,
}

impl Flashcard {
    pub fn new(id: CardId, index: u64, title: impl Into<String>) -> Self {
        Self {
            id,
            index,
            title: title.into(),
            bullets: Vec::new(),
            children: Children::default(),
            parent_id: None,
            tags: Vec::new(),
        }
    }

    /// A fresh card as the editor creates it: numbered id, placeholder title, one bullet.
    pub fn draft(index: u64) -> Self {
        Self::new(CardId::numbered(index), index, "Untitled")
            .with_bullet(Bullet::new("New point", false))
    }

    pub fn with_child(mut self, branch: Branch, child: CardId) -> Self {
        self.children.set(branch, Some(child));
        self
    }

    pub fn with_bullet(mut self, bullet: Bullet) -> Self {
        self.bullets.push(bullet);
        self
    }

    pub fn id(&self) -> &CardId {
        &self.id
    }

    pub fn index(&self) -> u64 {
        self.index
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn bullets(&self) -> &[Bullet] {
        &self.bullets
    }

    pub fn bullets_mut(&mut self) -> &mut Vec<Bullet> {
        &mut self.bullets
    }

    pub fn children(&self) -> &Children {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut Children {
        &mut self.children
    }

    pub fn parent_id(&self) -> Option<&CardId> {
        self.parent_id.as_ref()
    }

    pub fn set_parent_id(&mut self, parent_id: Option<CardId>) {
        self.parent_id = parent_id;
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn tags_mut(&mut self) -> &mut Vec<String> {
        &mut self.tags
    }
}
