//! Navigation roles of the cross-links anchors.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The three cross-links a generated page may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavRole {
    Prev,
    Up,
    Next,
}

impl NavRole {
    /// Order in which the roles are laid out in the toolbar.
    pub const TOOLBAR_ORDER: [NavRole; 3] = [NavRole::Prev, NavRole::Up, NavRole::Next];

    /// Parse an anchor label. Matching is exact and case-sensitive.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "prev" => Some(NavRole::Prev),
            "up" => Some(NavRole::Up),
            "next" => Some(NavRole::Next),
            _ => None,
        }
    }

    /// The label generated pages use for this role.
    pub fn label(self) -> &'static str {
        match self {
            NavRole::Prev => "prev",
            NavRole::Up => "up",
            NavRole::Next => "next",
        }
    }
}

impl fmt::Display for NavRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One optional value per [`NavRole`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleSlots<T> {
    prev: Option<T>,
    up: Option<T>,
    next: Option<T>,
}

impl<T> Default for RoleSlots<T> {
    fn default() -> Self {
        Self {
            prev: None,
            up: None,
            next: None,
        }
    }
}

impl<T> RoleSlots<T> {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot_mut(&mut self, role: NavRole) -> &mut Option<T> {
        match role {
            NavRole::Prev => &mut self.prev,
            NavRole::Up => &mut self.up,
            NavRole::Next => &mut self.next,
        }
    }

    /// Store `value` for `role`, returning the value it displaced.
    pub fn insert(&mut self, role: NavRole, value: T) -> Option<T> {
        self.slot_mut(role).replace(value)
    }

    pub fn get(&self, role: NavRole) -> Option<&T> {
        match role {
            NavRole::Prev => self.prev.as_ref(),
            NavRole::Up => self.up.as_ref(),
            NavRole::Next => self.next.as_ref(),
        }
    }

    pub fn take(&mut self, role: NavRole) -> Option<T> {
        self.slot_mut(role).take()
    }

    pub fn contains(&self, role: NavRole) -> bool {
        self.get(role).is_some()
    }

    /// Number of filled slots.
    pub fn len(&self) -> usize {
        NavRole::TOOLBAR_ORDER
            .iter()
            .filter(|role| self.contains(**role))
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
