//! The user's chosen groups, in the order they were picked.

use crate::groups::GroupItem;

/// Ordered set of chosen groups. Two items are the same group when their
/// `value`s match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    items: Vec<GroupItem>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[GroupItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, item: &GroupItem) -> bool {
        self.items.iter().any(|i| i.value == item.value)
    }

    /// Add `item` if absent, otherwise remove it. Returns whether it is now selected.
    pub fn toggle(&mut self, item: &GroupItem) -> bool {
        if let Some(pos) = self.items.iter().position(|i| i.value == item.value) {
            self.items.remove(pos);
            false
        } else {
            self.items.push(item.clone());
            true
        }
    }

    /// Add `item` unless it is already selected
    pub fn insert(&mut self, item: &GroupItem) {
        if !self.contains(item) {
            self.items.push(item.clone());
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Snapshot handed to the submit action
    pub fn to_vec(&self) -> Vec<GroupItem> {
        self.items.clone()
    }
}
