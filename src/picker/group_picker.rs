//! Multi-select picker over the loaded groups.

use crate::groups::{GroupItem, GroupList};

use super::{Picker, Selection};

/// Options, cursor, filter and selection for the group list.
///
/// The options are only ever replaced wholesale by `set_options`; the picker
/// never edits them.
#[derive(Debug, Clone)]
pub struct GroupPicker {
    options: GroupList,
    filtered: Vec<GroupItem>,
    cursor: usize,
    query: String,
    selection: Selection,
}

impl GroupPicker {
    pub fn new() -> Self {
        Self {
            options: Vec::new(),
            filtered: Vec::new(),
            cursor: 0,
            query: String::new(),
            selection: Selection::new(),
        }
    }

    /// Replace the options. The current selection is kept.
    pub fn set_options(&mut self, options: GroupList) {
        self.options = options;
        self.refilter();
    }

    pub fn options(&self) -> &[GroupItem] {
        &self.options
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_selected(&self, item: &GroupItem) -> bool {
        self.selection.contains(item)
    }

    /// Toggle `item`. Items whose value is not among the options are ignored.
    pub fn toggle(&mut self, item: &GroupItem) {
        if self.options.iter().any(|o| o.value == item.value) {
            self.selection.toggle(item);
        }
    }

    /// Toggle the highlighted option; a no-op when nothing is visible
    pub fn toggle_current(&mut self) {
        if let Some(item) = self.current_item().cloned() {
            self.toggle(&item);
        }
    }

    /// Select every visible option, appending in option order
    pub fn select_all(&mut self) {
        for item in &self.filtered {
            self.selection.insert(item);
        }
    }

    pub fn clear(&mut self) {
        self.selection.clear();
    }

    pub fn push_query_char(&mut self, c: char) {
        self.query.push(c);
        self.refilter();
    }

    pub fn pop_query_char(&mut self) {
        self.query.pop();
        self.refilter();
    }

    pub fn clear_query(&mut self) {
        self.query.clear();
        self.refilter();
    }

    fn refilter(&mut self) {
        let needle = self.query.to_lowercase();
        self.filtered = self
            .options
            .iter()
            .filter(|item| needle.is_empty() || item.label.to_lowercase().contains(&needle))
            .cloned()
            .collect();
        self.clamp_cursor();
    }
}

impl Picker for GroupPicker {
    type Item = GroupItem;

    fn items(&self) -> &[GroupItem] {
        &self.filtered
    }

    fn cursor(&self) -> usize {
        self.cursor
    }

    fn set_cursor(&mut self, index: usize) {
        self.cursor = index;
    }
}
