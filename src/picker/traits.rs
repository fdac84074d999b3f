//! Wrap-around cursor movement for list pickers.

/// Cursor over a list of visible items.
///
/// `GroupPicker` implements this over its filtered groups; the filter may
/// shrink the list under the cursor, hence `clamp_cursor`.
pub trait Picker {
    /// The type of items in the picker
    type Item;

    /// Items currently visible
    fn items(&self) -> &[Self::Item];

    /// Index of the highlighted item
    fn cursor(&self) -> usize;

    fn set_cursor(&mut self, index: usize);

    fn len(&self) -> usize {
        self.items().len()
    }

    fn is_empty(&self) -> bool {
        self.items().is_empty()
    }

    /// Move to the next item (wraps around)
    fn cursor_next(&mut self) {
        if !self.is_empty() {
            let next = (self.cursor() + 1) % self.len();
            self.set_cursor(next);
        }
    }

    /// Move to the previous item (wraps around)
    fn cursor_prev(&mut self) {
        if !self.is_empty() {
            let prev = self.cursor()
                .checked_sub(1)
                .unwrap_or(self.len() - 1);
            self.set_cursor(prev);
        }
    }

    /// The highlighted item, if any
    fn current_item(&self) -> Option<&Self::Item> {
        self.items().get(self.cursor())
    }

    /// Pull the cursor back inside the list after it shrinks
    fn clamp_cursor(&mut self) {
        if self.is_empty() {
            self.set_cursor(0);
        } else if self.cursor() >= self.len() {
            self.set_cursor(self.len() - 1);
        }
    }
}
