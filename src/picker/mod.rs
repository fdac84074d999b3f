//! Picker module
//!
//! - `traits` - Cursor movement shared by list-based pickers
//! - `selection` - The ordered set of chosen groups
//! - `group_picker` - Multi-select picker over the loaded groups

mod group_picker;
mod selection;
mod traits;

pub use group_picker::GroupPicker;
pub use selection::Selection;
pub use traits::Picker;
