//! Group data and the sources it is loaded from.
//!
//! - `source` - Where the list comes from (bundled document, file, or URL)
//! - `loader` - Cancellable background load feeding the picker

mod loader;
mod source;

pub use loader::{spawn_load, LoadTask};
pub use source::GroupSource;

use serde::{Deserialize, Serialize};

/// A selectable group as shown in the picker and sent on submit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupItem {
    pub label: String,
    pub value: String,
}

impl GroupItem {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }

    /// Item whose name serves as both label and value
    pub fn named(name: impl Into<String>) -> Self {
        let name = name.into();
        Self::new(name.clone(), name)
    }
}

/// Groups in source order. Duplicates are passed through untouched.
pub type GroupList = Vec<GroupItem>;
