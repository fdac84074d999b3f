//! Action handlers
//!
//! Applies `Action`s to the `App` and reports the side effect, if any, that
//! the event loop has to perform.

mod picker;

pub use picker::{apply_action, Effect};
