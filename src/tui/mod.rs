//! Terminal UI rendering.

pub mod components;
pub mod theme;
pub mod ui;
