//! Event handling module for terminal input.
//!
//! Key presses are translated into `Action`s, which `handlers` applies to the
//! `App` to produce state changes and side effects.

mod action;
mod handler;
mod keyboard;

pub use action::Action;
pub use handler::EventHandler;
