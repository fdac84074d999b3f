//! Action enum for decoupling input handling from state changes.
//!
//! Actions represent user intents that can be logged or replayed.

/// Actions that can be dispatched from event handlers.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // === Application ===
    /// Quit the application
    Quit,
    /// Open help popup
    OpenHelp,
    /// Close help popup
    CloseHelp,

    // === Group picker ===
    /// Move the cursor down
    CursorDown,
    /// Move the cursor up
    CursorUp,
    /// Toggle the group under the cursor
    ToggleCurrent,
    /// Select every visible group
    SelectAll,
    /// Deselect everything
    ClearSelection,
    /// Send the selection
    Submit,
    /// Retry whatever last failed (load or submit)
    Retry,

    // === Filter ===
    /// Start typing a filter query
    StartFilter,
    /// Add character to the query
    FilterChar(char),
    /// Delete last query character
    FilterBackspace,
    /// Leave filter mode keeping the query
    AcceptFilter,
    /// Leave filter mode and clear the query
    CancelFilter,

    // === No-op ===
    /// No action to take
    None,
}
