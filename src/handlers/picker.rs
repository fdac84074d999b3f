//! State changes for the group picker screen.

use crate::app::{App, LoadState, SubmitState};
use crate::events::Action;
use crate::groups::GroupItem;
use crate::picker::Picker;

/// Side effects that result from an action
#[derive(Debug, PartialEq)]
pub enum Effect {
    /// No side effect needed
    None,
    /// Quit the application
    Quit,
    /// (Re)load the group list
    Load,
    /// Send the given selection
    Submit(Vec<GroupItem>),
}

/// Apply `action` to `app`.
pub fn apply_action(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Quit => return Effect::Quit,
        Action::OpenHelp => app.open_help(),
        Action::CloseHelp => app.close_help(),

        Action::CursorDown => app.picker.cursor_next(),
        Action::CursorUp => app.picker.cursor_prev(),
        Action::ToggleCurrent => {
            app.picker.toggle_current();
            app.dismiss_submit_notice();
        }
        Action::SelectAll => {
            app.picker.select_all();
            app.dismiss_submit_notice();
        }
        Action::ClearSelection => {
            app.picker.clear();
            app.dismiss_submit_notice();
        }

        Action::Submit => {
            if let Some(selection) = app.begin_submit() {
                return Effect::Submit(selection);
            }
        }
        Action::Retry => {
            if matches!(app.load_state, LoadState::Failed(_)) {
                app.begin_load();
                return Effect::Load;
            }
            if matches!(app.submit_state, SubmitState::Failed(_)) {
                if let Some(selection) = app.begin_submit() {
                    return Effect::Submit(selection);
                }
            }
        }

        Action::StartFilter => app.start_filter(),
        Action::FilterChar(c) => app.picker.push_query_char(c),
        Action::FilterBackspace => app.picker.pop_query_char(),
        Action::AcceptFilter => app.end_filter(true),
        Action::CancelFilter => app.end_filter(false),

        Action::None => {}
    }
    Effect::None
}
