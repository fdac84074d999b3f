//! Keyboard event handling by input mode.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, InputMode, LoadState, SubmitState};

use super::Action;

/// Handle keyboard events and return the appropriate action.
pub fn handle_key_event(app: &App, key: KeyEvent) -> Action {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Action::Quit;
    }

    // After navigating away only leaving is possible
    if app.navigation().is_some() {
        return match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char('q') => Action::Quit,
            _ => Action::None,
        };
    }

    match app.input_mode {
        InputMode::Picker => handle_picker_mode(app, key),
        InputMode::Filter => handle_filter_mode(key),
        InputMode::Help => handle_help_mode(key),
    }
}

fn handle_picker_mode(app: &App, key: KeyEvent) -> Action {
    let can_retry = matches!(app.load_state, LoadState::Failed(_))
        || matches!(app.submit_state, SubmitState::Failed(_));

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char('?') => Action::OpenHelp,

        KeyCode::Char('j') | KeyCode::Down => Action::CursorDown,
        KeyCode::Char('k') | KeyCode::Up => Action::CursorUp,
        KeyCode::Char(' ') => Action::ToggleCurrent,
        KeyCode::Char('a') => Action::SelectAll,
        KeyCode::Char('n') => Action::ClearSelection,
        KeyCode::Char('/') => Action::StartFilter,

        KeyCode::Enter => Action::Submit,
        KeyCode::Char('r') if can_retry => Action::Retry,

        _ => Action::None,
    }
}

fn handle_filter_mode(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Esc => Action::CancelFilter,
        KeyCode::Enter => Action::AcceptFilter,
        KeyCode::Backspace => Action::FilterBackspace,
        KeyCode::Down => Action::CursorDown,
        KeyCode::Up => Action::CursorUp,
        KeyCode::Char(c) => Action::FilterChar(c),
        _ => Action::None,
    }
}

fn handle_help_mode(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc | KeyCode::Char('?') | KeyCode::Enter => {
            Action::CloseHelp
        }
        _ => Action::None,
    }
}
