use crate::error::GroupError;
use crate::groups::{GroupItem, GroupList};
use crate::log;
use crate::picker::GroupPicker;
use crate::submit::SubmitOutcome;

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputMode {
    Picker, // Moving through and toggling groups
    Filter, // Typing a filter query
    Help,   // Help popup showing all hotkeys
}

/// Progress of the group list load
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Loading,
    Loaded,
    Failed(GroupError),
}

/// Progress of the most recent submit
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitState {
    Idle,
    Submitting,
    Failed(GroupError),
    Simulated { count: usize },
}

pub struct App {
    pub input_mode: InputMode,
    pub load_state: LoadState,
    pub picker: GroupPicker,
    pub submit_state: SubmitState,
    pub spinner_frame: usize,
    /// Where the groups come from, for the header
    pub source_label: String,
    /// Where submits go, for the header
    pub submit_label: String,
    navigation: Option<String>,
}

impl App {
    pub fn new(source_label: String, submit_label: String) -> Self {
        Self {
            input_mode: InputMode::Picker,
            load_state: LoadState::Loading,
            picker: GroupPicker::new(),
            submit_state: SubmitState::Idle,
            spinner_frame: 0,
            source_label,
            submit_label,
            navigation: None,
        }
    }

    /// Mark the list as loading again (initial load or retry)
    pub fn begin_load(&mut self) {
        self.load_state = LoadState::Loading;
    }

    pub fn on_groups_loaded(&mut self, result: Result<GroupList, GroupError>) {
        match result {
            Ok(groups) => {
                self.picker.set_options(groups);
                self.load_state = LoadState::Loaded;
            }
            Err(e) => {
                log::log(&format!("Load error: {}", e));
                self.load_state = LoadState::Failed(e);
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        self.load_state == LoadState::Loading
    }

    pub fn is_submitting(&self) -> bool {
        self.submit_state == SubmitState::Submitting
    }

    /// Start a submit, returning the selection to send.
    ///
    /// Returns `None` when a submit is already running, or when nothing is
    /// selected (which is recorded as `EmptySelection`).
    pub fn begin_submit(&mut self) -> Option<Vec<GroupItem>> {
        if self.is_submitting() || self.navigation.is_some() {
            return None;
        }
        if self.picker.selection().is_empty() {
            self.submit_state = SubmitState::Failed(GroupError::EmptySelection);
            return None;
        }
        self.submit_state = SubmitState::Submitting;
        Some(self.picker.selection().to_vec())
    }

    pub fn on_submit_finished(&mut self, result: Result<SubmitOutcome, GroupError>) {
        match result {
            Ok(SubmitOutcome::Navigate(next)) => {
                self.submit_state = SubmitState::Idle;
                self.navigate(next);
            }
            Ok(SubmitOutcome::Simulated { count }) => {
                self.submit_state = SubmitState::Simulated { count };
            }
            Err(e) => {
                log::log(&format!("Submit error: {}", e));
                self.submit_state = SubmitState::Failed(e);
            }
        }
    }

    /// Move on to `next`. Only the first call has any effect.
    pub fn navigate(&mut self, next: String) -> bool {
        if self.navigation.is_some() {
            return false;
        }
        log::log_event(&format!("navigating to {}", next));
        self.navigation = Some(next);
        true
    }

    pub fn navigation(&self) -> Option<&str> {
        self.navigation.as_deref()
    }

    /// The error to show in the banner, if any
    pub fn error(&self) -> Option<&GroupError> {
        match (&self.load_state, &self.submit_state) {
            (LoadState::Failed(e), _) => Some(e),
            (_, SubmitState::Failed(e)) => Some(e),
            _ => None,
        }
    }

    /// Drop a shown submit error or simulated notice once the user moves on
    pub fn dismiss_submit_notice(&mut self) {
        if matches!(
            self.submit_state,
            SubmitState::Failed(_) | SubmitState::Simulated { .. }
        ) {
            self.submit_state = SubmitState::Idle;
        }
    }

    pub fn open_help(&mut self) {
        self.input_mode = InputMode::Help;
    }

    pub fn close_help(&mut self) {
        self.input_mode = InputMode::Picker;
    }

    pub fn start_filter(&mut self) {
        self.input_mode = InputMode::Filter;
    }

    /// Leave filter mode; `keep_query` false also clears the query
    pub fn end_filter(&mut self, keep_query: bool) {
        if !keep_query {
            self.picker.clear_query();
        }
        self.input_mode = InputMode::Picker;
    }

    /// Advance spinner animation
    pub fn tick_spinner(&mut self) {
        self.spinner_frame = (self.spinner_frame + 1) % SPINNER_FRAMES.len();
    }

    /// Get current spinner character
    pub fn spinner(&self) -> &'static str {
        SPINNER_FRAMES[self.spinner_frame]
    }
}
