//! UI components for the TUI.
//!
//! # Component Organization
//!
//! - `group_picker` - Checkbox list of groups with cursor and filter line
//! - `status_banner` - Load/submit progress and inline errors
//! - `selection_preview` - JSON preview of the current selection
//! - `done_view` - Shown after a successful submit
//! - `help_popup` - Help overlay with keybindings

mod done_view;
mod group_picker;
mod help_popup;
mod selection_preview;
mod status_banner;

// Re-export all render functions for use in ui.rs
pub use done_view::render_done_view;
pub use group_picker::render_group_picker;
pub use help_popup::render_help_popup;
pub use selection_preview::render_selection_preview;
pub use status_banner::render_status_banner;

/// Wrap text to fit within width, preserving words where possible.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![text.to_string()];
    }

    let mut result = vec![];

    for line in text.split('\n') {
        if line.is_empty() {
            result.push(String::new());
            continue;
        }

        let mut current_line = String::new();
        let mut current_char_count = 0;

        // Helper to split a word at character count boundary
        fn split_word_at_chars(s: &str, max_chars: usize) -> (&str, &str) {
            let char_count = s.chars().count();
            if char_count <= max_chars {
                return (s, "");
            }
            // Find byte position after max_chars characters
            let byte_pos = s
                .char_indices()
                .nth(max_chars)
                .map(|(i, _)| i)
                .unwrap_or(s.len());
            (&s[..byte_pos], &s[byte_pos..])
        }

        for word in line.split(' ') {
            let word_char_count = word.chars().count();

            if current_line.is_empty() {
                if word_char_count > width {
                    // Word is too long, split it
                    let mut remaining = word;
                    while remaining.chars().count() > width {
                        let (chunk, rest) = split_word_at_chars(remaining, width);
                        result.push(chunk.to_string());
                        remaining = rest;
                    }
                    current_line = remaining.to_string();
                    current_char_count = remaining.chars().count();
                } else {
                    current_line = word.to_string();
                    current_char_count = word_char_count;
                }
            } else if current_char_count + 1 + word_char_count > width {
                // Line would be too long, start new line
                result.push(current_line);
                if word_char_count > width {
                    let mut remaining = word;
                    while remaining.chars().count() > width {
                        let (chunk, rest) = split_word_at_chars(remaining, width);
                        result.push(chunk.to_string());
                        remaining = rest;
                    }
                    current_line = remaining.to_string();
                    current_char_count = remaining.chars().count();
                } else {
                    current_line = word.to_string();
                    current_char_count = word_char_count;
                }
            } else {
                current_line.push(' ');
                current_line.push_str(word);
                current_char_count += 1 + word_char_count;
            }
        }

        if !current_line.is_empty() {
            result.push(current_line);
        }
    }

    if result.is_empty() {
        result.push(String::new());
    }

    result
}
