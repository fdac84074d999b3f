//! Group picker list component.

use ratatui::{
    Frame,
    layout::{Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{App, InputMode, LoadState};
use crate::picker::Picker;
use crate::tui::theme::*;

/// Cursor position after "Filter: " (8 chars) inside the border, kept within `area`.
fn filter_cursor(area: Rect, query: &str) -> Position {
    let typed = u16::try_from(query.chars().count()).unwrap_or(u16::MAX);
    let x = area
        .x
        .saturating_add(1 + 8)
        .saturating_add(typed)
        .min(area.right().saturating_sub(2));
    Position::new(x, area.y.saturating_add(1))
}

/// Render the checkbox list of groups.
pub fn render_group_picker(frame: &mut Frame, area: Rect, app: &App) {
    let mut lines: Vec<Line> = vec![];
    let picker = &app.picker;

    // Filter line, only while filtering or when a query is active
    let filtering = app.input_mode == InputMode::Filter;
    if filtering || !picker.query().is_empty() {
        lines.push(Line::from(vec![
            Span::styled("Filter: ", Style::new().fg(LOGO_LIGHT_BLUE)),
            Span::styled(picker.query(), Style::new().fg(TEXT_WHITE)),
        ]));
        lines.push(Line::raw(""));
    }
    let list_top = lines.len();

    match &app.load_state {
        LoadState::Loading => {
            lines.push(Line::from(vec![
                Span::styled(format!("  {} ", app.spinner()), Style::new().fg(LOGO_GOLD)),
                Span::styled("loading groups", Style::new().fg(TEXT_DIM)),
            ]));
        }
        LoadState::Failed(_) => {
            lines.push(Line::styled(
                "  (groups unavailable)",
                Style::new().fg(TEXT_DIM),
            ));
        }
        LoadState::Loaded if picker.is_empty() => {
            let msg = if picker.options().is_empty() {
                "  (no groups)"
            } else {
                "  (no matching groups)"
            };
            lines.push(Line::styled(msg, Style::new().fg(TEXT_DIM)));
        }
        LoadState::Loaded => {
            // Keep the cursor on screen
            let visible = area.height.saturating_sub(2) as usize;
            let visible = visible.saturating_sub(list_top).max(1);
            let skip = (picker.cursor() + 1).saturating_sub(visible);

            for (i, item) in picker.items().iter().enumerate().skip(skip).take(visible) {
                let is_cursor = i == picker.cursor();
                let is_selected = picker.is_selected(item);
                let cursor = if is_cursor { "> " } else { "  " };
                let checkbox = if is_selected { "[x] " } else { "[ ] " };

                let name_style = if is_cursor {
                    Style::new().fg(TEXT_WHITE).bold()
                } else if is_selected {
                    Style::new().fg(LOGO_MINT)
                } else {
                    Style::new().fg(TEXT_DIM)
                };

                let mut spans = vec![
                    Span::styled(cursor, Style::new().fg(LOGO_MINT)),
                    Span::styled(
                        checkbox,
                        if is_selected {
                            Style::new().fg(LOGO_CORAL)
                        } else {
                            Style::new().fg(TEXT_DIM)
                        },
                    ),
                    Span::styled(item.label.as_str(), name_style),
                ];
                if item.value != item.label {
                    spans.push(Span::styled(
                        format!("  {}", item.value),
                        Style::new().fg(TEXT_DIM),
                    ));
                }
                lines.push(Line::from(spans));
            }
        }
    }

    let title = format!(
        " Select groups · {}/{} ",
        picker.selection().len(),
        picker.options().len()
    );
    let block = Block::default()
        .title(title)
        .title_style(Style::new().fg(LOGO_MINT).bold())
        .borders(Borders::ALL)
        .border_style(Style::new().fg(LOGO_MINT));

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);

    if filtering {
        frame.set_cursor_position(filter_cursor(area, picker.query()));
    }
}
