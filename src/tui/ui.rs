use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, InputMode};
use super::components::*;
use super::theme::*;

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Main vertical layout: logo, banner, content, preview, hotkeys
    let main_layout = Layout::vertical([
        Constraint::Length(2),  // Logo + source
        Constraint::Length(2),  // Status banner
        Constraint::Min(0),     // Picker / done view
        Constraint::Length(4),  // Selection preview
        Constraint::Length(1),  // Hotkeys
    ])
    .split(area);

    render_logo(frame, main_layout[0], app);
    render_status_banner(frame, main_layout[1], app);

    if app.navigation().is_some() {
        render_done_view(frame, main_layout[2], app);
    } else {
        render_group_picker(frame, main_layout[2], app);
    }

    render_selection_preview(frame, main_layout[3], app);
    render_hotkeys(frame, main_layout[4], app);

    if app.input_mode == InputMode::Help {
        render_help_popup(frame, area, app);
    }
}

fn render_logo(frame: &mut Frame, area: Rect, app: &App) {
    let line = Line::from(vec![
        Span::styled("group", Style::new().fg(LOGO_CORAL).bold()),
        Span::styled("pick", Style::new().fg(LOGO_MINT).bold()),
        Span::styled("  ", Style::new()),
        Span::styled(app.source_label.as_str(), Style::new().fg(TEXT_DIM)),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

fn render_hotkeys(frame: &mut Frame, area: Rect, app: &App) {
    let hotkeys = if app.navigation().is_some() {
        Line::from(vec![
            Span::styled("[Enter]", Style::new().fg(TEXT_WHITE)),
            Span::styled(" close", Style::new().fg(TEXT_DIM)),
        ])
    } else {
        match app.input_mode {
            InputMode::Picker => Line::from(vec![
                Span::styled("[Space]", Style::new().fg(TEXT_WHITE)),
                Span::styled(" toggle • ", Style::new().fg(TEXT_DIM)),
                Span::styled("[a]", Style::new().fg(TEXT_WHITE)),
                Span::styled("ll • ", Style::new().fg(TEXT_DIM)),
                Span::styled("[n]", Style::new().fg(TEXT_WHITE)),
                Span::styled("one • ", Style::new().fg(TEXT_DIM)),
                Span::styled("[/]", Style::new().fg(TEXT_WHITE)),
                Span::styled(" filter • ", Style::new().fg(TEXT_DIM)),
                Span::styled("[Enter]", Style::new().fg(TEXT_WHITE)),
                Span::styled(" submit • ", Style::new().fg(TEXT_DIM)),
                Span::styled("[?]", Style::new().fg(TEXT_WHITE)),
                Span::styled(" help • ", Style::new().fg(TEXT_DIM)),
                Span::styled("[q]", Style::new().fg(TEXT_WHITE)),
                Span::styled("uit", Style::new().fg(TEXT_DIM)),
            ]),
            InputMode::Filter => Line::from(vec![
                Span::styled("[Enter]", Style::new().fg(TEXT_WHITE)),
                Span::styled(" keep • ", Style::new().fg(TEXT_DIM)),
                Span::styled("[Esc]", Style::new().fg(TEXT_WHITE)),
                Span::styled(" clear", Style::new().fg(TEXT_DIM)),
            ]),
            InputMode::Help => Line::from(vec![
                Span::styled("[Esc]", Style::new().fg(TEXT_WHITE)),
                Span::styled(" close", Style::new().fg(TEXT_DIM)),
            ]),
        }
    };

    frame.render_widget(Paragraph::new(hotkeys), area);
}
