//! Help popup component.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::app::App;
use crate::tui::theme::*;

const PICKER_KEYS: &[(&str, &str)] = &[
    ("j/↓     ", "Next group"),
    ("k/↑     ", "Previous group"),
    ("Space   ", "Toggle group"),
    ("a       ", "Select all visible"),
    ("n       ", "Select none"),
    ("/       ", "Filter groups"),
    ("Enter   ", "Submit selection"),
    ("r       ", "Retry after an error"),
    ("q/Esc   ", "Quit"),
];

const FILTER_KEYS: &[(&str, &str)] = &[
    ("Enter   ", "Keep filter"),
    ("Esc     ", "Clear filter"),
];

fn key_line(key: &'static str, desc: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {}", key), Style::new().fg(TEXT_WHITE)),
        Span::styled(desc, Style::new().fg(TEXT_DIM)),
    ])
}

/// Render the help popup with keyboard shortcuts.
pub fn render_help_popup(frame: &mut Frame, area: Rect, app: &App) {
    // Calculate centered popup area
    let popup_width = 44u16;
    let popup_height = 22u16;
    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(
        x,
        y,
        popup_width.min(area.width),
        popup_height.min(area.height),
    );

    // Clear the area behind the popup
    frame.render_widget(Clear, popup_area);

    let mut lines: Vec<Line> = vec![
        Line::styled("Picker", Style::new().fg(LOGO_LIGHT_BLUE).bold()),
    ];
    lines.extend(PICKER_KEYS.iter().map(|(k, d)| key_line(k, d)));
    lines.push(Line::raw(""));
    lines.push(Line::styled("Filter", Style::new().fg(LOGO_LIGHT_BLUE).bold()));
    lines.extend(FILTER_KEYS.iter().map(|(k, d)| key_line(k, d)));

    lines.push(Line::raw(""));
    lines.push(Line::from(vec![
        Span::styled("Groups: ", Style::new().fg(TEXT_DIM)),
        Span::styled(app.source_label.as_str(), Style::new().fg(TEXT_WHITE)),
    ]));
    lines.push(Line::from(vec![
        Span::styled("Submit: ", Style::new().fg(TEXT_DIM)),
        Span::styled(app.submit_label.as_str(), Style::new().fg(TEXT_WHITE)),
    ]));

    lines.push(Line::raw(""));
    lines.push(Line::from(vec![
        Span::styled("[Esc]", Style::new().fg(TEXT_WHITE)),
        Span::styled(" close", Style::new().fg(TEXT_DIM)),
    ]));

    let block = Block::default()
        .title(" Keyboard Shortcuts ")
        .title_style(Style::new().fg(LOGO_MINT).bold())
        .borders(Borders::ALL)
        .border_style(Style::new().fg(LOGO_MINT))
        .style(Style::new().bg(Color::Black));

    frame.render_widget(Paragraph::new(lines).block(block), popup_area);
}
