//! Screen shown once the selection has been accepted.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::tui::theme::*;

pub fn render_done_view(frame: &mut Frame, area: Rect, app: &App) {
    let next = app.navigation().unwrap_or_default();

    let lines = vec![
        Line::raw(""),
        Line::styled(
            format!("  ✓ {} groups submitted", app.picker.selection().len()),
            Style::new().fg(LOGO_MINT).bold(),
        ),
        Line::raw(""),
        Line::from(vec![
            Span::styled("  Continue at ", Style::new().fg(TEXT_DIM)),
            Span::styled(next, Style::new().fg(LOGO_LIGHT_BLUE).bold()),
        ]),
        Line::raw(""),
        Line::from(vec![
            Span::styled("  [Enter]", Style::new().fg(TEXT_WHITE)),
            Span::styled(" close", Style::new().fg(TEXT_DIM)),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::new().fg(LOGO_MINT));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
