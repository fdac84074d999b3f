//! JSON preview of the current selection, as it would be sent.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::tui::theme::*;

use super::wrap_text;

pub fn render_selection_preview(frame: &mut Frame, area: Rect, app: &App) {
    let json = serde_json::to_string(app.picker.selection().items())
        .unwrap_or_else(|_| "[]".to_string());

    let width = area.width.saturating_sub(2) as usize;
    let lines: Vec<Line> = wrap_text(&json, width)
        .into_iter()
        .map(|l| Line::styled(l, Style::new().fg(TEXT_DIM)))
        .collect();

    let block = Block::default()
        .title(" Selection ")
        .title_style(Style::new().fg(LOGO_LIGHT_BLUE))
        .borders(Borders::TOP);

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
