//! Status banner: progress, notices and inline errors.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::{App, SubmitState};
use crate::error::GroupError;
use crate::tui::theme::*;

use super::wrap_text;

/// Render the banner above the list. Errors take precedence over progress.
pub fn render_status_banner(frame: &mut Frame, area: Rect, app: &App) {
    let mut lines: Vec<Line> = vec![];

    if let Some(error) = app.error() {
        let hint = match error {
            GroupError::EmptySelection => "",
            _ => "  [r] retry",
        };
        let text = format!("✗ {}", error);
        let wrapped = wrap_text(&text, area.width.saturating_sub(hint.len() as u16) as usize);
        let last = wrapped.len().saturating_sub(1);
        for (i, chunk) in wrapped.into_iter().enumerate() {
            let mut spans = vec![Span::styled(chunk, Style::new().fg(LOGO_CORAL))];
            if i == last && !hint.is_empty() {
                spans.push(Span::styled(hint, Style::new().fg(TEXT_WHITE)));
            }
            lines.push(Line::from(spans));
        }
    } else if app.is_submitting() {
        lines.push(Line::from(vec![
            Span::styled(format!("{} ", app.spinner()), Style::new().fg(LOGO_GOLD)),
            Span::styled(
                format!("submitting {} groups", app.picker.selection().len()),
                Style::new().fg(LOGO_GOLD),
            ),
        ]));
    } else if let SubmitState::Simulated { count } = app.submit_state {
        lines.push(Line::styled(
            format!("✓ simulated submit of {} groups (nothing was sent)", count),
            Style::new().fg(LOGO_MINT),
        ));
    } else if app.is_loading() {
        lines.push(Line::styled(
            format!("loading from {}", app.source_label),
            Style::new().fg(TEXT_DIM),
        ));
    }

    frame.render_widget(Paragraph::new(lines), area);
}
