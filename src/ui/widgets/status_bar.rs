//! Status bar widget
//!
//! Bottom line: current worker status on the left, key hints after it.

use ratatui::{Frame, prelude::*, text::Line, widgets::Paragraph};

use crate::keys::KeyHint;

/// Build a status bar line from key hints
pub fn build_status_bar(hints: &[KeyHint]) -> Line<'static> {
    let mut spans = Vec::new();

    for (i, hint) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(
            format!(" [{}] {} ", hint.key, hint.label),
            Style::default().fg(Color::Black).bg(hint.color),
        ));
    }

    Line::from(spans)
}

/// Render status text followed by key hints
pub fn render_status_bar(frame: &mut Frame, area: Rect, status: &str, hints: &[KeyHint]) {
    let mut spans = vec![
        Span::styled(
            format!(" {} ", status),
            Style::default().fg(Color::Black).bg(Color::White),
        ),
        Span::raw(" "),
    ];
    spans.extend(build_status_bar(hints).spans);

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
