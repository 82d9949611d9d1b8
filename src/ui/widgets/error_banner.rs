//! Error banner widget

use ratatui::{Frame, prelude::*, widgets::Paragraph};

use crate::ui::components;

/// Render an error message in a one-line area
pub fn render_error_banner(frame: &mut Frame, area: Rect, error: &str) {
    let error_line = components::build_error_line(error);
    frame.render_widget(Paragraph::new(error_line), area);
}
