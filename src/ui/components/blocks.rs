//! Block components for UI rendering

use ratatui::{
    style::Style,
    text::Line,
    widgets::{Block, Borders},
};

use crate::ui::theme;

/// Create a block with all borders and a title
pub fn bordered_block<'a>(title: Line<'a>) -> Block<'a> {
    Block::default().borders(Borders::ALL).title(title)
}

/// Bordered pane block, highlighted when it has focus
pub fn pane_block<'a>(title: Line<'a>, focused: bool) -> Block<'a> {
    let block = bordered_block(title);
    if focused {
        block.border_style(Style::default().fg(theme::FOCUSED_BORDER))
    } else {
        block
    }
}

/// Pane block with an optional notification shown on the right of the title bar
pub fn pane_block_with_notification<'a>(
    title: Line<'a>,
    notification: Option<Line<'a>>,
    focused: bool,
) -> Block<'a> {
    let block = pane_block(title, focused);
    match notification {
        Some(line) => block.title(line.right_aligned()),
        None => block,
    }
}
