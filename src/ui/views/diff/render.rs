//! Rendering for DiffView

use ratatui::{
    prelude::*,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::ui::components;

use super::DiffView;

impl DiffView {
    /// Render the diff pane
    ///
    /// Takes `&mut self` to remember the visible height for key handling.
    pub fn render(&mut self, frame: &mut Frame, area: Rect, focused: bool) {
        let title = match &self.content {
            Some(content) => Line::from(vec![
                Span::raw(" Diff ").bold(),
                Span::raw(format!("{};C{} ", content.item_path, content.changeset_id)),
            ]),
            None => Line::from(" Diff "),
        };
        let block = components::pane_block(title, focused);

        let inner_height = area.height.saturating_sub(2) as usize;
        self.visible_height = inner_height.max(1);

        let Some(content) = &self.content else {
            let paragraph = components::empty_state("Select a change to see its diff.", None);
            frame.render_widget(paragraph.block(block), area);
            return;
        };

        if content.is_blank() {
            let paragraph = components::empty_state(
                "No differences.",
                Some("The item has no previous version or is unchanged"),
            );
            frame.render_widget(paragraph.block(block), area);
            return;
        }

        let lines: Vec<Line> = self
            .lines()
            .iter()
            .skip(self.scroll_offset)
            .take(inner_height)
            .cloned()
            .collect();

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}
