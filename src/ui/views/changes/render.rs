//! Rendering for ChangesView

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use crate::model::ChangeRecord;
use crate::ui::{components, theme};

use super::ChangesView;

impl ChangesView {
    /// Render comment (left) and changed items (right)
    pub fn render(&self, frame: &mut Frame, area: Rect, focused: bool) {
        let chunks =
            Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)]).split(area);

        self.render_comment(frame, chunks[0]);
        self.render_items(frame, chunks[1], focused);
    }

    fn render_comment(&self, frame: &mut Frame, area: Rect) {
        let block = components::pane_block(Line::from(" Comment "), false);

        let Some(changeset) = self.changeset() else {
            frame.render_widget(Paragraph::new("").block(block), area);
            return;
        };

        let mut lines = vec![Line::from(vec![
            Span::styled(
                format!("C{}", changeset.id),
                Style::default().fg(theme::history_view::CHANGESET_ID),
            ),
            Span::raw("  "),
            Span::styled(
                changeset.owner_display_name.clone(),
                Style::default().fg(theme::history_view::OWNER),
            ),
        ])];
        lines.extend(
            changeset
                .display_comment()
                .lines()
                .map(|l| Line::from(l.to_string())),
        );

        let paragraph = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
    }

    fn render_items(&self, frame: &mut Frame, area: Rect, focused: bool) {
        let title = Line::from(format!(" Changes ({}) ", self.changes().len()));
        let block = components::pane_block(title, focused);

        if self.changes().is_empty() {
            let text = if self.changeset().is_some() {
                "No items in this changeset."
            } else {
                "No changeset selected."
            };
            frame.render_widget(components::empty_state(text, None).block(block), area);
            return;
        }

        let inner_height = area.height.saturating_sub(2) as usize;
        let offset = if self.selected_index() >= inner_height {
            self.selected_index() + 1 - inner_height
        } else {
            0
        };

        let lines: Vec<Line> = self
            .changes()
            .iter()
            .enumerate()
            .skip(offset)
            .take(inner_height)
            .map(|(i, change)| build_change_line(change, i == self.selected_index()))
            .collect();

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

fn change_type_color(change_type: &str) -> ratatui::style::Color {
    let primary = change_type.split(',').next().unwrap_or("").trim();
    match primary {
        "add" | "branch" | "undelete" => theme::changes_view::ADD,
        "edit" | "merge" => theme::changes_view::EDIT,
        "delete" => theme::changes_view::DELETE,
        _ => theme::changes_view::OTHER,
    }
}

fn build_change_line(change: &ChangeRecord, is_selected: bool) -> Line<'static> {
    let line = Line::from(vec![
        Span::styled(
            format!("{:<10} ", change.change_type),
            Style::default().fg(change_type_color(&change.change_type)),
        ),
        Span::raw(change.item_path.clone()),
    ]);

    if is_selected {
        line.style(Style::default().bg(theme::changes_view::SELECTED_BG))
            .bold()
    } else {
        line
    }
}
