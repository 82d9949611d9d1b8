//! Rendering for HistoryView

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::model::{ChangesetSummary, Notification};
use crate::ui::{components, theme};

use super::{HistoryView, empty_text};

/// Width of the owner column
const OWNER_WIDTH: usize = 20;

impl HistoryView {
    /// Render the changeset list, plus the input bar when in an input mode
    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        path: &str,
        notification: Option<&Notification>,
        focused: bool,
    ) {
        let (list_area, input_area) = if self.is_in_input() {
            let chunks = Layout::vertical([Constraint::Min(1), Constraint::Length(3)]).split(area);
            (chunks[0], Some(chunks[1]))
        } else {
            (area, None)
        };

        self.render_list(frame, list_area, path, notification, focused);

        if let Some(input_area) = input_area {
            self.render_input_bar(frame, input_area);
        }
    }

    fn render_list(
        &self,
        frame: &mut Frame,
        area: Rect,
        path: &str,
        notification: Option<&Notification>,
        focused: bool,
    ) {
        let title = self.build_title(path);

        let available_for_notif = area.width.saturating_sub(title.width() as u16 + 4) as usize;
        let notif_line = notification
            .filter(|n| !n.is_expired())
            .map(|n| components::build_notification_title(n, available_for_notif))
            .filter(|line| !line.spans.is_empty());

        let block = components::pane_block_with_notification(title, notif_line, focused);

        if self.visible_count() == 0 {
            let paragraph = if self.total_count() == 0 {
                components::empty_state(empty_text::NO_RESULTS, Some(empty_text::NO_RESULTS_HINT))
            } else {
                components::empty_state(
                    empty_text::ALL_FILTERED,
                    Some(empty_text::ALL_FILTERED_HINT),
                )
            };
            frame.render_widget(paragraph.block(block), area);
            return;
        }

        let inner_height = area.height.saturating_sub(2) as usize;
        if inner_height == 0 {
            return;
        }

        let scroll_offset = self.calculate_scroll_offset(inner_height);
        let lines: Vec<Line> = self
            .visible_changesets()
            .enumerate()
            .skip(scroll_offset)
            .take(inner_height)
            .map(|(pos, changeset)| build_changeset_line(changeset, pos == self.cursor(), focused))
            .collect();

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn build_title(&self, path: &str) -> Line<'static> {
        let mut spans = vec![
            Span::raw(" tfsk - History ").bold(),
            Span::raw(format!("[{}] ", path)),
        ];

        if self.total_count() > 0 {
            spans.push(Span::styled(
                format!("{} of {} ", self.visible_count(), self.total_count()),
                Style::default().fg(Color::DarkGray),
            ));
        }
        if let Some(keyword) = self.criteria().search_keyword() {
            let style = if self.criteria().has_invalid_keyword() {
                Style::default().fg(Color::Red)
            } else {
                Style::default().fg(Color::Yellow)
            };
            spans.push(Span::styled(format!("/{}/ ", keyword), style));
        }
        if !self.criteria().excluded_owners().is_empty() {
            spans.push(Span::styled(
                format!("-{} ", self.criteria().excluded_owners().len()),
                Style::default().fg(Color::Yellow),
            ));
        }

        Line::from(spans)
    }

    /// Scroll offset keeping the selection inside the visible area
    pub(crate) fn calculate_scroll_offset(&self, visible_height: usize) -> usize {
        if self.cursor() >= visible_height {
            self.cursor() + 1 - visible_height
        } else {
            0
        }
    }

    fn render_input_bar(&self, frame: &mut Frame, area: Rect) {
        let Some((prompt, title)) = self.input_mode.input_bar_meta() else {
            return;
        };

        let input_text = format!("{}{}", prompt, self.input_buffer);
        let paragraph = Paragraph::new(input_text)
            .block(Block::default().borders(Borders::ALL).title(title));
        frame.render_widget(paragraph, area);

        // Cursor after the text
        let cursor_x = area.x + 1 + prompt.len() as u16 + self.input_buffer.chars().count() as u16;
        frame.set_cursor_position((cursor_x.min(area.right().saturating_sub(2)), area.y + 1));
    }
}

/// One row: `  1234  owner                date  first comment line`
fn build_changeset_line(
    changeset: &ChangesetSummary,
    is_selected: bool,
    focused: bool,
) -> Line<'static> {
    let owner: String = changeset.owner_display_name.chars().take(OWNER_WIDTH).collect();

    let line = Line::from(vec![
        Span::styled(
            format!("{:>7} ", changeset.id),
            Style::default().fg(theme::history_view::CHANGESET_ID),
        ),
        Span::styled(
            format!(" {:<width$} ", owner, width = OWNER_WIDTH),
            Style::default().fg(theme::history_view::OWNER),
        ),
        Span::styled(
            format!(" {} ", changeset.date),
            Style::default().fg(theme::history_view::DATE),
        ),
        Span::raw(format!(" {}", changeset.first_comment_line())),
    ]);

    if is_selected {
        let style = Style::default().bg(theme::history_view::SELECTED_BG);
        let line = line.style(style);
        if focused { line.bold() } else { line }
    } else {
        line
    }
}
