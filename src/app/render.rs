//! Rendering logic for the application

use ratatui::{Frame, prelude::*};

use super::state::{App, Focus};
use crate::keys;
use crate::ui::widgets::{render_error_banner, render_status_bar};

/// Height of the comment / changes row
const CHANGES_HEIGHT: u16 = 8;

impl App {
    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let notification = self
            .notification
            .as_ref()
            .filter(|n| !n.is_expired())
            .cloned();

        let error_height = u16::from(self.error_message.is_some());
        let chunks = Layout::vertical([
            Constraint::Percentage(40),
            Constraint::Length(CHANGES_HEIGHT),
            Constraint::Min(3),
            Constraint::Length(error_height),
            Constraint::Length(1),
        ])
        .split(frame.area());

        self.history_view.render(
            frame,
            chunks[0],
            self.query.path(),
            notification.as_ref(),
            self.focus == Focus::History,
        );
        self.changes_view
            .render(frame, chunks[1], self.focus == Focus::Changes);
        self.diff_view
            .render(frame, chunks[2], self.focus == Focus::Diff);

        if let Some(ref error) = self.error_message {
            render_error_banner(frame, chunks[3], error);
        }

        let hints = keys::hints_for(self.focus, self.history_view.is_in_input());
        render_status_bar(frame, chunks[4], &self.status, hints);
    }
}
