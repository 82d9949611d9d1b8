//! Error and notification message components

use ratatui::{
    prelude::*,
    text::{Line, Span},
};

use crate::model::{Notification, NotificationKind};

/// Build an error message line for the error banner
///
/// Format: `[red bg] Error: [/red bg][red text] message [/red text]`
pub fn build_error_line(error: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(" Error: ", Style::default().fg(Color::White).bg(Color::Red)),
        Span::styled(format!(" {} ", error), Style::default().fg(Color::Red)),
    ])
}

/// Build a notification line for title bar display
///
/// The message is cut with "…" when it does not fit in `max_width`.
pub fn build_notification_title(notification: &Notification, max_width: usize) -> Line<'static> {
    let (label, color) = match notification.kind {
        NotificationKind::Success => ("Success:", Color::Green),
        NotificationKind::Info => ("Info:", Color::Cyan),
        NotificationKind::Warning => ("Warning:", Color::Yellow),
    };

    // " | " + label + " " + message + " "
    let overhead = 3 + label.len() + 1 + 1;
    let message_width = notification.message.chars().count();
    let message = if overhead + message_width <= max_width {
        format!("{} ", notification.message)
    } else {
        let available = max_width.saturating_sub(overhead + 1);
        if available == 0 {
            return Line::default();
        }
        let truncated: String = notification.message.chars().take(available).collect();
        format!("{}… ", truncated)
    };

    Line::from(vec![
        Span::raw(" | "),
        Span::styled(
            format!("{} ", label),
            Style::default().fg(Color::Black).bg(color),
        ),
        Span::styled(message, Style::default().fg(color)),
    ])
}
