//! Color theme definitions
//!
//! Centralized color constants for consistent UI appearance.

use ratatui::style::Color;

/// Colors for the History pane
pub mod history_view {
    use super::*;

    /// Changeset number color
    pub const CHANGESET_ID: Color = Color::Yellow;
    /// Owner name color
    pub const OWNER: Color = Color::Cyan;
    /// Check-in date color
    pub const DATE: Color = Color::DarkGray;
    /// Selected row background
    pub const SELECTED_BG: Color = Color::DarkGray;
}

/// Colors for the Changes pane
pub mod changes_view {
    use super::*;

    pub const ADD: Color = Color::Green;
    pub const EDIT: Color = Color::Yellow;
    pub const DELETE: Color = Color::Red;
    pub const OTHER: Color = Color::Cyan;
    /// Selected row background
    pub const SELECTED_BG: Color = Color::DarkGray;
}

/// Colors for the Diff pane
pub mod diff_view {
    use super::*;

    /// Added line color
    pub const ADDED: Color = Color::Green;
    /// Removed line color
    pub const REMOVED: Color = Color::Red;
    /// Hunk header color
    pub const HUNK_HEADER: Color = Color::Blue;
    /// Unchanged line color
    pub const PLAIN: Color = Color::Reset;
}

/// Border color of the focused pane
pub const FOCUSED_BORDER: Color = Color::Cyan;
