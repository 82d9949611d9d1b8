//! Keybinding definitions for tfsk
//!
//! All keybindings are defined here, together with the hints shown in the
//! status bar.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::Color;

use crate::app::Focus;

// =============================================================================
// Key detection helpers (for modifier keys)
// =============================================================================

/// Check if key is Ctrl+L (re-run history query)
/// Note: Accept both 'l' and 'L' for terminal compatibility
pub fn is_refresh_key(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('l') | KeyCode::Char('L'))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Check if key is Ctrl+C (always quits)
pub fn is_interrupt_key(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('c')) && key.modifiers.contains(KeyModifiers::CONTROL)
}

// =============================================================================
// Global keys
// =============================================================================

/// Quit application
pub const QUIT: KeyCode = KeyCode::Char('q');

/// Alternative quit / cancel input
pub const ESC: KeyCode = KeyCode::Esc;

/// Cycle focus forward
pub const TAB: KeyCode = KeyCode::Tab;

/// Cycle focus backward
pub const BACK_TAB: KeyCode = KeyCode::BackTab;

// =============================================================================
// Navigation keys
// =============================================================================

/// Move cursor up (vim style)
pub const MOVE_UP: KeyCode = KeyCode::Char('k');

/// Move cursor up (arrow key)
pub const MOVE_UP_ARROW: KeyCode = KeyCode::Up;

/// Move cursor down (vim style)
pub const MOVE_DOWN: KeyCode = KeyCode::Char('j');

/// Move cursor down (arrow key)
pub const MOVE_DOWN_ARROW: KeyCode = KeyCode::Down;

/// Go to top
pub const GO_TOP: KeyCode = KeyCode::Char('g');

/// Go to bottom
pub const GO_BOTTOM: KeyCode = KeyCode::Char('G');

/// Scroll a page up
pub const PAGE_UP: KeyCode = KeyCode::PageUp;

/// Scroll a page down
pub const PAGE_DOWN: KeyCode = KeyCode::PageDown;

/// Check if key is move up (k or ↑)
pub fn is_move_up(code: KeyCode) -> bool {
    matches!(code, MOVE_UP | MOVE_UP_ARROW)
}

/// Check if key is move down (j or ↓)
pub fn is_move_down(code: KeyCode) -> bool {
    matches!(code, MOVE_DOWN | MOVE_DOWN_ARROW)
}

// =============================================================================
// Input keys (used in input modes)
// =============================================================================

/// Submit input
pub const SUBMIT: KeyCode = KeyCode::Enter;

// =============================================================================
// History keys
// =============================================================================

/// Search changeset comments
pub const SEARCH_INPUT: KeyCode = KeyCode::Char('/');

/// Edit excluded users
pub const EXCLUDE_USERS_INPUT: KeyCode = KeyCode::Char('x');

/// Edit queried path
pub const PATH_INPUT: KeyCode = KeyCode::Char('P');

/// Edit version range
pub const VERSION_INPUT: KeyCode = KeyCode::Char('v');

/// Edit number of changesets to fetch
pub const MAX_RESULTS_INPUT: KeyCode = KeyCode::Char('n');

/// Edit server URL
pub const SERVER_INPUT: KeyCode = KeyCode::Char('S');

/// Clear search keyword and excluded users
pub const CLEAR_FILTER: KeyCode = KeyCode::Char('c');

// =============================================================================
// Status bar hints
// =============================================================================

#[derive(Debug, Clone, Copy)]
pub struct KeyHint {
    pub key: &'static str,
    pub label: &'static str,
    pub color: Color,
}

pub const HINT_QUIT: KeyHint = KeyHint {
    key: "q",
    label: "Quit",
    color: Color::Red,
};
pub const HINT_FOCUS: KeyHint = KeyHint {
    key: "Tab",
    label: "Pane",
    color: Color::Cyan,
};
pub const HINT_SEARCH: KeyHint = KeyHint {
    key: "/",
    label: "Search",
    color: Color::Green,
};
pub const HINT_EXCLUDE: KeyHint = KeyHint {
    key: "x",
    label: "Exclude",
    color: Color::Yellow,
};
pub const HINT_CLEAR: KeyHint = KeyHint {
    key: "c",
    label: "Clear",
    color: Color::Yellow,
};
pub const HINT_PATH: KeyHint = KeyHint {
    key: "P",
    label: "Path",
    color: Color::Magenta,
};
pub const HINT_VERSION: KeyHint = KeyHint {
    key: "v",
    label: "Version",
    color: Color::Magenta,
};
pub const HINT_COUNT: KeyHint = KeyHint {
    key: "n",
    label: "Count",
    color: Color::Magenta,
};
pub const HINT_SERVER: KeyHint = KeyHint {
    key: "S",
    label: "Server",
    color: Color::Magenta,
};
pub const HINT_REFRESH: KeyHint = KeyHint {
    key: "^L",
    label: "Query",
    color: Color::Blue,
};
pub const HINT_SCROLL: KeyHint = KeyHint {
    key: "PgUp/PgDn",
    label: "Scroll",
    color: Color::Blue,
};
pub const HINT_SUBMIT: KeyHint = KeyHint {
    key: "Enter",
    label: "Apply",
    color: Color::Green,
};
pub const HINT_CANCEL: KeyHint = KeyHint {
    key: "Esc",
    label: "Cancel",
    color: Color::Red,
};

pub const HISTORY_HINTS: &[KeyHint] = &[
    HINT_SEARCH,
    HINT_EXCLUDE,
    HINT_CLEAR,
    HINT_PATH,
    HINT_VERSION,
    HINT_COUNT,
    HINT_SERVER,
    HINT_REFRESH,
    HINT_FOCUS,
    HINT_QUIT,
];

pub const CHANGES_HINTS: &[KeyHint] = &[HINT_REFRESH, HINT_FOCUS, HINT_QUIT];

pub const DIFF_HINTS: &[KeyHint] = &[HINT_SCROLL, HINT_REFRESH, HINT_FOCUS, HINT_QUIT];

pub const INPUT_HINTS: &[KeyHint] = &[HINT_SUBMIT, HINT_CANCEL];

/// Status bar hints for the focused pane
pub fn hints_for(focus: Focus, in_input: bool) -> &'static [KeyHint] {
    if in_input {
        return INPUT_HINTS;
    }
    match focus {
        Focus::History => HISTORY_HINTS,
        Focus::Changes => CHANGES_HINTS,
        Focus::Diff => DIFF_HINTS,
    }
}
