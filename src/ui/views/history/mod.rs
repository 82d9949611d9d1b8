//! History View - the changeset list
//!
//! Shows the result of the last history query through the current filter.
//! The filtered list is a live view: it is recomputed whenever the list or
//! the filter criteria change.

mod input;
mod render;

use crate::model::{ChangesetSummary, FilterCriteria, visible_indices};

/// Input mode for History View
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Normal navigation mode
    #[default]
    Normal,
    /// Comment search keyword
    SearchInput,
    /// `;`-separated excluded owners
    ExcludeUsersInput,
    /// Queried server or local path
    PathInput,
    /// Versionspec or range
    VersionInput,
    /// Number of changesets to fetch
    MaxResultsInput,
    /// Team project collection URL
    ServerInput,
}

impl InputMode {
    /// Prompt and title of the input bar (None in normal mode)
    pub fn input_bar_meta(self) -> Option<(&'static str, &'static str)> {
        match self {
            InputMode::Normal => None,
            InputMode::SearchInput => Some(("Search: ", " / Search comments ")),
            InputMode::ExcludeUsersInput => Some(("Exclude: ", " x Exclude users (a;b) ")),
            InputMode::PathInput => Some(("Path: ", " P Path ")),
            InputMode::VersionInput => Some(("Version: ", " v Versionspec (C10~C20) ")),
            InputMode::MaxResultsInput => Some(("Count: ", " n Number of changesets ")),
            InputMode::ServerInput => Some(("Server: ", " S Collection URL ")),
        }
    }
}

/// Actions that HistoryView can request from App
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryAction {
    /// No action needed
    None,
    /// The selected changeset changed (load its changes)
    SelectionChanged,
    /// Input mode requested; App fills in the current value
    StartInput(InputMode),
    /// Input submitted, exactly as typed
    Submit { mode: InputMode, value: String },
    /// Search keyword and excluded users cleared
    FilterCleared,
}

/// History View state
#[derive(Debug, Default)]
pub struct HistoryView {
    /// Result of the last history query (unfiltered)
    changesets: Vec<ChangesetSummary>,
    /// Active filter
    criteria: FilterCriteria,
    /// Indices into `changesets` passing the filter
    visible: Vec<usize>,
    /// Position of the selection in `visible`
    cursor: usize,
    /// Current input mode
    pub input_mode: InputMode,
    /// Input bar contents
    pub input_buffer: String,
}

pub mod empty_text {
    pub const NO_RESULTS: &str = "No changesets found.";
    pub const NO_RESULTS_HINT: &str = "Hint: check the path and versionspec (P / v)";
    pub const ALL_FILTERED: &str = "All changesets are hidden by the filter.";
    pub const ALL_FILTERED_HINT: &str = "Hint: press c to clear the filter";
}

impl HistoryView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a view with an initial filter
    pub fn with_criteria(criteria: FilterCriteria) -> Self {
        Self {
            criteria,
            ..Self::default()
        }
    }

    /// Replace the whole changeset list
    ///
    /// Selection resets to the first visible changeset.
    pub fn set_changesets(&mut self, changesets: Vec<ChangesetSummary>) {
        self.changesets = changesets;
        self.visible = visible_indices(&self.changesets, &self.criteria);
        self.cursor = 0;
    }

    /// Replace the filter and recompute the visible list
    ///
    /// Keeps the selected changeset selected when it is still visible.
    /// Returns true when the selected changeset changed.
    pub fn set_criteria(&mut self, criteria: FilterCriteria) -> bool {
        let previous = self.selected_changeset().map(|c| c.id);
        self.criteria = criteria;
        self.visible = visible_indices(&self.changesets, &self.criteria);

        self.cursor = previous
            .and_then(|id| {
                self.visible
                    .iter()
                    .position(|&i| self.changesets[i].id == id)
            })
            .unwrap_or(0);

        self.selected_changeset().map(|c| c.id) != previous
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// All changesets of the last query
    pub fn changesets(&self) -> &[ChangesetSummary] {
        &self.changesets
    }

    /// Changesets passing the filter, in list order
    pub fn visible_changesets(&self) -> impl Iterator<Item = &ChangesetSummary> {
        self.visible.iter().map(|&i| &self.changesets[i])
    }

    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    pub fn total_count(&self) -> usize {
        self.changesets.len()
    }

    /// Position of the selection among the visible changesets
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn selected_changeset(&self) -> Option<&ChangesetSummary> {
        self.visible
            .get(self.cursor)
            .and_then(|&i| self.changesets.get(i))
    }

    /// Move selection up; returns true if it moved
    pub fn move_up(&mut self) -> bool {
        if self.cursor > 0 {
            self.cursor -= 1;
            true
        } else {
            false
        }
    }

    /// Move selection down; returns true if it moved
    pub fn move_down(&mut self) -> bool {
        if self.cursor + 1 < self.visible.len() {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    pub fn move_to_top(&mut self) -> bool {
        let moved = self.cursor != 0;
        self.cursor = 0;
        moved
    }

    pub fn move_to_bottom(&mut self) -> bool {
        let last = self.visible.len().saturating_sub(1);
        let moved = self.cursor != last;
        self.cursor = last;
        moved
    }

    /// Enter an input mode with the bar pre-filled
    pub fn start_input(&mut self, mode: InputMode, initial: String) {
        self.input_mode = mode;
        self.input_buffer = initial;
    }

    /// Leave input mode without applying
    pub fn cancel_input(&mut self) {
        self.input_mode = InputMode::Normal;
        self.input_buffer.clear();
    }

    pub fn is_in_input(&self) -> bool {
        self.input_mode != InputMode::Normal
    }
}
