//! Changes View - comment and touched items of the selected changeset

mod render;

use crossterm::event::KeyEvent;

use crate::keys;
use crate::model::{ChangeRecord, ChangesetSummary};

/// Actions that ChangesView can request from App
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangesAction {
    None,
    /// The selected change moved (load its diff)
    SelectionChanged,
}

/// Changes View state
#[derive(Debug, Default)]
pub struct ChangesView {
    /// Changeset the list belongs to
    changeset: Option<ChangesetSummary>,
    changes: Vec<ChangeRecord>,
    selected: usize,
}

impl ChangesView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show the changes of a changeset, selecting the first one
    pub fn set_changes(&mut self, changeset: ChangesetSummary, changes: Vec<ChangeRecord>) {
        self.changeset = Some(changeset);
        self.changes = changes;
        self.selected = 0;
    }

    pub fn clear(&mut self) {
        self.changeset = None;
        self.changes.clear();
        self.selected = 0;
    }

    pub fn changeset(&self) -> Option<&ChangesetSummary> {
        self.changeset.as_ref()
    }

    pub fn changes(&self) -> &[ChangeRecord] {
        &self.changes
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_change(&self) -> Option<&ChangeRecord> {
        self.changes.get(self.selected)
    }

    pub fn move_up(&mut self) -> bool {
        if self.selected > 0 {
            self.selected -= 1;
            true
        } else {
            false
        }
    }

    pub fn move_down(&mut self) -> bool {
        if self.selected + 1 < self.changes.len() {
            self.selected += 1;
            true
        } else {
            false
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> ChangesAction {
        let moved = match key.code {
            k if keys::is_move_down(k) => self.move_down(),
            k if keys::is_move_up(k) => self.move_up(),
            k if k == keys::GO_TOP => {
                let moved = self.selected != 0;
                self.selected = 0;
                moved
            }
            k if k == keys::GO_BOTTOM => {
                let last = self.changes.len().saturating_sub(1);
                let moved = self.selected != last;
                self.selected = last;
                moved
            }
            _ => false,
        };

        if moved {
            ChangesAction::SelectionChanged
        } else {
            ChangesAction::None
        }
    }
}
