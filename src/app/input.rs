//! Input handling for the application

use crossterm::event::KeyEvent;

use super::state::{App, Focus};
use crate::keys;
use crate::model::{FilterCriteria, Notification, parse_owner_list};
use crate::ui::views::{ChangesAction, HistoryAction, InputMode};

impl App {
    /// Handle key events
    pub fn on_key_event(&mut self, key: KeyEvent) {
        // Clear error message on any key press
        self.error_message = None;

        if keys::is_interrupt_key(&key) {
            self.quit();
            return;
        }

        // In input mode every key goes to the input bar
        if self.history_view.is_in_input() {
            let action = self.history_view.handle_key(key);
            self.handle_history_action(action);
            return;
        }

        if keys::is_refresh_key(&key) {
            self.start_query();
            return;
        }

        match key.code {
            keys::QUIT | keys::ESC => self.quit(),
            keys::TAB => self.focus = self.focus.next(),
            keys::BACK_TAB => self.focus = self.focus.prev(),
            _ => self.handle_focused_key(key),
        }
    }

    fn handle_focused_key(&mut self, key: KeyEvent) {
        match self.focus {
            Focus::History => {
                let action = self.history_view.handle_key(key);
                self.handle_history_action(action);
            }
            Focus::Changes => {
                if self.changes_view.handle_key(key) == ChangesAction::SelectionChanged {
                    self.pending_diff_load = true;
                }
            }
            Focus::Diff => self.diff_view.handle_key(key),
        }
    }

    fn handle_history_action(&mut self, action: HistoryAction) {
        match action {
            HistoryAction::None => {}
            HistoryAction::SelectionChanged => self.on_history_selection_changed(),
            HistoryAction::StartInput(mode) => {
                let initial = self.initial_input_value(mode);
                self.history_view.start_input(mode, initial);
            }
            HistoryAction::Submit { mode, value } => self.apply_input(mode, value),
            HistoryAction::FilterCleared => {
                self.apply_filter(FilterCriteria::new());
                self.notification = Some(Notification::info("Filter cleared"));
            }
        }
    }

    /// Current value shown when an input bar opens
    fn initial_input_value(&self, mode: InputMode) -> String {
        match mode {
            InputMode::Normal => String::new(),
            InputMode::SearchInput => self
                .history_view
                .criteria()
                .search_keyword()
                .unwrap_or_default()
                .to_string(),
            InputMode::ExcludeUsersInput => self.history_view.criteria().excluded_owners_input(),
            InputMode::PathInput => self.query.path().to_string(),
            InputMode::VersionInput => self.query.version_range_input(),
            InputMode::MaxResultsInput => self.query.max_results().to_string(),
            InputMode::ServerInput => self.settings.server_url().unwrap_or_default().to_string(),
        }
    }

    fn apply_filter(&mut self, criteria: FilterCriteria) {
        if self.history_view.set_criteria(criteria) {
            self.on_history_selection_changed();
        }
    }

    fn apply_input(&mut self, mode: InputMode, value: String) {
        match mode {
            InputMode::Normal => {}
            InputMode::SearchInput => {
                let mut criteria = self.history_view.criteria().clone();
                criteria.set_search_keyword(Some(&value));
                if criteria.has_invalid_keyword() {
                    self.notification = Some(Notification::warning(format!(
                        "Invalid search pattern, nothing matches: {}",
                        value
                    )));
                }
                self.apply_filter(criteria);
            }
            InputMode::ExcludeUsersInput => {
                let mut criteria = self.history_view.criteria().clone();
                criteria.set_excluded_owners(parse_owner_list(&value));
                self.apply_filter(criteria);
            }
            InputMode::PathInput => {
                let value = value.trim();
                if value.is_empty() {
                    self.notification = Some(Notification::warning("Path cannot be empty"));
                } else {
                    self.query.set_path(value);
                    self.start_query();
                }
            }
            InputMode::VersionInput => {
                let value = value.trim();
                if value.is_empty() {
                    self.query.clear_version_range();
                    self.start_query();
                } else if self.query.apply_version_range(value) {
                    self.start_query();
                } else {
                    self.notification = Some(Notification::warning(format!(
                        "Invalid versionspec: {}",
                        value
                    )));
                }
            }
            InputMode::MaxResultsInput => match value.trim().parse::<i64>() {
                Ok(n) => {
                    self.query.set_max_results(n);
                    self.start_query();
                }
                Err(_) => {
                    self.notification = Some(Notification::warning(format!(
                        "Not a number: {}",
                        value
                    )));
                }
            },
            InputMode::ServerInput => {
                let value = value.trim();
                if value.is_empty() {
                    self.notification = Some(Notification::warning("Server URL cannot be empty"));
                } else {
                    self.switch_server(value);
                    self.notification =
                        Some(Notification::success(format!("Server saved: {}", value)));
                    self.start_query();
                }
            }
        }
    }
}
