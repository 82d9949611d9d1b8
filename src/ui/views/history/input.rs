//! Input handling for HistoryView

use crossterm::event::{KeyCode, KeyEvent};

use crate::keys;

use super::{HistoryAction, HistoryView, InputMode};

impl HistoryView {
    /// Handle key event and return action
    pub fn handle_key(&mut self, key: KeyEvent) -> HistoryAction {
        match self.input_mode {
            InputMode::Normal => self.handle_normal_key(key),
            mode => self.handle_input_key(mode, key),
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) -> HistoryAction {
        let moved = match key.code {
            k if keys::is_move_down(k) => self.move_down(),
            k if keys::is_move_up(k) => self.move_up(),
            k if k == keys::GO_TOP => self.move_to_top(),
            k if k == keys::GO_BOTTOM => self.move_to_bottom(),
            k if k == keys::SEARCH_INPUT => {
                return HistoryAction::StartInput(InputMode::SearchInput);
            }
            k if k == keys::EXCLUDE_USERS_INPUT => {
                return HistoryAction::StartInput(InputMode::ExcludeUsersInput);
            }
            k if k == keys::PATH_INPUT => return HistoryAction::StartInput(InputMode::PathInput),
            k if k == keys::VERSION_INPUT => {
                return HistoryAction::StartInput(InputMode::VersionInput);
            }
            k if k == keys::MAX_RESULTS_INPUT => {
                return HistoryAction::StartInput(InputMode::MaxResultsInput);
            }
            k if k == keys::SERVER_INPUT => {
                return HistoryAction::StartInput(InputMode::ServerInput);
            }
            k if k == keys::CLEAR_FILTER => return HistoryAction::FilterCleared,
            _ => false,
        };

        if moved {
            HistoryAction::SelectionChanged
        } else {
            HistoryAction::None
        }
    }

    fn handle_input_key(&mut self, mode: InputMode, key: KeyEvent) -> HistoryAction {
        match key.code {
            keys::ESC => {
                self.cancel_input();
                HistoryAction::None
            }
            keys::SUBMIT => {
                let value = std::mem::take(&mut self.input_buffer);
                self.input_mode = InputMode::Normal;
                HistoryAction::Submit { mode, value }
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
                HistoryAction::None
            }
            KeyCode::Char(c) => {
                self.input_buffer.push(c);
                HistoryAction::None
            }
            _ => HistoryAction::None,
        }
    }
}
