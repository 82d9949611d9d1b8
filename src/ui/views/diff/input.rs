//! Key handling for DiffView

use crossterm::event::KeyEvent;

use crate::keys;

use super::DiffView;

impl DiffView {
    /// Handle key input using the height seen at the last render
    pub fn handle_key(&mut self, key: KeyEvent) {
        self.handle_key_with_height(key, self.visible_height);
    }

    /// Handle key input with explicit visible height
    pub fn handle_key_with_height(&mut self, key: KeyEvent, visible_height: usize) {
        self.visible_height = visible_height;

        match key.code {
            code if keys::is_move_down(code) => self.scroll_down(),
            code if keys::is_move_up(code) => self.scroll_up(),
            keys::PAGE_DOWN => self.scroll_page_down(visible_height),
            keys::PAGE_UP => self.scroll_page_up(visible_height),
            keys::GO_TOP => self.jump_to_top(),
            keys::GO_BOTTOM => self.jump_to_bottom(visible_height),
            _ => {}
        }
    }
}
