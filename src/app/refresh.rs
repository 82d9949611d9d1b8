//! History queries and change/diff loading

use crate::model::{DiffContent, Notification};

use super::state::{App, status_text};
use super::worker::QueryResult;

impl App {
    /// Start a history query with the current parameters
    ///
    /// Dropped with a warning while another query is running.
    pub fn start_query(&mut self) {
        let criteria = match self.query.build() {
            Ok(criteria) => criteria,
            Err(e) => {
                self.error_message = Some(e.to_string());
                return;
            }
        };

        if self.worker.start(self.backend.clone(), criteria) {
            self.status = status_text::QUERYING_HISTORY.to_string();
        } else {
            self.notification = Some(Notification::warning(
                "A history query is already running",
            ));
        }
    }

    /// Idle work: collect a finished query, run deferred loads, expire notifications
    pub fn on_tick(&mut self) {
        if let Some(result) = self.worker.poll() {
            self.apply_query_result(result);
        }
        self.resolve_pending_loads();
        self.clear_expired_notification();
    }

    /// Block until the running query finishes and apply its result
    pub fn wait_for_query(&mut self) {
        if let Some(result) = self.worker.wait() {
            self.apply_query_result(result);
        }
    }

    fn apply_query_result(&mut self, result: QueryResult) {
        self.status = status_text::READY.to_string();
        match result {
            Ok(changesets) => {
                let count = changesets.len();
                log::info!("history query returned {} changesets", count);
                self.history_view.set_changesets(changesets);
                self.notification = Some(Notification::info(format!(
                    "Loaded {} changesets",
                    count
                )));
                self.error_message = None;
                self.on_history_selection_changed();
            }
            Err(e) => {
                log::warn!("history query failed: {}", e);
                self.error_message = Some(format!("tf error: {}", e));
            }
        }
    }

    /// Forget the shown changes and schedule loading the new selection
    pub(crate) fn on_history_selection_changed(&mut self) {
        self.changes_view.clear();
        self.diff_view.clear();
        self.pending_diff_load = false;
        self.pending_changes_load = self.history_view.selected_changeset().map(|c| c.id);

        if let Some(id) = self.pending_changes_load {
            self.status = status_text::querying_changes(id);
        }
    }

    /// Run loads deferred by navigation (one per tick)
    pub fn resolve_pending_loads(&mut self) {
        if let Some(changeset_id) = self.pending_changes_load.take() {
            self.load_changes(changeset_id);
            self.status = status_text::READY.to_string();
        } else if self.pending_diff_load {
            self.pending_diff_load = false;
            self.load_diff();
        }
    }

    fn load_changes(&mut self, changeset_id: u32) {
        let Some(summary) = self
            .history_view
            .selected_changeset()
            .filter(|c| c.id == changeset_id)
            .cloned()
        else {
            return;
        };

        match self.backend.changes_for_changeset(changeset_id) {
            Ok(changes) => {
                self.changes_view.set_changes(summary, changes);
                self.load_diff();
            }
            Err(e) => {
                log::warn!("loading changeset {} failed: {}", changeset_id, e);
                self.error_message = Some(format!("tf error: {}", e));
            }
        }
    }

    fn load_diff(&mut self) {
        let Some(change) = self.changes_view.selected_change().cloned() else {
            self.diff_view.clear();
            return;
        };

        match self.backend.diff_with_previous(&change) {
            Ok(text) => {
                self.diff_view.set_content(DiffContent::new(
                    change.item_path,
                    change.changeset_id,
                    &text,
                ));
            }
            Err(e) => {
                log::warn!("diff of {} failed: {}", change.item_path, e);
                self.diff_view.clear();
                self.error_message = Some(format!("tf diff error: {}", e));
            }
        }
    }
}
