//! Application state and focus management

use std::sync::Arc;

use crate::config::{LaunchConfig, Settings};
use crate::model::Notification;
use crate::tfs::{QueryOptions, VersionControl};
use crate::ui::views::{ChangesView, DiffView, HistoryView};

use super::worker::HistoryWorker;

/// Builds a version control backend for a collection URL
pub type BackendFactory = Box<dyn Fn(&str) -> Arc<dyn VersionControl>>;

/// Status line texts
pub mod status_text {
    pub const READY: &str = "Ready";
    pub const QUERYING_HISTORY: &str = "Querying History";

    pub fn querying_changes(changeset_id: u32) -> String {
        format!("Query changes for changeset {}", changeset_id)
    }
}

/// Pane receiving navigation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    History,
    Changes,
    Diff,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::History => Focus::Changes,
            Focus::Changes => Focus::Diff,
            Focus::Diff => Focus::History,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::History => Focus::Diff,
            Focus::Changes => Focus::History,
            Focus::Diff => Focus::Changes,
        }
    }
}

/// The main application state
pub struct App {
    /// Is the application running?
    pub running: bool,
    /// Focused pane
    pub focus: Focus,
    /// Changeset list
    pub history_view: HistoryView,
    /// Comment and items of the selected changeset
    pub changes_view: ChangesView,
    /// Diff of the selected item
    pub diff_view: DiffView,
    /// Current history query parameters
    pub query: QueryOptions,
    /// Persisted settings (saved by the caller on exit)
    pub settings: Settings,
    /// Status line text
    pub status: String,
    /// Error message to display
    pub error_message: Option<String>,
    /// Notification to display (success/info/warning messages)
    pub notification: Option<Notification>,
    pub(crate) backend: Arc<dyn VersionControl>,
    pub(crate) backend_factory: BackendFactory,
    pub(crate) worker: HistoryWorker,
    /// Changeset whose items load on the next idle tick
    pub(crate) pending_changes_load: Option<u32>,
    /// Diff of the selected item loads on the next idle tick
    pub(crate) pending_diff_load: bool,
}

impl App {
    /// Construct the app and start the initial history query
    pub fn new(launch: LaunchConfig, settings: Settings, backend_factory: BackendFactory) -> Self {
        let backend = backend_factory(&launch.server_url);

        let mut app = Self {
            running: true,
            focus: Focus::History,
            history_view: HistoryView::with_criteria(launch.filter),
            changes_view: ChangesView::new(),
            diff_view: DiffView::new(),
            query: launch.query,
            settings,
            status: status_text::READY.to_string(),
            error_message: None,
            notification: None,
            backend,
            backend_factory,
            worker: HistoryWorker::new(),
            pending_changes_load: None,
            pending_diff_load: false,
        };

        app.start_query();

        app
    }

    /// Replace the backend for a new collection URL
    pub(crate) fn switch_server(&mut self, server_url: &str) {
        log::info!("switching server to {}", server_url);
        self.settings.server_url = Some(server_url.to_string());
        self.backend = (self.backend_factory)(server_url);
    }

    /// True while the history worker is running
    pub fn is_querying(&self) -> bool {
        self.worker.is_busy()
    }

    /// Set running to false to quit the application.
    pub(crate) fn quit(&mut self) {
        self.running = false;
    }

    /// Clear expired notification
    pub(crate) fn clear_expired_notification(&mut self) {
        if let Some(ref notification) = self.notification
            && notification.is_expired()
        {
            self.notification = None;
        }
    }
}
