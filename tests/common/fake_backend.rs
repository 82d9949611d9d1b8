//! In-memory [`VersionControl`] implementation

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use tfsk::app::{App, BackendFactory};
use tfsk::config::{LaunchConfig, Settings};
use tfsk::model::{ChangeRecord, ChangesetSummary, FilterCriteria, Item, ItemId};
use tfsk::tfs::{DiffOptions, QueryCriteria, QueryOptions, TfsError, VersionControl};

/// Backend serving canned data and recording what was asked
#[derive(Default)]
pub struct FakeVersionControl {
    pub changesets: Vec<ChangesetSummary>,
    pub changes: HashMap<u32, Vec<ChangeRecord>>,
    /// Diff text returned for every diff request
    pub diff_text: String,
    /// Error message returned by query_history when set
    pub history_error: Option<String>,
    pub queries: Mutex<Vec<QueryCriteria>>,
    pub diff_calls: AtomicUsize,
}

impl FakeVersionControl {
    pub fn with_sample() -> Self {
        let mut changes = HashMap::new();
        changes.insert(
            30,
            vec![
                record("$/Proj/src/Loader.cs", 30, "edit"),
                record("$/Proj/src/Util.cs", 30, "add"),
            ],
        );
        changes.insert(20, vec![record("$/Proj/version.txt", 20, "edit")]);
        changes.insert(10, vec![record("$/Proj/src/Loader.cs", 10, "add")]);

        Self {
            changesets: sample_changesets(),
            changes,
            diff_text: "@@ -1 +1 @@\n-old\n+new".to_string(),
            ..Self::default()
        }
    }

    pub fn query_count(&self) -> usize {
        self.queries.lock().map(|q| q.len()).unwrap_or(0)
    }

    pub fn last_query(&self) -> Option<QueryCriteria> {
        self.queries.lock().ok().and_then(|q| q.last().cloned())
    }
}

pub fn record(path: &str, changeset_id: u32, change_type: &str) -> ChangeRecord {
    ChangeRecord {
        item_id: ItemId::new(path),
        item_path: path.to_string(),
        changeset_id,
        change_type: change_type.to_string(),
    }
}

pub fn sample_changesets() -> Vec<ChangesetSummary> {
    vec![
        changeset(30, "Jane Doe", Some("Fix crash on startup")),
        changeset(20, "Build Service", Some("Update version")),
        changeset(10, "John Roe", Some("Bug 42: initial import")),
    ]
}

pub fn changeset(id: u32, owner: &str, comment: Option<&str>) -> ChangesetSummary {
    ChangesetSummary {
        id,
        owner_display_name: owner.to_string(),
        comment: comment.map(str::to_string),
        date: "Monday, March 3, 2014 9:15:00 AM".to_string(),
    }
}

impl VersionControl for FakeVersionControl {
    fn query_history(&self, criteria: &QueryCriteria) -> Result<Vec<ChangesetSummary>, TfsError> {
        if let Ok(mut queries) = self.queries.lock() {
            queries.push(criteria.clone());
        }
        if let Some(ref message) = self.history_error {
            return Err(TfsError::CommandFailed {
                stderr: message.clone(),
                exit_code: 100,
            });
        }
        Ok(self
            .changesets
            .iter()
            .take(criteria.max_results as usize)
            .cloned()
            .collect())
    }

    fn changes_for_changeset(&self, changeset_id: u32) -> Result<Vec<ChangeRecord>, TfsError> {
        Ok(self.changes.get(&changeset_id).cloned().unwrap_or_default())
    }

    fn get_item(&self, item_id: &ItemId, changeset_id: u32) -> Result<Option<Item>, TfsError> {
        // An item exists from the first changeset that touches it
        let exists = self.changes.iter().any(|(&id, records)| {
            id <= changeset_id && records.iter().any(|r| &r.item_id == item_id)
        });
        Ok(exists.then(|| Item {
            item_id: item_id.clone(),
            server_path: item_id.as_str().to_string(),
            changeset_id,
        }))
    }

    fn diff_files(
        &self,
        _previous: &Item,
        _current: &Item,
        _options: &DiffOptions,
    ) -> Result<String, TfsError> {
        self.diff_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.diff_text.clone())
    }
}

/// Factory always handing out the same backend, recording requested URLs
pub fn shared_factory(
    backend: Arc<FakeVersionControl>,
    urls: Arc<Mutex<Vec<String>>>,
) -> BackendFactory {
    Box::new(move |url: &str| {
        if let Ok(mut urls) = urls.lock() {
            urls.push(url.to_string());
        }
        backend.clone() as Arc<dyn VersionControl>
    })
}

pub fn launch(path: &str, filter: FilterCriteria) -> LaunchConfig {
    LaunchConfig {
        server_url: "http://tfs:8080/tfs/DefaultCollection".to_string(),
        query: QueryOptions::new(path),
        filter,
    }
}

/// App over `backend` with the initial query finished and loads resolved
pub fn loaded_app(backend: Arc<FakeVersionControl>, filter: FilterCriteria) -> App {
    let urls = Arc::new(Mutex::new(Vec::new()));
    let mut app = App::new(
        launch("$/Proj", filter),
        Settings::default(),
        shared_factory(backend, urls),
    );
    app.wait_for_query();
    app.on_tick();
    app
}
