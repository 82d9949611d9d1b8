//! Background history query
//!
//! Runs one `query_history` call off the UI thread. At most one query is in
//! flight; requests made while one is running are dropped.

use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use crate::model::ChangesetSummary;
use crate::tfs::{QueryCriteria, TfsError, VersionControl};

/// Outcome of a finished history query
pub type QueryResult = Result<Vec<ChangesetSummary>, TfsError>;

/// Handle to the (at most one) running history query
#[derive(Debug, Default)]
pub struct HistoryWorker {
    pending: Option<Receiver<QueryResult>>,
}

impl HistoryWorker {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while a query is running
    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    /// Start a query on a worker thread
    ///
    /// Returns false (and does nothing) when a query is already running.
    pub fn start(&mut self, backend: Arc<dyn VersionControl>, criteria: QueryCriteria) -> bool {
        if self.is_busy() {
            log::debug!("history query already running, dropping request");
            return false;
        }

        let (tx, rx) = mpsc::channel();
        log::info!(
            "querying history of {} (max {}, version {:?})",
            criteria.path,
            criteria.max_results,
            criteria.version_arg()
        );

        thread::spawn(move || {
            let result = backend.query_history(&criteria);
            // The receiver is gone only when the app is shutting down
            let _ = tx.send(result);
        });

        self.pending = Some(rx);
        true
    }

    /// Take the result of the running query if it has finished
    pub fn poll(&mut self) -> Option<QueryResult> {
        let rx = self.pending.as_ref()?;
        let result = match rx.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Disconnected) => Err(TfsError::WorkerDisconnected),
        };
        self.pending = None;
        Some(result)
    }

    /// Block until the running query finishes (None when idle)
    pub fn wait(&mut self) -> Option<QueryResult> {
        let rx = self.pending.take()?;
        Some(rx.recv().unwrap_or(Err(TfsError::WorkerDisconnected)))
    }
}
