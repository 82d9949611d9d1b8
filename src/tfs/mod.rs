//! Team Foundation version control layer
//!
//! This module defines the [`VersionControl`] seam the application talks to,
//! the query builder feeding it, and the `tf` command-line implementation.

pub mod constants;
mod executor;
/// Parser module (public for integration testing)
pub mod parser;
mod query;
mod version_spec;

pub use executor::TfExecutor;
pub use query::{DEFAULT_MAX_RESULTS, QueryCriteria, QueryOptions};
pub use version_spec::VersionSpec;

use std::io;
use thiserror::Error;

use crate::model::{ChangeRecord, ChangesetSummary, Item, ItemId};

/// Errors that can occur when talking to the version control server
#[derive(Error, Debug)]
pub enum TfsError {
    #[error("tf command failed (exit code {exit_code}): {stderr}")]
    CommandFailed { stderr: String, exit_code: i32 },

    #[error("Failed to parse tf output: {0}")]
    ParseError(String),

    #[error("Invalid versionspec: {0}")]
    InvalidVersionSpec(String),

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("tf is not installed or not in PATH")]
    TfNotFound,

    #[error("History query worker stopped without a result")]
    WorkerDisconnected,
}

/// Options passed to [`VersionControl::diff_files`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiffOptions {
    /// Ignore whitespace-only changes
    pub ignore_whitespace: bool,
    /// Produce unified diff output
    pub unified: bool,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            ignore_whitespace: true,
            unified: true,
        }
    }
}

/// Operations the application needs from a version control server
///
/// Implementations must be shareable with the history worker thread.
pub trait VersionControl: Send + Sync {
    /// Query changeset history matching the criteria, newest first
    fn query_history(&self, criteria: &QueryCriteria) -> Result<Vec<ChangesetSummary>, TfsError>;

    /// List the items touched by a changeset
    fn changes_for_changeset(&self, changeset_id: u32) -> Result<Vec<ChangeRecord>, TfsError>;

    /// Look up an item as of a changeset (None when it did not exist yet)
    fn get_item(&self, item_id: &ItemId, changeset_id: u32) -> Result<Option<Item>, TfsError>;

    /// Unified diff text between two item versions
    fn diff_files(
        &self,
        previous: &Item,
        current: &Item,
        options: &DiffOptions,
    ) -> Result<String, TfsError>;

    /// Diff a change against the previous version of its item
    ///
    /// Returns an empty string when the item has no earlier version.
    fn diff_with_previous(&self, change: &ChangeRecord) -> Result<String, TfsError> {
        let current = change.item();
        // Changeset 1 is the repository root; nothing precedes it
        if change.changeset_id <= 1 {
            return Ok(String::new());
        }

        match self.get_item(&current.item_id, change.changeset_id - 1)? {
            Some(previous) => self.diff_files(&previous, &current, &DiffOptions::default()),
            None => Ok(String::new()),
        }
    }
}
