//! tf command executor
//!
//! Runs the Team Foundation command-line client and maps its output onto
//! [`VersionControl`].

use std::process::Command;

use super::constants::{self, commands, errors, flags, special};
use super::parser::Parser;
use super::{DiffOptions, QueryCriteria, TfsError, VersionControl};
use crate::model::{ChangeRecord, ChangesetSummary, Item, ItemId};

/// Executor for tf commands
#[derive(Debug, Clone)]
pub struct TfExecutor {
    /// tf binary to run
    command: String,
    /// Team project collection URL (None = tf's own default)
    collection_url: Option<String>,
}

impl Default for TfExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl TfExecutor {
    /// Create an executor using `tf` from PATH and no explicit collection
    pub fn new() -> Self {
        Self {
            command: constants::TF_COMMAND.to_string(),
            collection_url: None,
        }
    }

    /// Create an executor for a specific team project collection
    pub fn with_collection(url: impl Into<String>) -> Self {
        Self {
            collection_url: Some(url.into()),
            ..Self::new()
        }
    }

    /// Use a different tf binary (e.g. a full path to `tf.exe` or `tf.cmd`)
    pub fn command(mut self, command: impl Into<String>) -> Self {
        self.command = command.into();
        self
    }

    pub fn collection_url(&self) -> Option<&str> {
        self.collection_url.as_deref()
    }

    /// Run a tf command with the given arguments
    ///
    /// Automatically adds `/noprompt` and the collection URL.
    pub fn run(&self, args: &[&str]) -> Result<String, TfsError> {
        self.run_with_success_codes(args, &[0])
    }

    /// Run a tf command treating any of `success_codes` as success
    fn run_with_success_codes(&self, args: &[&str], success_codes: &[i32]) -> Result<String, TfsError> {
        let mut cmd = Command::new(&self.command);
        cmd.args(args).arg(flags::NO_PROMPT);

        if let Some(ref url) = self.collection_url {
            cmd.arg(format!("{}{}", flags::COLLECTION, url));
        }

        log::debug!("running {} {}", self.command, args.join(" "));

        let output = cmd.output().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                TfsError::TfNotFound
            } else {
                TfsError::IoError(e)
            }
        })?;

        let exit_code = output.status.code().unwrap_or(-1);
        if success_codes.contains(&exit_code) {
            Ok(String::from_utf8_lossy(&output.stdout).into_owned())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            log::warn!("{} {} failed ({}): {}", self.command, args.join(" "), exit_code, stderr.trim());
            Err(TfsError::CommandFailed { stderr, exit_code })
        }
    }

    /// Run `tf history` for the query criteria
    pub fn history_raw(&self, criteria: &QueryCriteria) -> Result<String, TfsError> {
        let stop_after = format!("{}{}", flags::STOP_AFTER, criteria.max_results);
        let version = criteria
            .version_arg()
            .map(|v| format!("{}{}", flags::VERSION, v));

        let mut args = vec![commands::HISTORY, criteria.path.as_str()];
        if criteria.recursive {
            args.push(flags::RECURSIVE);
        }
        args.push(flags::FORMAT_DETAILED);
        args.push(&stop_after);
        if let Some(ref version) = version {
            args.push(version);
        }

        self.run(&args)
    }

    /// Run `tf changeset` for a changeset number
    pub fn changeset_raw(&self, changeset_id: u32) -> Result<String, TfsError> {
        let id = changeset_id.to_string();
        self.run(&[commands::CHANGESET, &id])
    }

    /// Run `tf properties` for an item at a changeset
    pub fn properties_raw(&self, server_path: &str, changeset_id: u32) -> Result<String, TfsError> {
        let version = format!("{}C{}", flags::VERSION, changeset_id);
        self.run(&[commands::PROPERTIES, server_path, &version])
    }

    /// Run `tf diff` between two item versions
    pub fn diff_raw(
        &self,
        previous: &Item,
        current: &Item,
        options: &DiffOptions,
    ) -> Result<String, TfsError> {
        let previous_spec = versioned_item(previous);
        let current_spec = versioned_item(current);

        let mut args = vec![commands::DIFF, previous_spec.as_str(), current_spec.as_str()];
        if options.unified {
            args.push(flags::FORMAT_UNIFIED);
        }
        if options.ignore_whitespace {
            args.push(flags::IGNORE_SPACE);
        }

        // tf reports "differences found" as partial success
        self.run_with_success_codes(&args, &[0, special::PARTIAL_SUCCESS_EXIT_CODE])
    }
}

/// `$/path;C123` item specification
fn versioned_item(item: &Item) -> String {
    format!(
        "{}{}C{}",
        item.server_path,
        special::VERSION_SEPARATOR,
        item.changeset_id
    )
}

/// True when stderr says the item does not exist at that version
fn is_missing_item(stderr: &str) -> bool {
    stderr.contains(errors::NO_ITEMS_MATCH) || stderr.contains(errors::NOT_FOUND)
}

impl VersionControl for TfExecutor {
    fn query_history(&self, criteria: &QueryCriteria) -> Result<Vec<ChangesetSummary>, TfsError> {
        let output = self.history_raw(criteria)?;
        Parser::parse_history(&output)
    }

    fn changes_for_changeset(&self, changeset_id: u32) -> Result<Vec<ChangeRecord>, TfsError> {
        let output = self.changeset_raw(changeset_id)?;
        Parser::parse_changeset_items(&output)
    }

    fn get_item(&self, item_id: &ItemId, changeset_id: u32) -> Result<Option<Item>, TfsError> {
        match self.properties_raw(item_id.as_str(), changeset_id) {
            Ok(output) => Parser::parse_properties(&output).map(Some),
            Err(TfsError::CommandFailed { ref stderr, .. }) if is_missing_item(stderr) => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn diff_files(
        &self,
        previous: &Item,
        current: &Item,
        options: &DiffOptions,
    ) -> Result<String, TfsError> {
        self.diff_raw(previous, current, options)
    }
}
