//! History query parameters
//!
//! [`QueryOptions`] collects user input (path, result cap, version range);
//! [`QueryOptions::build`] turns it into an immutable [`QueryCriteria`].

use crate::config::ConfigError;

use super::VersionSpec;
use super::constants::special::RANGE_SEPARATOR;

/// Result cap used when none (or a non-positive one) is given
pub const DEFAULT_MAX_RESULTS: u32 = 100;

/// Mutable query inputs
///
/// The "use latest" and "no minimum" flags are derived from whether the
/// corresponding bound is set, so they can never disagree with the bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryOptions {
    path: String,
    max_results: u32,
    version_start: Option<VersionSpec>,
    version_end: Option<VersionSpec>,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            path: String::new(),
            max_results: DEFAULT_MAX_RESULTS,
            version_start: None,
            version_end: None,
        }
    }
}

impl QueryOptions {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn set_path(&mut self, path: impl Into<String>) {
        self.path = path.into();
    }

    pub fn max_results(&self) -> u32 {
        self.max_results
    }

    /// Set the result cap; non-positive values fall back to the default
    pub fn set_max_results(&mut self, max_results: i64) {
        self.max_results = if max_results <= 0 {
            DEFAULT_MAX_RESULTS
        } else {
            u32::try_from(max_results).unwrap_or(u32::MAX)
        };
    }

    pub fn version_start(&self) -> Option<&VersionSpec> {
        self.version_start.as_ref()
    }

    pub fn version_end(&self) -> Option<&VersionSpec> {
        self.version_end.as_ref()
    }

    /// True when the query runs up to the latest version
    pub fn use_latest(&self) -> bool {
        self.version_end.is_none()
    }

    /// True when the query has no lower version bound
    pub fn no_min_version(&self) -> bool {
        self.version_start.is_none()
    }

    /// Apply a versionspec or range typed by the user
    ///
    /// One spec sets the upper bound, two set both bounds. Anything that does
    /// not parse to one or two specs is ignored and the bounds stay as they were.
    /// Returns whether the input was applied.
    pub fn apply_version_range(&mut self, input: &str) -> bool {
        match VersionSpec::parse(input) {
            Ok(mut specs) if specs.len() == 1 => {
                self.version_start = None;
                self.version_end = specs.pop();
                true
            }
            Ok(mut specs) if specs.len() == 2 => {
                self.version_end = specs.pop();
                self.version_start = specs.pop();
                true
            }
            Ok(_) => false,
            Err(e) => {
                log::debug!("ignoring version range {:?}: {}", input, e);
                false
            }
        }
    }

    /// Drop both bounds (latest, no minimum)
    pub fn clear_version_range(&mut self) {
        self.version_start = None;
        self.version_end = None;
    }

    /// Current range in input form (`C1~C9`, `C9`, or empty)
    pub fn version_range_input(&self) -> String {
        match (&self.version_start, &self.version_end) {
            (Some(start), Some(end)) => format!("{}{}{}", start, RANGE_SEPARATOR, end),
            (Some(start), None) => format!("{}{}T", start, RANGE_SEPARATOR),
            (None, Some(end)) => end.to_string(),
            (None, None) => String::new(),
        }
    }

    /// Build the criteria for a history query
    pub fn build(&self) -> Result<QueryCriteria, ConfigError> {
        let path = self.path.trim();
        if path.is_empty() {
            return Err(ConfigError::MissingPath);
        }

        Ok(QueryCriteria {
            path: path.to_string(),
            recursive: true,
            max_results: self.max_results,
            version_start: self.version_start.clone(),
            version_end: self.version_end.clone(),
        })
    }
}

/// Parameters of one history query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryCriteria {
    pub path: String,
    /// Always true; history is queried for the whole subtree
    pub recursive: bool,
    /// Always positive
    pub max_results: u32,
    pub version_start: Option<VersionSpec>,
    pub version_end: Option<VersionSpec>,
}

impl QueryCriteria {
    /// The `/version:` argument value for this query, if any
    pub fn version_arg(&self) -> Option<String> {
        match (&self.version_start, &self.version_end) {
            (Some(start), Some(end)) => Some(format!("{}{}{}", start, RANGE_SEPARATOR, end)),
            (Some(start), None) => Some(format!(
                "{}{}{}",
                start,
                RANGE_SEPARATOR,
                VersionSpec::Latest
            )),
            (None, Some(end)) => Some(end.to_string()),
            (None, None) => None,
        }
    }
}
