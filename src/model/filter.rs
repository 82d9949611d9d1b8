//! Changeset list filter
//!
//! Hides changesets from excluded owners and changesets whose comment does not
//! match the search keyword.

use std::collections::BTreeSet;

use regex::{Regex, RegexBuilder};

use super::ChangesetSummary;

/// Compiled search keyword
#[derive(Debug, Clone)]
enum KeywordMatcher {
    /// Case-insensitive pattern
    Pattern(Regex),
    /// Keyword that failed to compile; never matches
    Invalid,
}

impl KeywordMatcher {
    fn compile(keyword: &str) -> Self {
        match RegexBuilder::new(keyword).case_insensitive(true).build() {
            Ok(re) => Self::Pattern(re),
            Err(e) => {
                log::warn!("invalid search pattern {:?}: {}", keyword, e);
                Self::Invalid
            }
        }
    }

    fn is_match(&self, text: &str) -> bool {
        match self {
            Self::Pattern(re) => re.is_match(text),
            Self::Invalid => false,
        }
    }
}

/// Criteria deciding which changesets the history list shows
#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    excluded_owners: BTreeSet<String>,
    search_keyword: Option<String>,
    matcher: Option<KeywordMatcher>,
}

impl FilterCriteria {
    /// Criteria that let every changeset through
    pub fn new() -> Self {
        Self::default()
    }

    /// Build criteria from a `;`-separated owner list and a keyword
    pub fn from_inputs(exclude_list: Option<&str>, keyword: Option<&str>) -> Self {
        let mut criteria = Self::new();
        criteria.set_excluded_owners(exclude_list.map(parse_owner_list).unwrap_or_default());
        criteria.set_search_keyword(keyword);
        criteria
    }

    pub fn excluded_owners(&self) -> &BTreeSet<String> {
        &self.excluded_owners
    }

    pub fn search_keyword(&self) -> Option<&str> {
        self.search_keyword.as_deref()
    }

    /// Excluded owners joined back into the `a;b` input form
    pub fn excluded_owners_input(&self) -> String {
        self.excluded_owners
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(";")
    }

    pub fn set_excluded_owners(&mut self, owners: impl IntoIterator<Item = String>) {
        self.excluded_owners = owners.into_iter().collect();
    }

    /// Set the search keyword (empty or None clears it)
    pub fn set_search_keyword(&mut self, keyword: Option<&str>) {
        match keyword.filter(|k| !k.is_empty()) {
            Some(k) => {
                self.matcher = Some(KeywordMatcher::compile(k));
                self.search_keyword = Some(k.to_string());
            }
            None => {
                self.matcher = None;
                self.search_keyword = None;
            }
        }
    }

    /// True when the search keyword is set but failed to compile
    pub fn has_invalid_keyword(&self) -> bool {
        matches!(self.matcher, Some(KeywordMatcher::Invalid))
    }

    /// True when no criterion is active
    pub fn is_identity(&self) -> bool {
        self.excluded_owners.is_empty() && self.matcher.is_none()
    }
}

/// Split a `;`-separated owner list, trimming entries and dropping empty ones
pub fn parse_owner_list(input: &str) -> Vec<String> {
    input
        .split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Decide whether a changeset is shown under the given criteria
///
/// Owner exclusion is an exact, case-sensitive comparison. A keyword hides
/// changesets without a comment.
pub fn should_display(changeset: &ChangesetSummary, criteria: &FilterCriteria) -> bool {
    if criteria
        .excluded_owners
        .contains(&changeset.owner_display_name)
    {
        return false;
    }

    if let Some(ref matcher) = criteria.matcher {
        return match changeset.comment.as_deref() {
            Some(comment) if !comment.is_empty() => matcher.is_match(comment),
            _ => false,
        };
    }

    true
}

/// Indices of the changesets passing the filter, in list order
pub fn visible_indices(changesets: &[ChangesetSummary], criteria: &FilterCriteria) -> Vec<usize> {
    changesets
        .iter()
        .enumerate()
        .filter(|(_, cs)| should_display(cs, criteria))
        .map(|(i, _)| i)
        .collect()
}
