//! tf output parser
//!
//! Parses the text output of tf commands into structured data.

mod history;
mod properties;


use regex::Regex;
use std::sync::LazyLock;

/// Regex for an entry of the `Items:` section
/// Format: `  <change type>  <server path>`
/// Example: `  edit, rename        $/Proj/src/Main.cs`
///
/// Groups:
/// 1. change type (may contain commas and spaces)
/// 2. server path (starts with `$/`)
static ITEM_LINE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(.+?)\s+(\$/.*?)\s*$").expect("Invalid item line regex")
});

/// Parser for tf command output
pub struct Parser;

/// Split a `Key: value` line at the first colon
///
/// Returns None when there is no colon or the key is empty.
fn split_field(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once(':')?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }
    Some((key, value.trim()))
}

/// True for the dashed lines separating history records
///
/// tf prints separators at column 0; indented dash lines belong to a comment.
fn is_record_separator(line: &str) -> bool {
    if line.starts_with(char::is_whitespace) {
        return false;
    }
    let trimmed = line.trim_end();
    trimmed.len() >= 3 && trimmed.chars().all(|c| c == '-')
}

/// Parse a changeset number field value
fn parse_changeset_number(value: &str) -> Result<u32, super::TfsError> {
    value
        .trim()
        .parse()
        .map_err(|_| super::TfsError::ParseError(format!("Invalid changeset number: {}", value)))
}
