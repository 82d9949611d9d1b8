//! Changeset detail parser (`tf history /format:detailed`, `tf changeset`)
//!
//! Both commands print records shaped like:
//!
//! ```text
//! Changeset: 1234
//! User: Jane Doe
//! Date: Tuesday, March 4, 2014 10:00:00 AM
//!
//! Comment:
//!   Fix crash on startup
//!
//! Items:
//!   edit $/Proj/src/Main.cs
//! ```
//!
//! `history` separates records with a dashed line.

use super::super::TfsError;
use super::super::constants::fields;
use super::{ITEM_LINE_REGEX, Parser, is_record_separator, parse_changeset_number, split_field};
use crate::model::{ChangeRecord, ChangesetSummary, ItemId};

/// Section of a changeset record being read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Header,
    Comment,
    Items,
    /// Check-in notes, policy warnings, work items
    Other,
}

/// One parsed record: summary plus the items it touched
#[derive(Debug, Clone, Default)]
pub(super) struct ChangesetRecord {
    pub summary: ChangesetSummary,
    pub items: Vec<ChangeRecord>,
}

impl Parser {
    /// Parse `tf history /format:detailed` output, newest first as printed
    pub fn parse_history(output: &str) -> Result<Vec<ChangesetSummary>, TfsError> {
        Ok(Self::parse_records(output)?
            .into_iter()
            .map(|r| r.summary)
            .collect())
    }

    /// Parse `tf changeset` output into the items it touched
    pub fn parse_changeset_items(output: &str) -> Result<Vec<ChangeRecord>, TfsError> {
        let mut records = Self::parse_records(output)?;
        if records.is_empty() {
            return Err(TfsError::ParseError(
                "No changeset found in tf changeset output".to_string(),
            ));
        }
        Ok(records.swap_remove(0).items)
    }

    pub(super) fn parse_records(output: &str) -> Result<Vec<ChangesetRecord>, TfsError> {
        let mut records = Vec::new();
        let mut block: Vec<&str> = Vec::new();

        for line in output.lines() {
            if is_record_separator(line) {
                if let Some(record) = Self::parse_record(&block)? {
                    records.push(record);
                }
                block.clear();
            } else {
                block.push(line);
            }
        }
        if let Some(record) = Self::parse_record(&block)? {
            records.push(record);
        }

        Ok(records)
    }

    /// Parse one record; blank blocks yield None
    fn parse_record(lines: &[&str]) -> Result<Option<ChangesetRecord>, TfsError> {
        if lines.iter().all(|l| l.trim().is_empty()) {
            return Ok(None);
        }

        let mut changeset_id: Option<u32> = None;
        let mut owner = String::new();
        let mut date = String::new();
        let mut comment_lines: Vec<&str> = Vec::new();
        let mut items: Vec<(String, String)> = Vec::new();
        let mut section = Section::Header;

        for line in lines {
            let line = line.trim_end_matches('\r');
            let indented = line.starts_with(char::is_whitespace);

            if !indented && !line.is_empty() {
                if let Some((key, value)) = split_field(line) {
                    if value.is_empty() {
                        section = match key {
                            fields::COMMENT => Section::Comment,
                            fields::ITEMS => Section::Items,
                            _ => Section::Other,
                        };
                        continue;
                    }
                    if section == Section::Header {
                        match key {
                            fields::CHANGESET => changeset_id = Some(parse_changeset_number(value)?),
                            fields::USER => owner = value.to_string(),
                            fields::DATE => date = value.to_string(),
                            _ => {}
                        }
                        continue;
                    }
                }
            }

            match section {
                Section::Comment => comment_lines.push(strip_indent(line)),
                Section::Items => {
                    if let Some(caps) = ITEM_LINE_REGEX.captures(line) {
                        items.push((caps[1].trim().to_string(), caps[2].to_string()));
                    }
                }
                Section::Header | Section::Other => {}
            }
        }

        let id = changeset_id.ok_or_else(|| {
            TfsError::ParseError(format!(
                "Missing '{}' field in record: {}",
                fields::CHANGESET,
                lines.join("\n")
            ))
        })?;

        let comment = join_comment(&comment_lines);
        let items = items
            .into_iter()
            .map(|(change_type, path)| ChangeRecord {
                item_id: ItemId::new(path.clone()),
                item_path: path,
                changeset_id: id,
                change_type,
            })
            .collect();

        Ok(Some(ChangesetRecord {
            summary: ChangesetSummary {
                id,
                owner_display_name: owner,
                comment,
                date,
            },
            items,
        }))
    }
}

/// Remove the two-space indent tf puts in front of comment lines
fn strip_indent(line: &str) -> &str {
    line.strip_prefix("  ").unwrap_or_else(|| line.trim_start())
}

/// Join comment lines, dropping leading and trailing blank lines
fn join_comment(lines: &[&str]) -> Option<String> {
    let start = lines.iter().position(|l| !l.trim().is_empty())?;
    let end = lines.iter().rposition(|l| !l.trim().is_empty())?;
    Some(lines[start..=end].join("\n"))
}
