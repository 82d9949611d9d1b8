//! Versionspec parsing
//!
//! Supported forms (prefix letters are case-insensitive):
//!
//! | Form              | Meaning                        |
//! |-------------------|--------------------------------|
//! | `C1234` / `1234`  | changeset number               |
//! | `Lname[@scope]`   | label                          |
//! | `Dtext`           | date/time (passed to server)   |
//! | `T`               | latest version                 |
//! | `Wname[;owner]`   | workspace version              |
//!
//! Two specs joined with `~` form a range.

use std::fmt;

use super::TfsError;
use super::constants::special::RANGE_SEPARATOR;

/// A point in repository history
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionSpec {
    Changeset(u32),
    Label { name: String, scope: Option<String> },
    Date(String),
    Latest,
    Workspace { name: String, owner: Option<String> },
}

impl VersionSpec {
    /// Parse a single versionspec (no range)
    pub fn parse_single(input: &str) -> Result<Self, TfsError> {
        let input = input.trim();
        let invalid = || TfsError::InvalidVersionSpec(input.to_string());

        let mut chars = input.chars();
        let prefix = chars.next().ok_or_else(invalid)?;
        let rest = chars.as_str();

        if prefix.is_ascii_digit() {
            return input.parse().map(Self::Changeset).map_err(|_| invalid());
        }

        match prefix.to_ascii_uppercase() {
            'C' => rest.parse().map(Self::Changeset).map_err(|_| invalid()),
            'T' if rest.is_empty() => Ok(Self::Latest),
            'D' if !rest.is_empty() => Ok(Self::Date(rest.to_string())),
            'L' if !rest.is_empty() => {
                let (name, scope) = split_qualifier(rest, '@');
                if name.is_empty() {
                    return Err(invalid());
                }
                Ok(Self::Label { name, scope })
            }
            'W' if !rest.is_empty() => {
                let (name, owner) = split_qualifier(rest, ';');
                if name.is_empty() {
                    return Err(invalid());
                }
                Ok(Self::Workspace { name, owner })
            }
            _ => Err(invalid()),
        }
    }

    /// Parse a versionspec or a `from~to` range into one or two specs
    pub fn parse(input: &str) -> Result<Vec<Self>, TfsError> {
        let parts: Vec<&str> = input.split(RANGE_SEPARATOR).collect();
        if parts.len() > 2 {
            return Err(TfsError::InvalidVersionSpec(input.to_string()));
        }
        parts.into_iter().map(Self::parse_single).collect()
    }
}

fn split_qualifier(text: &str, separator: char) -> (String, Option<String>) {
    match text.split_once(separator) {
        Some((name, qualifier)) if !qualifier.is_empty() => {
            (name.to_string(), Some(qualifier.to_string()))
        }
        Some((name, _)) => (name.to_string(), None),
        None => (text.to_string(), None),
    }
}

impl fmt::Display for VersionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Changeset(id) => write!(f, "C{}", id),
            Self::Label { name, scope: None } => write!(f, "L{}", name),
            Self::Label {
                name,
                scope: Some(scope),
            } => write!(f, "L{}@{}", name, scope),
            Self::Date(date) => write!(f, "D{}", date),
            Self::Latest => f.write_str("T"),
            Self::Workspace { name, owner: None } => write!(f, "W{}", name),
            Self::Workspace {
                name,
                owner: Some(owner),
            } => write!(f, "W{};{}", name, owner),
        }
    }
}
