//! Changeset data model

use std::fmt;

/// Opaque identity of a versioned item
///
/// The `tf` command-line client addresses items by server path, so that is
/// what the id wraps. Other backends may store anything unique here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ItemId(pub String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One entry of a history query result
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChangesetSummary {
    /// Changeset number
    pub id: u32,

    /// Display name of the changeset owner
    pub owner_display_name: String,

    /// Check-in comment (None when the changeset has no comment)
    pub comment: Option<String>,

    /// Check-in date as reported by the server (display only)
    pub date: String,
}

impl ChangesetSummary {
    /// First line of the comment, or an empty string
    pub fn first_comment_line(&self) -> &str {
        self.comment
            .as_deref()
            .and_then(|c| c.lines().next())
            .unwrap_or("")
    }

    /// Comment text for display in the detail pane
    pub fn display_comment(&self) -> &str {
        match self.comment.as_deref() {
            Some(c) if !c.is_empty() => c,
            _ => "(no comment)",
        }
    }
}

/// A single file touched by a changeset
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChangeRecord {
    pub item_id: ItemId,
    /// Server path of the item (e.g. `$/Project/src/main.cs`)
    pub item_path: String,
    pub changeset_id: u32,
    /// Change type as reported by the server (`edit`, `add`, `delete, source rename`, ...)
    pub change_type: String,
}

impl ChangeRecord {
    /// The item this record points at, at the record's changeset
    pub fn item(&self) -> Item {
        Item {
            item_id: self.item_id.clone(),
            server_path: self.item_path.clone(),
            changeset_id: self.changeset_id,
        }
    }
}

/// A versioned item at a specific changeset
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Item {
    pub item_id: ItemId,
    pub server_path: String,
    /// Changeset in which this version of the item was last modified
    pub changeset_id: u32,
}
