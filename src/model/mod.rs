//! Data models for tfsk
//!
//! UI-independent data structures for changesets, changes, diffs and the
//! history filter.

mod changeset;
mod diff;
mod filter;
mod notification;

pub use changeset::{ChangeRecord, ChangesetSummary, Item, ItemId};
pub use diff::{DiffContent, DiffSegment, classify};
pub use filter::{FilterCriteria, parse_owner_list, should_display, visible_indices};
pub use notification::{Notification, NotificationKind};
