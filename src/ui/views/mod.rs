//! View components
//!
//! Each view is one pane of the main screen.

mod changes;
mod diff;
mod history;

pub use changes::{ChangesAction, ChangesView};
pub use diff::{DiffView, segments_to_lines};
pub use history::{HistoryAction, HistoryView, InputMode};
