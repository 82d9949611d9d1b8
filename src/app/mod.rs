//! Application module
//!
//! Contains the main application state and logic, split into:
//! - `state`: App struct and focus management
//! - `input`: Key event handling
//! - `refresh`: History queries and change/diff loading
//! - `render`: UI rendering
//! - `worker`: Background history query

mod input;
mod refresh;
mod render;
mod state;
mod worker;

pub use state::{App, BackendFactory, Focus, status_text};
pub use worker::{HistoryWorker, QueryResult};
