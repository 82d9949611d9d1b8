//! tfsk - Team Foundation changeset history browser
//!
//! A TUI for browsing changeset history, the items a changeset touched and
//! their diffs, backed by the `tf` command line client.
//!
//! This library provides:
//! - [`app`]: Application state and logic
//! - [`config`]: Command line and persisted settings
//! - [`keys`]: Key binding definitions
//! - [`logging`]: File-backed logger setup
//! - [`model`]: Domain models, filtering and diff classification
//! - [`tfs`]: Version control seam and `tf` command execution and parsing
//! - [`ui`]: User interface components

pub mod app;
pub mod config;
pub mod keys;
pub mod logging;
pub mod model;
pub mod tfs;
pub mod ui;
