//! File-backed logging
//!
//! The terminal belongs to the UI, so log records go to `tfsk.log` in the
//! config directory. The filter is read from `TFSK_LOG` (default `info`).

use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use env_logger::{Builder, Env, Target};

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "TFSK_LOG";

/// Log file name inside the config directory
pub const LOG_FILE: &str = "tfsk.log";

/// Default log file path
pub fn log_path() -> PathBuf {
    crate::config::config_dir().join(LOG_FILE)
}

/// Install the global logger writing to `path`
///
/// Fails when the file cannot be opened; the caller may run without logging.
pub fn init(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    Builder::from_env(Env::default().filter_or(LOG_ENV, "info"))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_secs()
        .try_init()
        .map_err(io::Error::other)
}
