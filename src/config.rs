//! Command line and persisted settings
//!
//! The command line uses `-flag value` pairs (flag names are
//! case-insensitive). The server URL is remembered across runs in
//! `settings.toml` under the config directory.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::FilterCriteria;
use crate::tfs::QueryOptions;

/// Environment variable overriding the config directory
pub const CONFIG_DIR_ENV: &str = "TFSK_CONFIG_DIR";

/// Settings file name inside the config directory
pub const SETTINGS_FILE: &str = "settings.toml";

/// Usage text shown when the command line is not usable
pub const USAGE: &str = "\
Usage:
    tfsk -path <path> [-server <TeamProjectCollectionUrl>] [-numdisplay <num history>]
         [-excludeUser <ExcludeUsers>] [-version <versionspec>]

Path:
    Path to a directory or a file. The path can be a server path ($/...) or a
    local workspace path.

Server:
    URL of the team project collection. Remembered for later runs.

Num history:
    Number of changesets returned from version control. Default is 100.

Exclude users:
    User names separated by ;

Versionspec:
    Date/time           Dtext
    Changeset number    Cnnnnnn
    Label               Llabelname
    Latest version      T
    Workspace           Wworkspacename;workspaceowner

    Specifies one of the following limits on the history data:
      - The maximum version.
      - The minimum and the maximum versions using the range ~ syntax.
";

/// Configuration problems that keep the main view from starting
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("File path is empty. Please set it using -path <file or directory>")]
    MissingPath,

    #[error("Server URL is empty. Please set it using -server <url>")]
    MissingServerUrl,

    #[error("Unknown option: {0}")]
    UnknownFlag(String),

    #[error("Missing value for option {0}")]
    MissingValue(String),

    #[error("Failed to read settings {path}: {source}")]
    ReadSettings {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid settings file {path}: {source}")]
    ParseSettings {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Failed to write settings {path}: {source}")]
    WriteSettings {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to serialize settings: {0}")]
    SerializeSettings(#[from] toml::ser::Error),
}

/// Persisted settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Team project collection URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_url: Option<String>,
    /// tf binary to run instead of `tf` from PATH
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tf_command: Option<String>,
}

impl Settings {
    /// Load settings from a file; a missing file yields defaults
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::ReadSettings {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        toml::from_str(&text).map_err(|source| ConfigError::ParseSettings {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Write settings to a file, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let text = toml::to_string_pretty(self)?;
        let write_error = |source| ConfigError::WriteSettings {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(write_error)?;
        }
        fs::write(path, text).map_err(write_error)
    }

    /// Server URL if set and non-empty
    pub fn server_url(&self) -> Option<&str> {
        self.server_url.as_deref().filter(|s| !s.trim().is_empty())
    }
}

/// Config directory: `$TFSK_CONFIG_DIR`, else the platform config dir + `tfsk`
pub fn config_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
        return PathBuf::from(dir);
    }
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tfsk")
}

/// Default settings file path
pub fn settings_path() -> PathBuf {
    config_dir().join(SETTINGS_FILE)
}

/// Everything needed to start the main view
#[derive(Debug, Clone)]
pub struct LaunchConfig {
    pub server_url: String,
    pub query: QueryOptions,
    pub filter: FilterCriteria,
}

/// Parsed command line (before validation against settings)
#[derive(Debug, Clone, Default)]
pub struct Arguments {
    pub server_url: Option<String>,
    pub query: QueryOptions,
    pub exclude_users: Option<String>,
}

/// Parse `-flag value` pairs (program name already removed)
///
/// Every problem is collected; an empty error list means success.
pub fn parse_arguments<I, S>(args: I) -> (Arguments, Vec<ConfigError>)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut arguments = Arguments::default();
    let mut errors = Vec::new();
    let mut iter = args.into_iter();

    while let Some(flag) = iter.next() {
        let flag = flag.as_ref().to_string();
        let Some(value) = iter.next() else {
            errors.push(ConfigError::MissingValue(flag));
            break;
        };
        let value = value.as_ref();

        match flag.to_ascii_lowercase().as_str() {
            "-server" => arguments.server_url = Some(value.to_string()),
            "-path" => arguments.query.set_path(value),
            "-numdisplay" => {
                // Non-numeric input keeps the default
                if let Ok(n) = value.trim().parse::<i64>() {
                    arguments.query.set_max_results(n);
                }
            }
            "-excludeuser" => arguments.exclude_users = Some(value.to_string()),
            "-version" => {
                arguments.query.apply_version_range(value);
            }
            _ => errors.push(ConfigError::UnknownFlag(flag)),
        }
    }

    (arguments, errors)
}

/// Parse the command line and resolve the server URL against settings
///
/// A `-server` value is stored into `settings` so it is saved on exit.
pub fn resolve_launch<I, S>(args: I, settings: &mut Settings) -> Result<LaunchConfig, Vec<ConfigError>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let (arguments, mut errors) = parse_arguments(args);

    if let Some(url) = arguments.server_url {
        settings.server_url = Some(url);
    }

    let server_url = settings.server_url().map(str::to_string);
    if server_url.is_none() {
        errors.push(ConfigError::MissingServerUrl);
    }
    if arguments.query.path().trim().is_empty() {
        errors.push(ConfigError::MissingPath);
    }

    match server_url {
        Some(server_url) if errors.is_empty() => Ok(LaunchConfig {
            server_url,
            filter: FilterCriteria::from_inputs(arguments.exclude_users.as_deref(), None),
            query: arguments.query,
        }),
        _ => Err(errors),
    }
}
