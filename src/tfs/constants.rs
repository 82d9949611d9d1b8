//! tf-specific constants
//!
//! Centralized definitions for tf command names, options, and output markers.

/// Default tf command binary name
pub const TF_COMMAND: &str = "tf";

/// tf subcommands
pub mod commands {
    pub const HISTORY: &str = "history";
    pub const CHANGESET: &str = "changeset";
    pub const PROPERTIES: &str = "properties";
    pub const DIFF: &str = "diff";
}

/// tf command options
pub mod flags {
    /// Never show interactive dialogs
    pub const NO_PROMPT: &str = "/noprompt";
    /// Team project collection URL prefix
    pub const COLLECTION: &str = "/collection:";
    /// Recurse into sub-items
    pub const RECURSIVE: &str = "/recursive";
    /// Full changeset detail including comment and items
    pub const FORMAT_DETAILED: &str = "/format:detailed";
    /// Unified diff output
    pub const FORMAT_UNIFIED: &str = "/format:unified";
    /// Maximum number of history entries prefix
    pub const STOP_AFTER: &str = "/stopafter:";
    /// Version or version range prefix
    pub const VERSION: &str = "/version:";
    /// Ignore whitespace-only changes
    pub const IGNORE_SPACE: &str = "/ignorespace";
}

/// Special tf values
pub mod special {
    /// Separator between the two ends of a version range
    pub const RANGE_SEPARATOR: char = '~';
    /// Separator between item path and versionspec (`$/P/a.cs;C12`)
    pub const VERSION_SEPARATOR: char = ';';
    /// Server paths always start with this
    pub const SERVER_ROOT: &str = "$/";
    /// Exit code tf uses for partial success (diff found differences)
    pub const PARTIAL_SUCCESS_EXIT_CODE: i32 = 1;
}

/// Markers in `tf history /format:detailed` and `tf changeset` output
pub mod fields {
    pub const CHANGESET: &str = "Changeset";
    pub const USER: &str = "User";
    pub const DATE: &str = "Date";
    pub const COMMENT: &str = "Comment";
    pub const ITEMS: &str = "Items";
    pub const SERVER_PATH: &str = "Server path";
}

/// Error detection patterns in tf output
pub mod errors {
    /// Pattern indicating the item does not exist at the requested version
    pub const NO_ITEMS_MATCH: &str = "No items match";
    /// Older clients phrase missing items this way
    pub const NOT_FOUND: &str = "could not be found";
}
