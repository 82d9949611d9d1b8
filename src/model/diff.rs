//! Diff data model
//!
//! Classifies unified diff text (as produced by `tf diff /format:unified`)
//! into styled segments for the Diff View.

/// A styled piece of diff output
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffSegment {
    /// Line starting with `+`
    Added(String),
    /// Line starting with `-`
    Removed(String),
    /// Line starting with `@@`
    HunkHeader(String),
    /// Any other line
    Plain(String),
    /// End of a display line
    LineBreak,
}

impl DiffSegment {
    /// Text carried by this segment (empty for line breaks)
    pub fn text(&self) -> &str {
        match self {
            Self::Added(s) | Self::Removed(s) | Self::HunkHeader(s) | Self::Plain(s) => s,
            Self::LineBreak => "",
        }
    }

    pub fn is_line_break(&self) -> bool {
        matches!(self, Self::LineBreak)
    }
}

/// Split diff text into lines on `\n` and `\r\n`
///
/// Unlike [`str::lines`], a trailing newline yields a final empty line and an
/// empty input yields one empty line.
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
}

/// Classify unified diff text into display segments
///
/// Every input line produces one text segment followed by a `LineBreak`.
/// Hunk headers get an additional `LineBreak` in front of them.
pub fn classify(diff_text: &str) -> Vec<DiffSegment> {
    let mut segments = Vec::new();

    for line in split_lines(diff_text) {
        if line.starts_with('+') {
            segments.push(DiffSegment::Added(line.to_string()));
        } else if line.starts_with('-') {
            segments.push(DiffSegment::Removed(line.to_string()));
        } else if line.starts_with("@@") {
            segments.push(DiffSegment::LineBreak);
            segments.push(DiffSegment::HunkHeader(line.to_string()));
        } else {
            segments.push(DiffSegment::Plain(line.to_string()));
        }
        segments.push(DiffSegment::LineBreak);
    }

    segments
}

/// Diff text and its classification for one change
#[derive(Debug, Clone, Default)]
pub struct DiffContent {
    /// Server path of the diffed item
    pub item_path: String,
    /// Changeset the diff was taken at
    pub changeset_id: u32,
    /// Classified segments
    pub segments: Vec<DiffSegment>,
}

impl DiffContent {
    pub fn new(item_path: impl Into<String>, changeset_id: u32, diff_text: &str) -> Self {
        Self {
            item_path: item_path.into(),
            changeset_id,
            segments: classify(diff_text),
        }
    }

    /// Number of display lines
    pub fn line_count(&self) -> usize {
        self.segments.iter().filter(|s| s.is_line_break()).count()
    }

    /// True when the diff has no text at all
    pub fn is_blank(&self) -> bool {
        self.segments.iter().all(|s| s.text().is_empty())
    }
}
