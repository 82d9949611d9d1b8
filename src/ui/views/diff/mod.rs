//! Diff View
//!
//! Displays the diff of the selected change against its previous version.

mod input;
mod render;

use ratatui::{
    style::Style,
    text::{Line, Span},
};

use crate::model::{DiffContent, DiffSegment};
use crate::ui::theme;

/// Diff view state
#[derive(Debug)]
pub struct DiffView {
    /// Diff being displayed (None until a change is selected)
    pub content: Option<DiffContent>,
    /// Display lines built from the content's segments
    lines: Vec<Line<'static>>,
    /// Scroll offset (line index)
    pub scroll_offset: usize,
    /// Last known visible height (updated during render)
    visible_height: usize,
}

impl Default for DiffView {
    fn default() -> Self {
        Self::new()
    }
}

impl DiffView {
    /// Default visible height for scroll calculations when not specified
    const DEFAULT_VISIBLE_HEIGHT: usize = 20;

    pub fn new() -> Self {
        Self {
            content: None,
            lines: Vec::new(),
            scroll_offset: 0,
            visible_height: Self::DEFAULT_VISIBLE_HEIGHT,
        }
    }

    /// Replace the displayed diff and scroll back to the top
    pub fn set_content(&mut self, content: DiffContent) {
        self.lines = segments_to_lines(&content.segments);
        self.content = Some(content);
        self.scroll_offset = 0;
    }

    pub fn clear(&mut self) {
        self.content = None;
        self.lines.clear();
        self.scroll_offset = 0;
    }

    /// Rendered lines
    pub fn lines(&self) -> &[Line<'static>] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn max_scroll(&self, visible_height: usize) -> usize {
        self.lines.len().saturating_sub(visible_height.max(1))
    }

    pub fn scroll_down(&mut self) {
        if self.scroll_offset < self.max_scroll(self.visible_height) {
            self.scroll_offset += 1;
        }
    }

    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    pub fn scroll_page_down(&mut self, visible_height: usize) {
        let max = self.max_scroll(visible_height);
        self.scroll_offset = (self.scroll_offset + visible_height.max(1)).min(max);
    }

    pub fn scroll_page_up(&mut self, visible_height: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(visible_height.max(1));
    }

    pub fn jump_to_top(&mut self) {
        self.scroll_offset = 0;
    }

    pub fn jump_to_bottom(&mut self, visible_height: usize) {
        self.scroll_offset = self.max_scroll(visible_height);
    }
}

fn segment_style(segment: &DiffSegment) -> Style {
    let color = match segment {
        DiffSegment::Added(_) => theme::diff_view::ADDED,
        DiffSegment::Removed(_) => theme::diff_view::REMOVED,
        DiffSegment::HunkHeader(_) => theme::diff_view::HUNK_HEADER,
        DiffSegment::Plain(_) | DiffSegment::LineBreak => theme::diff_view::PLAIN,
    };
    Style::default().fg(color)
}

/// Turn classified segments into display lines
///
/// Each `LineBreak` ends the current line; spans left over after the last
/// break form a final line.
pub fn segments_to_lines(segments: &[DiffSegment]) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let mut current: Vec<Span<'static>> = Vec::new();

    for segment in segments {
        if segment.is_line_break() {
            lines.push(Line::from(std::mem::take(&mut current)));
        } else {
            current.push(Span::styled(segment.text().to_string(), segment_style(segment)));
        }
    }

    if !current.is_empty() {
        lines.push(Line::from(current));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::classify;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn content(text: &str) -> DiffContent {
        DiffContent::new("$/Proj/a.cs", 12, text)
    }

    #[test]
    fn test_segments_to_lines_colors() {
        let lines = segments_to_lines(&classify("@@ -1 +1 @@\n-old\n+new\n ctx"));
        // leading break before the hunk header
        assert_eq!(lines.len(), 5);
        assert!(lines[0].spans.is_empty());
        assert_eq!(lines[1].spans[0].content, "@@ -1 +1 @@");
        assert_eq!(lines[1].spans[0].style.fg, Some(theme::diff_view::HUNK_HEADER));
        assert_eq!(lines[2].spans[0].style.fg, Some(theme::diff_view::REMOVED));
        assert_eq!(lines[3].spans[0].style.fg, Some(theme::diff_view::ADDED));
        assert_eq!(lines[4].spans[0].style.fg, Some(theme::diff_view::PLAIN));
    }

    #[test]
    fn test_segments_without_trailing_break() {
        let lines = segments_to_lines(&[DiffSegment::Plain("x".to_string())]);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].spans[0].content, "x");
    }

    #[test]
    fn test_empty_diff_is_one_blank_line() {
        let mut view = DiffView::new();
        view.set_content(content(""));
        assert_eq!(view.line_count(), 1);
    }

    #[test]
    fn test_set_content_resets_scroll() {
        let text: String = (0..50).map(|i| format!(" line {}\n", i)).collect();
        let mut view = DiffView::new();
        view.set_content(content(&text));
        view.scroll_page_down(10);
        assert_eq!(view.scroll_offset, 10);

        view.set_content(content("+a"));
        assert_eq!(view.scroll_offset, 0);
    }

    #[test]
    fn test_scroll_bounds() {
        let text: String = (0..30).map(|i| format!("+{}\n", i)).collect();
        let mut view = DiffView::new();
        view.set_content(content(&text));
        // 30 lines plus the trailing empty line
        assert_eq!(view.line_count(), 31);

        view.jump_to_bottom(10);
        assert_eq!(view.scroll_offset, 21);
        view.scroll_page_down(10);
        assert_eq!(view.scroll_offset, 21);

        view.jump_to_top();
        view.scroll_up();
        assert_eq!(view.scroll_offset, 0);
    }

    #[test]
    fn test_keys_scroll() {
        let text: String = (0..40).map(|i| format!(" {}\n", i)).collect();
        let mut view = DiffView::new();
        view.set_content(content(&text));

        view.handle_key_with_height(KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE), 10);
        assert_eq!(view.scroll_offset, 1);
        view.handle_key_with_height(KeyEvent::new(KeyCode::PageDown, KeyModifiers::NONE), 10);
        assert_eq!(view.scroll_offset, 11);
        view.handle_key_with_height(KeyEvent::new(KeyCode::Char('G'), KeyModifiers::NONE), 10);
        assert_eq!(view.scroll_offset, 31);
        view.handle_key_with_height(KeyEvent::new(KeyCode::Char('g'), KeyModifiers::NONE), 10);
        assert_eq!(view.scroll_offset, 0);
    }

    #[test]
    fn test_clear() {
        let mut view = DiffView::new();
        view.set_content(content("+a"));
        view.clear();
        assert!(view.content.is_none());
        assert_eq!(view.line_count(), 0);
    }
}
