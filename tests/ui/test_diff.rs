//! Diff pane rendering

use insta::assert_debug_snapshot;
use ratatui::{Terminal, backend::TestBackend, style::Color};

use tfsk::model::{DiffContent, classify};
use tfsk::ui::views::DiffView;

use super::{buffer_rows, buffer_text};

fn render(view: &mut DiffView, width: u16, height: u16) -> Terminal<TestBackend> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal
        .draw(|frame| view.render(frame, frame.area(), true))
        .unwrap();
    terminal
}

#[test]
fn test_classified_hunk() {
    assert_debug_snapshot!(classify("@@ -1 +1 @@\n+a"), @r###"
    [
        LineBreak,
        HunkHeader(
            "@@ -1 +1 @@",
        ),
        LineBreak,
        Added(
            "+a",
        ),
        LineBreak,
    ]
    "###);
}

#[test]
fn test_diff_lines_colored() {
    let mut view = DiffView::new();
    view.set_content(DiffContent::new(
        "$/Proj/a.cs",
        12,
        "@@ -1,2 +1,2 @@\r\n-old\r\n+new\r\n same",
    ));
    let terminal = render(&mut view, 60, 10);
    let buffer = terminal.backend().buffer();
    let rows = buffer_rows(buffer);

    assert!(rows[0].contains("Diff $/Proj/a.cs;C12"));

    // row 1 is the break before the hunk header
    assert!(rows[2].contains("@@ -1,2 +1,2 @@"));
    assert!(rows[3].contains("-old"));
    assert!(rows[4].contains("+new"));
    assert!(rows[5].contains(" same"));

    assert_eq!(buffer.cell((1, 2)).map(|c| c.fg), Some(Color::Blue));
    assert_eq!(buffer.cell((1, 3)).map(|c| c.fg), Some(Color::Red));
    assert_eq!(buffer.cell((1, 4)).map(|c| c.fg), Some(Color::Green));
}

#[test]
fn test_scrolled_diff() {
    let text: String = (0..30).map(|i| format!("+line {}\n", i)).collect();
    let mut view = DiffView::new();
    view.set_content(DiffContent::new("$/Proj/a.cs", 3, &text));
    view.scroll_page_down(8);

    let terminal = render(&mut view, 40, 10);
    let rows = buffer_rows(terminal.backend().buffer());
    assert!(rows[1].contains("+line 8"));
}

#[test]
fn test_no_selection_placeholder() {
    let mut view = DiffView::new();
    let terminal = render(&mut view, 60, 8);
    assert!(buffer_text(&terminal).contains("Select a change to see its diff."));
}

#[test]
fn test_empty_diff_placeholder() {
    let mut view = DiffView::new();
    view.set_content(DiffContent::new("$/Proj/new.cs", 5, ""));
    let terminal = render(&mut view, 70, 8);
    assert!(buffer_text(&terminal).contains("No differences."));
}
