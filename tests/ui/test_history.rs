//! Main screen rendering with the History pane focused

use std::sync::{Arc, Mutex};

use ratatui::{Terminal, backend::TestBackend};

use tfsk::app::App;
use tfsk::config::{LaunchConfig, Settings};
use tfsk::model::{ChangesetSummary, FilterCriteria};
use tfsk::tfs::QueryOptions;
use tfsk::ui::views::HistoryView;

use super::buffer_text;

#[path = "../common/fake_backend.rs"]
#[allow(dead_code)]
mod fake_backend;

use fake_backend::FakeVersionControl;

fn render_app(app: &mut App, width: u16, height: u16) -> Terminal<TestBackend> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| app.render(frame)).unwrap();
    terminal
}

fn loaded_app(filter: FilterCriteria) -> App {
    let backend = Arc::new(FakeVersionControl::with_sample());
    let urls = Arc::new(Mutex::new(Vec::new()));
    let mut app = App::new(
        LaunchConfig {
            server_url: "http://tfs".to_string(),
            query: QueryOptions::new("$/Proj"),
            filter,
        },
        Settings::default(),
        fake_backend::shared_factory(backend, urls),
    );
    app.wait_for_query();
    app.on_tick();
    app
}

#[test]
fn test_main_screen_shows_all_panes() {
    let mut app = loaded_app(FilterCriteria::new());
    let terminal = render_app(&mut app, 120, 40);
    let text = buffer_text(&terminal);

    assert!(text.contains("tfsk - History"));
    assert!(text.contains("[$/Proj]"));
    assert!(text.contains("3 of 3"));
    assert!(text.contains("Jane Doe"));
    assert!(text.contains("Fix crash on startup"));
    assert!(text.contains("Loaded 3 changesets"));

    // Comment and changes of the selected changeset
    assert!(text.contains("Changes (2)"));
    assert!(text.contains("$/Proj/src/Util.cs"));

    // Diff of the first change
    assert!(text.contains("Diff $/Proj/src/Loader.cs;C30"));
    assert!(text.contains("+new"));

    assert!(text.contains(" Ready "));
    assert!(text.contains("[/] Search"));
}

#[test]
fn test_filtered_title_and_rows() {
    let mut app = loaded_app(FilterCriteria::from_inputs(Some("Build Service"), Some("fix")));
    let terminal = render_app(&mut app, 120, 40);
    let text = buffer_text(&terminal);

    assert!(text.contains("1 of 3"));
    assert!(text.contains("/fix/"));
    assert!(!text.contains("Update version"));
}

#[test]
fn test_all_filtered_empty_state() {
    let mut view = HistoryView::with_criteria(FilterCriteria::from_inputs(None, Some("nomatch")));
    view.set_changesets(fake_backend::sample_changesets());

    let mut terminal = Terminal::new(TestBackend::new(80, 12)).unwrap();
    terminal
        .draw(|frame| view.render(frame, frame.area(), "$/Proj", None, true))
        .unwrap();

    assert!(buffer_text(&terminal).contains("All changesets are hidden by the filter."));
}

#[test]
fn test_no_results_empty_state() {
    let view = HistoryView::new();
    let mut terminal = Terminal::new(TestBackend::new(80, 12)).unwrap();
    terminal
        .draw(|frame| view.render(frame, frame.area(), "$/Proj", None, true))
        .unwrap();

    assert!(buffer_text(&terminal).contains("No changesets found."));
}

#[test]
fn test_input_bar_rendered() {
    let mut app = loaded_app(FilterCriteria::new());
    app.on_key_event(crossterm::event::KeyEvent::new(
        crossterm::event::KeyCode::Char('x'),
        crossterm::event::KeyModifiers::NONE,
    ));
    let terminal = render_app(&mut app, 120, 40);
    let text = buffer_text(&terminal);

    assert!(text.contains("Exclude users (a;b)"));
    assert!(text.contains("Exclude: "));
    assert!(text.contains("[Enter] Apply"));
}

#[test]
fn test_error_banner_rendered() {
    let mut app = loaded_app(FilterCriteria::new());
    app.error_message = Some("tf is not installed or not in PATH".to_string());
    let terminal = render_app(&mut app, 120, 40);
    assert!(buffer_text(&terminal).contains("Error:  tf is not installed"));
}

#[test]
fn test_long_owner_is_truncated() {
    let mut view = HistoryView::new();
    view.set_changesets(vec![ChangesetSummary {
        id: 7,
        owner_display_name: "An Extremely Long Display Name Indeed".to_string(),
        comment: None,
        date: "today".to_string(),
    }]);

    let mut terminal = Terminal::new(TestBackend::new(100, 6)).unwrap();
    terminal
        .draw(|frame| view.render(frame, frame.area(), "$/P", None, false))
        .unwrap();
    let text = buffer_text(&terminal);

    assert!(text.contains("An Extremely Long Di"));
    assert!(!text.contains("Display Name Indeed"));
}
