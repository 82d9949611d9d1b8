//! tfsk - Team Foundation changeset history browser
//!
//! Binary entry point for the TUI application.

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;

use tfsk::app::{App, BackendFactory};
use tfsk::config::{self, Settings, USAGE};
use tfsk::logging;
use tfsk::tfs::{TfExecutor, VersionControl};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let settings_path = config::settings_path();
    let mut settings = Settings::load_from(&settings_path).unwrap_or_else(|e| {
        eprintln!("warning: {}", e);
        Settings::default()
    });

    if let Err(e) = logging::init(&logging::log_path()) {
        eprintln!("warning: logging disabled: {}", e);
    }

    let launch = match config::resolve_launch(std::env::args().skip(1), &mut settings) {
        Ok(launch) => launch,
        Err(errors) => {
            for error in &errors {
                eprintln!("{}", error);
            }
            eprintln!();
            eprint!("{}", USAGE);
            std::process::exit(2);
        }
    };

    let factory = tf_backend_factory(settings.tf_command.clone());
    let mut app = App::new(launch, settings, factory);

    let terminal = ratatui::init();
    let result = run(terminal, &mut app);
    ratatui::restore();

    // Saved even when the loop failed.
    if let Err(e) = app.settings.save_to(&settings_path) {
        log::warn!("{}", e);
        eprintln!("warning: {}", e);
    }

    result
}

/// Factory creating a `tf` executor per collection URL
fn tf_backend_factory(tf_command: Option<String>) -> BackendFactory {
    Box::new(move |server_url: &str| {
        let mut executor = TfExecutor::with_collection(server_url);
        if let Some(ref command) = tf_command {
            executor = executor.command(command.clone());
        }
        Arc::new(executor) as Arc<dyn VersionControl>
    })
}

/// Run the application's main loop.
fn run(mut terminal: DefaultTerminal, app: &mut App) -> color_eyre::Result<()> {
    while app.running {
        terminal.draw(|frame| app.render(frame))?;
        handle_events(app)?;
    }
    Ok(())
}

/// Handle crossterm events.
///
/// Uses poll with 200ms timeout so that a finished history query and
/// deferred change/diff loads are picked up while no key is pressed.
fn handle_events(app: &mut App) -> color_eyre::Result<()> {
    if event::poll(Duration::from_millis(200))? {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                app.on_key_event(key);
            }
            _ => {}
        }
    } else {
        app.on_tick();
    }
    Ok(())
}
