//! Default command: run the interactive TUI.

use super::CliError;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use lifetally::{App, Config, Route};
use log::info;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::stdout;
use std::path::PathBuf;

/// Execute the default command.
///
/// # Errors
///
/// Returns an error if the config file cannot be loaded or the TUI fails.
pub(crate) fn execute(route: Option<String>, config: Option<PathBuf>) -> Result<(), CliError> {
    let explicit = config.is_some();
    let path = config.unwrap_or_else(|| PathBuf::from(lifetally::config::DEFAULT_PATH));
    let config = Config::load(&path, explicit)?;

    let initial = route.as_deref().map_or(Route::Home, Route::parse);
    info!("starting at route {initial}");

    let mut app = App::new(initial, config.quickstart);
    run_tui(&mut app)
}

fn run_tui(app: &mut App) -> Result<(), CliError> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Event-driven: block on the next event, apply it, redraw.
    while app.is_running() {
        terminal.draw(|frame| app.render(frame))?;
        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    Ok(())
}
