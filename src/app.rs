//! Application shell tying the screens to the navigation stack.
//!
//! The shell is pure with respect to the terminal: key events come in
//! through [`App::handle_key`] and drawing goes out through
//! [`App::render`]. The event loop itself lives in the CLI layer.

use crate::config::Quickstart;
use crate::nav::Nav;
use crate::route::Route;
use crate::screen::NavRequest;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

/// Top-level application state.
#[derive(Debug)]
pub struct App {
    nav: Nav,
    running: bool,
}

impl App {
    /// Create the app showing `initial`.
    #[must_use]
    pub fn new(initial: Route, quick: Quickstart) -> Self {
        App {
            nav: Nav::start(initial, quick),
            running: true,
        }
    }

    /// Whether the event loop should keep going.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// The navigation stack.
    #[must_use]
    pub fn nav(&self) -> &Nav {
        &self.nav
    }

    /// Push the screen named by `route`.
    pub fn navigate(&mut self, route: Route) {
        self.nav.navigate(route);
    }

    /// Apply one key event to the current screen.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if key.code == KeyCode::Char('q') {
            self.running = false;
            return;
        }
        match self.nav.current_mut().handle_key(key) {
            Some(NavRequest::Push(route)) => self.nav.navigate(route),
            Some(NavRequest::Back) => {
                // No-op at the root; the stack owns that rule.
                self.nav.back();
            }
            Some(NavRequest::Quit) => self.running = false,
            None => {}
        }
    }

    /// Draw the current screen with its header and key-hint footer.
    pub fn render(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(5),
                Constraint::Length(3),
            ])
            .split(frame.area());

        let current = self.nav.current();

        let title = if self.nav.depth() > 1 {
            format!(" < {} ", current.title())
        } else {
            format!(" {} ", current.title())
        };
        let header = Paragraph::new(title)
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(header, chunks[0]);

        current.render(frame, chunks[1]);

        let hints = if self.nav.depth() > 1 {
            " [Up/Down] Move  [Enter] Select  [Esc] Back  [q] Quit "
        } else {
            " [Up/Down] Move  [Enter] Select  [q] Quit "
        };
        let footer = Paragraph::new(hints)
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(footer, chunks[2]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    #[test]
    fn q_quits_from_any_screen() {
        let mut app = App::new(Route::Settings, Quickstart::default());
        assert!(app.is_running());
        app.handle_key(key(KeyCode::Char('q')));
        assert!(!app.is_running());
    }

    #[test]
    fn back_at_the_root_keeps_running() {
        let mut app = App::new(Route::Home, Quickstart::default());
        app.handle_key(key(KeyCode::Esc));
        assert!(app.is_running());
        assert_eq!(app.nav().depth(), 1);
    }

    #[test]
    fn navigation_requests_are_applied() {
        let mut app = App::new(Route::Home, Quickstart::default());
        app.handle_key(key(KeyCode::Enter)); // New Game
        assert_eq!(app.nav().current().route(), Route::GameSetup);
        app.handle_key(key(KeyCode::Esc));
        assert_eq!(app.nav().current().route(), Route::Home);
    }

    #[test]
    fn key_releases_are_ignored() {
        let mut app = App::new(Route::Home, Quickstart::default());
        let release = KeyEvent {
            code: KeyCode::Enter,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Release,
            state: crossterm::event::KeyEventState::empty(),
        };
        app.handle_key(release);
        assert_eq!(app.nav().depth(), 1);
    }
}
