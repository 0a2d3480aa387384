//! Entry menu.

use super::NavRequest;
use crate::config::Quickstart;
use crate::route::Route;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

/// Entries on the home menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Entry {
    NewGame,
    QuickStart,
    Settings,
    Quit,
}

impl Entry {
    const ALL: [Entry; 4] = [Entry::NewGame, Entry::QuickStart, Entry::Settings, Entry::Quit];

    fn label(self) -> &'static str {
        match self {
            Entry::NewGame => "New Game",
            Entry::QuickStart => "Quick Start",
            Entry::Settings => "Settings",
            Entry::Quit => "Quit",
        }
    }
}

/// View state of the home screen.
#[derive(Debug, Clone, Copy)]
pub struct HomeScreen {
    cursor: usize,
    quick: Quickstart,
}

impl HomeScreen {
    /// Create the menu with the cursor on the first entry.
    #[must_use]
    pub fn new(quick: Quickstart) -> Self {
        HomeScreen { cursor: 0, quick }
    }

    /// Interpret one key press.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<NavRequest> {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.cursor = self.cursor.checked_sub(1).unwrap_or(Entry::ALL.len() - 1);
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.cursor = (self.cursor + 1) % Entry::ALL.len();
                None
            }
            KeyCode::Enter => self.activate(),
            // Back at the root is a no-op downstream; the request is still
            // emitted so the stack owns that rule.
            KeyCode::Esc | KeyCode::Backspace => Some(NavRequest::Back),
            _ => None,
        }
    }

    fn activate(&self) -> Option<NavRequest> {
        match Entry::ALL.get(self.cursor) {
            Some(Entry::NewGame) => Some(NavRequest::Push(Route::GameSetup)),
            Some(Entry::QuickStart) => Some(NavRequest::Push(Route::Game {
                players: self.quick.players,
                hp: self.quick.hp,
            })),
            Some(Entry::Settings) => Some(NavRequest::Push(Route::Settings)),
            Some(Entry::Quit) => Some(NavRequest::Quit),
            None => None,
        }
    }

    /// Draw the menu into `area`.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let mut lines = vec![Line::from(""), Line::from("")];
        for (index, entry) in Entry::ALL.iter().enumerate() {
            let style = if index == self.cursor {
                Style::default().add_modifier(Modifier::REVERSED)
            } else {
                Style::default()
            };
            lines.push(Line::styled(format!("  {}  ", entry.label()), style));
            lines.push(Line::from(""));
        }

        let menu = Paragraph::new(lines).alignment(Alignment::Center);
        frame.render_widget(menu, area);
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
    fn enter_on_first_entry_opens_setup() {
        let mut home = HomeScreen::new(Quickstart::default());
        assert_eq!(
            home.handle_key(key(KeyCode::Enter)),
            Some(NavRequest::Push(Route::GameSetup))
        );
    }

    #[test]
    fn quick_start_carries_the_configured_pair() {
        let mut home = HomeScreen::new(Quickstart { players: 3, hp: 60 });
        home.handle_key(key(KeyCode::Down));
        assert_eq!(
            home.handle_key(key(KeyCode::Enter)),
            Some(NavRequest::Push(Route::Game { players: 3, hp: 60 }))
        );
    }

    #[test]
    fn cursor_wraps_both_ways() {
        let mut home = HomeScreen::new(Quickstart::default());
        home.handle_key(key(KeyCode::Up));
        assert_eq!(
            home.handle_key(key(KeyCode::Enter)),
            Some(NavRequest::Quit)
        );
        home.handle_key(key(KeyCode::Down));
        assert_eq!(
            home.handle_key(key(KeyCode::Enter)),
            Some(NavRequest::Push(Route::GameSetup))
        );
    }

    #[test]
    fn settings_entry_navigates_to_settings() {
        let mut home = HomeScreen::new(Quickstart::default());
        home.handle_key(key(KeyCode::Down));
        home.handle_key(key(KeyCode::Down));
        assert_eq!(
            home.handle_key(key(KeyCode::Enter)),
            Some(NavRequest::Push(Route::Settings))
        );
    }
}
