//! Game setup: player count and starting HP selection.

use super::{selector_lines, NavRequest};
use crate::route::Route;
use crate::select::{PlayerCount, Selector, StartingHp};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

/// Focusable elements, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Players,
    Hp,
    Start,
}

impl Focus {
    fn next(self) -> Self {
        match self {
            Focus::Players => Focus::Hp,
            Focus::Hp => Focus::Start,
            Focus::Start => Focus::Players,
        }
    }

    fn prev(self) -> Self {
        match self {
            Focus::Players => Focus::Start,
            Focus::Hp => Focus::Players,
            Focus::Start => Focus::Hp,
        }
    }
}

/// View state of the setup screen.
///
/// The two selectors are independent: opening or choosing in one leaves the
/// other untouched.
#[derive(Debug, Clone, Copy)]
pub struct SetupScreen {
    players: Selector<PlayerCount>,
    hp: Selector<StartingHp>,
    focus: Focus,
}

impl Default for SetupScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl SetupScreen {
    /// Create the screen with the domain defaults committed.
    #[must_use]
    pub fn new() -> Self {
        SetupScreen {
            players: Selector::new(&PlayerCount::ALL, PlayerCount::Two),
            hp: Selector::new(&StartingHp::ALL, StartingHp::Twenty),
            focus: Focus::Players,
        }
    }

    /// The players selector.
    #[must_use]
    pub fn players(&self) -> &Selector<PlayerCount> {
        &self.players
    }

    /// The starting HP selector.
    #[must_use]
    pub fn hp(&self) -> &Selector<StartingHp> {
        &self.hp
    }

    /// Interpret one key press.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<NavRequest> {
        // An open selector captures movement until it commits or cancels.
        match self.focus {
            Focus::Players if self.players.is_open() => {
                drive_selector(&mut self.players, key);
                return None;
            }
            Focus::Hp if self.hp.is_open() => {
                drive_selector(&mut self.hp, key);
                return None;
            }
            _ => {}
        }

        match key.code {
            KeyCode::Down | KeyCode::Tab | KeyCode::Char('j') => {
                self.focus = self.focus.next();
                None
            }
            KeyCode::Up | KeyCode::BackTab | KeyCode::Char('k') => {
                self.focus = self.focus.prev();
                None
            }
            KeyCode::Enter => match self.focus {
                Focus::Players => {
                    self.players.open();
                    None
                }
                Focus::Hp => {
                    self.hp.open();
                    None
                }
                Focus::Start => Some(NavRequest::Push(Route::Game {
                    players: self.players.committed().value(),
                    hp: self.hp.committed().value(),
                })),
            },
            KeyCode::Esc | KeyCode::Backspace => Some(NavRequest::Back),
            _ => None,
        }
    }

    /// Draw the setup form into `area`.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let mut lines = vec![Line::from("")];
        lines.extend(selector_lines(
            "Players",
            self.players.committed().value().to_string(),
            &self.players,
            self.focus == Focus::Players,
        ));
        lines.push(Line::from(""));
        lines.extend(selector_lines(
            "Starting HP",
            self.hp.committed().value().to_string(),
            &self.hp,
            self.focus == Focus::Hp,
        ));
        lines.push(Line::from(""));

        let start_style = if self.focus == Focus::Start {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default()
        };
        lines.push(Line::styled("  [ Start Game ]", start_style));

        frame.render_widget(Paragraph::new(lines), area);
    }
}

/// Apply one key press to an open selector.
fn drive_selector<T: Copy + PartialEq + 'static>(selector: &mut Selector<T>, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => selector.prev(),
        KeyCode::Down | KeyCode::Char('j') => selector.next(),
        KeyCode::Enter => {
            selector.choose();
        }
        KeyCode::Esc => selector.cancel(),
        _ => {}
    }
}
