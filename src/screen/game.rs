//! The game table.
//!
//! Displays the pair chosen at setup (or carried by a deep link) and
//! re-exposes the two selectors for in-place adjustment. Adjustments stay
//! local to this screen instance; nothing propagates elsewhere.

use super::{selector_lines, NavRequest};
use crate::select::{PlayerCount, Selector, StartingHp};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

/// Focusable elements, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Players,
    Hp,
}

impl Focus {
    fn toggled(self) -> Self {
        match self {
            Focus::Players => Focus::Hp,
            Focus::Hp => Focus::Players,
        }
    }
}

/// View state of the game screen.
#[derive(Debug, Clone, Copy)]
pub struct GameScreen {
    players: i32,
    hp: i32,
    players_sel: Selector<PlayerCount>,
    hp_sel: Selector<StartingHp>,
    focus: Focus,
}

impl GameScreen {
    /// Create the screen for the given parameters.
    ///
    /// Route parameters are displayed verbatim; the adjustment selectors
    /// seed from the matching domain value when there is one.
    #[must_use]
    pub fn new(players: i32, hp: i32) -> Self {
        GameScreen {
            players,
            hp,
            players_sel: Selector::new(
                &PlayerCount::ALL,
                PlayerCount::from_value(players).unwrap_or(PlayerCount::Two),
            ),
            hp_sel: Selector::new(
                &StartingHp::ALL,
                StartingHp::from_value(hp).unwrap_or(StartingHp::Twenty),
            ),
            focus: Focus::Players,
        }
    }

    /// The displayed player count.
    #[must_use]
    pub fn players(&self) -> i32 {
        self.players
    }

    /// The displayed starting HP.
    #[must_use]
    pub fn hp(&self) -> i32 {
        self.hp
    }

    /// Interpret one key press.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<NavRequest> {
        match self.focus {
            Focus::Players if self.players_sel.is_open() => {
                if let Some(chosen) = drive_selector(&mut self.players_sel, key) {
                    self.players = chosen.value();
                }
                return None;
            }
            Focus::Hp if self.hp_sel.is_open() => {
                if let Some(chosen) = drive_selector(&mut self.hp_sel, key) {
                    self.hp = chosen.value();
                }
                return None;
            }
            _ => {}
        }

        match key.code {
            KeyCode::Down | KeyCode::Up | KeyCode::Tab | KeyCode::BackTab => {
                self.focus = self.focus.toggled();
                None
            }
            KeyCode::Enter => {
                match self.focus {
                    Focus::Players => self.players_sel.open(),
                    Focus::Hp => self.hp_sel.open(),
                }
                None
            }
            KeyCode::Esc | KeyCode::Backspace => Some(NavRequest::Back),
            _ => None,
        }
    }

    /// Draw the game table into `area`.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let value_style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
        let mut lines = vec![
            Line::from(""),
            Line::from(vec![
                Span::raw("  Players: "),
                Span::styled(self.players.to_string(), value_style),
            ]),
            Line::from(vec![
                Span::raw("  Starting HP: "),
                Span::styled(self.hp.to_string(), value_style),
            ]),
            Line::from(""),
        ];
        lines.extend(selector_lines(
            "Select Players",
            self.players.to_string(),
            &self.players_sel,
            self.focus == Focus::Players,
        ));
        lines.push(Line::from(""));
        lines.extend(selector_lines(
            "Select Starting HP",
            self.hp.to_string(),
            &self.hp_sel,
            self.focus == Focus::Hp,
        ));

        frame.render_widget(Paragraph::new(lines), area);
    }
}

/// Apply one key press to an open selector, returning a newly chosen value.
fn drive_selector<T: Copy + PartialEq + 'static>(
    selector: &mut Selector<T>,
    key: KeyEvent,
) -> Option<T> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            selector.prev();
            None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            selector.next();
            None
        }
        KeyCode::Enter => Some(selector.choose()),
        KeyCode::Esc => {
            selector.cancel();
            None
        }
        _ => None,
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
    fn displays_route_parameters_verbatim() {
        let game = GameScreen::new(17, -3);
        assert_eq!(game.players(), 17);
        assert_eq!(game.hp(), -3);
    }

    #[test]
    fn in_place_adjustment_updates_only_this_screen() {
        let mut game = GameScreen::new(2, 20);
        game.handle_key(key(KeyCode::Enter)); // open players
        game.handle_key(key(KeyCode::Down));
        game.handle_key(key(KeyCode::Down));
        game.handle_key(key(KeyCode::Enter)); // choose 4
        assert_eq!(game.players(), 4);
        assert_eq!(game.hp(), 20);
    }

    #[test]
    fn cancel_keeps_the_displayed_pair() {
        let mut game = GameScreen::new(2, 20);
        game.handle_key(key(KeyCode::Tab)); // focus hp
        game.handle_key(key(KeyCode::Enter)); // open hp
        game.handle_key(key(KeyCode::Down));
        game.handle_key(key(KeyCode::Esc)); // cancel
        assert_eq!(game.hp(), 20);
    }

    #[test]
    fn esc_goes_back_when_no_selector_is_open() {
        let mut game = GameScreen::new(4, 40);
        assert_eq!(game.handle_key(key(KeyCode::Esc)), Some(NavRequest::Back));
    }
}
