//! Screen states and their key handling.
//!
//! Every screen owns its view state exclusively and interprets key events
//! into screen-local mutations or a [`NavRequest`] for the shell to apply.

pub mod game;
pub mod home;
pub mod setup;
mod settings;

pub use game::GameScreen;
pub use home::HomeScreen;
pub use setup::SetupScreen;

use crate::config::Quickstart;
use crate::route::Route;
use crate::select::Selector;
use crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::Frame;
use std::fmt;

/// A request produced by a screen in response to input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavRequest {
    /// Push the screen named by the route.
    Push(Route),
    /// Pop back to the previous screen.
    Back,
    /// Leave the application.
    Quit,
}

/// Tagged union of every screen's view state.
#[derive(Debug, Clone, Copy)]
pub enum Screen {
    /// Entry menu.
    Home(HomeScreen),
    /// Player count and starting HP selection.
    Setup(SetupScreen),
    /// The game table.
    Game(GameScreen),
    /// Placeholder settings screen.
    Settings,
}

impl Screen {
    /// Construct the screen a route names.
    #[must_use]
    pub fn for_route(route: Route, quick: Quickstart) -> Self {
        match route {
            Route::Home => Screen::Home(HomeScreen::new(quick)),
            Route::GameSetup => Screen::Setup(SetupScreen::new()),
            Route::Game { players, hp } => Screen::Game(GameScreen::new(players, hp)),
            Route::Settings => Screen::Settings,
        }
    }

    /// The route this screen answers to, with its current parameters.
    #[must_use]
    pub fn route(&self) -> Route {
        match self {
            Screen::Home(_) => Route::Home,
            Screen::Setup(_) => Route::GameSetup,
            Screen::Game(game) => Route::Game {
                players: game.players(),
                hp: game.hp(),
            },
            Screen::Settings => Route::Settings,
        }
    }

    /// Title shown in the header bar.
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Home(_) => "Home",
            Screen::Setup(_) => "Game Setup",
            Screen::Game(_) => "Game",
            Screen::Settings => "Settings",
        }
    }

    /// Interpret one key press.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<NavRequest> {
        match self {
            Screen::Home(home) => home.handle_key(key),
            Screen::Setup(setup) => setup.handle_key(key),
            Screen::Game(game) => game.handle_key(key),
            Screen::Settings => settings::handle_key(key),
        }
    }

    /// Draw this screen into `area`.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        match self {
            Screen::Home(home) => home.render(frame, area),
            Screen::Setup(setup) => setup.render(frame, area),
            Screen::Game(game) => game.render(frame, area),
            Screen::Settings => settings::render(frame, area),
        }
    }
}

/// Render one selector as a labelled field line plus, while open, its
/// option list with the highlighted entry reversed.
pub(crate) fn selector_lines<T>(
    label: &str,
    value: String,
    selector: &Selector<T>,
    focused: bool,
) -> Vec<Line<'static>>
where
    T: Copy + PartialEq + fmt::Display + 'static,
{
    let marker = if focused { "> " } else { "  " };
    let arrow = if selector.is_open() { "v" } else { ">" };
    let label_style = if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let mut lines = vec![Line::from(vec![
        Span::styled(format!("{marker}{label}: "), label_style),
        Span::raw(format!("{value} [{arrow}]")),
    ])];

    if selector.is_open() {
        for (index, option) in selector.options().iter().enumerate() {
            let style = if index == selector.highlight() {
                Style::default().add_modifier(Modifier::REVERSED)
            } else {
                Style::default()
            };
            lines.push(Line::from(Span::styled(format!("      {option}"), style)));
        }
    }

    lines
}
