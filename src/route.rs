//! Symbolic routes naming the navigable screens.
//!
//! Routes are typed throughout the application; the string form exists only
//! at the process boundary (the `--route` deep link and the `check`
//! command). Parsing is total: malformed input degrades to defaults instead
//! of failing.

use log::warn;
use std::fmt;

/// Player count substituted for a missing or unparsable route parameter.
pub const DEFAULT_PLAYERS: i32 = 2;

/// Starting HP substituted for a missing or unparsable route parameter.
pub const DEFAULT_HP: i32 = 20;

/// A navigable screen, optionally carrying its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Entry screen.
    Home,
    /// Player count and starting HP selection.
    GameSetup,
    /// The game table, parameterized by the setup choices.
    Game {
        /// Number of players at the table.
        players: i32,
        /// Starting HP assigned to every player.
        hp: i32,
    },
    /// Placeholder settings screen.
    Settings,
}

impl Route {
    /// Parse a route string such as `home` or `game/4/40`.
    ///
    /// Parsing never fails: an unknown route resolves to [`Route::Home`],
    /// and missing or unparsable `game` parameters are substituted with
    /// [`DEFAULT_PLAYERS`] and [`DEFAULT_HP`]. Leading and trailing slashes
    /// are tolerated, extra path segments are ignored.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let mut segments = input.trim_matches('/').split('/');
        match segments.next() {
            Some("home" | "") | None => Route::Home,
            Some("gameSetup") => Route::GameSetup,
            Some("settings") => Route::Settings,
            Some("game") => Route::Game {
                players: int_segment(segments.next(), DEFAULT_PLAYERS, "players"),
                hp: int_segment(segments.next(), DEFAULT_HP, "hp"),
            },
            Some(_) => {
                warn!("unknown route {input:?}, falling back to home");
                Route::Home
            }
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Home => write!(f, "home"),
            Route::GameSetup => write!(f, "gameSetup"),
            Route::Game { players, hp } => write!(f, "game/{players}/{hp}"),
            Route::Settings => write!(f, "settings"),
        }
    }
}

/// Parse one integer path segment, substituting `default` when the segment
/// is absent, empty, or not an integer.
fn int_segment(segment: Option<&str>, default: i32, name: &str) -> i32 {
    match segment {
        None | Some("") => {
            warn!("missing {name} segment, using default {default}");
            default
        }
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            warn!("unparsable {name} segment {raw:?}, using default {default}");
            default
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_routes() {
        assert_eq!(Route::parse("home"), Route::Home);
        assert_eq!(Route::parse("gameSetup"), Route::GameSetup);
        assert_eq!(Route::parse("settings"), Route::Settings);
    }

    #[test]
    fn game_with_both_params() {
        assert_eq!(
            Route::parse("game/4/40"),
            Route::Game { players: 4, hp: 40 }
        );
    }

    #[test]
    fn game_params_are_not_clamped() {
        assert_eq!(
            Route::parse("game/17/-3"),
            Route::Game { players: 17, hp: -3 }
        );
    }

    #[test]
    fn bare_game_uses_defaults() {
        assert_eq!(
            Route::parse("game"),
            Route::Game {
                players: DEFAULT_PLAYERS,
                hp: DEFAULT_HP
            }
        );
    }

    #[test]
    fn missing_hp_uses_default() {
        assert_eq!(
            Route::parse("game/5"),
            Route::Game {
                players: 5,
                hp: DEFAULT_HP
            }
        );
    }

    #[test]
    fn unparsable_segments_use_defaults() {
        assert_eq!(
            Route::parse("game/abc/40"),
            Route::Game {
                players: DEFAULT_PLAYERS,
                hp: 40
            }
        );
        assert_eq!(
            Route::parse("game/4/xyz"),
            Route::Game {
                players: 4,
                hp: DEFAULT_HP
            }
        );
        assert_eq!(
            Route::parse("game//40"),
            Route::Game {
                players: DEFAULT_PLAYERS,
                hp: 40
            }
        );
    }

    #[test]
    fn unknown_route_falls_back_to_home() {
        assert_eq!(Route::parse("nonsense"), Route::Home);
        assert_eq!(Route::parse(""), Route::Home);
    }

    #[test]
    fn slashes_are_tolerated() {
        assert_eq!(Route::parse("/home/"), Route::Home);
        assert_eq!(
            Route::parse("game/4/40/"),
            Route::Game { players: 4, hp: 40 }
        );
    }

    #[test]
    fn display_is_canonical() {
        assert_eq!(Route::Home.to_string(), "home");
        assert_eq!(Route::GameSetup.to_string(), "gameSetup");
        assert_eq!(Route::Settings.to_string(), "settings");
        assert_eq!(Route::Game { players: 4, hp: 40 }.to_string(), "game/4/40");
    }

    #[test]
    fn display_round_trips() {
        for route in [
            Route::Home,
            Route::GameSetup,
            Route::Settings,
            Route::Game { players: 6, hp: 80 },
        ] {
            assert_eq!(Route::parse(&route.to_string()), route);
        }
    }
}
