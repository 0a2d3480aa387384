//! Property tests for route parsing.

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use lifetally::route::{DEFAULT_HP, DEFAULT_PLAYERS};
use lifetally::Route;
use proptest::prelude::*;

fn route_strategy() -> impl Strategy<Value = Route> {
    prop_oneof![
        Just(Route::Home),
        Just(Route::GameSetup),
        Just(Route::Settings),
        (any::<i32>(), any::<i32>()).prop_map(|(players, hp)| Route::Game { players, hp }),
    ]
}

proptest! {
    /// Parsing is total: arbitrary input never panics.
    #[test]
    fn parse_never_panics(input in ".*") {
        let _ = Route::parse(&input);
    }

    /// Valid integer parameters pass through exactly.
    #[test]
    fn valid_game_params_pass_through(players in any::<i32>(), hp in any::<i32>()) {
        let route = Route::parse(&format!("game/{players}/{hp}"));
        prop_assert_eq!(route, Route::Game { players, hp });
    }

    /// Malformed parameters fall back to the defaults.
    #[test]
    fn malformed_game_params_default(junk in "[^/0-9+-][^/]*") {
        let route = Route::parse(&format!("game/{junk}/{junk}"));
        prop_assert_eq!(
            route,
            Route::Game { players: DEFAULT_PLAYERS, hp: DEFAULT_HP }
        );
    }

    /// Canonical strings round-trip through Display and parse.
    #[test]
    fn display_round_trips(route in route_strategy()) {
        prop_assert_eq!(Route::parse(&route.to_string()), route);
    }
}
