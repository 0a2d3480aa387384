//! Check command: resolve a route string without starting the TUI.

use lifetally::Route;

/// Print the screen a route string resolves to.
pub(crate) fn execute(input: &str) {
    let route = Route::parse(input);
    println!("route: {route}");
    if let Route::Game { players, hp } = route {
        println!("players: {players}");
        println!("hp: {hp}");
    }
}
