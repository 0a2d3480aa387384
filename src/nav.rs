//! Navigation back-stack.
//!
//! The stack is modeled as a root screen plus the screens pushed above it,
//! so it can never be emptied: back at the root is a no-op by construction.

use crate::config::Quickstart;
use crate::route::Route;
use crate::screen::Screen;

/// Ordered history of displayed screens; the top is the current screen.
#[derive(Debug)]
pub struct Nav {
    root: Screen,
    above: Vec<Screen>,
    quick: Quickstart,
}

impl Nav {
    /// Create a stack showing `initial`.
    ///
    /// A deep link to a non-home route seeds home underneath it, so that
    /// back from a deep-linked screen lands on home.
    #[must_use]
    pub fn start(initial: Route, quick: Quickstart) -> Self {
        let mut nav = Nav {
            root: Screen::for_route(Route::Home, quick),
            above: Vec::new(),
            quick,
        };
        if initial != Route::Home {
            nav.navigate(initial);
        }
        nav
    }

    /// Push the screen named by `route` and make it current.
    pub fn navigate(&mut self, route: Route) {
        self.above.push(Screen::for_route(route, self.quick));
    }

    /// Pop the current screen. Returns false (and does nothing) at the root.
    pub fn back(&mut self) -> bool {
        self.above.pop().is_some()
    }

    /// The currently displayed screen.
    #[must_use]
    pub fn current(&self) -> &Screen {
        self.above.last().unwrap_or(&self.root)
    }

    /// Mutable access to the currently displayed screen.
    pub fn current_mut(&mut self) -> &mut Screen {
        self.above.last_mut().unwrap_or(&mut self.root)
    }

    /// Number of screens in the history, the root included.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.above.len() + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_home() {
        let nav = Nav::start(Route::Home, Quickstart::default());
        assert_eq!(nav.depth(), 1);
        assert_eq!(nav.current().route(), Route::Home);
    }

    #[test]
    fn navigate_pushes_and_back_pops() {
        let mut nav = Nav::start(Route::Home, Quickstart::default());
        nav.navigate(Route::GameSetup);
        nav.navigate(Route::Game { players: 4, hp: 40 });
        assert_eq!(nav.depth(), 3);
        assert_eq!(
            nav.current().route(),
            Route::Game { players: 4, hp: 40 }
        );

        assert!(nav.back());
        assert_eq!(nav.current().route(), Route::GameSetup);
        assert!(nav.back());
        assert_eq!(nav.current().route(), Route::Home);
    }

    #[test]
    fn back_at_the_root_is_a_no_op() {
        let mut nav = Nav::start(Route::Home, Quickstart::default());
        assert!(!nav.back());
        assert_eq!(nav.depth(), 1);
        assert_eq!(nav.current().route(), Route::Home);
    }

    #[test]
    fn deep_link_seeds_home_underneath() {
        let mut nav = Nav::start(Route::Settings, Quickstart::default());
        assert_eq!(nav.depth(), 2);
        assert_eq!(nav.current().route(), Route::Settings);
        assert!(nav.back());
        assert_eq!(nav.current().route(), Route::Home);
    }
}
