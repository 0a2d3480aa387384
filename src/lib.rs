// Allow unwrap in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
//! Lifetally: a terminal shell for a tabletop life/score tracker.
//!
//! The application is a four-screen navigation graph: home, game setup,
//! the game table, and a placeholder settings screen. Screens are typed
//! state variants kept on an explicit back-stack; the only data threaded
//! between them is the player count and starting HP pair chosen at setup.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │       CLI / terminal loop           │
//! ├─────────────────────────────────────┤
//! │       App shell (key -> state)      │
//! ├─────────────────────────────────────┤
//! │   Screens on the navigation stack   │
//! └─────────────────────────────────────┘
//! ```

pub mod app;
pub mod config;
pub mod error;
pub mod nav;
pub mod route;
pub mod screen;
pub mod select;

pub use app::App;
pub use config::{Config, Quickstart};
pub use error::ConfigError;
pub use nav::Nav;
pub use route::Route;
pub use screen::{NavRequest, Screen};
pub use select::{PlayerCount, Selector, StartingHp};
