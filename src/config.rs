//! Optional TOML configuration.
//!
//! Everything has a default; the file only exists to override the home
//! screen's quick-start target.

use crate::error::ConfigError;
use serde::Deserialize;
use std::path::Path;

/// Path probed when no `--config` argument is given.
pub const DEFAULT_PATH: &str = "lifetally.toml";

/// Application configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Target of the home screen's quick-start entry.
    #[serde(default)]
    pub quickstart: Quickstart,
}

/// Player count and starting HP used by the quick-start entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Quickstart {
    /// Number of players.
    #[serde(default = "defaults::players")]
    pub players: i32,
    /// Starting HP.
    #[serde(default = "defaults::hp")]
    pub hp: i32,
}

impl Default for Quickstart {
    fn default() -> Self {
        Quickstart {
            players: defaults::players(),
            hp: defaults::hp(),
        }
    }
}

/// Default values for absent config keys.
mod defaults {
    /// Default quick-start player count.
    pub(super) fn players() -> i32 {
        4
    }

    /// Default quick-start starting HP.
    pub(super) fn hp() -> i32 {
        40
    }
}

impl Config {
    /// Load configuration from `path`.
    ///
    /// When `explicit` is false and the file does not exist, the defaults
    /// are returned; an explicitly requested file must exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] when the file cannot be read (other than
    /// an absent default-path file) and [`ConfigError::Parse`] when it is
    /// not valid TOML for the expected schema.
    pub fn load(path: &Path, explicit: bool) -> Result<Self, ConfigError> {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(source) if source.kind() == std::io::ErrorKind::NotFound && !explicit => {
                return Ok(Config::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        toml::from_str(&raw).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}
