//! Runtime configuration read from the environment.

use std::str::FromStr;
use std::time::Duration;

use tui_catch_types::{DEFAULT_HEIGHT, DEFAULT_WIDTH, FALL_DELAY_MS};

/// Game configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub width: u16,
    pub height: u16,
    pub fall_delay_ms: u32,
    /// Fixed RNG seed; `None` derives one from the clock.
    pub seed: Option<u32>,
    /// Play with typed lines on a cooked terminal instead of raw key presses.
    pub line_mode: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            fall_delay_ms: FALL_DELAY_MS,
            seed: None,
            line_mode: false,
        }
    }
}

impl GameConfig {
    /// Create from environment variables
    ///
    /// - `CATCH_WIDTH`, `CATCH_HEIGHT`: grid size
    /// - `CATCH_FALL_DELAY_MS`: pause before each tick
    /// - `CATCH_SEED`: fixed seed for reproducible games
    /// - `CATCH_LINE_MODE`: `1` or `true` for line-based input
    ///
    /// Missing or unparseable values fall back to the defaults. Dimensions are
    /// validated later, when the engine is built.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`GameConfig::from_env`] with an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            width: parsed(&lookup, "CATCH_WIDTH").unwrap_or(defaults.width),
            height: parsed(&lookup, "CATCH_HEIGHT").unwrap_or(defaults.height),
            fall_delay_ms: parsed(&lookup, "CATCH_FALL_DELAY_MS")
                .unwrap_or(defaults.fall_delay_ms),
            seed: parsed(&lookup, "CATCH_SEED"),
            line_mode: lookup("CATCH_LINE_MODE")
                .map(|v| {
                    let v = v.trim();
                    v == "1" || v.eq_ignore_ascii_case("true")
                })
                .unwrap_or(defaults.line_mode),
        }
    }

    pub fn fall_delay(&self) -> Duration {
        Duration::from_millis(self.fall_delay_ms as u64)
    }
}

fn parsed<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    lookup(key).and_then(|s| s.trim().parse().ok())
}
