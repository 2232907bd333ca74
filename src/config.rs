//! Runner configuration read from the environment.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `BLOCKFALL_SEED` | 1 | Seed of the shape sequence |
//! | `BLOCKFALL_TICK_MS` | 16 | Milliseconds between engine ticks |
//! | `BLOCKFALL_LOG_PATH` | unset | JSON-lines event journal; blank disables it |
//!
//! Values that do not parse fall back to their defaults.

use crate::types::TICK_MS;

pub const SEED_VAR: &str = "BLOCKFALL_SEED";
pub const TICK_MS_VAR: &str = "BLOCKFALL_TICK_MS";
pub const LOG_PATH_VAR: &str = "BLOCKFALL_LOG_PATH";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub seed: u32,
    pub tick_ms: u32,
    pub log_path: Option<String>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            tick_ms: TICK_MS,
            log_path: None,
        }
    }
}

impl RunConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from any variable source; `from_env` passes the process
    /// environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let seed = lookup(SEED_VAR)
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.seed);

        // A zero tick would spin the loop without advancing the game.
        let tick_ms = lookup(TICK_MS_VAR)
            .and_then(|s| s.trim().parse().ok())
            .filter(|&ms: &u32| ms > 0)
            .unwrap_or(defaults.tick_ms);

        let log_path = lookup(LOG_PATH_VAR)
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        Self {
            seed,
            tick_ms,
            log_path,
        }
    }
}
