//! Game configuration.

use crate::rules::RuleOptions;
use serde::{Deserialize, Serialize};

/// Default time per side, in seconds.
pub const DEFAULT_CLOCK_SECONDS: u32 = 600;

/// Settings for a new game.
///
/// Deserializes from a table such as:
///
/// ```toml
/// clock_seconds = 300
///
/// [rules]
/// block_sliding_paths = false
/// ```
///
/// Missing fields take their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Starting time per side, in seconds.
    pub clock_seconds: u32,
    /// Rule switches.
    pub rules: RuleOptions,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            clock_seconds: DEFAULT_CLOCK_SECONDS,
            rules: RuleOptions::default(),
        }
    }
}
