//! Rules configuration.
//!
//! The tuning constants of the game live in `RulesConfig`. `Default` is the
//! canonical rule set; a JSON file can override any subset of the keys.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::{EngineError, EngineResult};

/// Highest face of the die.
pub const DIE_FACES: u32 = 6;

/// Kings in a full deck, the most `kings_to_lose` can ask for.
pub const KINGS_IN_DECK: u8 = 4;

/// Tunable game rules.
///
/// ## Example
///
/// ```
/// use wretched_engine::core::RulesConfig;
///
/// let rules: RulesConfig = serde_json::from_str(r#"{ "beacon_tokens": 6 }"#).unwrap();
/// assert_eq!(rules.beacon_tokens, 6);
/// assert_eq!(rules.kings_to_lose, 4);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Tension at the start of a session.
    pub starting_tension: u32,

    /// Tokens placed when the beacon is activated.
    pub beacon_tokens: u32,

    /// Tokens removed per draw.
    pub beacon_decay: u32,

    /// Tokens removed per draw once the antenna is repaired.
    pub beacon_decay_with_antenna: u32,

    /// Minimum rescue roll at day start.
    pub rescue_threshold: u32,

    /// Minimum rescue roll once the antenna is repaired.
    pub rescue_threshold_with_antenna: u32,

    /// Kings drawn that end the game.
    pub kings_to_lose: u8,

    /// Journal text of a fresh session.
    pub opening_journal: String,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            starting_tension: 1,
            beacon_tokens: 10,
            beacon_decay: 1,
            beacon_decay_with_antenna: 2,
            rescue_threshold: 6,
            rescue_threshold_with_antenna: 5,
            kings_to_lose: 4,
            opening_journal: "DAY 1: Systems online. Salvage ship Nostromo-7...\n".to_string(),
        }
    }
}

impl RulesConfig {
    /// Load rules from a JSON file, filling missing keys with defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> EngineResult<Self> {
        let text = std::fs::read_to_string(path)?;
        let rules: RulesConfig = serde_json::from_str(&text)?;
        rules.validate()?;
        Ok(rules)
    }

    /// Reject values that make the game meaningless.
    pub fn validate(&self) -> EngineResult<()> {
        if !(1..=KINGS_IN_DECK).contains(&self.kings_to_lose) {
            return Err(EngineError::Config(format!(
                "kings_to_lose must be between 1 and {KINGS_IN_DECK}, got {}",
                self.kings_to_lose
            )));
        }
        for (name, value) in [
            ("starting_tension", self.starting_tension),
            ("beacon_tokens", self.beacon_tokens),
            ("beacon_decay", self.beacon_decay),
            ("beacon_decay_with_antenna", self.beacon_decay_with_antenna),
        ] {
            if value == 0 {
                return Err(EngineError::Config(format!("{name} must be at least 1")));
            }
        }
        for (name, value) in [
            ("rescue_threshold", self.rescue_threshold),
            ("rescue_threshold_with_antenna", self.rescue_threshold_with_antenna),
        ] {
            if !(1..=DIE_FACES).contains(&value) {
                return Err(EngineError::Config(format!(
                    "{name} must be between 1 and {DIE_FACES}, got {value}"
                )));
            }
        }
        Ok(())
    }

    /// Rescue threshold for the current antenna state.
    #[must_use]
    pub fn rescue_threshold_for(&self, antenna_repaired: bool) -> u32 {
        if antenna_repaired {
            self.rescue_threshold_with_antenna
        } else {
            self.rescue_threshold
        }
    }

    /// Beacon decay per draw for the current antenna state.
    #[must_use]
    pub fn beacon_decay_for(&self, antenna_repaired: bool) -> u32 {
        if antenna_repaired {
            self.beacon_decay_with_antenna
        } else {
            self.beacon_decay
        }
    }
}
