//! Persisted subset of the game state.
//!
//! `current_card` and `last_roll` are display-only and are not saved; a
//! restored state has both empty.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::CardCode;
use crate::core::{Beacon, EngineResult, GameState, HistoryEntry, Phase};

/// Save-file view of a session.
///
/// ## Example
///
/// ```
/// use wretched_engine::core::{GameRng, RulesConfig, GameState};
/// use wretched_engine::session::Snapshot;
///
/// let state = GameState::new(&RulesConfig::default(), &mut GameRng::new(3));
/// let json = Snapshot::capture(&state).to_json().unwrap();
///
/// let restored = Snapshot::from_json(&json).unwrap().restore();
/// assert_eq!(restored, state);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub day: u32,
    pub tension: u32,
    pub deck: Vector<CardCode>,
    pub kings_drawn: u8,
    pub cards_to_draw: u32,
    pub cards_drawn: u32,
    pub phase: Phase,
    pub beacon: Beacon,
    pub antenna_repaired: bool,
    pub skip_next_tower_check: bool,
    pub journal_text: String,
    pub history: Vector<HistoryEntry>,
}

impl Snapshot {
    /// Capture the persisted fields of a state.
    #[must_use]
    pub fn capture(state: &GameState) -> Self {
        Self {
            day: state.day,
            tension: state.tension,
            deck: state.deck.clone(),
            kings_drawn: state.kings_drawn,
            cards_to_draw: state.cards_to_draw,
            cards_drawn: state.cards_drawn,
            phase: state.phase,
            beacon: state.beacon,
            antenna_repaired: state.antenna_repaired,
            skip_next_tower_check: state.skip_next_tower_check,
            journal_text: state.journal_text.clone(),
            history: state.history.clone(),
        }
    }

    /// Rebuild a game state. Transient fields come back empty.
    #[must_use]
    pub fn restore(self) -> GameState {
        GameState {
            day: self.day,
            tension: self.tension,
            deck: self.deck,
            kings_drawn: self.kings_drawn,
            cards_to_draw: self.cards_to_draw,
            cards_drawn: self.cards_drawn,
            phase: self.phase,
            beacon: self.beacon,
            antenna_repaired: self.antenna_repaired,
            skip_next_tower_check: self.skip_next_tower_check,
            journal_text: self.journal_text,
            history: self.history,
            current_card: None,
            last_roll: None,
        }
    }

    pub fn to_json(&self) -> EngineResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(text: &str) -> EngineResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Compact binary encoding.
    pub fn to_bytes(&self) -> EngineResult<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    pub fn from_bytes(bytes: &[u8]) -> EngineResult<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{EngineError, GameRng, RulesConfig};
    use crate::rules::GameEngine;

    fn mid_session() -> GameState {
        let engine = GameEngine::default();
        let mut rng = GameRng::new(11);
        let mut state = engine.create_initial_state(&mut rng);

        state = engine.roll_day_die(state, &mut rng).state;
        state = engine.draw_card(state).state;
        state.beacon = Beacon { active: true, tokens: 7 };
        state.antenna_repaired = true;
        state
    }

    #[test]
    fn test_restore_drops_transient_fields() {
        let state = mid_session();
        assert!(state.current_card.is_some());
        assert!(state.last_roll.is_some());

        let restored = Snapshot::capture(&state).restore();

        assert!(restored.current_card.is_none());
        assert!(restored.last_roll.is_none());
        assert_eq!(restored.deck, state.deck);
        assert_eq!(restored.history, state.history);
        assert_eq!(restored.beacon, state.beacon);
    }

    #[test]
    fn test_json_field_names() {
        let state = GameState::new(&RulesConfig::default(), &mut GameRng::new(1));
        let json = Snapshot::capture(&state).to_json().unwrap();

        for key in [
            "\"kingsDrawn\"",
            "\"skipNextTowerCheck\"",
            "\"journalText\"",
            "\"phase\": \"start\"",
        ] {
            assert!(json.contains(key), "missing {key}");
        }
    }

    #[test]
    fn test_binary_round_trip() {
        let snapshot = Snapshot::capture(&mid_session());
        let bytes = snapshot.to_bytes().unwrap();
        assert_eq!(Snapshot::from_bytes(&bytes).unwrap(), snapshot);
    }

    #[test]
    fn test_rejects_unknown_card() {
        let state = GameState::new(&RulesConfig::default(), &mut GameRng::new(1));
        let json = Snapshot::capture(&state).to_json().unwrap();
        let first = state.deck[0].to_string();
        let corrupted = json.replacen(&format!("\"{first}\""), "\"1Z\"", 1);

        assert!(matches!(Snapshot::from_json(&corrupted), Err(EngineError::Json(_))));
    }
}
