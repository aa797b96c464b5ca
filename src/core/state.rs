//! Game state: the single aggregate every transition consumes and returns.
//!
//! ## GameState
//!
//! - Day, tension, Kings drawn
//! - Remaining deck (top = end of vector)
//! - Day-die budget (`cards_to_draw` / `cards_drawn`)
//! - Phase, beacon, antenna, bypass item
//! - Journal and append-only history
//! - Transient display fields (`current_card`, `last_roll`)
//!
//! Uses `im` persistent vectors so passing the state by value is cheap.

use std::fmt;

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::Action;
use super::config::RulesConfig;
use super::deck::new_deck;
use super::rng::RandomSource;
use crate::cards::{Card, CardCode};

/// Phase of the daily loop.
///
/// `Start → Draw ⇄ TowerCheck → DrawContinue → Journal → Start`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    #[default]
    Start,
    Draw,
    TowerCheck,
    DrawContinue,
    Journal,
}

impl Phase {
    /// The one action accepted in this phase.
    #[must_use]
    pub const fn expected_action(self) -> Action {
        match self {
            Phase::Start => Action::RollDayDie,
            Phase::Draw => Action::DrawCard,
            Phase::TowerCheck => Action::ResolveTowerCheck,
            Phase::DrawContinue => Action::FinishDrawPhase,
            Phase::Journal => Action::EndDay,
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Start => "start",
            Phase::Draw => "draw",
            Phase::TowerCheck => "tower check",
            Phase::DrawContinue => "draw continue",
            Phase::Journal => "journal",
        };
        f.write_str(name)
    }
}

/// Distress beacon counter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Beacon {
    pub active: bool,
    pub tokens: u32,
}

/// One line of the session history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub day: u32,
    /// Card label ("A♥") or "DIE" for roll lines.
    #[serde(rename = "card")]
    pub card_label: String,
    pub text: String,
}

/// Label used for history lines recording a die roll.
pub const DIE_LABEL: &str = "DIE";

/// Complete game state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    /// Current day (starts at 1).
    pub day: u32,

    /// Tower Check loss threshold. Only grows.
    pub tension: u32,

    /// Remaining cards, top = end.
    pub deck: Vector<CardCode>,

    pub kings_drawn: u8,

    /// Set by the day die.
    pub cards_to_draw: u32,

    pub cards_drawn: u32,

    pub phase: Phase,

    pub beacon: Beacon,

    pub antenna_repaired: bool,

    /// One-shot Tower Check bypass.
    pub skip_next_tower_check: bool,

    pub journal_text: String,

    /// Append-only.
    pub history: Vector<HistoryEntry>,

    /// Last drawn card, cleared at end of day. Not persisted.
    pub current_card: Option<Card>,

    /// Last die result, cleared at end of day. Not persisted.
    pub last_roll: Option<u32>,
}

impl GameState {
    /// Fresh session with a shuffled deck.
    #[must_use]
    pub fn new<R: RandomSource + ?Sized>(rules: &RulesConfig, rng: &mut R) -> Self {
        Self::with_deck(rules, new_deck(rng))
    }

    /// Fresh session over a given deck.
    #[must_use]
    pub fn with_deck(rules: &RulesConfig, deck: Vector<CardCode>) -> Self {
        Self {
            day: 1,
            tension: rules.starting_tension,
            deck,
            kings_drawn: 0,
            cards_to_draw: 0,
            cards_drawn: 0,
            phase: Phase::Start,
            beacon: Beacon::default(),
            antenna_repaired: false,
            skip_next_tower_check: false,
            journal_text: rules.opening_journal.clone(),
            history: Vector::new(),
            current_card: None,
            last_roll: None,
        }
    }

    /// Cards left in the deck.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.deck.len()
    }

    /// Whether today's draw budget is spent.
    #[must_use]
    pub fn day_quota_met(&self) -> bool {
        self.cards_drawn >= self.cards_to_draw
    }

    /// Phase to return to after a card or a Tower Check.
    #[must_use]
    pub fn phase_after_draw(&self) -> Phase {
        if self.day_quota_met() {
            Phase::DrawContinue
        } else {
            Phase::Draw
        }
    }

    /// Append a history line for the current day.
    pub fn push_history(&mut self, card_label: impl Into<String>, text: impl Into<String>) {
        self.history.push_back(HistoryEntry {
            day: self.day,
            card_label: card_label.into(),
            text: text.into(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::GameRng;

    #[test]
    fn test_initial_state() {
        let rules = RulesConfig::default();
        let state = GameState::new(&rules, &mut GameRng::new(42));

        assert_eq!(state.day, 1);
        assert_eq!(state.tension, 1);
        assert_eq!(state.deck_size(), 52);
        assert_eq!(state.kings_drawn, 0);
        assert_eq!(state.phase, Phase::Start);
        assert_eq!(state.beacon, Beacon::default());
        assert!(!state.antenna_repaired);
        assert!(!state.skip_next_tower_check);
        assert!(state.history.is_empty());
        assert!(state.current_card.is_none());
        assert!(state.last_roll.is_none());
        assert_eq!(state.journal_text, rules.opening_journal);
    }

    #[test]
    fn test_phase_after_draw() {
        let mut state = GameState::with_deck(&RulesConfig::default(), Vector::new());
        state.cards_to_draw = 3;
        state.cards_drawn = 2;
        assert_eq!(state.phase_after_draw(), Phase::Draw);

        state.cards_drawn = 3;
        assert_eq!(state.phase_after_draw(), Phase::DrawContinue);
    }

    #[test]
    fn test_push_history_uses_current_day() {
        let mut state = GameState::with_deck(&RulesConfig::default(), Vector::new());
        state.day = 4;
        state.push_history(DIE_LABEL, "DAY DIE: [3]");

        let entry = state.history.back().unwrap();
        assert_eq!(entry.day, 4);
        assert_eq!(entry.card_label, "DIE");
    }

    #[test]
    fn test_phase_serde_names() {
        assert_eq!(serde_json::to_string(&Phase::TowerCheck).unwrap(), "\"tower_check\"");
        assert_eq!(serde_json::to_string(&Phase::DrawContinue).unwrap(), "\"draw_continue\"");
    }

    #[test]
    fn test_expected_actions() {
        assert_eq!(Phase::Start.expected_action(), Action::RollDayDie);
        assert_eq!(Phase::Journal.expected_action(), Action::EndDay);
    }
}
