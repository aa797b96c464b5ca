//! Core types: randomness, die and deck, state, actions, configuration, errors.
//!
//! These are the building blocks the rules engine and the session share.

pub mod action;
pub mod config;
pub mod deck;
pub mod error;
pub mod rng;
pub mod state;

pub use action::{legal_actions, Action};
pub use config::{RulesConfig, DIE_FACES, KINGS_IN_DECK};
pub use deck::{new_deck, roll_d6};
pub use error::{EngineError, EngineResult};
pub use rng::{GameRng, RandomSource, ScriptedRng};
pub use state::{Beacon, GameState, HistoryEntry, Phase, DIE_LABEL};
