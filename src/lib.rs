//! # wretched-engine
//!
//! Rules engine for a solo card-and-dice survival journaling game.
//!
//! A survivor aboard a crippled ship draws from a shuffled 52-card deck,
//! one card per event, and must pass ever harder Tower Checks. Four Kings,
//! a failed check, or an empty deck end the game; the distress beacon is
//! the only way out.
//!
//! ## Design Principles
//!
//! 1. **State by value**: Every transition takes a `GameState` and returns
//!    the next one. No global engine instance, no shared mutable state.
//!
//! 2. **Injectable randomness**: Dice and shuffles go through
//!    `RandomSource`, so a seeded or scripted source reproduces any game.
//!
//! 3. **Outcomes, not errors**: Victory and defeat are reported as an
//!    `Outcome`. Errors are reserved for misuse (wrong phase, game over)
//!    and for persistence.
//!
//! ## Modules
//!
//! - `core`: Random source, die and deck, state, actions, rules config, errors
//! - `cards`: Card identities and the event catalog
//! - `rules`: The `GameEngine` transitions and their reports
//! - `session`: Session controller and snapshot persistence
//!
//! ## Test support
//!
//! `ScriptedRng` is a test double. It replays a fixed list of rolls and
//! panics once the list runs out, so it must never drive a real session.
//! Production code uses `GameRng`.

pub mod cards;
pub mod core;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    legal_actions, new_deck, roll_d6, Action, Beacon, EngineError, EngineResult, GameRng,
    GameState, HistoryEntry, Phase, RandomSource, RulesConfig, ScriptedRng,
};

pub use crate::cards::{requires_tower_check, Card, CardCatalog, CardCode, Category, Rank, Suit};

pub use crate::rules::{
    BeaconReport, DayRoll, DrawReport, GameEngine, LossReason, Outcome, TowerCheckReport,
    TowerResolution, WinReason,
};

pub use crate::session::{FileStore, GameOver, MemoryStore, Session, Snapshot, SnapshotStore};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
