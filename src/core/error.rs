//! Error type for the session, snapshot, and configuration layers.
//!
//! Engine transitions never fail: game over is an `Outcome`, not an error.

use super::action::Action;
use super::state::Phase;

/// Errors raised outside the pure engine transitions.
#[derive(thiserror::Error, Debug)]
pub enum EngineError {
    /// The action does not belong to the current phase.
    #[error("cannot {action} during the {phase} phase")]
    WrongPhase { action: Action, phase: Phase },

    /// A terminal outcome is active; only a new game is accepted.
    #[error("the game is over, start a new one")]
    GameOver,

    /// A card code that names none of the 52 cards.
    #[error("invalid card code: {0:?}")]
    InvalidCardCode(String),

    /// Rules configuration rejected.
    #[error("invalid rules configuration: {0}")]
    Config(String),

    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Binary serialization/deserialization error
    #[error("binary snapshot error: {0}")]
    Bincode(#[from] bincode::Error),
}

/// Result type used throughout the crate.
pub type EngineResult<T> = Result<T, EngineError>;
