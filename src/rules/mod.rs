//! Rules engine for the survival game.
//!
//! `GameEngine` owns the rule constants and the card catalog and exposes
//! every state transition. Transitions are pure apart from the injected
//! random source, and report their result as an `Outcome` plus the next
//! state.

pub mod engine;
pub mod outcome;

pub use engine::GameEngine;
pub use outcome::{
    BeaconReport, DayRoll, DrawReport, LossReason, Outcome, TowerCheckReport, TowerResolution,
    WinReason,
};
