//! Structured results of engine transitions.

use std::fmt;

use crate::cards::Card;
use crate::core::GameState;

/// How a session ended in victory.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WinReason {
    /// Beacon tokens ran out during a draw.
    BeaconDepleted,
    /// The rescue roll at day start succeeded.
    RescueRoll,
}

impl fmt::Display for WinReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RESCUE SHIP DOCKED SUCCESSFULLY.")
    }
}

/// How a session ended in defeat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LossReason {
    /// The last King came out.
    CreatureBreach,
    /// A Tower Check roll did not beat tension.
    StructureCollapsed,
    /// Tried to draw from an empty deck.
    DeckExhausted,
}

impl fmt::Display for LossReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            LossReason::CreatureBreach => "THE CREATURE HAS BROKEN THE FINAL SEAL.",
            LossReason::StructureCollapsed => "THE STRUCTURE COLLAPSED UNDER THE PRESSURE.",
            LossReason::DeckExhausted => "OUT OF RESOURCES. LIFE SUPPORT SHUT DOWN.",
        };
        f.write_str(text)
    }
}

/// Whether the session goes on after a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    Continue,
    Victory(WinReason),
    Defeat(LossReason),
}

impl Outcome {
    /// Victory or defeat.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::Continue)
    }

    #[must_use]
    pub fn is_victory(self) -> bool {
        matches!(self, Outcome::Victory(_))
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Continue => f.write_str("CONTINUE"),
            Outcome::Victory(reason) => fmt::Display::fmt(reason, f),
            Outcome::Defeat(reason) => fmt::Display::fmt(reason, f),
        }
    }
}

/// Result of the day die.
#[derive(Clone, Debug)]
pub struct DayRoll {
    pub roll: u32,
    pub state: GameState,
}

/// Result of drawing a card.
#[derive(Clone, Debug)]
pub struct DrawReport {
    /// `None` when the deck was already empty.
    pub card: Option<Card>,
    pub state: GameState,
    pub outcome: Outcome,
    /// Tokens removed from the beacon by this draw.
    pub beacon_decay: Option<u32>,
    /// This draw switched the beacon on.
    pub beacon_activated: bool,
}

/// How a Tower Check was settled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TowerResolution {
    /// The found item was spent, no roll.
    Bypassed,
    Survived,
    Collapsed,
    /// Roll or tension out of domain, counted as survived.
    RecoveredInvalidRoll,
}

/// Result of a Tower Check.
#[derive(Clone, Debug)]
pub struct TowerCheckReport {
    /// `None` when bypassed.
    pub roll: Option<u32>,
    pub tension_before: u32,
    pub resolution: TowerResolution,
    pub state: GameState,
    pub outcome: Outcome,
}

/// Result of the day-start rescue roll.
#[derive(Clone, Debug)]
pub struct BeaconReport {
    /// `None` when the check does not apply (beacon off or day 1).
    pub roll: Option<u32>,
    pub threshold: u32,
    pub state: GameState,
    pub outcome: Outcome,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_flags() {
        assert!(!Outcome::Continue.is_terminal());
        assert!(Outcome::Victory(WinReason::RescueRoll).is_terminal());
        assert!(Outcome::Victory(WinReason::RescueRoll).is_victory());
        assert!(Outcome::Defeat(LossReason::DeckExhausted).is_terminal());
        assert!(!Outcome::Defeat(LossReason::DeckExhausted).is_victory());
    }

    #[test]
    fn test_reason_text() {
        assert_eq!(
            Outcome::Defeat(LossReason::StructureCollapsed).to_string(),
            "THE STRUCTURE COLLAPSED UNDER THE PRESSURE."
        );
        assert_eq!(
            WinReason::BeaconDepleted.to_string(),
            WinReason::RescueRoll.to_string()
        );
    }
}
