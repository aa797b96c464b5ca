//! Player actions.
//!
//! The daily loop has exactly one legal action per phase. The session
//! uses `Action` to gate requests and the front end to label prompts.

use std::fmt;

use super::state::GameState;

/// A request from the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    /// Roll the day die (and the rescue die when the beacon is on).
    RollDayDie,
    /// Draw the top card.
    DrawCard,
    /// Roll against tension, or spend the bypass item.
    ResolveTowerCheck,
    /// Close the draw phase.
    FinishDrawPhase,
    /// Write the journal and sleep.
    EndDay,
}

impl Action {
    /// All actions in loop order.
    pub const ALL: [Action; 5] = [
        Action::RollDayDie,
        Action::DrawCard,
        Action::ResolveTowerCheck,
        Action::FinishDrawPhase,
        Action::EndDay,
    ];

    /// Check whether this action is accepted in the given state.
    #[must_use]
    pub fn is_legal(self, state: &GameState) -> bool {
        state.phase.expected_action() == self
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Action::RollDayDie => "roll the day die",
            Action::DrawCard => "draw a card",
            Action::ResolveTowerCheck => "resolve the tower check",
            Action::FinishDrawPhase => "finish the draw phase",
            Action::EndDay => "end the day",
        };
        f.write_str(name)
    }
}

/// Actions legal in the given state.
#[must_use]
pub fn legal_actions(state: &GameState) -> Vec<Action> {
    Action::ALL
        .into_iter()
        .filter(|action| action.is_legal(state))
        .collect()
}
