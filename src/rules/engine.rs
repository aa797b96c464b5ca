//! The rules engine.
//!
//! Every transition takes a `GameState` by value and returns the next one
//! inside a report. Nothing here blocks, sleeps, or keeps hidden state;
//! randomness comes in through a [`RandomSource`].
//!
//! ## Daily loop
//!
//! - `roll_day_die`: Start → Draw, sets the day's card budget
//! - `draw_card`: Draw → Draw / TowerCheck / DrawContinue
//! - `perform_tower_check`: TowerCheck → Draw / DrawContinue
//! - `finish_draw_phase`: DrawContinue → Journal
//! - `end_day`: Journal → Start of the next day
//! - `check_beacon`: rescue roll at day start

use log::{debug, info, warn};

use super::outcome::{
    BeaconReport, DayRoll, DrawReport, LossReason, Outcome, TowerCheckReport, TowerResolution,
    WinReason,
};
use crate::cards::{self, Card, CardCatalog, CardCode, Rank, Suit};
use crate::core::{roll_d6, GameState, Phase, RandomSource, RulesConfig, DIE_FACES};

const ACE_OF_HEARTS: CardCode = CardCode::new(Rank::Ace, Suit::Hearts);

/// Rules engine: rule constants plus the card catalog.
///
/// ## Example
///
/// ```
/// use wretched_engine::core::{GameRng, Phase};
/// use wretched_engine::rules::GameEngine;
///
/// let engine = GameEngine::default();
/// let mut rng = GameRng::new(7);
///
/// let state = engine.create_initial_state(&mut rng);
/// let day = engine.roll_day_die(state, &mut rng);
///
/// assert_eq!(day.state.phase, Phase::Draw);
/// assert_eq!(day.state.cards_to_draw, day.roll);
/// ```
#[derive(Clone, Debug)]
pub struct GameEngine {
    rules: RulesConfig,
    catalog: CardCatalog,
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new(RulesConfig::default())
    }
}

impl GameEngine {
    /// Engine over the standard card catalog.
    #[must_use]
    pub fn new(rules: RulesConfig) -> Self {
        Self::with_catalog(rules, CardCatalog::standard())
    }

    #[must_use]
    pub fn with_catalog(rules: RulesConfig, catalog: CardCatalog) -> Self {
        Self { rules, catalog }
    }

    #[must_use]
    pub fn rules(&self) -> &RulesConfig {
        &self.rules
    }

    #[must_use]
    pub fn catalog(&self) -> &CardCatalog {
        &self.catalog
    }

    /// Fresh session: shuffled deck, day 1, nothing drawn.
    pub fn create_initial_state<R: RandomSource + ?Sized>(&self, rng: &mut R) -> GameState {
        GameState::new(&self.rules, rng)
    }

    /// Resolve a card identity through the catalog.
    #[must_use]
    pub fn resolve_card(&self, code: CardCode) -> Card {
        self.catalog.resolve(code)
    }

    /// Whether an event text mandates a Tower Check.
    #[must_use]
    pub fn requires_tower_check(&self, event: &str) -> bool {
        cards::requires_tower_check(event)
    }

    /// Roll the day die and open the draw phase.
    pub fn roll_day_die<R: RandomSource + ?Sized>(
        &self,
        mut state: GameState,
        rng: &mut R,
    ) -> DayRoll {
        let roll = roll_d6(rng);

        state.cards_to_draw = roll;
        state.cards_drawn = 0;
        state.phase = Phase::Draw;
        state.last_roll = Some(roll);

        debug!("day {}: day die {roll}", state.day);
        DayRoll { roll, state }
    }

    /// Draw the top card and apply its mechanics.
    ///
    /// A beacon victory on this draw takes precedence over a King loss on
    /// the same draw. On a terminal outcome the phase is left as it was.
    pub fn draw_card(&self, mut state: GameState) -> DrawReport {
        let Some(code) = state.deck.pop_back() else {
            info!("day {}: deck exhausted", state.day);
            return DrawReport {
                card: None,
                state,
                outcome: Outcome::Defeat(LossReason::DeckExhausted),
                beacon_decay: None,
                beacon_activated: false,
            };
        };

        let card = self.catalog.resolve(code);
        state.cards_drawn += 1;
        state.current_card = Some(card.clone());
        state.push_history(card.label(), card.event);

        let mut creature_breach = false;
        if code.is_king() {
            state.kings_drawn = state.kings_drawn.saturating_add(1);
            creature_breach = state.kings_drawn >= self.rules.kings_to_lose;
        }

        let mut beacon_activated = false;
        match (code.rank, code.suit) {
            (Rank::Ace, Suit::Hearts) if !state.beacon.active => {
                state.beacon.active = true;
                state.beacon.tokens = self.rules.beacon_tokens;
                beacon_activated = true;
            }
            (Rank::Ace, Suit::Diamonds) => state.antenna_repaired = true,
            (Rank::Ace, Suit::Clubs) => state.skip_next_tower_check = true,
            // The Ace of Spades only carries flavor text.
            _ => {}
        }

        let mut beacon_decay = None;
        if state.beacon.active && state.beacon.tokens > 0 && code != ACE_OF_HEARTS {
            let decay = self.rules.beacon_decay_for(state.antenna_repaired);
            state.beacon.tokens = state.beacon.tokens.saturating_sub(decay);
            beacon_decay = Some(decay);

            if state.beacon.tokens == 0 {
                info!("day {}: beacon tokens depleted on {code}", state.day);
                return DrawReport {
                    card: Some(card),
                    state,
                    outcome: Outcome::Victory(WinReason::BeaconDepleted),
                    beacon_decay,
                    beacon_activated,
                };
            }
        }

        if creature_breach {
            info!("day {}: king #{} drawn", state.day, state.kings_drawn);
            return DrawReport {
                card: Some(card),
                state,
                outcome: Outcome::Defeat(LossReason::CreatureBreach),
                beacon_decay,
                beacon_activated,
            };
        }

        state.phase = if cards::requires_tower_check(card.event) {
            Phase::TowerCheck
        } else {
            state.phase_after_draw()
        };

        debug!(
            "day {}: drew {code} ({}/{}), next phase {}",
            state.day, state.cards_drawn, state.cards_to_draw, state.phase
        );
        DrawReport {
            card: Some(card),
            state,
            outcome: Outcome::Continue,
            beacon_decay,
            beacon_activated,
        }
    }

    /// Resolve a Tower Check.
    ///
    /// Loses on `roll <= tension`. A survived check raises tension by one.
    /// An out-of-domain roll or tension counts as survived.
    pub fn perform_tower_check<R: RandomSource + ?Sized>(
        &self,
        mut state: GameState,
        rng: &mut R,
    ) -> TowerCheckReport {
        let tension_before = state.tension;

        if state.skip_next_tower_check {
            state.skip_next_tower_check = false;
            state.phase = state.phase_after_draw();

            debug!("day {}: tower check bypassed", state.day);
            return TowerCheckReport {
                roll: None,
                tension_before,
                resolution: TowerResolution::Bypassed,
                state,
                outcome: Outcome::Continue,
            };
        }

        let roll = roll_d6(rng);
        state.last_roll = Some(roll);

        if !(1..=DIE_FACES).contains(&roll) || tension_before < 1 {
            warn!(
                "tower check with roll {roll} and tension {tension_before} out of range, \
                 counting as survived"
            );
            state.tension = tension_before.saturating_add(1);
            state.phase = state.phase_after_draw();
            return TowerCheckReport {
                roll: Some(roll),
                tension_before,
                resolution: TowerResolution::RecoveredInvalidRoll,
                state,
                outcome: Outcome::Continue,
            };
        }

        if roll <= tension_before {
            info!("day {}: tower check failed, roll {roll} vs tension {tension_before}", state.day);
            return TowerCheckReport {
                roll: Some(roll),
                tension_before,
                resolution: TowerResolution::Collapsed,
                state,
                outcome: Outcome::Defeat(LossReason::StructureCollapsed),
            };
        }

        state.tension = tension_before + 1;
        state.phase = state.phase_after_draw();

        debug!(
            "day {}: tower check survived, roll {roll} vs tension {tension_before}",
            state.day
        );
        TowerCheckReport {
            roll: Some(roll),
            tension_before,
            resolution: TowerResolution::Survived,
            state,
            outcome: Outcome::Continue,
        }
    }

    /// Close the draw phase.
    #[must_use]
    pub fn finish_draw_phase(&self, mut state: GameState) -> GameState {
        state.phase = Phase::Journal;
        state
    }

    /// Replace the journal and move to the next day.
    #[must_use]
    pub fn end_day(&self, mut state: GameState, journal_text: impl Into<String>) -> GameState {
        state.journal_text = journal_text.into();
        state.day += 1;
        state.phase = Phase::Start;
        state.current_card = None;
        state.last_roll = None;

        debug!("day {} begins", state.day);
        state
    }

    /// Rescue roll at day start.
    ///
    /// No-op while the beacon is off and on day 1.
    pub fn check_beacon<R: RandomSource + ?Sized>(
        &self,
        mut state: GameState,
        rng: &mut R,
    ) -> BeaconReport {
        let threshold = self.rules.rescue_threshold_for(state.antenna_repaired);

        if !state.beacon.active || state.day == 1 {
            return BeaconReport {
                roll: None,
                threshold,
                state,
                outcome: Outcome::Continue,
            };
        }

        let roll = roll_d6(rng);
        state.last_roll = Some(roll);

        let outcome = if roll >= threshold {
            info!("day {}: rescue roll {roll} meets {threshold}", state.day);
            Outcome::Victory(WinReason::RescueRoll)
        } else {
            debug!("day {}: rescue roll {roll} below {threshold}", state.day);
            Outcome::Continue
        };

        BeaconReport {
            roll: Some(roll),
            threshold,
            state,
            outcome,
        }
    }
}
