//! Session controller.
//!
//! Holds the one live `GameState` and threads it through the engine in
//! response to player requests. It enforces phase order, refuses every
//! request after a terminal outcome until a new game starts, writes the
//! dice lines into the history, keeps a status line for the front end,
//! and saves a snapshot after each successful transition.

use log::{info, warn};

use super::snapshot::Snapshot;
use super::store::SnapshotStore;
use crate::core::{
    legal_actions, Action, EngineError, EngineResult, GameRng, GameState, RandomSource, DIE_LABEL,
};
use crate::rules::{GameEngine, Outcome, TowerResolution};

const WELCOME: &str = "Welcome to the emergency log system. Start the day to assess the situation.";

/// A finished session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameOver {
    pub outcome: Outcome,
}

impl GameOver {
    #[must_use]
    pub fn is_victory(&self) -> bool {
        self.outcome.is_victory()
    }

    /// Banner text.
    #[must_use]
    pub fn reason(&self) -> String {
        self.outcome.to_string()
    }
}

/// One player's game.
pub struct Session<R: RandomSource = GameRng> {
    engine: GameEngine,
    rng: R,
    state: GameState,
    store: Option<Box<dyn SnapshotStore>>,
    game_over: Option<GameOver>,
    current_log: String,
}

impl<R: RandomSource> Session<R> {
    /// Start a fresh game without persistence.
    pub fn new(engine: GameEngine, mut rng: R) -> Self {
        let state = engine.create_initial_state(&mut rng);
        Self {
            engine,
            rng,
            state,
            store: None,
            game_over: None,
            current_log: WELCOME.to_string(),
        }
    }

    /// Continue the saved game in `store`, or start a fresh one.
    pub fn resume(engine: GameEngine, rng: R, store: Box<dyn SnapshotStore>) -> EngineResult<Self> {
        let saved = store.load()?;
        let mut session = Self::new(engine, rng);

        if let Some(snapshot) = saved {
            info!("resuming saved game on day {}", snapshot.day);
            session.state = snapshot.restore();
            session.current_log = format!("SESSION RESTORED. DAY {}.", session.state.day);
        }

        session.store = Some(store);
        Ok(session)
    }

    /// Session over an explicit state.
    pub fn from_state(engine: GameEngine, rng: R, state: GameState) -> Self {
        Self {
            engine,
            rng,
            state,
            store: None,
            game_over: None,
            current_log: WELCOME.to_string(),
        }
    }

    /// Attach a store; the current state is saved right away.
    #[must_use]
    pub fn with_store(mut self, store: Box<dyn SnapshotStore>) -> Self {
        self.store = Some(store);
        self.persist();
        self
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// The attached save store, if any.
    #[must_use]
    pub fn store(&self) -> Option<&dyn SnapshotStore> {
        self.store.as_deref()
    }

    #[must_use]
    pub fn game_over(&self) -> Option<GameOver> {
        self.game_over
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.game_over.is_some()
    }

    /// Latest status message.
    #[must_use]
    pub fn current_log(&self) -> &str {
        &self.current_log
    }

    /// The action accepted next, if any.
    #[must_use]
    pub fn next_action(&self) -> Option<Action> {
        if self.is_over() {
            return None;
        }
        legal_actions(&self.state).into_iter().next()
    }

    /// Throw the current game away and deal a new one.
    pub fn new_game(&mut self) {
        self.state = self.engine.create_initial_state(&mut self.rng);
        self.game_over = None;
        self.current_log = "SYSTEM STARTED. NEW SURVIVAL SESSION.".to_string();
        self.persist();
    }

    /// Like `new_game`, but also deletes the save.
    pub fn reset(&mut self) {
        self.state = self.engine.create_initial_state(&mut self.rng);
        self.game_over = None;
        self.current_log = WELCOME.to_string();
        if let Some(store) = self.store.as_mut() {
            if let Err(err) = store.clear() {
                warn!("failed to clear save: {err}");
            }
        }
    }

    /// Roll the day die, then the rescue die when the beacon is on.
    pub fn roll_day_die(&mut self) -> EngineResult<Outcome> {
        self.guard(Action::RollDayDie)?;

        let day = self.engine.roll_day_die(self.state.clone(), &mut self.rng);
        let mut state = day.state;
        state.push_history(DIE_LABEL, format!("DAY DIE: [{}]", day.roll));
        let mut log = format!(
            "DAY {} BEGINS. ACTIVITY: [{}]. DRAW {} CARDS.",
            state.day, day.roll, day.roll
        );

        let beacon = self.engine.check_beacon(state, &mut self.rng);
        let mut state = beacon.state;
        if let Some(roll) = beacon.roll {
            if beacon.outcome.is_victory() {
                state.push_history(DIE_LABEL, format!("BEACON DIE: [{roll}]"));
                log.push_str(&format!(
                    "\nBEACON SIGNAL: DIE [{roll}]\nRESCUE DETECTED! THE SHIP IS APPROACHING."
                ));
            } else {
                let need = format!("(NEED {}+ FOR RESCUE)", beacon.threshold);
                state.push_history(DIE_LABEL, format!("BEACON DIE: [{roll}] {need}"));
                log.push_str(&format!("\nBEACON SIGNAL: DIE [{roll}] {need}"));
            }
        }

        self.current_log = log;
        Ok(self.commit(state, beacon.outcome))
    }

    /// Draw the next card.
    pub fn draw_card(&mut self) -> EngineResult<Outcome> {
        self.guard(Action::DrawCard)?;

        let report = self.engine.draw_card(self.state.clone());

        let mut log = String::new();
        if let Some(card) = &report.card {
            log = format!("CARD: {} ({})\n{}", card.label(), card.category.name, card.event);

            if report.beacon_activated {
                log.push_str(&format!(
                    "\nBEACON ACTIVATED: {} starting tokens.",
                    report.state.beacon.tokens
                ));
            } else if let Some(decay) = report.beacon_decay {
                let noun = if decay == 1 { "token" } else { "tokens" };
                log.push_str(&format!(
                    "\nBEACON: -{decay} {noun}. {} remaining.",
                    report.state.beacon.tokens
                ));
            }
        }
        if report.outcome.is_terminal() {
            if !log.is_empty() {
                log.push('\n');
            }
            log.push_str(&report.outcome.to_string());
        }

        self.current_log = log;
        Ok(self.commit(report.state, report.outcome))
    }

    /// Resolve the pending Tower Check.
    pub fn perform_tower_check(&mut self) -> EngineResult<Outcome> {
        self.guard(Action::ResolveTowerCheck)?;

        let report = self.engine.perform_tower_check(self.state.clone(), &mut self.rng);
        let mut state = report.state;
        let tension = report.tension_before;
        let roll = report.roll.unwrap_or_default();

        self.current_log = match report.resolution {
            TowerResolution::Bypassed => {
                "YOU USE THE ITEM YOU FOUND TO AVOID THE RISK.".to_string()
            }
            TowerResolution::Survived | TowerResolution::RecoveredInvalidRoll => {
                state.push_history(
                    DIE_LABEL,
                    format!("TOWER CHECK DIE: [{roll}] vs TENSION [{tension}] - SURVIVED"),
                );
                format!(
                    "TOWER CHECK: DIE [{roll}] vs TENSION [{tension}]\n\
                     THE STRUCTURE HOLDS... TENSION RISES."
                )
            }
            TowerResolution::Collapsed => {
                state.push_history(
                    DIE_LABEL,
                    format!("TOWER CHECK DIE: [{roll}] vs TENSION [{tension}] - CRITICAL FAILURE"),
                );
                format!(
                    "TOWER CHECK: DIE [{roll}] vs TENSION [{tension}]\n\
                     CRITICAL FAILURE. THE STRUCTURE COLLAPSED."
                )
            }
        };

        Ok(self.commit(state, report.outcome))
    }

    /// Close the draw phase.
    pub fn finish_draw_phase(&mut self) -> EngineResult<()> {
        self.guard(Action::FinishDrawPhase)?;

        let state = self.engine.finish_draw_phase(self.state.clone());
        self.current_log = "OPERATIONS COMPLETE. WRITE IN THE JOURNAL.".to_string();
        self.commit(state, Outcome::Continue);
        Ok(())
    }

    /// Write the journal and start the next day.
    pub fn end_day(&mut self, journal_text: impl Into<String>) -> EngineResult<()> {
        self.guard(Action::EndDay)?;

        let finished = self.state.day;
        let state = self.engine.end_day(self.state.clone(), journal_text);
        self.current_log = format!("DAY {finished} ENDED. SAVING DATA...");
        self.commit(state, Outcome::Continue);
        Ok(())
    }

    fn guard(&self, action: Action) -> EngineResult<()> {
        if self.game_over.is_some() {
            return Err(EngineError::GameOver);
        }
        if !action.is_legal(&self.state) {
            return Err(EngineError::WrongPhase {
                action,
                phase: self.state.phase,
            });
        }
        Ok(())
    }

    fn commit(&mut self, state: GameState, outcome: Outcome) -> Outcome {
        self.state = state;

        if outcome.is_terminal() {
            info!("game over on day {}: {outcome}", self.state.day);
            self.game_over = Some(GameOver { outcome });
            // A finished game is not resumable.
            if let Some(store) = self.store.as_mut() {
                if let Err(err) = store.clear() {
                    warn!("failed to clear save: {err}");
                }
            }
        } else {
            self.persist();
        }

        outcome
    }

    fn persist(&mut self) {
        let Some(store) = self.store.as_mut() else {
            return;
        };
        if let Err(err) = store.save(&Snapshot::capture(&self.state)) {
            warn!("failed to save game: {err}");
        }
    }
}
