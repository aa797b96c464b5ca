//! Session controller tests.
//!
//! These tests verify the controller contract around the engine:
//! - Phase gating and terminal gating
//! - Dice lines in the history
//! - Saving, resuming, and resetting

use im::Vector;
use wretched_engine::{
    Action, CardCode, EngineError, FileStore, GameEngine, GameRng, GameState, MemoryStore, Outcome,
    Phase, ScriptedRng, Session, Snapshot, WinReason,
};

fn session(deck: &[&str], rolls: &[u32]) -> Session<ScriptedRng> {
    let engine = GameEngine::default();
    let deck: Vector<CardCode> = deck.iter().map(|s| s.parse().unwrap()).collect();
    let state = GameState::with_deck(engine.rules(), deck);
    Session::from_state(engine, ScriptedRng::new(rolls.iter().copied()), state)
}

/// Play one whole session with seeded dice, returning the final outcome.
fn autoplay(session: &mut Session<GameRng>) -> Outcome {
    let mut outcome = Outcome::Continue;
    while let Some(action) = session.next_action() {
        outcome = match action {
            Action::RollDayDie => session.roll_day_die().unwrap(),
            Action::DrawCard => session.draw_card().unwrap(),
            Action::ResolveTowerCheck => session.perform_tower_check().unwrap(),
            Action::FinishDrawPhase => {
                session.finish_draw_phase().unwrap();
                Outcome::Continue
            }
            Action::EndDay => {
                session.end_day("Another day.").unwrap();
                Outcome::Continue
            }
        };
    }
    outcome
}

#[test]
fn test_one_full_day() {
    let mut session = session(&["5C", "2C", "4H"], &[2, 6]);

    session.roll_day_die().unwrap();
    assert_eq!(session.state().phase, Phase::Draw);

    session.draw_card().unwrap();
    session.draw_card().unwrap();
    assert_eq!(session.state().phase, Phase::DrawContinue);

    session.finish_draw_phase().unwrap();
    assert_eq!(session.state().phase, Phase::Journal);

    session.end_day("The lights held.").unwrap();
    assert_eq!(session.state().day, 2);
    assert_eq!(session.state().phase, Phase::Start);
    assert_eq!(session.state().journal_text, "The lights held.");

    let labels: Vec<_> = session
        .state()
        .history
        .iter()
        .map(|e| e.card_label.as_str())
        .collect();
    assert_eq!(labels, vec!["DIE", "4♥", "2♣"]);
}

#[test]
fn test_actions_out_of_order_are_rejected() {
    let mut session = session(&["2H"], &[1]);

    assert!(matches!(
        session.perform_tower_check(),
        Err(EngineError::WrongPhase { phase: Phase::Start, .. })
    ));
    assert!(matches!(session.end_day("x"), Err(EngineError::WrongPhase { .. })));

    session.roll_day_die().unwrap();
    assert!(matches!(session.roll_day_die(), Err(EngineError::WrongPhase { .. })));
}

#[test]
fn test_tower_check_history_lines() {
    let mut session = session(&["3H", "5H"], &[2, 6, 1]);
    session.roll_day_die().unwrap();

    session.draw_card().unwrap();
    assert_eq!(session.state().phase, Phase::TowerCheck);
    assert_eq!(session.perform_tower_check().unwrap(), Outcome::Continue);
    assert_eq!(
        session.state().history.back().unwrap().text,
        "TOWER CHECK DIE: [6] vs TENSION [1] - SURVIVED"
    );
    assert_eq!(session.state().tension, 2);

    session.draw_card().unwrap();
    assert!(session.perform_tower_check().unwrap().is_terminal());
    assert_eq!(
        session.state().history.back().unwrap().text,
        "TOWER CHECK DIE: [1] vs TENSION [2] - CRITICAL FAILURE"
    );
}

#[test]
fn test_bypass_logs_item_use() {
    let mut session = session(&["AC"], &[1]);
    session.roll_day_die().unwrap();
    session.draw_card().unwrap();

    session.perform_tower_check().unwrap();

    assert_eq!(session.current_log(), "YOU USE THE ITEM YOU FOUND TO AVOID THE RISK.");
    assert_eq!(session.state().phase, Phase::DrawContinue);
    assert!(!session.state().skip_next_tower_check);
}

#[test]
fn test_rescue_roll_on_day_two() {
    let mut session = session(&["2C", "AH"], &[1, 3, 6]);

    // Day 1: beacon found, rescue roll is skipped.
    session.roll_day_die().unwrap();
    session.draw_card().unwrap();
    assert!(session.state().beacon.active);
    session.finish_draw_phase().unwrap();
    session.end_day("Signal sent.").unwrap();

    let outcome = session.roll_day_die().unwrap();
    assert_eq!(outcome, Outcome::Victory(WinReason::RescueRoll));
    assert!(session.game_over().unwrap().is_victory());
    assert_eq!(session.state().last_roll, Some(6));

    let texts: Vec<_> = session.state().history.iter().map(|e| e.text.clone()).collect();
    assert!(texts.contains(&"DAY DIE: [3]".to_string()));
    assert!(texts.contains(&"BEACON DIE: [6]".to_string()));
}

#[test]
fn test_failed_rescue_roll_is_recorded() {
    let mut session = session(&["2C", "4C", "AH"], &[1, 1, 2]);
    session.roll_day_die().unwrap();
    session.draw_card().unwrap();
    session.finish_draw_phase().unwrap();
    session.end_day("").unwrap();

    assert_eq!(session.roll_day_die().unwrap(), Outcome::Continue);
    assert_eq!(
        session.state().history.back().unwrap().text,
        "BEACON DIE: [2] (NEED 6+ FOR RESCUE)"
    );
    assert!(session.current_log().contains("NEED 6+ FOR RESCUE"));
}

#[test]
fn test_deck_exhaustion_ends_game() {
    let mut session = session(&["2C"], &[3]);
    session.roll_day_die().unwrap();
    session.draw_card().unwrap();

    let outcome = session.draw_card().unwrap();

    assert!(outcome.is_terminal());
    assert_eq!(session.current_log(), "OUT OF RESOURCES. LIFE SUPPORT SHUT DOWN.");
    assert!(matches!(session.draw_card(), Err(EngineError::GameOver)));
}

#[test]
fn test_new_game_after_game_over() {
    let mut session = session(&["2C"], &[1, 1]);
    session.roll_day_die().unwrap();
    session.draw_card().unwrap();
    session.finish_draw_phase().unwrap();
    session.end_day("").unwrap();
    session.roll_day_die().unwrap();
    assert!(session.draw_card().unwrap().is_terminal());

    let mut session = Session::new(GameEngine::default(), GameRng::new(8));
    session.new_game();
    assert!(!session.is_over());
    assert_eq!(session.state().deck_size(), 52);
    assert_eq!(session.next_action(), Some(Action::RollDayDie));
}

#[test]
fn test_seeded_sessions_always_end() {
    for seed in 0..50 {
        let mut session = Session::new(GameEngine::default(), GameRng::new(seed));
        let outcome = autoplay(&mut session);

        assert!(outcome.is_terminal(), "seed {seed} did not end");
        assert_eq!(session.game_over().map(|g| g.outcome), Some(outcome));
    }
}

#[test]
fn test_resume_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("save.json");

    let mut first = Session::resume(
        GameEngine::default(),
        GameRng::new(1),
        Box::new(FileStore::new(&path)),
    )
    .unwrap();
    first.roll_day_die().unwrap();
    first.draw_card().unwrap();
    let saved_state = first.state().clone();

    let second = Session::resume(
        GameEngine::default(),
        GameRng::new(2),
        Box::new(FileStore::new(&path)),
    )
    .unwrap();

    assert_eq!(second.state().deck, saved_state.deck);
    assert_eq!(second.state().history, saved_state.history);
    assert_eq!(second.state().phase, saved_state.phase);
    assert!(second.state().current_card.is_none());
    assert!(second.state().last_roll.is_none());
    assert!(second.current_log().starts_with("SESSION RESTORED"));
}

#[test]
fn test_resume_from_empty_store_starts_fresh() {
    let session = Session::resume(
        GameEngine::default(),
        GameRng::new(3),
        Box::new(MemoryStore::new()),
    )
    .unwrap();

    assert_eq!(session.state().day, 1);
    assert_eq!(session.state().deck_size(), 52);
}

#[test]
fn test_reset_clears_save() {
    let state = GameState::new(&Default::default(), &mut GameRng::new(4));
    let store = MemoryStore::with_snapshot(Snapshot::capture(&state));

    let mut session =
        Session::resume(GameEngine::default(), GameRng::new(4), Box::new(store)).unwrap();
    assert!(session.store().unwrap().load().unwrap().is_some());

    session.reset();

    assert!(session.store().unwrap().load().unwrap().is_none());
    assert_eq!(session.state().day, 1);
}
