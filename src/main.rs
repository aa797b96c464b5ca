//! Terminal front end.
//!
//! Plays one session against a JSON save file. Interactive by default;
//! `--auto` plays every step without input and writes a stock journal line.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use log::info;
use wretched_engine::{
    Action, EngineResult, FileStore, GameEngine, GameRng, RulesConfig, Session, SnapshotStore,
};

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "wretched")]
#[command(about = "A solo card-and-dice survival journaling game")]
#[command(version)]
struct Args {
    /// Random seed for the deck and dice
    #[arg(short, long)]
    seed: Option<u64>,

    /// Save file
    #[arg(long, default_value = "wretched_save.json")]
    save: PathBuf,

    /// JSON file overriding the rules
    #[arg(long)]
    rules: Option<PathBuf>,

    /// Discard any saved game
    #[arg(long)]
    new: bool,

    /// Play every step automatically
    #[arg(long)]
    auto: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> EngineResult<()> {
    let args = Args::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&args.log_level))
        .init();

    info!("Starting wretched v{}", wretched_engine::VERSION);

    let rules = match &args.rules {
        Some(path) => RulesConfig::from_json_file(path)?,
        None => RulesConfig::default(),
    };
    let engine = GameEngine::new(rules);
    let rng = match args.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };
    info!("seed {}", rng.seed());

    let mut store = FileStore::new(&args.save);
    if args.new {
        store.clear()?;
    }
    let mut session = Session::resume(engine, rng, Box::new(store))?;

    let stdin = io::stdin();
    let mut input = stdin.lock();

    println!("{}", session.current_log());
    while let Some(action) = session.next_action() {
        print_status(&session);

        if !args.auto && !confirm(&mut input, action)? {
            println!("Progress saved to {}.", args.save.display());
            return Ok(());
        }

        match action {
            Action::RollDayDie => {
                session.roll_day_die()?;
            }
            Action::DrawCard => {
                session.draw_card()?;
            }
            Action::ResolveTowerCheck => {
                session.perform_tower_check()?;
            }
            Action::FinishDrawPhase => session.finish_draw_phase()?,
            Action::EndDay => {
                let text = if args.auto {
                    format!("DAY {}: Still here.", session.state().day)
                } else {
                    read_journal(&mut input)?
                };
                session.end_day(text)?;
            }
        }

        println!("{}", session.current_log());
    }

    if let Some(over) = session.game_over() {
        let banner = if over.is_victory() { "VICTORY" } else { "GAME OVER" };
        println!("\n=== {banner} ===\n{}", over.reason());
        println!(
            "Survived {} day(s), {} history entries.",
            session.state().day,
            session.state().history.len()
        );
    }

    Ok(())
}

fn print_status<R: wretched_engine::RandomSource>(session: &Session<R>) {
    let state = session.state();
    let beacon = if state.beacon.active {
        format!("{} tokens", state.beacon.tokens)
    } else {
        "off".to_string()
    };
    println!(
        "\n[day {} | tension {} | kings {} | deck {} | cards {}/{} | beacon {} | antenna {} | item {}]",
        state.day,
        state.tension,
        state.kings_drawn,
        state.deck_size(),
        state.cards_drawn,
        state.cards_to_draw,
        beacon,
        if state.antenna_repaired { "fixed" } else { "broken" },
        if state.skip_next_tower_check { "yes" } else { "no" },
    );
}

/// Ask to perform `action`. `false` means quit.
fn confirm(input: &mut impl BufRead, action: Action) -> io::Result<bool> {
    print!("Press enter to {action} (q to quit): ");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(false);
    }
    Ok(!line.trim().eq_ignore_ascii_case("q"))
}

fn read_journal(input: &mut impl BufRead) -> io::Result<String> {
    println!("Journal entry (finish with an empty line):");

    let mut text = String::new();
    loop {
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 || line.trim().is_empty() {
            break;
        }
        text.push_str(&line);
    }
    Ok(text)
}
