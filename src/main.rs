//! Brick Breaker headless runner
//!
//! Plays one run without a renderer, driving `tick()` directly in a loop,
//! then submits the result to the on-disk leaderboard.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use brick_breaker::sim::{TickInput, autopilot};
use brick_breaker::{FileScoreStore, Game, GameConfig, GamePhase, ScoreService, SubmitOutcome};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Board configuration JSON (defaults are used when omitted)
    #[arg(long)]
    config: Option<PathBuf>,

    /// High score file
    #[arg(long, default_value = "highscores.json")]
    scores: PathBuf,

    /// Player name for the leaderboard (blank skips submission)
    #[arg(long, default_value = "")]
    name: String,

    /// Give up on the run after this many ticks
    #[arg(long, default_value_t = 100_000)]
    max_ticks: u64,

    /// Let the paddle follow the ball instead of standing still
    #[arg(long)]
    autopilot: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();
    log::info!("Brick Breaker (headless) starting...");

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    let mut store = FileScoreStore::open(&args.scores)?;
    let mut game = Game::new(config)?;

    game.start_game();
    let mut ticks = 0;
    while game.phase() == GamePhase::Playing && ticks < args.max_ticks {
        let input = match game.session() {
            Some(session) if args.autopilot => autopilot::steer(session),
            _ => TickInput::default(),
        };
        game.tick(&input);
        ticks += 1;
    }

    let Some(result) = game.final_score() else {
        log::warn!("Run still going after {} ticks, abandoning", args.max_ticks);
        println!("Run abandoned after {} ticks (score {})", ticks, game.score());
        game.return_to_menu();
        return Ok(());
    };

    println!(
        "{:?} with score {} after {} ticks",
        result.outcome, result.score, result.ticks
    );
    let table = store.scores();
    match table.potential_rank(result.score) {
        Some(rank) => println!("That would place #{rank} on the leaderboard"),
        None => println!(
            "Not enough for the leaderboard (best is {})",
            table.top_score().unwrap_or(0)
        ),
    }

    match game.submit_score(&args.name, &mut store) {
        Ok(SubmitOutcome::Submitted) => println!("Score saved to {}", store.path().display()),
        Ok(_) => println!("No name given, score not saved"),
        // The run is over either way; report and keep going
        Err(e) => eprintln!("Could not save score: {e}"),
    }

    println!("High scores:");
    for entry in store.list_high_scores()? {
        println!("  {}: {}", entry.player_name, entry.score);
    }

    Ok(())
}
