//! Simulate CLI: play seeded matches headlessly and report standings.
//!
//! Usage:
//!   cargo run --release --bin simulate -- --games 100 --seed 7
//!   RUST_LOG=ludo_engine=debug cargo run --bin simulate -- --games 1 --rules house.toml

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use ludo_engine::core::GameRng;
use ludo_engine::rules::{LudoEngine, RuleSet, DEFAULT_PLAYOUT_STEPS};
use ludo_engine::{Color, ColorMap};

#[derive(Parser)]
#[command(name = "simulate", about = "Play seeded Ludo matches with the auto-play policy")]
struct Cli {
    /// Number of matches to play
    #[arg(long, default_value = "10")]
    games: usize,

    /// Random seed
    #[arg(long, default_value = "42", env = "LUDO_SEED")]
    seed: u64,

    /// Path to a rules TOML file (standard board if omitted)
    #[arg(long)]
    rules: Option<PathBuf>,

    /// Engine step cap per match
    #[arg(long, default_value_t = DEFAULT_PLAYOUT_STEPS)]
    max_steps: usize,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let rules = match &cli.rules {
        Some(path) => match RuleSet::load(path) {
            Ok(rules) => rules,
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "failed to load rules");
                std::process::exit(1);
            }
        },
        None => RuleSet::default(),
    };

    let engine = match LudoEngine::new(rules) {
        Ok(engine) => engine,
        Err(e) => {
            tracing::error!(error = %e, "invalid rules");
            std::process::exit(1);
        }
    };

    tracing::info!(games = cli.games, seed = cli.seed, "starting simulation");

    let mut rng = GameRng::new(cli.seed);
    let mut wins: ColorMap<usize> = ColorMap::with_value(0);
    let mut unfinished = 0usize;
    let mut total_moves = 0usize;

    for game in 0..cli.games {
        let mut match_rng = rng.fork();
        // Enough to replay this match with `GameRng::from_state`.
        let start = match_rng.state();
        let state = engine.play_random_match(&mut match_rng, cli.max_steps);
        total_moves += state.history().len();

        match engine.result(&state) {
            Some(result) => {
                wins[result.winner()] += 1;
                let standings: Vec<&str> = result.standings.iter().map(|c| c.name()).collect();
                tracing::info!(
                    game,
                    moves = state.history().len(),
                    standings = ?standings,
                    rng_seed = start.seed,
                    "match finished"
                );
            }
            None => {
                unfinished += 1;
                tracing::warn!(
                    game,
                    moves = state.history().len(),
                    rng = ?start,
                    "match hit the step cap"
                );
            }
        }
    }

    for color in Color::ALL {
        tracing::info!(color = %color, wins = wins[color], "summary");
    }
    tracing::info!(
        unfinished,
        avg_moves = total_moves as f64 / cli.games.max(1) as f64,
        "simulation done"
    );
}
