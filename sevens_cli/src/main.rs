mod card;
mod deck;
mod error;
mod game;
mod hand;
mod history;
mod input;
mod player;
mod strategy;
mod tableau;

use std::io;
use std::process::ExitCode;

use clap::Parser;

use game::{Game, GameSettings};

/// Sevens against three bots. You sit first.
#[derive(Debug, Parser)]
#[command(name = "sevens", version)]
struct Args {
    /// Seed for a reproducible deal
    #[arg(long)]
    seed: Option<u64>,

    /// End the game when nobody can ever play again
    #[arg(long)]
    stop_on_stalemate: bool,

    /// Print every turn taken once the game ends
    #[arg(long)]
    show_history: bool,

    /// Diagnostic filter for stderr, e.g. `info` or `sevens_cli=debug`
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(args.log_level.as_str())
        .with_writer(io::stderr)
        .init();

    let settings = GameSettings {
        seed: args.seed,
        stop_on_stalemate: args.stop_on_stalemate,
        ..GameSettings::default()
    };

    let mut stdout = io::stdout();
    let result = Game::new(settings).and_then(|mut game| {
        let outcome = game.run(&mut stdout)?;
        if args.show_history {
            println!("\n{}", game.history.dump());
        }
        Ok(outcome)
    });

    match result {
        Ok(outcome) => {
            tracing::info!(rounds = outcome.rounds, stalled = outcome.stalled, "game over");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("sevens: {e}");
            ExitCode::FAILURE
        }
    }
}
