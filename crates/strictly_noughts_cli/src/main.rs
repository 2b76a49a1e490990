//! Strictly Noughts - command-line driver
//!
//! Outcome analysis, best-move queries and engine self-play on top of the
//! `strictly_noughts` library.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::path::PathBuf;
use strictly_noughts::{
    Board, GameConfig, GamePhase, GameState, Mode, Player, move_values, outcome_of,
    select_computer_move,
};
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Outcome { board, json } => run_outcome(board, json),
        Command::BestMove {
            board,
            computer,
            values,
        } => run_best_move(board, computer, values),
        Command::SelfPlay { config } => run_self_play(config),
    }
}

/// Print the phase and winning line of a board
#[instrument(skip(board), fields(board = %board.display()))]
fn run_outcome(board: Board, json: bool) -> Result<()> {
    let outcome = outcome_of(&board);
    info!(phase = %outcome.phase(), "Outcome computed");

    if json {
        let text = serde_json::to_string_pretty(&outcome).context("Failed to encode outcome")?;
        println!("{}", text);
        return Ok(());
    }

    println!("{}", board);
    println!();
    match outcome.line() {
        Some(line) => println!("{} ({:?} {})", outcome.phase(), line.kind(), line),
        None => println!("{}", outcome.phase()),
    }
    Ok(())
}

/// Print the engine's move for `computer` on a board
#[instrument(skip(board), fields(board = %board.display()))]
fn run_best_move(board: Board, computer: Player, values: bool) -> Result<()> {
    let position = select_computer_move(&board, computer)
        .with_context(|| format!("No move for {} on this board", computer))?;
    info!(%position, "Best move found");

    println!("{} {}", position.row(), position.col());

    if values {
        for (candidate, value) in move_values(&board, computer)? {
            println!("  {:<20} {:>3}", candidate.to_string(), value);
        }
    }
    Ok(())
}

/// Let the engine play both sides until the game ends
#[instrument]
fn run_self_play(config: Option<PathBuf>) -> Result<()> {
    let config = match config {
        Some(path) => GameConfig::from_file(&path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => GameConfig::default(),
    };
    // Both sides go through the human entry point.
    let mut game = GameState::new(config.with_mode(Mode::TwoPlayer));

    println!("{}\n", game.board());
    while game.phase() == GamePhase::Running {
        let mover = game.turn();
        let position = select_computer_move(game.board(), mover)?;
        game.apply_move(position.row(), position.col())?;
        debug!(%mover, %position, "Self-play move");

        std::thread::sleep(config.reply_delay());
        println!("{} -> {}", mover, position);
        println!("{}\n", game.board());
    }

    info!(phase = %game.phase(), moves = game.history().len(), "Self-play finished");
    println!("{}", game.status_line());
    Ok(())
}
