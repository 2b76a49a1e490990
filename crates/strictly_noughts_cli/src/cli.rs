//! Command-line interface for strictly_noughts.

use clap::{Parser, Subcommand};
use strictly_noughts::{Board, Player};

/// Strictly Noughts - noughts and crosses analysis with a minimax opponent
#[derive(Parser, Debug)]
#[command(name = "strictly_noughts")]
#[command(about = "Analyse noughts and crosses positions and watch the engine play", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Report the phase and winning line of a board
    Outcome {
        /// Board as nine cells, row by row (e.g. "XO./.X./..O")
        #[arg(short, long)]
        board: Board,

        /// Print the outcome as JSON
        #[arg(long)]
        json: bool,
    },

    /// Ask the engine for its move on a board
    BestMove {
        /// Board as nine cells, row by row (e.g. "XX./OO./...")
        #[arg(short, long)]
        board: Board,

        /// Mark the engine plays
        #[arg(short, long, default_value = "o")]
        computer: Player,

        /// Also print the minimax value of every candidate cell
        #[arg(long)]
        values: bool,
    },

    /// Let the engine play both sides from an empty board
    SelfPlay {
        /// Path to a game configuration file
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,
    },
}
