//! Command-line interface for the tic-tac-toe engine.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tictactoe_engine::Difficulty;

/// Tic-tac-toe against a minimax opponent
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe against a minimax engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Settings shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct EngineArgs {
    /// Path to an engine config file (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Difficulty: easy, medium or unbeatable (overrides the config file)
    #[arg(short, long)]
    pub difficulty: Option<Difficulty>,

    /// Seed for the engine's random choices (overrides the config file)
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game in the terminal
    Play {
        #[command(flatten)]
        engine: EngineArgs,

        /// Let the engine move first (engine plays X)
        #[arg(long, conflicts_with = "two_player")]
        human_second: bool,

        /// Two humans share the terminal; no engine moves
        #[arg(long)]
        two_player: bool,
    },

    /// Print the engine's move for a board
    Suggest {
        /// Nine cells, row-major: X, O and . for empty (e.g. "XX.OO....")
        board: String,

        #[command(flatten)]
        engine: EngineArgs,

        /// Also print the minimax score of every legal move
        #[arg(long)]
        scores: bool,
    },

    /// Let the engine play itself and tally the results
    Selfplay {
        /// Number of games
        #[arg(short, long, default_value = "100")]
        games: u32,

        /// Difficulty of the X side
        #[arg(long, default_value = "unbeatable")]
        x: Difficulty,

        /// Difficulty of the O side
        #[arg(long, default_value = "unbeatable")]
        o: Difficulty,

        /// Path to an engine config file (TOML); only tuning and seed are used
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Seed for the engines' random choices
        #[arg(long)]
        seed: Option<u64>,
    },
}
