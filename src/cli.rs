//! Command-line interface for unbeatable_tictactoe.

use clap::{Parser, Subcommand};
use unbeatable_tictactoe::{Board, FirstPlayer, Player};

/// Unbeatable Tic-Tac-Toe - play against a computer that never loses
#[derive(Parser, Debug)]
#[command(name = "unbeatable_tictactoe")]
#[command(about = "Tic-tac-toe against an exhaustive minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal
    Play {
        /// Path to game config file
        #[arg(short, long, default_value = "tictactoe.toml")]
        config: std::path::PathBuf,

        /// Mark for the human player (overrides the config file)
        #[arg(long)]
        human_mark: Option<Player>,

        /// Who opens each game (overrides the config file)
        #[arg(long, value_enum)]
        first: Option<FirstPlayer>,
    },

    /// Print the engine's move for a position
    Solve {
        /// Nine cells in row-major order, X/O for marks and . _ - for empty
        #[arg(short, long)]
        board: Board,

        /// Mark to move (defaults to whoever is due by the mark counts, X first)
        #[arg(long)]
        to_move: Option<Player>,

        /// Mark the computer plays
        #[arg(long, default_value = "O")]
        computer: Player,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}
