//! Unbeatable Tic-Tac-Toe - Unified CLI
//!
//! Play in the terminal, or ask the engine about a position.

#![warn(missing_docs)]

mod cli;
mod tui;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use std::path::PathBuf;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;
use unbeatable_tictactoe::{Board, FirstPlayer, GameConfig, Player, Roles, SolveReport};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            human_mark,
            first,
        } => run_play(config, human_mark, first).await,
        Command::Solve {
            board,
            to_move,
            computer,
            json,
        } => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
                )
                .with_writer(std::io::stderr)
                .init();
            run_solve(board, to_move, computer, json)
        }
    }
}

/// Run the terminal game
async fn run_play(
    config_path: PathBuf,
    human_mark: Option<Player>,
    first: Option<FirstPlayer>,
) -> Result<()> {
    let mut config = GameConfig::load_or_default(&config_path)?;
    if let Some(mark) = human_mark {
        config = config.with_human_mark(mark);
    }
    if let Some(first) = first {
        config = config.with_first_player(first);
    }

    tui::run_tui(config).await
}

/// Print the engine's verdict for one position
#[instrument(skip(board), fields(board = %board))]
fn run_solve(board: Board, to_move: Option<Player>, computer: Player, json: bool) -> Result<()> {
    let to_move = to_move.unwrap_or_else(|| board.next_player());
    info!(%to_move, %computer, "Solving position");

    let report = SolveReport::new(&board, to_move, Roles::with_computer(computer))?;
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report.render(&board));
    }
    Ok(())
}
