//! Unbeatable tic-tac-toe library
//!
//! Tic-tac-toe against a computer that searches the whole game tree and
//! therefore never loses.
//!
//! # Architecture
//!
//! - **Evaluator**: win and draw detection over the eight winning lines
//! - **Search**: exhaustive minimax that picks the computer's move
//! - **Session**: one game's board, turn, outcome and history
//! - **Config**: mark assignment, opener and pacing loaded from TOML
//!
//! # Example
//!
//! ```
//! use unbeatable_tictactoe::{Board, Minimax, Player, Position, Roles};
//!
//! // Human (X) threatens the top row; the computer (O) must block.
//! let board: Board = "XX..O....".parse().unwrap();
//! let engine = Minimax::new(Roles::new(Player::X));
//! assert_eq!(engine.best_move(&board, Player::O), Ok(Position::TopRight));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod report;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Solve report
pub use report::{SolveError, SolveReport};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, Candidate, DRAW_SCORE, FirstPlayer, GameSession, LOSS_SCORE, Minimax, Move, MoveError,
    Outcome, ParseBoardError, Player, Position, Roles, Score, SearchError, Square, WIN_PATTERNS,
    WIN_SCORE, check_winner, evaluate_outcome, has_won, is_full, winning_line,
};
