//! Tic-tac-toe against an exhaustive minimax opponent.

mod action;
mod error;
mod position;
pub mod rules;
mod search;
mod session;
mod types;

pub use action::Move;
pub use error::{MoveError, ParseBoardError, SearchError};
pub use position::Position;
pub use rules::{
    Outcome, WIN_PATTERNS, check_winner, evaluate_outcome, has_won, is_full, winning_line,
};
pub use search::{Candidate, DRAW_SCORE, LOSS_SCORE, Minimax, Score, WIN_SCORE};
pub use session::{FirstPlayer, GameSession};
pub use types::{Board, Player, Roles, Square};
