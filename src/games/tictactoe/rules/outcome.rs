//! Outcome of a board from the two roles' point of view.

use super::super::{Board, Player, Roles};
use super::draw::is_full;
use super::win::has_won;
use serde::{Deserialize, Serialize};

/// Result of evaluating a board. Derived on demand, never stored apart from
/// the board it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

impl Outcome {
    /// True for `Won` and `Draw`.
    pub fn is_over(self) -> bool {
        self != Outcome::InProgress
    }

    /// The winning mark, if any.
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::Won(player) => Some(player),
            _ => None,
        }
    }
}

/// Evaluates the board.
///
/// The computer's line is checked before the human's. Under alternating play
/// both can never hold a line at once, so the order only matters for boards
/// that were not reached by legal play.
pub fn evaluate_outcome(board: &Board, roles: &Roles) -> Outcome {
    if has_won(board, roles.computer()) {
        Outcome::Won(roles.computer())
    } else if has_won(board, roles.human()) {
        Outcome::Won(roles.human())
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
