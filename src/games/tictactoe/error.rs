//! Error types for the tic-tac-toe core.

use super::position::Position;
use super::types::Player;
use derive_more::{Display, From};

/// Error returned when the engine is asked to search a finished board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum SearchError {
    /// Every square is occupied.
    #[display("No empty squares left to search")]
    NoEmptySquares,

    /// A mark already has three in a row.
    #[display("Game is already won by {}", _0)]
    GameOver(Player),
}

impl std::error::Error for SearchError {}

/// Error that can occur when applying a move to a session.
#[derive(Debug, Clone, PartialEq, Eq, Display, From)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    #[from(ignore)]
    SquareOccupied(Position),

    /// The game is already over.
    #[display("Game is already over")]
    #[from(ignore)]
    GameOver,

    /// It's not this player's turn.
    #[display("It's not {}'s turn", _0)]
    #[from(ignore)]
    WrongPlayer(Player),

    /// The engine could not pick a move.
    #[display("Search failed: {}", _0)]
    Search(SearchError),
}

impl std::error::Error for MoveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MoveError::Search(e) => Some(e),
            _ => None,
        }
    }
}

/// Error parsing a board from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ParseBoardError {
    /// The text did not describe exactly nine cells.
    #[display("Expected 9 cells, found {}", _0)]
    WrongLength(usize),

    /// A cell was neither a mark nor an empty marker.
    #[display("Invalid cell {:?} (expected X, O, or one of . _ -)", _0)]
    InvalidCell(char),
}

impl std::error::Error for ParseBoardError {}
