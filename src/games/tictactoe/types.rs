//! Core domain types for tic-tac-toe.

use super::error::ParseBoardError;
use super::position::Position;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A mark on the board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Player {
    /// Player X.
    X,
    /// Player O.
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the symbol used by [`Board`]'s text form.
    pub fn symbol(self) -> char {
        match self {
            Square::Empty => '.',
            Square::Occupied(Player::X) => 'X',
            Square::Occupied(Player::O) => 'O',
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Squares are stored in row-major order, so index 0 is the top-left
/// corner and index 8 the bottom-right one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Places a mark at the given position.
    pub fn place(&mut self, pos: Position, player: Player) {
        self.set(pos, Square::Occupied(player));
    }

    /// Empties the square at the given position.
    pub fn clear(&mut self, pos: Position) {
        self.set(pos, Square::Empty);
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Number of squares holding `player`'s mark.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|&&s| s == Square::Occupied(player))
            .count()
    }

    /// Whose turn it is judging by the mark counts, with X moving first.
    pub fn next_player(&self) -> Player {
        if self.count(Player::X) > self.count(Player::O) {
            Player::O
        } else {
            Player::X
        }
    }

    /// Checks the reachability invariant on mark counts.
    ///
    /// A board produced by alternating moves has mark counts that differ by
    /// at most one, and neither mark can appear more than five times.
    pub fn has_valid_counts(&self) -> bool {
        let x = self.count(Player::X);
        let o = self.count(Player::O);
        x.abs_diff(o) <= 1 && x <= 5 && o <= 5
    }

    /// Formats the board as a human-readable grid.
    ///
    /// Empty squares show their 1-based number, matching the keys used to
    /// play them.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares[pos] {
                    Square::Empty => (pos + 1).to_string(),
                    Square::Occupied(player) => player.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for square in &self.squares {
            write!(f, "{}", square.symbol())?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parses nine cells, `X`/`O` for marks and `.`, `_`, `-` or a space for
    /// empty squares. Separators `|`, `/` and newlines are skipped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut squares = [Square::Empty; 9];
        let mut len = 0;

        for c in s.chars().filter(|c| !matches!(c, '|' | '/' | '\n' | '\r')) {
            let square = match c {
                'X' | 'x' => Square::Occupied(Player::X),
                'O' | 'o' => Square::Occupied(Player::O),
                '.' | '_' | '-' | ' ' => Square::Empty,
                other => return Err(ParseBoardError::InvalidCell(other)),
            };
            if len < 9 {
                squares[len] = square;
            }
            len += 1;
        }

        if len != 9 {
            return Err(ParseBoardError::WrongLength(len));
        }
        Ok(Self { squares })
    }
}

/// Which mark the human holds and which the computer holds.
///
/// Fixed when a game starts; a new assignment needs a new session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Roles {
    human: Player,
    computer: Player,
}

impl Roles {
    /// Gives the human `human` and the computer the other mark.
    pub fn new(human: Player) -> Self {
        Self {
            human,
            computer: human.opponent(),
        }
    }

    /// Builds roles from the computer's mark.
    pub fn with_computer(computer: Player) -> Self {
        Self::new(computer.opponent())
    }

    /// The human's mark.
    pub fn human(&self) -> Player {
        self.human
    }

    /// The computer's mark.
    pub fn computer(&self) -> Player {
        self.computer
    }
}

impl Default for Roles {
    /// Human plays X, computer plays O.
    fn default() -> Self {
        Self::new(Player::X)
    }
}
