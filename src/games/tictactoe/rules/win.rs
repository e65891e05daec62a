//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};

/// The eight winning lines: three rows, three columns, two diagonals.
pub const WIN_PATTERNS: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns true if `player` holds all three squares of any winning line.
pub fn has_won(board: &Board, player: Player) -> bool {
    winning_line(board, player).is_some()
}

/// Returns the first winning line held by `player`, if any.
///
/// Used to highlight the completed line once a game is decided.
pub fn winning_line(board: &Board, player: Player) -> Option<[Position; 3]> {
    let mark = Square::Occupied(player);
    WIN_PATTERNS
        .into_iter()
        .find(|line| line.iter().all(|&pos| board.get(pos) == mark))
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Player> {
    [Player::X, Player::O]
        .into_iter()
        .find(|&player| has_won(board, player))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
        assert!(!has_won(&board, Player::X));
        assert!(!has_won(&board, Player::O));
    }

    #[test]
    fn test_winner_top_row() {
        let mut board = Board::new();
        board.place(Position::TopLeft, Player::X);
        board.place(Position::TopCenter, Player::X);
        board.place(Position::TopRight, Player::X);
        assert_eq!(check_winner(&board), Some(Player::X));
        assert!(!has_won(&board, Player::O));
    }

    #[test]
    fn test_winner_diagonal() {
        let mut board = Board::new();
        board.place(Position::TopRight, Player::O);
        board.place(Position::Center, Player::O);
        board.place(Position::BottomLeft, Player::O);
        assert_eq!(check_winner(&board), Some(Player::O));
        assert_eq!(
            winning_line(&board, Player::O),
            Some([Position::TopRight, Position::Center, Position::BottomLeft])
        );
    }

    #[test]
    fn test_no_winner_incomplete() {
        let mut board = Board::new();
        board.place(Position::TopLeft, Player::X);
        board.place(Position::TopCenter, Player::X);
        assert_eq!(check_winner(&board), None);
        assert_eq!(winning_line(&board, Player::X), None);
    }

    #[test]
    fn test_every_pattern_wins() {
        for line in WIN_PATTERNS {
            let mut board = Board::new();
            for pos in line {
                board.place(pos, Player::O);
            }
            assert!(has_won(&board, Player::O), "{line:?} should win");
            assert_eq!(winning_line(&board, Player::O), Some(line));
        }
    }

    #[test]
    fn test_mixed_line_does_not_win() {
        let board: Board = "XOX......".parse().unwrap();
        assert_eq!(check_winner(&board), None);
    }
}
