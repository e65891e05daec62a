//! Exhaustive minimax search for the computer's move.
//!
//! Every legal continuation is explored to the end of the game. Scores are
//! always from the computer's point of view: a computer win is worth
//! [`WIN_SCORE`], a human win [`LOSS_SCORE`] and a draw [`DRAW_SCORE`].
//! There is no depth bonus, so every win is worth the same.
//!
//! The search works on a single scratch board. Each candidate move is placed,
//! scored recursively for the opponent, then cleared again before the next
//! candidate, so the board is back in its original state when a level
//! returns.

use super::error::SearchError;
use super::position::Position;
use super::rules::{check_winner, has_won, is_full};
use super::types::{Board, Player, Roles};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Minimax value of a position, from the computer's point of view.
pub type Score = i32;

/// Value of a board the computer has won.
pub const WIN_SCORE: Score = 10;
/// Value of a board the human has won.
pub const LOSS_SCORE: Score = -10;
/// Value of a drawn board.
pub const DRAW_SCORE: Score = 0;

/// A legal move and its minimax value. Only lives for one search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// Square to play.
    pub position: Position,
    /// Value of the resulting position with both sides playing optimally.
    pub score: Score,
}

/// Minimax search engine.
///
/// The engine maximises the score when the computer is to move and
/// minimises it when the human is to move. Ties go to the lowest square
/// index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Minimax {
    roles: Roles,
}

impl Minimax {
    /// Creates an engine for the given mark assignment.
    pub fn new(roles: Roles) -> Self {
        Self { roles }
    }

    /// The mark assignment scores are computed for.
    pub fn roles(&self) -> &Roles {
        &self.roles
    }

    /// Returns the optimal square for `to_move`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::GameOver`] if a mark already holds a line and
    /// [`SearchError::NoEmptySquares`] if the board is full.
    #[instrument(skip(self, board), fields(board = %board, player = %to_move))]
    pub fn best_move(&self, board: &Board, to_move: Player) -> Result<Position, SearchError> {
        self.analyze(board, to_move).map(|candidate| candidate.position)
    }

    /// Returns the optimal square for `to_move` together with its score.
    pub fn analyze(&self, board: &Board, to_move: Player) -> Result<Candidate, SearchError> {
        let candidates = self.score_moves(board, to_move)?;
        let best = self
            .pick(&candidates, to_move)
            .ok_or(SearchError::NoEmptySquares)?;

        debug!(
            position = best.position.to_index(),
            score = best.score,
            "Selected move"
        );
        Ok(best)
    }

    /// Scores every legal move for `to_move`, in ascending square order.
    ///
    /// # Errors
    ///
    /// Same as [`Minimax::best_move`].
    pub fn score_moves(&self, board: &Board, to_move: Player) -> Result<Vec<Candidate>, SearchError> {
        if let Some(winner) = check_winner(board) {
            return Err(SearchError::GameOver(winner));
        }
        if is_full(board) {
            return Err(SearchError::NoEmptySquares);
        }

        let mut scratch = *board;
        let mut nodes = 0u64;
        let candidates = self.expand(&mut scratch, to_move, &mut nodes);
        debug_assert_eq!(&scratch, board, "search leaked a move onto the board");

        debug!(nodes, candidates = candidates.len(), "Search complete");
        Ok(candidates)
    }

    /// Chooses among scored moves the way the search does: highest score
    /// for the computer, lowest for the human, lowest square on ties.
    pub fn pick(&self, candidates: &[Candidate], to_move: Player) -> Option<Candidate> {
        select(candidates.iter().copied(), self.maximizes(to_move))
    }

    /// Minimax value of `board` with `player` to move.
    fn search(&self, board: &mut Board, player: Player, nodes: &mut u64) -> Score {
        *nodes += 1;

        if has_won(board, self.roles.human()) {
            return LOSS_SCORE;
        }
        if has_won(board, self.roles.computer()) {
            return WIN_SCORE;
        }

        let candidates = self.expand(board, player, nodes);
        match select(candidates, self.maximizes(player)) {
            Some(best) => best.score,
            None => DRAW_SCORE,
        }
    }

    /// Tries each empty square for `player` and scores it.
    fn expand(&self, board: &mut Board, player: Player, nodes: &mut u64) -> Vec<Candidate> {
        let moves = Position::valid_moves(board);
        let mut candidates = Vec::with_capacity(moves.len());

        for position in moves {
            board.place(position, player);
            let score = self.search(board, player.opponent(), nodes);
            board.clear(position);
            candidates.push(Candidate { position, score });
        }

        candidates
    }

    fn maximizes(&self, player: Player) -> bool {
        player == self.roles.computer()
    }
}

/// Picks the best candidate. Only a strictly better score replaces the
/// current pick, so the first of several equal candidates wins.
fn select(candidates: impl IntoIterator<Item = Candidate>, maximize: bool) -> Option<Candidate> {
    candidates.into_iter().fold(None, |best, candidate| match best {
        Some(current) if !improves(candidate.score, current.score, maximize) => Some(current),
        _ => Some(candidate),
    })
}

fn improves(score: Score, current: Score, maximize: bool) -> bool {
    if maximize { score > current } else { score < current }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(index: usize, score: Score) -> Candidate {
        Candidate {
            position: Position::from_index(index).unwrap(),
            score,
        }
    }

    #[test]
    fn test_select_keeps_first_maximum() {
        let picks = vec![candidate(1, 0), candidate(3, 10), candidate(5, 10)];
        assert_eq!(select(picks, true), Some(candidate(3, 10)));
    }

    #[test]
    fn test_select_keeps_first_minimum() {
        let picks = vec![candidate(0, 0), candidate(2, -10), candidate(7, -10)];
        assert_eq!(select(picks, false), Some(candidate(2, -10)));
    }

    #[test]
    fn test_select_empty() {
        assert_eq!(select(Vec::new(), true), None);
    }

    #[test]
    fn test_terminal_scores() {
        let engine = Minimax::default();
        let mut nodes = 0;

        let mut human_won: Board = "XXXOO....".parse().unwrap();
        assert_eq!(engine.search(&mut human_won, Player::O, &mut nodes), LOSS_SCORE);

        let mut computer_won: Board = "OOOXX.X..".parse().unwrap();
        assert_eq!(engine.search(&mut computer_won, Player::X, &mut nodes), WIN_SCORE);

        let mut drawn: Board = "XOXOXOOXO".parse().unwrap();
        assert_eq!(engine.search(&mut drawn, Player::X, &mut nodes), DRAW_SCORE);
        assert_eq!(nodes, 3);
    }

    #[test]
    fn test_last_square_is_scored() {
        // X O X / X O O / O X _ with X to move: filling the corner draws.
        let board: Board = "XOXXOOOX.".parse().unwrap();
        let best = Minimax::default().analyze(&board, Player::X).unwrap();
        assert_eq!(best, candidate(8, DRAW_SCORE));
    }

    #[test]
    fn test_takes_immediate_win() {
        let board: Board = "OO.XX.X..".parse().unwrap();
        let best = Minimax::default().analyze(&board, Player::O).unwrap();
        assert_eq!(best, candidate(2, WIN_SCORE));
    }

    #[test]
    fn test_wins_are_not_ranked_by_length() {
        // O wins at once on 7, but 3 forks 3-4-5 and 1-4-7 and wins a move
        // later. Both score the same, so the lower square is kept.
        let board: Board = "XOX.O.X..".parse().unwrap();
        let scores = Minimax::default().score_moves(&board, Player::O).unwrap();
        assert_eq!(scores[0], candidate(3, WIN_SCORE));
        assert!(scores.contains(&candidate(7, WIN_SCORE)));
        let best = Minimax::default().best_move(&board, Player::O).unwrap();
        assert_eq!(best, Position::MiddleLeft);
    }

    #[test]
    fn test_human_perspective_minimises() {
        // X to move can win the top row; from X's side that is the lowest
        // score available.
        let board: Board = "XX.OO....".parse().unwrap();
        let best = Minimax::default().analyze(&board, Player::X).unwrap();
        assert_eq!(best, candidate(2, LOSS_SCORE));
    }

    #[test]
    fn test_rejects_finished_boards() {
        let engine = Minimax::default();
        let won: Board = "XXXOO....".parse().unwrap();
        assert_eq!(
            engine.best_move(&won, Player::O),
            Err(SearchError::GameOver(Player::X))
        );
        let full: Board = "XOXOXOOXO".parse().unwrap();
        assert_eq!(
            engine.best_move(&full, Player::X),
            Err(SearchError::NoEmptySquares)
        );
    }
}
