//! Position analysis printed by the `solve` command.

use crate::games::tictactoe::{
    Board, Candidate, Minimax, Outcome, Player, Roles, Score, evaluate_outcome,
};
use derive_more::Display;
use serde::Serialize;
use tracing::{debug, instrument, warn};

/// Error building a [`SolveReport`].
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum SolveError {
    /// The mark counts cannot come from alternating moves.
    #[display("Board {board} cannot arise from alternating play (X: {x}, O: {o})")]
    Unreachable {
        /// The rejected position.
        board: Board,
        /// Number of X marks.
        x: usize,
        /// Number of O marks.
        o: usize,
    },
}

impl std::error::Error for SolveError {}

/// Engine verdict for one position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SolveReport {
    /// The position, one character per square.
    pub board: String,
    /// Mark to move.
    pub to_move: Player,
    /// Mark the scores are computed for.
    pub computer: Player,
    /// Outcome of the position as given.
    pub outcome: Outcome,
    /// Chosen square index (0-8), absent when the game is over.
    pub best_move: Option<usize>,
    /// Minimax value of the chosen square.
    pub score: Option<Score>,
    /// Every legal square with its value, in index order.
    pub candidates: Vec<Candidate>,
}

impl SolveReport {
    /// Analyses `board` for `to_move`.
    ///
    /// A finished position is reported with its outcome and no move.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::Unreachable`] when the mark counts differ by
    /// more than one or either mark appears more than five times.
    #[instrument(skip(board), fields(board = %board))]
    pub fn new(board: &Board, to_move: Player, roles: Roles) -> Result<Self, SolveError> {
        if !board.has_valid_counts() {
            let err = SolveError::Unreachable {
                board: *board,
                x: board.count(Player::X),
                o: board.count(Player::O),
            };
            warn!(error = %err, "Rejecting board");
            return Err(err);
        }

        let engine = Minimax::new(roles);
        let outcome = evaluate_outcome(board, &roles);

        let candidates = match engine.score_moves(board, to_move) {
            Ok(candidates) => candidates,
            Err(e) => {
                debug!(error = %e, "Nothing to search");
                Vec::new()
            }
        };
        let best = engine.pick(&candidates, to_move);

        Ok(Self {
            board: board.to_string(),
            to_move,
            computer: roles.computer(),
            outcome,
            best_move: best.map(|c| c.position.to_index()),
            score: best.map(|c| c.score),
            candidates,
        })
    }

    /// Plain-text rendering.
    pub fn render(&self, board: &Board) -> String {
        let mut out = board.display();
        out.push_str("\n\n");
        match (self.outcome, self.best_move) {
            (Outcome::Won(player), _) => out.push_str(&format!("{} has won.", player)),
            (Outcome::Draw, _) => out.push_str("Draw."),
            (Outcome::InProgress, Some(index)) => {
                out.push_str(&format!(
                    "{} to move: best square {} (index {}), score {}",
                    self.to_move,
                    index + 1,
                    index,
                    self.score.unwrap_or_default()
                ));
                for candidate in &self.candidates {
                    out.push_str(&format!(
                        "\n  {:<13} {:>3}",
                        candidate.position.label(),
                        candidate.score
                    ));
                }
            }
            (Outcome::InProgress, None) => out.push_str("No move available."),
        }
        out
    }
}
