//! A single human-versus-computer game.

use super::action::Move;
use super::error::MoveError;
use super::position::Position;
use super::rules::{Outcome, evaluate_outcome, winning_line};
use super::search::Minimax;
use super::types::{Board, Player, Roles};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Which side takes the first move in a new game.
///
/// Defaults to [`FirstPlayer::Human`], as in the classic game where the
/// human opens.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum FirstPlayer {
    /// The human opens.
    #[default]
    Human,
    /// The computer opens.
    Computer,
}

impl FirstPlayer {
    /// Returns the display label for this option.
    pub fn label(self) -> &'static str {
        match self {
            Self::Human => "Human",
            Self::Computer => "Computer",
        }
    }
}

/// Game state owned by whoever drives the game.
///
/// The session hands its board to the search engine only for the duration
/// of [`GameSession::computer_move`]; nothing else writes to it meanwhile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    board: Board,
    roles: Roles,
    first_player: FirstPlayer,
    to_move: Player,
    outcome: Outcome,
    history: Vec<Move>,
}

impl GameSession {
    /// Starts a new game.
    #[instrument]
    pub fn new(roles: Roles, first_player: FirstPlayer) -> Self {
        info!(
            human = %roles.human(),
            computer = %roles.computer(),
            first = first_player.label(),
            "Starting game session"
        );
        Self {
            board: Board::new(),
            roles,
            first_player,
            to_move: Self::opener(roles, first_player),
            outcome: Outcome::InProgress,
            history: Vec::new(),
        }
    }

    fn opener(roles: Roles, first_player: FirstPlayer) -> Player {
        match first_player {
            FirstPlayer::Human => roles.human(),
            FirstPlayer::Computer => roles.computer(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark assignment.
    pub fn roles(&self) -> &Roles {
        &self.roles
    }

    /// Returns who opens each game of this session.
    pub fn first_player(&self) -> FirstPlayer {
        self.first_player
    }

    /// Returns the mark to move. Meaningless once the game is over.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the current outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns the moves played so far.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// True while the game runs and the human is to move.
    pub fn is_human_turn(&self) -> bool {
        !self.outcome.is_over() && self.to_move == self.roles.human()
    }

    /// True while the game runs and the computer is to move.
    pub fn is_computer_turn(&self) -> bool {
        !self.outcome.is_over() && self.to_move == self.roles.computer()
    }

    /// The completed line of the winner, if the game has been won.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        self.outcome
            .winner()
            .and_then(|winner| winning_line(&self.board, winner))
    }

    /// Places the mark to move at `position`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] after the game ended and
    /// [`MoveError::SquareOccupied`] if the square is taken.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn play(&mut self, position: Position) -> Result<Outcome, MoveError> {
        if self.outcome.is_over() {
            return Err(MoveError::GameOver);
        }
        if !self.board.is_empty(position) {
            return Err(MoveError::SquareOccupied(position));
        }

        let player = self.to_move;
        self.board.place(position, player);
        self.history.push(Move::new(player, position));
        self.outcome = evaluate_outcome(&self.board, &self.roles);

        if !self.outcome.is_over() {
            self.to_move = player.opponent();
        }

        debug!(outcome = ?self.outcome, "Move applied");
        Ok(self.outcome)
    }

    /// Plays the human's move.
    ///
    /// # Errors
    ///
    /// As [`GameSession::play`], plus [`MoveError::WrongPlayer`] when it is
    /// the computer's turn.
    pub fn human_move(&mut self, position: Position) -> Result<Outcome, MoveError> {
        if self.outcome.is_over() {
            return Err(MoveError::GameOver);
        }
        if self.to_move != self.roles.human() {
            return Err(MoveError::WrongPlayer(self.roles.human()));
        }
        self.play(position)
    }

    /// Lets the engine pick and play the computer's move.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] after the game ended and
    /// [`MoveError::WrongPlayer`] when it is the human's turn.
    #[instrument(skip(self))]
    pub fn computer_move(&mut self) -> Result<Position, MoveError> {
        if self.outcome.is_over() {
            return Err(MoveError::GameOver);
        }
        if self.to_move != self.roles.computer() {
            return Err(MoveError::WrongPlayer(self.roles.computer()));
        }

        let position = Minimax::new(self.roles).best_move(&self.board, self.to_move)?;
        self.play(position)?;
        info!(position = %position, "Computer played");
        Ok(position)
    }

    /// Clears the board for a new game with the same roles.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!("Resetting game");
        self.board = Board::new();
        self.to_move = Self::opener(self.roles, self.first_player);
        self.outcome = Outcome::InProgress;
        self.history.clear();
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(Roles::default(), FirstPlayer::default())
    }
}
