//! Application state and logic.

use super::input::move_cursor;
use crossterm::event::KeyCode;
use tracing::{debug, warn};
use unbeatable_tictactoe::{GameSession, MoveError, Outcome, Position};

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Keep running.
    Continue,
    /// Leave the game.
    Quit,
}

/// Main application state.
pub struct App {
    session: GameSession,
    cursor: Position,
    status_message: String,
}

impl App {
    /// Creates a new application around a fresh session.
    pub fn new(session: GameSession) -> Self {
        let mut app = Self {
            session,
            cursor: Position::Center,
            status_message: String::new(),
        };
        app.refresh_status();
        app
    }

    /// Gets the current game.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Gets the cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyCode) -> Action {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => return Action::Quit,
            KeyCode::Char('r') => self.restart(),
            KeyCode::Char(' ') | KeyCode::Enter => self.human_move(self.cursor),
            KeyCode::Char(c) => {
                if let Some(position) = Position::from_key(c) {
                    self.cursor = position;
                    self.human_move(position);
                }
            }
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key);
            }
            _ => {}
        }
        Action::Continue
    }

    /// Plays the human's move at `position`.
    pub fn human_move(&mut self, position: Position) {
        debug!(position = %position, "Human move");
        match self.session.human_move(position) {
            Ok(_) => self.refresh_status(),
            Err(e) => {
                debug!(error = %e, "Move rejected");
                self.status_message = format!("Invalid move: {}.", e);
            }
        }
    }

    /// True when the computer should move next.
    pub fn computer_to_move(&self) -> bool {
        self.session.is_computer_turn()
    }

    /// Lets the computer move.
    ///
    /// # Errors
    ///
    /// Passes on the session's [`MoveError`] so the event loop stops instead
    /// of retrying a move that cannot be made.
    pub fn computer_move(&mut self) -> Result<(), MoveError> {
        match self.session.computer_move() {
            Ok(position) => {
                self.cursor = position;
                self.refresh_status();
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Computer could not move");
                self.status_message = format!("Computer could not move: {}.", e);
                Err(e)
            }
        }
    }

    /// Restarts the game.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.session.reset();
        self.cursor = Position::Center;
        self.refresh_status();
    }

    fn refresh_status(&mut self) {
        let roles = *self.session.roles();
        self.status_message = match self.session.outcome() {
            Outcome::InProgress if self.session.is_human_turn() => {
                format!("Your turn ({}).", roles.human())
            }
            Outcome::InProgress => "Computer thinking...".to_string(),
            Outcome::Won(player) if player == roles.human() => {
                "You win! Press 'r' to restart or 'q' to quit.".to_string()
            }
            Outcome::Won(_) => "Computer wins! Press 'r' to restart or 'q' to quit.".to_string(),
            Outcome::Draw => "It's a draw! Press 'r' to restart or 'q' to quit.".to_string(),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use unbeatable_tictactoe::{FirstPlayer, Player, Roles};

    #[test]
    fn test_digit_plays_square() {
        let mut app = App::new(GameSession::default());
        assert_eq!(app.handle_key(KeyCode::Char('5')), Action::Continue);
        assert_eq!(app.session().history().len(), 1);
        assert!(app.computer_to_move());
        assert_eq!(app.status_message(), "Computer thinking...");
    }

    #[test]
    fn test_occupied_square_reports_error() {
        let mut app = App::new(GameSession::default());
        app.handle_key(KeyCode::Char('1'));
        app.computer_move().unwrap();
        app.handle_key(KeyCode::Char('1'));
        assert!(app.status_message().starts_with("Invalid move"));
    }

    #[test]
    fn test_cursor_and_enter() {
        let mut app = App::new(GameSession::default());
        app.handle_key(KeyCode::Up);
        app.handle_key(KeyCode::Left);
        assert_eq!(app.cursor(), Position::TopLeft);
        app.handle_key(KeyCode::Enter);
        assert!(!app.session().board().is_empty(Position::TopLeft));
    }

    #[test]
    fn test_computer_answers_corner_with_center() {
        let mut app = App::new(GameSession::default());
        app.handle_key(KeyCode::Char('1'));
        app.computer_move().unwrap();
        assert_eq!(app.cursor(), Position::Center);
        assert!(app.status_message().starts_with("Your turn"));
    }

    #[test]
    fn test_restart_and_quit() {
        let session = GameSession::new(Roles::new(Player::O), FirstPlayer::Computer);
        let mut app = App::new(session);
        assert!(app.computer_to_move());
        app.computer_move().unwrap();
        app.restart();
        assert!(app.session().history().is_empty());
        assert_eq!(app.handle_key(KeyCode::Char('q')), Action::Quit);
        assert_eq!(app.handle_key(KeyCode::Esc), Action::Quit);
    }

    #[test]
    fn test_failed_computer_move_is_reported() {
        let mut app = App::new(GameSession::default());
        assert_eq!(
            app.computer_move(),
            Err(MoveError::WrongPlayer(Player::O))
        );
        assert!(app.status_message().starts_with("Computer could not move"));
    }
}
