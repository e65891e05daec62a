//! Tests for the minimax engine's move choices.

use unbeatable_tictactoe::{
    Board, DRAW_SCORE, FirstPlayer, GameSession, Minimax, Outcome, Player, Position, Roles,
    SearchError, WIN_SCORE,
};

fn engine() -> Minimax {
    // Human X, computer O.
    Minimax::new(Roles::default())
}

fn board(s: &str) -> Board {
    s.parse().expect("valid board")
}

#[test]
fn test_empty_board_opens_in_first_square() {
    let best = engine().analyze(&Board::new(), Player::O).unwrap();
    assert_eq!(best.position.to_index(), 0);
    assert_eq!(best.score, DRAW_SCORE);
}

#[test]
fn test_corner_opening_answered_with_center() {
    let engine = engine();
    let board = board("X........");
    assert_eq!(engine.best_move(&board, Player::O), Ok(Position::Center));

    // The center is the only reply that avoids a loss.
    let scores = engine.score_moves(&board, Player::O).unwrap();
    let drawing: Vec<_> = scores.iter().filter(|c| c.score == DRAW_SCORE).collect();
    assert_eq!(drawing.len(), 1);
    assert_eq!(drawing[0].position, Position::Center);
}

#[test]
fn test_forced_block() {
    let board = board("XX..O....");
    assert_eq!(engine().best_move(&board, Player::O), Ok(Position::TopRight));
}

#[test]
fn test_deterministic() {
    let engine = engine();
    let board = board("X...O...X");
    let first = engine.best_move(&board, Player::O);
    for _ in 0..5 {
        assert_eq!(engine.best_move(&board, Player::O), first);
    }
}

#[test]
fn test_board_unchanged_after_search() {
    let engine = engine();
    for text in [".........", "X........", "XX..O....", "XO.X.O..X"] {
        let board = board(text);
        let before = board;
        let _ = engine.best_move(&board, board.next_player());
        assert_eq!(board, before);
        assert_eq!(board.to_string(), text);
    }
}

#[test]
fn test_finished_boards_fail_fast() {
    let engine = engine();
    assert_eq!(
        engine.best_move(&board("XOXOXOOXO"), Player::X),
        Err(SearchError::NoEmptySquares)
    );
    assert_eq!(
        engine.best_move(&board("XXXOO...."), Player::O),
        Err(SearchError::GameOver(Player::X))
    );
}

#[test]
fn test_roles_can_be_swapped() {
    let engine = Minimax::new(Roles::new(Player::O));
    let board = board("OO.XX....");
    // Computer X can win at once on the middle row. Blocking the top row
    // also forks the middle row and the anti-diagonal, so it wins too, and
    // it comes first.
    let scores = engine.score_moves(&board, Player::X).unwrap();
    assert_eq!(scores[0].position, Position::TopRight);
    assert_eq!(scores[0].score, WIN_SCORE);
    assert_eq!(engine.best_move(&board, Player::X), Ok(Position::TopRight));
}

/// Plays every possible human reply against the engine, counting computer
/// wins and draws.
fn explore(session: &GameSession, results: &mut [usize; 2]) {
    match session.outcome() {
        Outcome::Won(player) if player == session.roles().human() => {
            panic!(
                "human won after {:?}\n{}",
                session.history(),
                session.board().display()
            );
        }
        Outcome::Won(_) => results[0] += 1,
        Outcome::Draw => results[1] += 1,
        Outcome::InProgress if session.is_computer_turn() => {
            let mut next = session.clone();
            next.computer_move().expect("computer can move");
            explore(&next, results);
        }
        Outcome::InProgress => {
            for position in Position::valid_moves(session.board()) {
                let mut next = session.clone();
                next.human_move(position).expect("legal human move");
                explore(&next, results);
            }
        }
    }
}

#[test]
fn test_never_loses_when_human_opens() {
    let mut results = [0; 2];
    explore(&GameSession::new(Roles::default(), FirstPlayer::Human), &mut results);
    assert!(results[0] > 0, "some human lines should lose");
    assert!(results[1] > 0, "best human play draws");
}

#[test]
fn test_never_loses_when_computer_opens() {
    let mut results = [0; 2];
    explore(&GameSession::new(Roles::default(), FirstPlayer::Computer), &mut results);
    assert!(results[0] > 0);
    assert!(results[1] > 0);
}

#[test]
fn test_never_loses_playing_x() {
    let mut results = [0; 2];
    let roles = Roles::with_computer(Player::X);
    explore(&GameSession::new(roles, FirstPlayer::Human), &mut results);
    assert!(results[1] > 0);
}
