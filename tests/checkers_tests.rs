//! Checkers integration tests.

use board_engines::core::{GameConfig, Square, BOARD_SIZE};
use board_engines::games::checkers::{Checker, CheckersEvent, CheckersGame, CheckersGrid, Color};
use board_engines::rules::{BoardGame, SelectOutcome};

fn sq(row: u8, col: u8) -> Square {
    Square::new(row, col)
}

fn grid(pieces: &[(Square, Checker)]) -> CheckersGrid {
    let mut grid: CheckersGrid = [[None; BOARD_SIZE]; BOARD_SIZE];
    for &(at, checker) in pieces {
        grid[at.row as usize][at.col as usize] = Some(checker);
    }
    grid
}

fn play(game: &mut CheckersGame, from: Square, to: Square) -> Vec<CheckersEvent> {
    assert_eq!(game.select(from), SelectOutcome::Selected(from));
    match game.select(to) {
        SelectOutcome::Moved(events) => events,
        other => panic!("{from}-{to} did not move: {other:?}"),
    }
}

/// Test the opening move options for red.
#[test]
fn test_red_opening_moves() {
    let game = CheckersGame::default();
    let movable: Vec<Square> = Square::all()
        .filter(|&s| game.holds_own_piece(s) && !game.legal_targets(s).is_empty())
        .collect();
    // only the front row (row 5) can step
    assert!(movable.iter().all(|s| s.row == 5));
    assert_eq!(movable.len(), 4);
    assert_eq!(game.legal_targets(sq(5, 0)), vec![sq(4, 1)]);
}

/// Test alternating steps through the selection flow.
#[test]
fn test_turns_alternate() {
    let mut game = CheckersGame::default();
    let events = play(&mut game, sq(5, 2), sq(4, 3));
    assert_eq!(events.last(), Some(&CheckersEvent::TurnChanged(Color::Black)));
    play(&mut game, sq(2, 1), sq(3, 2));
    assert_eq!(game.current_turn(), Color::Red);
}

/// Test a jump through the flow removes the jumped checker.
#[test]
fn test_jump_captures() {
    let mut game = CheckersGame::default();
    play(&mut game, sq(5, 2), sq(4, 3));
    play(&mut game, sq(2, 5), sq(3, 4));
    let events = play(&mut game, sq(4, 3), sq(2, 5));

    assert_eq!(
        events[0],
        CheckersEvent::Captured {
            checker: Checker::man(Color::Black),
            at: sq(3, 4),
        }
    );
    assert_eq!(game.piece_at(sq(3, 4)), None);
    assert_eq!(game.piece_count(Color::Black), 11);
}

/// Test that crowning is reported and a king can then step backward.
#[test]
fn test_promotion_then_backward_step() {
    let pieces = [
        (sq(1, 2), Checker::man(Color::Red)),
        (sq(6, 1), Checker::man(Color::Black)),
    ];
    let mut game = CheckersGame::from_position(GameConfig::default(), grid(&pieces), Color::Red);

    let events = play(&mut game, sq(1, 2), sq(0, 1));
    assert!(events.contains(&CheckersEvent::Promoted { at: sq(0, 1) }));
    assert_eq!(game.piece_at(sq(0, 1)), Some(Checker::king(Color::Red)));

    play(&mut game, sq(6, 1), sq(7, 0));
    assert!(game.legal_targets(sq(0, 1)).contains(&sq(1, 2)));
    assert!(game.legal_targets(sq(0, 1)).contains(&sq(1, 0)));
}

/// Test that losing the last checker decides the game.
#[test]
fn test_last_capture_wins() {
    let pieces = [
        (sq(4, 3), Checker::man(Color::Red)),
        (sq(3, 4), Checker::man(Color::Black)),
    ];
    let mut game = CheckersGame::from_position(GameConfig::default(), grid(&pieces), Color::Red);

    play(&mut game, sq(4, 3), sq(2, 5));
    assert_eq!(game.piece_count(Color::Black), 0);
    assert_eq!(game.winner(), Some(Color::Red));
    assert_eq!(game.select(sq(2, 5)), SelectOutcome::Ignored);
}

/// Test that a side with checkers but no move loses.
#[test]
fn test_blocked_side_loses() {
    // both steps occupied, the only on-board jump lands on a red man
    let pieces = [
        (sq(0, 1), Checker::man(Color::Black)),
        (sq(1, 0), Checker::man(Color::Red)),
        (sq(1, 2), Checker::man(Color::Red)),
        (sq(2, 3), Checker::man(Color::Red)),
    ];
    let game = CheckersGame::from_position(GameConfig::default(), grid(&pieces), Color::Black);
    assert_eq!(game.winner(), Some(Color::Red));
}

/// Test that reset restores the starting layout and red to move.
#[test]
fn test_reset() {
    let mut game = CheckersGame::default();
    play(&mut game, sq(5, 2), sq(4, 3));
    game.reset();
    assert_eq!(game.board_state(), CheckersGame::default().board_state());
    assert_eq!(game.current_turn(), Color::Red);
}
