//! Checkers integration tests.
//!
//! Capture chains, promotion and the end of the game.

use game_hub::games::checkers::{Checker, Checkers, Color};
use game_hub::{Board, Game, GameEvent, Input, Outcome, Snapshot, Square};

fn sq(row: usize, col: usize) -> Square {
    Square::new(row, col)
}

fn click(game: &mut Checkers, row: usize, col: usize) -> bool {
    game.handle_input(Input::Square(sq(row, col)))
}

// =============================================================================
// Capture Tests
// =============================================================================

/// Test a single jump with nothing further: the turn flips to black.
#[test]
fn test_single_jump_flips_turn() {
    let mut board = Board::empty();
    board.place(sq(2, 1), Checker::man(Color::Red));
    board.place(sq(3, 2), Checker::man(Color::Black));
    board.place(sq(6, 1), Checker::man(Color::Black));
    let mut game = Checkers::with_position(board, Color::Red);

    assert!(click(&mut game, 2, 1));
    assert!(click(&mut game, 4, 3));
    assert_eq!(game.current_player(), Color::Black);
    assert_eq!(game.piece_count(Color::Black), 1);
    assert!(game.board().get(sq(3, 2)).is_none());
    assert!(!game.must_capture());
}

/// Test a double jump: the turn holds until the chain ends.
#[test]
fn test_double_jump_chain() {
    let mut board = Board::empty();
    board.place(sq(5, 6), Checker::man(Color::Black));
    board.place(sq(4, 5), Checker::man(Color::Red));
    board.place(sq(2, 3), Checker::man(Color::Red));
    board.place(sq(0, 7), Checker::man(Color::Red));
    let mut game = Checkers::with_position(board, Color::Black);

    assert!(click(&mut game, 5, 6));
    assert!(click(&mut game, 3, 4));
    assert_eq!(game.current_player(), Color::Black);
    assert!(game.must_capture());
    assert_eq!(game.status(), "Black must continue capturing");

    // Red pieces are untouchable mid-chain, and so is the deselect click.
    assert!(!click(&mut game, 0, 7));
    assert!(!click(&mut game, 3, 4));

    assert!(click(&mut game, 1, 2));
    assert_eq!(game.current_player(), Color::Red);
    assert_eq!(game.piece_count(Color::Red), 1);

    let events = game.drain_events();
    let captured: Vec<_> = events
        .iter()
        .filter_map(|e| match e {
            GameEvent::Captured { at } => Some(*at),
            _ => None,
        })
        .collect();
    assert_eq!(captured, vec![sq(4, 5), sq(2, 3)]);
    assert!(events.contains(&GameEvent::CaptureContinues { at: sq(3, 4) }));
}

/// Test that captures are optional when a turn starts.
#[test]
fn test_capture_not_forced_at_turn_start() {
    let mut board = Board::empty();
    board.place(sq(2, 1), Checker::man(Color::Red));
    board.place(sq(3, 2), Checker::man(Color::Black));
    let mut game = Checkers::with_position(board, Color::Red);

    assert!(click(&mut game, 2, 1));
    assert!(click(&mut game, 3, 0));
    assert_eq!(game.current_player(), Color::Black);
}

// =============================================================================
// Promotion Tests
// =============================================================================

/// Test that a king landing on the crowning row does not promote again.
#[test]
fn test_promotion_once() {
    let mut board = Board::empty();
    board.place(sq(1, 2), Checker::man(Color::Black));
    board.place(sq(6, 5), Checker::man(Color::Red));
    let mut game = Checkers::with_position(board, Color::Black);

    assert!(game.try_move(sq(1, 2), sq(0, 1)));
    assert!(game.try_move(sq(6, 5), sq(7, 4)));
    assert!(game.try_move(sq(0, 1), sq(1, 0)));
    assert!(game.try_move(sq(7, 4), sq(6, 3)));
    assert!(game.try_move(sq(1, 0), sq(0, 1)));

    let promotions = game
        .drain_events()
        .into_iter()
        .filter(|e| matches!(e, GameEvent::Promoted { .. }))
        .count();
    assert_eq!(promotions, 2);
    assert!(game.board().get(sq(0, 1)).is_some_and(|p| p.is_king()));
}

// =============================================================================
// Game End Tests
// =============================================================================

/// Test that taking the last piece ends the game.
#[test]
fn test_last_piece_taken() {
    let mut board = Board::empty();
    board.place(sq(4, 3), Checker::king(Color::Black));
    board.place(sq(3, 2), Checker::man(Color::Red));
    let mut game = Checkers::with_position(board, Color::Black);

    assert!(game.try_move(sq(4, 3), sq(2, 1)));
    assert_eq!(game.outcome(), Some(Outcome::Winner(Color::Black)));
    assert_eq!(game.status(), "Black wins!");

    let Snapshot::Checkers(view) = game.snapshot() else {
        panic!("wrong snapshot variant");
    };
    assert!(view.game_over);
    assert_eq!(view.winner, Some(Color::Black));
    assert!(!click(&mut game, 2, 1));
}

/// Test the opening position through the façade.
#[test]
fn test_new_game_position() {
    let mut host = game_hub::Host::new();
    let mut game = Checkers::new();
    game.init(&mut host);
    assert_eq!(game.status(), "Red's turn");
    assert_eq!(game.piece_count(Color::Red), 12);
    assert_eq!(game.piece_count(Color::Black), 12);

    assert!(click(&mut game, 2, 3));
    assert!(click(&mut game, 3, 4));
    game.new_game(&mut host);
    assert!(game.board().get(sq(2, 3)).is_some());
    assert_eq!(game.current_player(), Color::Red);

    game.cleanup(&mut host);
    assert!(host.is_idle());
}
