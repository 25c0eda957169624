use super::*;
use checkers_core::{is_legal, sq, Color, Piece};

#[test]
fn random_engine_returns_legal_move() {
    let mut engine = RandomEngine::new();
    let pos = Position::startpos();

    let result = engine.search(&pos);

    assert!(result.best_move.is_some());
    assert!(is_legal(&pos, result.best_move.unwrap()));
    assert_eq!(result.nodes, 7);
}

#[test]
fn random_engine_plays_for_side_to_move() {
    let mut engine = RandomEngine::with_seed(11);
    let mut pos = Position::startpos();
    pos.side_to_move = Color::Black;

    for _ in 0..20 {
        let mv = engine.search(&pos).best_move.unwrap();
        assert_eq!(pos.piece_at(mv.from).unwrap().color, Color::Black);
    }
}

#[test]
fn random_engine_seed_is_reproducible() {
    let pos = Position::startpos();
    let mut a = RandomEngine::with_seed(42);
    let mut b = RandomEngine::with_seed(42);
    for _ in 0..10 {
        assert_eq!(a.search(&pos).best_move, b.search(&pos).best_move);
    }
}

#[test]
fn random_engine_handles_no_pieces() {
    let mut engine = RandomEngine::new();
    let mut pos = Position::empty(Color::Black);
    pos.set_piece(sq(5, 0).unwrap(), Some(Piece::man(Color::Red)));

    let result = engine.search(&pos);

    assert!(result.best_move.is_none());
}

#[test]
fn random_engine_handles_blocked_side() {
    let mut engine = RandomEngine::new();
    let pos = Position::from_diagram(
        "
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . b . .
        . . . . . . b .
        . . . . . . . r
        . . . . . . . .
        ",
        Color::Red,
    )
    .unwrap();

    let result = engine.search(&pos);

    assert!(result.best_move.is_none());
}
