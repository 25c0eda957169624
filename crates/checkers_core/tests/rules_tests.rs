//! Rule-level properties checked over played-out games
//!
//! Games are driven by a seeded move picker so every run
//! walks the same positions:
//! - piece counts only fall, and only by one on a capture
//! - the side to move flips on every move
//! - men never retreat, crowned pieces stay crowned
//! - the piece-count winner appears exactly when a side is wiped out

use checkers_core::{
    Color, GameStatus, Move, Piece, Position, WinReason, is_legal, legal_moves, row_of, sq,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn s(row: i8, col: i8) -> u8 {
    sq(row, col).unwrap()
}

/// Seeded move picker for reproducible playouts.
struct Picker(StdRng);

impl Picker {
    fn new(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }

    fn pick(&mut self, moves: &[Move]) -> Move {
        moves[self.0.gen_range(0..moves.len())]
    }
}

fn total_pieces(pos: &Position) -> usize {
    pos.piece_count(Color::Red) + pos.piece_count(Color::Black)
}

// =============================================================================
// Invariants over random playouts
// =============================================================================

#[test]
fn test_playout_invariants() {
    for seed in 0..40u64 {
        let mut picker = Picker::new(seed);
        let mut pos = Position::startpos();

        for _ in 0..300 {
            let moves = legal_moves(&pos);
            if moves.is_empty() || pos.winner().is_some() {
                break;
            }
            let mv = picker.pick(&moves);
            assert!(is_legal(&pos, mv));

            let before = pos.clone();
            let moved = before.piece_at(mv.from).unwrap();
            pos.make_move(mv);

            // Turn alternates
            assert_eq!(pos.side_to_move, before.side_to_move.other());

            // Count falls by one exactly on captures
            let expected = total_pieces(&before) - usize::from(mv.is_capture);
            assert_eq!(total_pieces(&pos), expected, "seed {seed}, move {mv}");

            // Men advance toward the opponent's edge
            if !moved.king {
                let dr = row_of(mv.to) - row_of(mv.from);
                assert_eq!(dr.signum(), moved.color.forward(), "seed {seed}, move {mv}");
            }

            // Promotion and king persistence
            let landed = pos.piece_at(mv.to).unwrap();
            assert_eq!(landed.color, moved.color);
            if moved.king || row_of(mv.to) == moved.color.promotion_row() {
                assert!(landed.king);
            } else {
                assert!(!landed.king);
            }

            // Every piece stays on a dark square
            for sq in 0..64u8 {
                if pos.piece_at(sq).is_some() {
                    assert!((row_of(sq) + (sq % 8) as i8) % 2 == 1);
                }
            }
        }
    }
}

#[test]
fn test_winner_only_when_side_is_empty() {
    for seed in 0..20u64 {
        let mut picker = Picker::new(seed);
        let mut pos = Position::startpos();
        for _ in 0..300 {
            let red = pos.piece_count(Color::Red);
            let black = pos.piece_count(Color::Black);
            match pos.winner() {
                Some(Color::Red) => assert_eq!(black, 0),
                Some(Color::Black) => assert_eq!(red, 0),
                None => assert!(red > 0 && black > 0),
            }
            let moves = legal_moves(&pos);
            if moves.is_empty() || pos.winner().is_some() {
                break;
            }
            pos.make_move(picker.pick(&moves));
        }
    }
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_capture_scenario() {
    let mut pos = Position::empty(Color::Red);
    pos.set_piece(s(5, 2), Some(Piece::man(Color::Red)));
    pos.set_piece(s(4, 1), Some(Piece::man(Color::Black)));
    pos.set_piece(s(0, 7), Some(Piece::man(Color::Black)));

    let to_corner: Vec<Move> = legal_moves(&pos)
        .into_iter()
        .filter(|m| m.to == s(3, 0))
        .collect();
    assert_eq!(to_corner, vec![Move::jump(s(5, 2), s(3, 0))]);

    pos.make_move(to_corner[0]);
    assert_eq!(pos.piece_at(s(4, 1)), None);
    assert_eq!(pos.piece_at(s(5, 2)), None);
    assert_eq!(pos.piece_at(s(3, 0)), Some(Piece::man(Color::Red)));
}

#[test]
fn test_last_capture_wins() {
    let mut pos = Position::empty(Color::Red);
    pos.set_piece(s(5, 2), Some(Piece::man(Color::Red)));
    pos.set_piece(s(4, 1), Some(Piece::man(Color::Black)));
    assert_eq!(pos.winner(), None);

    pos.make_move(Move::jump(s(5, 2), s(3, 0)));
    assert_eq!(pos.piece_count(Color::Black), 0);
    assert_eq!(pos.winner(), Some(Color::Red));
    assert_eq!(
        GameStatus::of(&pos),
        GameStatus::Won {
            winner: Color::Red,
            reason: WinReason::NoPieces
        }
    );
}

#[test]
fn test_blocked_side_loses() {
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

    // Piece count alone does not end the game
    assert_eq!(pos.winner(), None);
    assert_eq!(
        GameStatus::of(&pos),
        GameStatus::Won {
            winner: Color::Black,
            reason: WinReason::NoMoves
        }
    );
}
