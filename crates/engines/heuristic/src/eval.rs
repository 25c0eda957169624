//! Move scoring for the heuristic engine.

use checkers_core::{col_of, row_of, Move, Position};

/// Bonus for a move that jumps a piece.
const CAPTURE_BONUS: f32 = 10.0;
/// Middle of the board on either axis.
const CENTER: f32 = 3.5;

/// Scores a candidate move for the piece standing on `mv.from`.
///
/// Men earn `2` per row short of row 7 at the destination, every move earns
/// up to `3` for landing near the central columns, captures earn `10`, and
/// kings earn up to `5` for staying near the middle rows.
///
/// Returns `0.0` when `mv.from` is empty.
pub fn score_move(pos: &Position, mv: Move) -> f32 {
    let piece = match pos.piece_at(mv.from) {
        Some(p) => p,
        None => return 0.0,
    };
    let to_row = row_of(mv.to) as f32;
    let to_col = col_of(mv.to) as f32;

    let mut score = 0.0;

    // Progress towards crowning
    if !piece.king {
        score += (7.0 - to_row) * 2.0;
    }

    // Center control
    score += 3.0 - (CENTER - to_col).abs();

    if mv.is_capture {
        score += CAPTURE_BONUS;
    }

    // Kings stay mobile in the middle rows
    if piece.king {
        score += 5.0 - (CENTER - to_row).abs();
    }

    score
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
