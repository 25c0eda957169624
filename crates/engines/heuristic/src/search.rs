//! One-ply move selection.

use crate::eval::score_move;
use checkers_core::{Move, Position};
use rand::seq::SliceRandom;
use rand::Rng;

/// Why a move was chosen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Pick {
    /// Drawn at random from the available captures
    Capture(Move),
    /// Highest-scoring king move
    King(Move, f32),
}

impl Pick {
    pub(crate) fn mv(self) -> Move {
        match self {
            Pick::Capture(mv) | Pick::King(mv, _) => mv,
        }
    }
}

/// Picks a capture if there is one, else the best king move.
///
/// Returns `None` when the side to move has neither, leaving the choice
/// to the random fallback.
pub(crate) fn pick_move<R: Rng + ?Sized>(pos: &Position, moves: &[Move], rng: &mut R) -> Option<Pick> {
    let captures: Vec<Move> = moves.iter().copied().filter(|m| m.is_capture).collect();
    if let Some(mv) = captures.choose(rng) {
        return Some(Pick::Capture(*mv));
    }

    let mut best: Option<(Move, f32)> = None;
    for &mv in moves {
        let is_king = pos.piece_at(mv.from).is_some_and(|p| p.king);
        if !is_king {
            continue;
        }
        let score = score_move(pos, mv);
        // Strict comparison keeps the first of equally scored moves
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((mv, score)),
        }
    }

    best.map(|(mv, score)| Pick::King(mv, score))
}
