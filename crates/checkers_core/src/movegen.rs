use crate::{board::Position, types::*};

const KING_DIRS: [i8; 2] = [-1, 1];
const SIDES: [i8; 2] = [-1, 1];

/// Moves available to the piece on `from`, whoever's turn it is.
///
/// Steps and single jumps only: no jump chains, and a step stays legal
/// even when a capture is available.
pub fn moves_from(pos: &Position, from: u8) -> Vec<Move> {
    let mut out = Vec::with_capacity(8);
    moves_from_into(pos, from, &mut out);
    out
}

/// Appends the moves of the piece on `from` to `out`.
pub fn moves_from_into(pos: &Position, from: u8, out: &mut Vec<Move>) {
    let pc = match pos.piece_at(from) {
        Some(p) => p,
        None => return,
    };
    let r = row_of(from);
    let c = col_of(from);

    let forward = [pc.color.forward()];
    let dirs: &[i8] = if pc.king { &KING_DIRS } else { &forward };

    for &dr in dirs {
        for dc in SIDES {
            let near = sq(r + dr, c + dc);
            if let Some(to) = near {
                if pos.piece_at(to).is_none() {
                    out.push(Move::step(from, to));
                }
            }

            if let (Some(mid), Some(to)) = (near, sq(r + 2 * dr, c + 2 * dc)) {
                let jumps_enemy = pos.piece_at(mid).is_some_and(|m| m.color != pc.color);
                if jumps_enemy && pos.piece_at(to).is_none() {
                    out.push(Move::jump(from, to));
                }
            }
        }
    }
}

/// Every move of one color, scanning the board row by row.
pub fn legal_moves_for(pos: &Position, color: Color) -> Vec<Move> {
    let mut out = Vec::with_capacity(32);
    for (from, _) in pos.pieces(color) {
        moves_from_into(pos, from, &mut out);
    }
    out
}

/// Every move of the side to move.
pub fn legal_moves(pos: &Position) -> Vec<Move> {
    legal_moves_for(pos, pos.side_to_move)
}

/// Whether `mv` moves a piece of the side to move to a destination its
/// generator produces, with a matching capture flag.
pub fn is_legal(pos: &Position, mv: Move) -> bool {
    find_move(pos, mv.from, mv.to) == Some(mv)
}

/// Looks up the generated move from `from` to `to` for the side to move.
pub fn find_move(pos: &Position, from: u8, to: u8) -> Option<Move> {
    let pc = pos.piece_at(from)?;
    if pc.color != pos.side_to_move {
        return None;
    }
    moves_from(pos, from).into_iter().find(|m| m.to == to)
}

pub fn has_any_move(pos: &Position, color: Color) -> bool {
    let mut buf = Vec::with_capacity(8);
    pos.pieces(color).any(|(from, _)| {
        buf.clear();
        moves_from_into(pos, from, &mut buf);
        !buf.is_empty()
    })
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
