//! Prompt building and reply parsing for the move service.
//!
//! The model sees the board as an 8x8 array (`null`, `"red"`, `"black"`,
//! `"red-king"`, `"black-king"`) and the legal moves as
//! `{"from": {"row": R, "col": C}, "to": {"row": R, "col": C}}` objects,
//! and is asked to answer with one such object.

use crate::error::ServiceError;
use checkers_core::{col_of, row_of, sq, sq_to_coord, Move, Piece, Position};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A board cell as the model sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub row: i8,
    pub col: i8,
}

impl Cell {
    pub fn of(square: u8) -> Self {
        Self {
            row: row_of(square),
            col: col_of(square),
        }
    }
}

/// A move as the model sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireMove {
    pub from: Cell,
    pub to: Cell,
}

impl From<Move> for WireMove {
    fn from(mv: Move) -> Self {
        Self {
            from: Cell::of(mv.from),
            to: Cell::of(mv.to),
        }
    }
}

fn cell_label(piece: Piece) -> String {
    if piece.king {
        format!("{}-king", piece.color)
    } else {
        piece.color.to_string()
    }
}

/// Board as an 8x8 JSON array, row 0 first.
pub fn board_json(pos: &Position) -> Value {
    let rows: Vec<Vec<Option<String>>> = (0..8u8)
        .map(|row| {
            (0..8u8)
                .map(|col| pos.piece_at(row * 8 + col).map(cell_label))
                .collect()
        })
        .collect();
    serde_json::json!(rows)
}

/// Legal moves as a JSON array of `{from, to}` objects.
pub fn moves_json(legal: &[Move]) -> Value {
    let moves: Vec<WireMove> = legal.iter().copied().map(WireMove::from).collect();
    serde_json::json!(moves)
}

pub fn build_prompt(pos: &Position, legal: &[Move]) -> String {
    format!(
        "You are an expert checkers player. Suggest the best move for {side}. \
         Legal moves: {moves}. Board (row 0 first, null is empty):\n{board}\n\
         Respond ONLY with JSON: {{\"from\": {{\"row\": X, \"col\": Y}}, \"to\": {{\"row\": X, \"col\": Y}}}}",
        side = pos.side_to_move,
        moves = moves_json(legal),
        board = board_json(pos),
    )
}

/// The text from the first `{` to the last `}`, inclusive.
///
/// Models like to wrap their answer in prose or code fences; this strips
/// both without trying to balance braces.
pub fn extract_json_span(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}

/// Parses the model's reply text into a move suggestion.
pub fn parse_suggestion(text: &str) -> Result<WireMove, ServiceError> {
    let span = extract_json_span(text).ok_or(ServiceError::NoJson)?;
    Ok(serde_json::from_str(span)?)
}

/// Maps a suggestion onto one of the legal moves.
pub fn resolve_suggestion(suggestion: WireMove, legal: &[Move]) -> Result<Move, ServiceError> {
    let illegal = || {
        ServiceError::IllegalSuggestion(format!(
            "{},{} -> {},{}",
            suggestion.from.row, suggestion.from.col, suggestion.to.row, suggestion.to.col
        ))
    };
    let from = sq(suggestion.from.row, suggestion.from.col).ok_or_else(illegal)?;
    let to = sq(suggestion.to.row, suggestion.to.col).ok_or_else(illegal)?;

    legal
        .iter()
        .copied()
        .find(|m| m.from == from && m.to == to)
        .ok_or_else(|| {
            ServiceError::IllegalSuggestion(format!("{}-{}", sq_to_coord(from), sq_to_coord(to)))
        })
}

#[cfg(test)]
#[path = "prompt_tests.rs"]
mod prompt_tests;
