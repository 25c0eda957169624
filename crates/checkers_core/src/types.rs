use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Black,
}
impl Color {
    pub fn other(self) -> Color {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        }
    }
    pub fn idx(self) -> usize {
        match self {
            Color::Red => 0,
            Color::Black => 1,
        }
    }
    /// Row delta a man of this color moves by.
    pub fn forward(self) -> i8 {
        match self {
            Color::Red => -1,
            Color::Black => 1,
        }
    }
    /// Row on which a man of this color is crowned.
    pub fn promotion_row(self) -> i8 {
        match self {
            Color::Red => 0,
            Color::Black => 7,
        }
    }
    /// Rows holding this color's men in the starting layout.
    pub fn home_rows(self) -> std::ops::RangeInclusive<i8> {
        match self {
            Color::Red => 5..=7,
            Color::Black => 0..=2,
        }
    }
    pub fn name(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Black => "black",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    pub color: Color,
    pub king: bool,
}

impl Piece {
    pub fn man(color: Color) -> Self {
        Self { color, king: false }
    }
    pub fn king(color: Color) -> Self {
        Self { color, king: true }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: u8, // 0..63
    pub to: u8,   // 0..63
    pub is_capture: bool,
}

impl Move {
    pub fn step(from: u8, to: u8) -> Self {
        Self {
            from,
            to,
            is_capture: false,
        }
    }
    pub fn jump(from: u8, to: u8) -> Self {
        Self {
            from,
            to,
            is_capture: true,
        }
    }
    /// Square of the jumped piece, for captures.
    pub fn captured_sq(&self) -> Option<u8> {
        if !self.is_capture {
            return None;
        }
        sq(
            (row_of(self.from) + row_of(self.to)) / 2,
            (col_of(self.from) + col_of(self.to)) / 2,
        )
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = if self.is_capture { 'x' } else { '-' };
        write!(f, "{}{}{}", sq_to_coord(self.from), sep, sq_to_coord(self.to))
    }
}

/// Opponent strength, mapped onto a move-selection strategy by the front ends.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!("unknown difficulty: {other}")),
        }
    }
}

// Helpers
pub fn row_of(sq: u8) -> i8 {
    (sq / 8) as i8
}
pub fn col_of(sq: u8) -> i8 {
    (sq % 8) as i8
}
pub fn sq(row: i8, col: i8) -> Option<u8> {
    if (0..8).contains(&row) && (0..8).contains(&col) {
        Some((row as u8) * 8 + (col as u8))
    } else {
        None
    }
}
/// Dark squares, the only ones a piece may stand on.
pub fn is_playable(sq: u8) -> bool {
    (row_of(sq) + col_of(sq)) % 2 == 1
}

pub fn sq_to_coord(sq: u8) -> String {
    format!("{},{}", row_of(sq), col_of(sq))
}

/// Parses `"row,col"` (also accepts a space or no separator, e.g. `"5 0"`, `"50"`).
pub fn coord_to_sq(c: &str) -> Option<u8> {
    let digits: Vec<i8> = c
        .chars()
        .filter(|ch| !matches!(ch, ',' | ' ' | '(' | ')'))
        .map(|ch| ch.to_digit(10).map(|d| d as i8))
        .collect::<Option<_>>()?;
    match digits.as_slice() {
        [r, c] => sq(*r, *c),
        _ => None,
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
