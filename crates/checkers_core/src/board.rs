use crate::types::*;
use std::fmt;

/// Errors raised while building a position from a text diagram.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("expected 8 rows in diagram, found {0}")]
    RowCount(usize),
    #[error("row {row}: expected 8 cells, found {found}")]
    ColCount { row: usize, found: usize },
    #[error("invalid piece char {ch:?} at {row},{col}")]
    BadChar { ch: char, row: usize, col: usize },
    #[error("piece on light square {row},{col}")]
    LightSquare { row: usize, col: usize },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    pub board: [Option<Piece>; 64],
    pub side_to_move: Color,
}

impl Default for Position {
    fn default() -> Self {
        Self::startpos()
    }
}

impl Position {
    /// Red on the playable squares of rows 5..=7, Black on rows 0..=2, Red to move.
    pub fn startpos() -> Self {
        let mut p = Position::empty(Color::Red);
        for sq in 0..64u8 {
            if !is_playable(sq) {
                continue;
            }
            let row = row_of(sq);
            for color in [Color::Red, Color::Black] {
                if color.home_rows().contains(&row) {
                    p.board[sq as usize] = Some(Piece::man(color));
                }
            }
        }
        p
    }

    pub fn empty(side_to_move: Color) -> Self {
        Position {
            board: [None; 64],
            side_to_move,
        }
    }

    /// Builds a position from an 8-line diagram, row 0 first.
    ///
    /// `.` is an empty cell, `r`/`R` a red man/king and `b`/`B` a black
    /// man/king. Whitespace inside a line is ignored, blank lines are skipped.
    pub fn from_diagram(diagram: &str, side_to_move: Color) -> Result<Self, BoardError> {
        let rows: Vec<Vec<char>> = diagram
            .lines()
            .map(|l| l.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>())
            .filter(|r| !r.is_empty())
            .collect();
        if rows.len() != 8 {
            return Err(BoardError::RowCount(rows.len()));
        }

        let mut pos = Position::empty(side_to_move);
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != 8 {
                return Err(BoardError::ColCount {
                    row,
                    found: cells.len(),
                });
            }
            for (col, &ch) in cells.iter().enumerate() {
                let piece = match ch {
                    '.' => continue,
                    'r' => Piece::man(Color::Red),
                    'R' => Piece::king(Color::Red),
                    'b' => Piece::man(Color::Black),
                    'B' => Piece::king(Color::Black),
                    _ => return Err(BoardError::BadChar { ch, row, col }),
                };
                if (row + col) % 2 == 0 {
                    return Err(BoardError::LightSquare { row, col });
                }
                pos.board[row * 8 + col] = Some(piece);
            }
        }
        Ok(pos)
    }

    pub fn piece_at(&self, sq: u8) -> Option<Piece> {
        self.board[sq as usize]
    }
    pub fn set_piece(&mut self, sq: u8, pc: Option<Piece>) {
        self.board[sq as usize] = pc;
    }

    /// Squares and pieces of one color in row-major order.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (u8, Piece)> + '_ {
        (0..64u8).filter_map(move |sq| match self.piece_at(sq) {
            Some(pc) if pc.color == color => Some((sq, pc)),
            _ => None,
        })
    }

    pub fn piece_count(&self, color: Color) -> usize {
        self.board
            .iter()
            .flatten()
            .filter(|pc| pc.color == color)
            .count()
    }

    /// Applies a move without checking legality and passes the turn.
    ///
    /// Moves the piece, crowns a man reaching its promotion row and removes
    /// the jumped piece of a two-row move. Returns the captured piece.
    pub fn make_move(&mut self, mv: Move) -> Option<Piece> {
        let Some(mut moved) = self.piece_at(mv.from) else {
            debug_assert!(false, "no piece on from-square {}", sq_to_coord(mv.from));
            self.side_to_move = self.side_to_move.other();
            return None;
        };

        self.set_piece(mv.from, None);
        if !moved.king && row_of(mv.to) == moved.color.promotion_row() {
            moved.king = true;
        }
        self.set_piece(mv.to, Some(moved));

        let mut captured = None;
        if (row_of(mv.to) - row_of(mv.from)).abs() == 2 {
            let mid = sq(
                (row_of(mv.from) + row_of(mv.to)) / 2,
                (col_of(mv.from) + col_of(mv.to)) / 2,
            );
            if let Some(mid) = mid {
                captured = self.piece_at(mid);
                self.set_piece(mid, None);
            }
        }

        self.side_to_move = self.side_to_move.other();
        captured
    }

    /// The side whose opponent has no pieces left, if any.
    ///
    /// A side with pieces but no legal move is not reported here; see
    /// [`crate::GameStatus::of`].
    pub fn winner(&self) -> Option<Color> {
        let red = self.piece_count(Color::Red);
        let black = self.piece_count(Color::Black);
        if red == 0 {
            Some(Color::Black)
        } else if black == 0 {
            Some(Color::Red)
        } else {
            None
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  0 1 2 3 4 5 6 7")?;
        for row in 0..8i8 {
            write!(f, "{row}")?;
            for col in 0..8i8 {
                let ch = match sq(row, col).and_then(|s| self.piece_at(s)) {
                    None => '.',
                    Some(Piece { color: Color::Red, king: false }) => 'r',
                    Some(Piece { color: Color::Red, king: true }) => 'R',
                    Some(Piece { color: Color::Black, king: false }) => 'b',
                    Some(Piece { color: Color::Black, king: true }) => 'B',
                };
                write!(f, " {ch}")?;
            }
            writeln!(f)?;
        }
        write!(f, "{} to move", self.side_to_move)
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
