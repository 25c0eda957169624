//! Game session: the position plus everything a front end tracks around it.

use crate::{board::Position, movegen, types::*};
use std::fmt;
use tracing::{debug, info, warn};

/// Why a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WinReason {
    /// The loser has no pieces left
    NoPieces,
    /// The loser is to move, has pieces, and none of them can move
    NoMoves,
}

/// Game result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won { winner: Color, reason: WinReason },
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    pub fn winner(&self) -> Option<Color> {
        match self {
            GameStatus::InProgress => None,
            GameStatus::Won { winner, .. } => Some(*winner),
        }
    }

    /// Evaluates a position: piece count first, then whether the side to move is blocked.
    pub fn of(pos: &Position) -> Self {
        if let Some(winner) = pos.winner() {
            return GameStatus::Won {
                winner,
                reason: WinReason::NoPieces,
            };
        }
        if !movegen::has_any_move(pos, pos.side_to_move) {
            return GameStatus::Won {
                winner: pos.side_to_move.other(),
                reason: WinReason::NoMoves,
            };
        }
        GameStatus::InProgress
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "in progress"),
            GameStatus::Won {
                winner,
                reason: WinReason::NoPieces,
            } => write!(f, "{winner} wins"),
            GameStatus::Won {
                winner,
                reason: WinReason::NoMoves,
            } => write!(f, "{winner} wins ({} cannot move)", winner.other()),
        }
    }
}

/// Rejected human move attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("the game is over")]
    GameOver,
    #[error("it is not the human side's turn")]
    NotYourTurn,
    #[error("no piece on {}", coord(.0))]
    NoPiece(u8),
    #[error("the piece on {} belongs to the other side", coord(.0))]
    NotYourPiece(u8),
    #[error("{} cannot move to {}", coord(.0), coord(.1))]
    IllegalDestination(u8, u8),
}

fn coord(sq: &u8) -> String {
    sq_to_coord(*sq)
}

/// Represents the current state of a checkers game
#[derive(Debug, Clone)]
pub struct GameState {
    /// Current position
    pub position: Position,
    /// Side controlled by the human player
    pub human: Color,
    /// Moves played so far
    pub moves: Vec<Move>,
    /// Currently selected square (for move input)
    pub selected_square: Option<u8>,
    /// Moves of the selected piece
    pub legal_moves_from_selected: Vec<Move>,
    /// Last move (for highlighting)
    pub last_move: Option<Move>,
    /// Game result
    pub status: GameStatus,
    /// Is engine thinking?
    pub engine_thinking: bool,
    /// Bumped on every reset so late engine replies can be recognised
    pub generation: u64,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self::from_position(Position::startpos(), Color::Red)
    }

    /// Start a session from an arbitrary position.
    pub fn from_position(position: Position, human: Color) -> Self {
        let status = GameStatus::of(&position);
        Self {
            position,
            human,
            moves: Vec::new(),
            selected_square: None,
            legal_moves_from_selected: Vec::new(),
            last_move: None,
            status,
            engine_thinking: false,
            generation: 0,
        }
    }

    /// Replace the game wholesale, invalidating any outstanding engine search.
    pub fn reset(&mut self) {
        let generation = self.generation + 1;
        *self = Self {
            generation,
            ..Self::from_position(Position::startpos(), self.human)
        };
        info!(generation, "new game");
    }

    pub fn side_to_move(&self) -> Color {
        self.position.side_to_move
    }

    /// Whether the human may act right now.
    pub fn accepts_human_input(&self) -> bool {
        !self.status.is_over() && !self.engine_thinking && self.side_to_move() == self.human
    }

    /// Whether the engine should be asked for a move.
    pub fn is_engine_turn(&self) -> bool {
        !self.status.is_over() && !self.engine_thinking && self.side_to_move() != self.human
    }

    /// Click handling: select a piece, or move the selected piece.
    ///
    /// Clicking one of the human's own pieces selects it. Any other click
    /// while a piece is selected is a move attempt; illegal attempts are
    /// ignored. The selection is cleared after every attempt. Returns the
    /// move if one was applied.
    pub fn select_square(&mut self, sq: u8) -> Option<Move> {
        if !self.accepts_human_input() {
            return None;
        }

        if let Some(piece) = self.position.piece_at(sq) {
            if piece.color == self.human {
                self.selected_square = Some(sq);
                self.legal_moves_from_selected = movegen::moves_from(&self.position, sq);
                return None;
            }
        }

        let applied = match self.selected_square {
            Some(from) => match self.try_move(from, sq) {
                Ok(mv) => Some(mv),
                Err(e) => {
                    debug!(error = %e, "ignoring move attempt");
                    None
                }
            },
            None => None,
        };

        self.clear_selection();
        applied
    }

    /// Validate and apply a human move. The selection is cleared either way.
    pub fn try_move(&mut self, from: u8, to: u8) -> Result<Move, MoveError> {
        self.clear_selection();

        if self.status.is_over() {
            return Err(MoveError::GameOver);
        }
        if self.side_to_move() != self.human || self.engine_thinking {
            return Err(MoveError::NotYourTurn);
        }
        let piece = self.position.piece_at(from).ok_or(MoveError::NoPiece(from))?;
        if piece.color != self.human {
            return Err(MoveError::NotYourPiece(from));
        }
        let mv = movegen::find_move(&self.position, from, to)
            .ok_or(MoveError::IllegalDestination(from, to))?;

        self.apply_move(mv);
        Ok(mv)
    }

    /// Apply a move to the game state. The move must already be legal.
    pub fn apply_move(&mut self, mv: Move) {
        let mover = self.side_to_move();
        let captured = self.position.make_move(mv);
        self.moves.push(mv);
        self.last_move = Some(mv);
        self.clear_selection();
        self.status = GameStatus::of(&self.position);

        debug!(
            side = %mover,
            mv = %mv,
            captured = captured.is_some(),
            status = %self.status,
            "move applied"
        );
    }

    /// Mark the engine as busy and hand back the generation to tag its reply with.
    pub fn begin_engine_turn(&mut self) -> u64 {
        self.engine_thinking = true;
        self.generation
    }

    /// Apply an engine reply computed for `generation`.
    ///
    /// Replies for an earlier game are dropped untouched. A reply of `None`
    /// or an illegal move only releases the thinking flag. Returns whether
    /// a move was applied.
    pub fn accept_engine_move(&mut self, generation: u64, mv: Option<Move>) -> bool {
        if generation != self.generation {
            debug!(
                stale = generation,
                current = self.generation,
                "discarding engine reply for an abandoned game"
            );
            return false;
        }
        self.engine_thinking = false;

        let Some(mv) = mv else {
            return false;
        };
        if self.status.is_over() || !movegen::is_legal(&self.position, mv) {
            warn!(mv = %mv, "engine returned an illegal move");
            return false;
        }
        self.apply_move(mv);
        true
    }

    /// Destinations highlighted for the current selection.
    pub fn highlighted_targets(&self) -> impl Iterator<Item = u8> + '_ {
        self.legal_moves_from_selected.iter().map(|m| m.to)
    }

    fn clear_selection(&mut self) {
        self.selected_square = None;
        self.legal_moves_from_selected.clear();
    }
}
