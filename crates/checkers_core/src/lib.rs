pub mod board;
pub mod chain;
pub mod game;
pub mod movegen;
pub mod settings;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use chain::FallbackChain;
pub use game::*;
pub use movegen::*;
pub use settings::*;
pub use types::*;

// =============================================================================
// Engine trait, implemented by every move-selection strategy
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchResult {
    /// The chosen move (None if the side to move has no legal moves)
    pub best_move: Option<Move>,
    /// Strategy-specific score of the chosen move (0 when unscored)
    pub score: i32,
    /// Number of candidate moves considered (optional, for stats)
    pub nodes: u64,
}

/// Trait that all move-selection strategies implement.
///
/// Strategies look one ply ahead at most: they pick among the legal moves
/// of `pos.side_to_move` and never mutate the position.
pub trait Engine: Send {
    /// Pick a move for the side to move.
    ///
    /// # Returns
    /// SearchResult whose `best_move` is accepted by [`is_legal`], or `None`
    /// when the side to move has no legal move.
    fn search(&mut self, pos: &Position) -> SearchResult;

    /// Returns the engine's display name
    fn name(&self) -> &str;

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}
