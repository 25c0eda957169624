//! Random Move Checkers Engine
//!
//! Selects moves uniformly at random from all legal moves of the side to move.
//! Used for:
//! - The easy difficulty
//! - The last link of the hard difficulty's fallback chain
//! - Baseline comparisons (the heuristic engine should beat this comfortably)

use checkers_core::{legal_moves, Engine, Position, SearchResult};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::debug;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod lib_tests;

/// A checkers engine that plays random legal moves.
///
/// This engine provides no evaluation - it simply picks a random move
/// from all available legal moves.
#[derive(Debug, Clone)]
pub struct RandomEngine {
    rng: StdRng,
    nodes: u64,
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            nodes: 0,
        }
    }

    /// Deterministic engine for reproducible games and tests.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            nodes: 0,
        }
    }
}

impl Engine for RandomEngine {
    fn search(&mut self, pos: &Position) -> SearchResult {
        let moves = legal_moves(pos);
        self.nodes = moves.len() as u64;

        let best_move = moves.choose(&mut self.rng).copied();
        debug!(candidates = moves.len(), chosen = ?best_move, "random move");

        SearchResult {
            best_move,
            score: 0,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
