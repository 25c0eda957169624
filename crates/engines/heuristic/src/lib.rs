//! Heuristic Checkers Engine
//!
//! Looks one ply ahead and prefers, in order:
//! 1. Any capture, chosen at random among the captures
//! 2. The king move with the highest [`score_move`]
//! 3. A random legal move

mod eval;
mod search;

use checkers_core::{legal_moves, Engine, Position, SearchResult};
use rand::rngs::StdRng;
use rand::SeedableRng;
use random_engine::RandomEngine;
use search::Pick;
use tracing::debug;


/// Heuristic engine used for the medium difficulty and as the first
/// fallback of the hard difficulty.
#[derive(Debug, Clone)]
pub struct HeuristicEngine {
    rng: StdRng,
    /// Plays when there is neither a capture nor a king move
    fallback: RandomEngine,
    /// Node counter for statistics
    nodes: u64,
}

impl Default for HeuristicEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl HeuristicEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            fallback: RandomEngine::new(),
            nodes: 0,
        }
    }

    /// Deterministic engine; two engines built from the same seed pick the
    /// same moves from the same positions.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            fallback: RandomEngine::with_seed(seed.wrapping_add(1)),
            nodes: 0,
        }
    }
}

impl Engine for HeuristicEngine {
    fn search(&mut self, pos: &Position) -> SearchResult {
        let moves = legal_moves(pos);
        self.nodes = moves.len() as u64;

        let pick = match search::pick_move(pos, &moves, &mut self.rng) {
            Some(pick) => pick,
            None => {
                debug!(candidates = moves.len(), "no capture or king move, playing random");
                let result = self.fallback.search(pos);
                return SearchResult {
                    nodes: self.nodes,
                    ..result
                };
            }
        };

        let mv = pick.mv();
        let score = match pick {
            Pick::King(_, score) => score,
            Pick::Capture(mv) => score_move(pos, mv),
        };
        debug!(?pick, score, "heuristic move");

        SearchResult {
            best_move: Some(mv),
            // Tenths of a heuristic point
            score: (score * 10.0).round() as i32,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        "Heuristic v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
        self.fallback.new_game();
    }
}

// Re-export for direct use if needed
pub use eval::score_move;
