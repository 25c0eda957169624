//! Ordered fallback over several engines.

use crate::{Engine, Position, SearchResult};
use tracing::{debug, warn};

/// Tries each engine in order and returns the first result carrying a move.
///
/// Node counts of the engines that came up empty are folded into the
/// returned result. When every engine misses the result carries no move.
pub struct FallbackChain {
    engines: Vec<Box<dyn Engine>>,
    name: String,
}

impl FallbackChain {
    pub fn new(engines: Vec<Box<dyn Engine>>) -> Self {
        let name = engines
            .iter()
            .map(|e| e.name())
            .collect::<Vec<_>>()
            .join(" > ");
        Self { engines, name }
    }

    pub fn len(&self) -> usize {
        self.engines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.engines.is_empty()
    }
}

impl Engine for FallbackChain {
    fn search(&mut self, pos: &Position) -> SearchResult {
        let mut nodes = 0;
        let count = self.engines.len();

        for (i, engine) in self.engines.iter_mut().enumerate() {
            let mut result = engine.search(pos);
            nodes += result.nodes;
            if result.best_move.is_some() {
                debug!(engine = engine.name(), "fallback chain resolved");
                result.nodes = nodes;
                return result;
            }
            if i + 1 < count {
                warn!(engine = engine.name(), "no move, falling back to next engine");
            }
        }

        SearchResult {
            best_move: None,
            score: 0,
            nodes,
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn new_game(&mut self) {
        for engine in &mut self.engines {
            engine.new_game();
        }
    }
}
