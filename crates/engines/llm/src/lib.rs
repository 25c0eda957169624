//! LLM Checkers Engine
//!
//! Asks a hosted language model for a move and checks the answer against
//! the legal moves. The model is an unreliable collaborator: a missing API
//! key, a network error, an unparseable or illegal reply all end with
//! `best_move: None`, so that a [`FallbackChain`] moves on to the local
//! engines.
//!
//! # Difficulties
//!
//! [`create_engine`] builds the engine for each difficulty:
//! - easy: [`RandomEngine`]
//! - medium: [`HeuristicEngine`]
//! - hard: `LlmEngine<GeminiOracle>`, then heuristic, then random

mod error;
mod gemini;
mod prompt;

pub use error::ServiceError;
pub use gemini::{request_body, response_text, GeminiOracle};
pub use prompt::{
    board_json, build_prompt, extract_json_span, moves_json, parse_suggestion, resolve_suggestion,
    Cell, WireMove,
};

use checkers_core::{
    is_legal, legal_moves, sq_to_coord, Difficulty, Engine, FallbackChain, Move, Position,
    SearchResult, Settings,
};
use heuristic_engine::HeuristicEngine;
use random_engine::RandomEngine;
use tracing::{debug, warn};


/// Something that can suggest a move, usually over the network.
pub trait MoveOracle: Send {
    /// Suggest one of `legal`, the moves of `pos.side_to_move`.
    fn suggest_move(&self, pos: &Position, legal: &[Move]) -> Result<Move, ServiceError>;

    fn name(&self) -> &str {
        "oracle"
    }
}

impl<F> MoveOracle for F
where
    F: Fn(&Position, &[Move]) -> Result<Move, ServiceError> + Send,
{
    fn suggest_move(&self, pos: &Position, legal: &[Move]) -> Result<Move, ServiceError> {
        self(pos, legal)
    }
}

/// Engine that plays whatever its oracle suggests, if it is legal.
pub struct LlmEngine<O: MoveOracle> {
    oracle: O,
    /// Cached name string (avoids allocation on every call)
    name: String,
    nodes: u64,
}

impl<O: MoveOracle> LlmEngine<O> {
    pub fn new(oracle: O) -> Self {
        let name = format!("LLM-{}", oracle.name());
        Self {
            oracle,
            name,
            nodes: 0,
        }
    }

    pub fn oracle(&self) -> &O {
        &self.oracle
    }
}

impl<O: MoveOracle> Engine for LlmEngine<O> {
    fn search(&mut self, pos: &Position) -> SearchResult {
        let legal = legal_moves(pos);
        self.nodes = legal.len() as u64;
        if legal.is_empty() {
            return SearchResult::default();
        }

        let suggestion = self.oracle.suggest_move(pos, &legal).and_then(|mv| {
            // The oracle may be any implementation, so check again
            if is_legal(pos, mv) {
                Ok(mv)
            } else {
                Err(ServiceError::IllegalSuggestion(format!(
                    "{}-{}",
                    sq_to_coord(mv.from),
                    sq_to_coord(mv.to)
                )))
            }
        });

        let best_move = match suggestion {
            Ok(mv) => {
                debug!(engine = %self.name, %mv, "service move accepted");
                Some(mv)
            }
            Err(e) => {
                warn!(engine = %self.name, error = %e, "move service failed, falling back");
                None
            }
        };

        SearchResult {
            best_move,
            score: 0,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}

/// Service first, then the heuristic, then random.
pub fn hard_chain<O: MoveOracle + 'static>(
    oracle: O,
    heuristic: HeuristicEngine,
    random: RandomEngine,
) -> FallbackChain {
    FallbackChain::new(vec![
        Box::new(LlmEngine::new(oracle)) as Box<dyn Engine>,
        Box::new(heuristic) as Box<dyn Engine>,
        Box::new(random) as Box<dyn Engine>,
    ])
}

/// Engine playing the computer side at `difficulty`.
pub fn create_engine(difficulty: Difficulty, settings: &Settings) -> Box<dyn Engine> {
    match difficulty {
        Difficulty::Easy => Box::new(RandomEngine::new()),
        Difficulty::Medium => Box::new(HeuristicEngine::new()),
        Difficulty::Hard => {
            let oracle = GeminiOracle::new(&settings.llm);
            if !oracle.has_api_key() {
                warn!(
                    var = %settings.llm.api_key_env,
                    "no API key for the move service, hard games will use the heuristic engine"
                );
            }
            Box::new(hard_chain(oracle, HeuristicEngine::new(), RandomEngine::new()))
        }
    }
}
