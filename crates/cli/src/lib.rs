//! Line-oriented checkers front end.
//!
//! The human plays red; after each human move the engine for the current
//! difficulty answers straight away.

mod command;

pub use command::{Command, CommandError, HELP};

use checkers_core::{legal_moves, sq_to_coord, Difficulty, Engine, GameState, Settings};
use llm_engine::create_engine;
use std::io::{self, Write};
use tracing::{debug, info};

/// Whether to keep reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Session {
    game: GameState,
    difficulty: Difficulty,
    settings: Settings,
    engine: Box<dyn Engine>,
}

impl Session {
    /// Session at the configured difficulty.
    pub fn new(settings: Settings) -> Self {
        let difficulty = settings.difficulty;
        let engine = create_engine(difficulty, &settings);
        Self::with_engine(settings, difficulty, engine)
    }

    /// Session with a specific engine, kept until the difficulty changes.
    pub fn with_engine(settings: Settings, difficulty: Difficulty, engine: Box<dyn Engine>) -> Self {
        info!(%difficulty, engine = engine.name(), "session started");
        Self {
            game: GameState::new(),
            difficulty,
            settings,
            engine,
        }
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn greet(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "checkers: you play {}, type `help` for commands", self.game.human)?;
        writeln!(out, "{}", self.game.position)
    }

    /// Runs one input line. Bad input prints an error and changes nothing.
    pub fn handle_line(&mut self, line: &str, out: &mut impl Write) -> io::Result<Flow> {
        if line.trim().is_empty() {
            return Ok(Flow::Continue);
        }
        match line.parse::<Command>() {
            Ok(cmd) => self.execute(cmd, out),
            Err(e) => {
                writeln!(out, "error: {e}")?;
                Ok(Flow::Continue)
            }
        }
    }

    pub fn execute(&mut self, cmd: Command, out: &mut impl Write) -> io::Result<Flow> {
        debug!(?cmd, "command");
        match cmd {
            Command::New => {
                self.new_game();
                writeln!(out, "new game")?;
                writeln!(out, "{}", self.game.position)?;
            }
            Command::Board => writeln!(out, "{}", self.game.position)?,
            Command::Moves => {
                let moves = legal_moves(&self.game.position);
                if moves.is_empty() {
                    writeln!(out, "no legal moves")?;
                }
                for mv in moves {
                    writeln!(out, "{mv}")?;
                }
            }
            Command::Select(sq) => match self.game.select_square(sq) {
                Some(mv) => {
                    writeln!(out, "you play {mv}")?;
                    self.engine_reply(out)?;
                }
                None => match self.game.selected_square {
                    Some(from) => {
                        let targets: Vec<String> =
                            self.game.highlighted_targets().map(sq_to_coord).collect();
                        writeln!(
                            out,
                            "selected {}: {}",
                            sq_to_coord(from),
                            if targets.is_empty() {
                                "no moves".to_string()
                            } else {
                                targets.join(" ")
                            }
                        )?;
                    }
                    None => writeln!(out, "nothing selected")?,
                },
            },
            Command::Move(from, to) => match self.game.try_move(from, to) {
                Ok(mv) => {
                    writeln!(out, "you play {mv}")?;
                    self.engine_reply(out)?;
                }
                Err(e) => writeln!(out, "error: {e}")?,
            },
            Command::Difficulty(difficulty) => {
                self.difficulty = difficulty;
                self.engine = create_engine(difficulty, &self.settings);
                self.new_game();
                writeln!(out, "difficulty {difficulty}, new game")?;
            }
            Command::Status => writeln!(out, "{}: {}", self.difficulty, status_line(&self.game))?,
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn new_game(&mut self) {
        self.game.reset();
        self.engine.new_game();
    }

    /// Lets the engine move if it is its turn, then reports the board.
    fn engine_reply(&mut self, out: &mut impl Write) -> io::Result<()> {
        if self.game.is_engine_turn() {
            let generation = self.game.begin_engine_turn();
            let result = self.engine.search(&self.game.position);
            debug!(engine = self.engine.name(), nodes = result.nodes, "engine searched");

            if self.game.accept_engine_move(generation, result.best_move) {
                if let Some(mv) = self.game.last_move {
                    writeln!(out, "engine plays {mv}")?;
                }
            }
        }
        writeln!(out, "{}", self.game.position)?;
        if self.game.status.is_over() {
            writeln!(out, "{}", status_line(&self.game))?;
        }
        Ok(())
    }
}

/// One-line summary of the game for the prompt.
pub fn status_line(game: &GameState) -> String {
    if game.status.is_over() {
        game.status.to_string()
    } else if game.engine_thinking {
        "engine thinking...".to_string()
    } else {
        format!("{} to move", game.side_to_move())
    }
}
