//! Main application state and logic

use crate::board::{BoardMessage, BoardView};
use crate::styles::PANEL_WIDTH;

use checkers_core::{Difficulty, GameState, Move, Settings};
use iced::widget::{
    button, column, container, horizontal_rule, pick_list, row, scrollable, text, vertical_space,
};
use iced::{Element, Length, Task, Theme};
use llm_engine::create_engine;
use tracing::{debug, info};

/// Main application state
pub struct CheckersApp {
    /// Game state
    game: GameState,
    /// Strength of the computer side
    difficulty: Difficulty,
    /// Loaded once at startup, handed to every engine search
    settings: Settings,
}

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    // Board interaction
    Board(BoardMessage),

    // Game controls
    NewGame,
    DifficultyChanged(Difficulty),

    // Engine reply, tagged with the game generation it was computed for
    EngineMoveReady(u64, Option<Move>),
}

impl CheckersApp {
    pub fn new(settings: Settings) -> (Self, Task<Message>) {
        (
            Self {
                game: GameState::new(),
                difficulty: settings.difficulty,
                settings,
            },
            Task::none(),
        )
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Board(BoardMessage::SquareClicked(sq)) => {
                // Only allow human moves
                if !self.game.accepts_human_input() {
                    return Task::none();
                }
                self.game.select_square(sq);
                self.maybe_trigger_engine_move()
            }

            Message::NewGame => {
                self.game.reset();
                self.maybe_trigger_engine_move()
            }

            Message::DifficultyChanged(difficulty) => {
                info!(%difficulty, "difficulty changed");
                self.difficulty = difficulty;
                self.game.reset();
                self.maybe_trigger_engine_move()
            }

            Message::EngineMoveReady(generation, mv) => {
                if self.game.accept_engine_move(generation, mv) {
                    return self.maybe_trigger_engine_move();
                }
                Task::none()
            }
        }
    }

    /// If the computer side is to move, search on a blocking thread.
    fn maybe_trigger_engine_move(&mut self) -> Task<Message> {
        if !self.game.is_engine_turn() {
            return Task::none();
        }

        let generation = self.game.begin_engine_turn();
        let position = self.game.position.clone();
        let difficulty = self.difficulty;
        let settings = self.settings.clone();

        Task::perform(
            async move {
                // Run engine search in blocking task
                tokio::task::spawn_blocking(move || {
                    let mut engine = create_engine(difficulty, &settings);
                    let result = engine.search(&position);
                    debug!(engine = engine.name(), nodes = result.nodes, "engine searched");
                    result.best_move
                })
                .await
                .ok()
                .flatten()
            },
            move |mv| Message::EngineMoveReady(generation, mv),
        )
    }

    pub fn view(&self) -> Element<'_, Message> {
        let board = BoardView::new(&self.game).view().map(Message::Board);

        row![
            board,
            container(self.control_panel())
                .width(PANEL_WIDTH)
                .height(Length::Fill)
                .padding(15),
        ]
        .spacing(20)
        .padding(20)
        .into()
    }

    /// Render the control panel
    fn control_panel(&self) -> Element<'_, Message> {
        let new_game_btn = button(text("New Game"))
            .on_press(Message::NewGame)
            .style(button::primary)
            .width(Length::Fill);

        let difficulty_picker = pick_list(
            Difficulty::ALL,
            Some(self.difficulty),
            Message::DifficultyChanged,
        )
        .width(Length::Fill);

        // Move history, numbered per red/black pair
        let mut moves_list = column![].spacing(2);
        for (i, pair) in self.game.moves.chunks(2).enumerate() {
            let red_move = pair[0].to_string();
            let black_move = pair.get(1).map(|m| m.to_string()).unwrap_or_default();
            moves_list =
                moves_list.push(text(format!("{}. {} {}", i + 1, red_move, black_move)).size(13));
        }

        column![
            new_game_btn,
            vertical_space().height(20),
            text("Difficulty").size(14),
            difficulty_picker,
            vertical_space().height(20),
            horizontal_rule(1),
            vertical_space().height(10),
            text(status_text(&self.game)).size(16),
            vertical_space().height(20),
            horizontal_rule(1),
            vertical_space().height(10),
            text("Moves").size(16),
            scrollable(moves_list).height(Length::Fill),
        ]
        .spacing(5)
        .into()
    }
}

/// Status line under the controls: "Red to move", "Engine thinking...", "Red wins".
pub fn status_text(game: &GameState) -> String {
    if game.status.is_over() {
        capitalize(&game.status.to_string())
    } else if game.engine_thinking {
        "Engine thinking...".to_string()
    } else {
        capitalize(&format!("{} to move", game.side_to_move()))
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod app_tests;
