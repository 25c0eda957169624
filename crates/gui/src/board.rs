//! Checkers board widget rendering

use crate::styles::{self, SQUARE_SIZE};
use checkers_core::{sq, GameState};
use iced::widget::{button, column, container, row, text};
use iced::{Color, Element, Length};

/// Message type for board interactions
#[derive(Debug, Clone)]
pub enum BoardMessage {
    SquareClicked(u8),
}

/// Renders the board with row 0 at the top, so red plays upwards.
pub struct BoardView<'a> {
    game: &'a GameState,
}

impl<'a> BoardView<'a> {
    pub fn new(game: &'a GameState) -> Self {
        Self { game }
    }

    /// Create the board view element
    pub fn view(&self) -> Element<'a, BoardMessage> {
        let mut board_column = column![].spacing(0);

        for r in 0..8i8 {
            let mut board_row = row![].spacing(0);
            for c in 0..8i8 {
                if let Some(square) = sq(r, c) {
                    board_row = board_row.push(self.render_square(square, r, c));
                }
            }
            board_column = board_column.push(board_row);
        }

        container(board_column)
            .style(|_theme| container::Style {
                border: iced::Border {
                    color: Color::from_rgb(0.3, 0.3, 0.3),
                    width: 2.0,
                    radius: 0.0.into(),
                },
                ..Default::default()
            })
            .into()
    }

    /// Render a single square
    fn render_square(&self, square: u8, r: i8, c: i8) -> Element<'a, BoardMessage> {
        let is_light = (r + c) % 2 == 0;
        let mut bg_color = if is_light {
            styles::LIGHT_SQUARE
        } else {
            styles::DARK_SQUARE
        };

        if self.game.selected_square == Some(square) {
            bg_color = styles::SELECTED_SQUARE;
        }

        if let Some(mv) = self.game.last_move {
            if square == mv.from || square == mv.to {
                bg_color = blend_colors(bg_color, styles::LAST_MOVE_SQUARE);
            }
        }

        let is_target = self.game.highlighted_targets().any(|t| t == square);

        let content: Element<'a, BoardMessage> = match self.game.position.piece_at(square) {
            Some(piece) => text(styles::piece_glyph(piece))
                .size(SQUARE_SIZE * 0.7)
                .color(styles::piece_color(piece.color))
                .center()
                .into(),
            None if is_target => text("•")
                .size(SQUARE_SIZE * 0.4)
                .color(styles::TARGET_DOT)
                .center()
                .into(),
            None => text("").into(),
        };

        let square_button = button(
            container(content)
                .width(SQUARE_SIZE)
                .height(SQUARE_SIZE)
                .center_x(Length::Fill)
                .center_y(Length::Fill),
        )
        .width(SQUARE_SIZE)
        .height(SQUARE_SIZE)
        .style(move |_theme, status| {
            let hover_overlay = match status {
                button::Status::Hovered => 0.1,
                button::Status::Pressed => 0.2,
                _ => 0.0,
            };
            button::Style {
                background: Some(iced::Background::Color(if hover_overlay > 0.0 {
                    blend_colors(bg_color, Color::from_rgba(1.0, 1.0, 1.0, hover_overlay))
                } else {
                    bg_color
                })),
                border: iced::Border::default(),
                text_color: Color::BLACK,
                ..Default::default()
            }
        });

        // Light squares never hold a piece
        if is_light {
            square_button.into()
        } else {
            square_button
                .on_press(BoardMessage::SquareClicked(square))
                .into()
        }
    }
}

/// Blend two colors together
fn blend_colors(base: Color, overlay: Color) -> Color {
    let alpha = overlay.a;
    Color::from_rgb(
        base.r * (1.0 - alpha) + overlay.r * alpha,
        base.g * (1.0 - alpha) + overlay.g * alpha,
        base.b * (1.0 - alpha) + overlay.b * alpha,
    )
}
