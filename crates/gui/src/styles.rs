//! Styling constants and theme configuration

use checkers_core::{Color as Side, Piece};
use iced::Color;

// Board colors
pub const LIGHT_SQUARE: Color = Color::from_rgb(0.94, 0.85, 0.71); // Wheat
pub const DARK_SQUARE: Color = Color::from_rgb(0.45, 0.30, 0.20); // Walnut
pub const SELECTED_SQUARE: Color = Color::from_rgb(0.68, 0.85, 0.37); // Yellow-green
pub const LAST_MOVE_SQUARE: Color = Color::from_rgba(0.9, 0.9, 0.0, 0.4); // Yellow overlay
pub const TARGET_DOT: Color = Color::from_rgba(1.0, 1.0, 1.0, 0.5);

// Piece colors
pub const RED_PIECE: Color = Color::from_rgb(0.85, 0.15, 0.15);
pub const BLACK_PIECE: Color = Color::from_rgb(0.08, 0.08, 0.08);

// Dimensions
pub const SQUARE_SIZE: f32 = 70.0;
pub const PANEL_WIDTH: f32 = 260.0;

pub fn piece_glyph(piece: Piece) -> &'static str {
    if piece.king {
        "♛"
    } else {
        "●"
    }
}

pub fn piece_color(side: Side) -> Color {
    match side {
        Side::Red => RED_PIECE,
        Side::Black => BLACK_PIECE,
    }
}
