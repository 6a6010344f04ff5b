//! Color palette for the board and the header band.
//!
//! RGB values follow the classic pygame-style palette: white empty cells,
//! green frontier, red visited, black walls.

use pathviz_core::style::{Color, Style};
use pathviz_paths::CellState;

// -- Board states --

pub const WHITE: Color = Color::from_rgb(255, 255, 255);
pub const GREEN: Color = Color::from_rgb(0, 255, 0);
pub const RED: Color = Color::from_rgb(255, 0, 0);
pub const BLACK: Color = Color::from_rgb(0, 0, 0);
pub const PURPLE: Color = Color::from_rgb(128, 0, 128);
pub const TURQUOISE: Color = Color::from_rgb(64, 224, 208);
pub const YELLOW: Color = Color::from_rgb(255, 255, 0);

// -- Grid lines --

pub const GREY: Color = Color::from_rgb(128, 128, 128);
/// Glyph drawn in the first column of every board cell.
pub const GRID_LINE: char = '▏';

// -- Header --

pub const HEADER_BG: Color = Color::from_rgb(30, 60, 160);
pub const HEADER_FG: Color = WHITE;

/// Background color of a board cell in `state`.
pub const fn state_color(state: CellState) -> Color {
    match state {
        CellState::Empty => WHITE,
        CellState::Frontier => GREEN,
        CellState::Visited => RED,
        CellState::Barrier => BLACK,
        CellState::Start => PURPLE,
        CellState::End => TURQUOISE,
        CellState::Path => YELLOW,
    }
}

/// Style of a board cell: grey line glyph over the state color.
pub const fn cell_style(state: CellState) -> Style {
    Style {
        fg: GREY,
        bg: state_color(state),
        bold: false,
    }
}

pub const fn header_style() -> Style {
    Style {
        fg: HEADER_FG,
        bg: HEADER_BG,
        bold: true,
    }
}
