//! The screen [`Cell`] type: one glyph with styling.

use crate::style::Style;

/// One character cell of the screen grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub ch: char,
    pub style: Style,
}

impl Cell {
    #[inline]
    pub const fn new(ch: char, style: Style) -> Self {
        Self { ch, style }
    }
}

/// A blank in the default style.
impl Default for Cell {
    fn default() -> Self {
        Self::new(' ', Style::default())
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use crate::style::Color;

    #[test]
    fn cell_round_trip() {
        let style = Style {
            bg: Color::from_rgb(0, 0, 0),
            bold: true,
            ..Style::default()
        };
        let cell = Cell::new('#', style);
        let json = serde_json::to_string(&cell).unwrap();
        let back: Cell = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cell);
        assert!(!back.style.bg.is_default());
    }
}
