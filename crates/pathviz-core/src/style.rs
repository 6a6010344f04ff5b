//! Cell colours and text style.

/// A 24-bit RGB colour, or the back-end's own default when unset.
///
/// Pure black is an ordinary colour here, distinct from [`Color::DEFAULT`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color(Option<[u8; 3]>);

impl Color {
    pub const DEFAULT: Self = Self(None);

    #[inline]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(Some([r, g, b]))
    }

    #[inline]
    pub const fn is_default(self) -> bool {
        self.0.is_none()
    }

    /// The `(r, g, b)` components, `None` for [`Color::DEFAULT`].
    #[inline]
    pub const fn rgb(self) -> Option<(u8, u8, u8)> {
        match self.0 {
            Some([r, g, b]) => Some((r, g, b)),
            None => None,
        }
    }
}

/// Foreground, background and weight of one screen cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Style {
    pub fg: Color,
    pub bg: Color,
    pub bold: bool,
}
