//! Named colours shared by the examples.
//!
//! The byte values match raylib's palette so ported examples look the same.
//! A [`Palette`] entry converts into a [`skia_safe::Color`] at draw time.

use skia_safe::Color;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Palette {
    RayWhite,
    LightGray,
    Gray,
    DarkGray,
    Red,
    Maroon,
    Lime,
    DarkBlue,
    Purple,
    Yellow,
    Orange,
    Beige,
    Black,
    White,
}

impl Palette {
    /// Returns the `(r, g, b, a)` bytes of this entry.
    pub const fn rgba(self) -> (u8, u8, u8, u8) {
        match self {
            Palette::RayWhite => (245, 245, 245, 255),
            Palette::LightGray => (200, 200, 200, 255),
            Palette::Gray => (130, 130, 130, 255),
            Palette::DarkGray => (80, 80, 80, 255),
            Palette::Red => (230, 41, 55, 255),
            Palette::Maroon => (190, 33, 55, 255),
            Palette::Lime => (0, 158, 47, 255),
            Palette::DarkBlue => (0, 82, 172, 255),
            Palette::Purple => (200, 122, 255, 255),
            Palette::Yellow => (253, 249, 0, 255),
            Palette::Orange => (255, 161, 0, 255),
            Palette::Beige => (211, 176, 131, 255),
            Palette::Black => (0, 0, 0, 255),
            Palette::White => (255, 255, 255, 255),
        }
    }

    pub fn to_color(self) -> Color {
        let (r, g, b, a) = self.rgba();
        Color::from_argb(a, r, g, b)
    }
}

impl From<Palette> for Color {
    fn from(entry: Palette) -> Self {
        entry.to_color()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_converts_to_skia_color() {
        let color: Color = Palette::Maroon.into();
        assert_eq!(
            (color.r(), color.g(), color.b(), color.a()),
            (190, 33, 55, 255)
        );
    }

    #[test]
    fn palette_entries_are_opaque() {
        for entry in [
            Palette::RayWhite,
            Palette::DarkBlue,
            Palette::Lime,
            Palette::Beige,
        ] {
            assert_eq!(entry.rgba().3, 255);
        }
    }
}
