//! Module responsible for packing 2×4 blocks of dots into Unicode braille characters.
//!
//! See the [`Cell`] documentation for more.

/// The unicode scalar value for the first ("empty") braille codepoint.
pub const BRAILLE_BASE_CODEPOINT: u32 = 0x2800;
/// The number of bytes required to encode a braille unicode character into utf-8. Every
/// braille codepoint lies between `U+0800` and `U+FFFF`.
pub const BRAILLE_UTF8_BYTES: usize = 3;

/// One braille character's worth of dots, stored row by row:
/// ```txt
/// 0 1
/// 2 3
/// 4 5
/// 6 7
/// ```
///
/// Unicode numbers the dots column by column instead (with the bottom row last):
/// ```txt
/// 0 3
/// 1 4
/// 2 5
/// 6 7
/// ```
/// so [`Cell::braille_offset`] permutes the bits before adding [`BRAILLE_BASE_CODEPOINT`].
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
#[repr(transparent)]
pub struct Cell {
    pub bits: u8,
}

impl Cell {
    /// A cell is exactly 2 dots wide.
    pub const PIXEL_WIDTH: u32 = 2;
    /// A cell is exactly 4 dots tall.
    pub const PIXEL_HEIGHT: u32 = 4;

    pub const fn new(bits: u8) -> Self {
        Self { bits }
    }

    /// The bit for the dot at `(x, y)` inside the cell. Both coordinates wrap into range.
    pub const fn dot(x: u32, y: u32) -> u8 {
        1 << ((y % Self::PIXEL_HEIGHT) * Self::PIXEL_WIDTH + x % Self::PIXEL_WIDTH)
    }

    /// Computes the Unicode codepoint offset of the braille character.
    pub const fn braille_offset(self) -> u8 {
        (self.bits & 0b11100001)
            | ((self.bits & 0b10) << 2)
            | ((self.bits & 0b100) >> 1)
            | ((self.bits & 0b1000) << 1)
            | ((self.bits & 0b10000) >> 2)
    }

    pub fn to_braille(self) -> char {
        // Every offset lands inside the braille block.
        char::from_u32(BRAILLE_BASE_CODEPOINT + self.braille_offset() as u32).unwrap_or(' ')
    }

    pub fn to_braille_utf8(self) -> [u8; BRAILLE_UTF8_BYTES] {
        let mut b = [0; BRAILLE_UTF8_BYTES];
        self.to_braille().encode_utf8(&mut b);
        b
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn offsets_are_a_permutation() {
        let offsets: HashSet<_> = (0u8..=255).map(|n| Cell::new(n).braille_offset()).collect();
        assert_eq!(offsets.len(), 256)
    }

    #[test]
    fn single_dots() {
        assert_eq!(Cell::new(0).to_braille(), '⠀');
        assert_eq!(Cell::new(Cell::dot(0, 0)).to_braille(), '⠁');
        assert_eq!(Cell::new(Cell::dot(1, 0)).to_braille(), '⠈');
        assert_eq!(Cell::new(Cell::dot(0, 1)).to_braille(), '⠂');
        assert_eq!(Cell::new(Cell::dot(0, 3)).to_braille(), '⡀');
        assert_eq!(Cell::new(Cell::dot(1, 3)).to_braille(), '⢀');
        assert_eq!(Cell::new(0xff).to_braille(), '⣿');
    }

    #[test]
    fn utf8_width() {
        assert_eq!(Cell::new(0).to_braille_utf8(), [226, 160, 128]);
        assert_eq!(Cell::new(0xff).to_braille_utf8(), [226, 163, 191]);
    }
}
