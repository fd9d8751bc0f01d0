//! Module for [`Sprite`]s, i.e. rectangular dot bitmaps drawn in a single color.
#[cfg(feature = "images")]
mod images;
#[cfg(feature = "images")]
pub use images::DotMask;

use smallvec::{smallvec, SmallVec};

use crate::color::Color;

/// Stack allocation size for each sprite's dots. Fits the default 8×12 walker.
const SPRITE_STACK_SIZE: usize = 96;

type SpriteData = SmallVec<[bool; SPRITE_STACK_SIZE]>;

/// A rectangle of dots, each either on or off. Lit dots are drawn with the sprite's color,
/// or the terminal's default foreground when it has none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sprite {
    dots: SpriteData,
    width: u32,
    height: u32,
    color: Option<Color>,
}

impl Sprite {
    /// Create a new [`Sprite`] with every dot off.
    /// The width and height parameters are in terms of dots.
    pub fn empty(width: u32, height: u32) -> Self {
        Self {
            dots: smallvec![false; (width * height) as usize],
            width,
            height,
            color: None,
        }
    }

    /// Creates a [`Sprite`] from rows of ASCII art, where `#` is a lit dot and `.` an unlit one.
    ///
    /// Returns None if any other character appears, or if the rows are different lengths.
    pub fn from_ascii(rows: &[&str], color: Option<Color>) -> Option<Self> {
        let width = rows.first().map_or(0, |r| r.len());
        if rows.iter().any(|r| r.len() != width) {
            return None;
        }
        let mut dots = SpriteData::with_capacity(width * rows.len());
        for row in rows {
            for b in row.bytes() {
                match b {
                    b'#' => dots.push(true),
                    b'.' => dots.push(false),
                    _ => return None,
                }
            }
        }
        Some(Self {
            dots,
            width: u32::try_from(width).ok()?,
            height: u32::try_from(rows.len()).ok()?,
            color,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn color(&self) -> Option<Color> {
        self.color
    }

    pub fn with_color(mut self, color: Option<Color>) -> Self {
        self.color = color;
        self
    }

    /// Whether the dot at `(x, y)` is lit. Out-of-bounds dots are never lit.
    pub fn is_set(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height && self.dots[(y * self.width + x) as usize]
    }

    pub fn set(&mut self, x: u32, y: u32, value: bool) {
        if x < self.width && y < self.height {
            self.dots[(y * self.width + x) as usize] = value;
        }
    }

    /// Iterates the positions of every lit dot, row by row.
    pub fn lit_dots(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        let width = self.width;
        self.dots
            .iter()
            .enumerate()
            .filter(|&(_, &on)| on)
            .map(move |(i, _)| (i as u32 % width, i as u32 / width))
    }

    /// The sprite flipped left to right.
    pub fn mirrored(&self) -> Self {
        let mut out = Self::empty(self.width, self.height).with_color(self.color);
        for (x, y) in self.lit_dots() {
            out.set(self.width - 1 - x, y, true);
        }
        out
    }

    /// The sprite rescaled to `width × height` dots with nearest neighbor sampling.
    pub fn resized(&self, width: u32, height: u32) -> Self {
        if (width, height) == (self.width, self.height) {
            return self.clone();
        }
        let mut out = Self::empty(width, height).with_color(self.color);
        if self.width == 0 || self.height == 0 {
            return out;
        }
        for y in 0..height {
            for x in 0..width {
                let src_x = x * self.width / width;
                let src_y = y * self.height / height;
                out.set(x, y, self.is_set(src_x, src_y));
            }
        }
        out
    }
}
