//! Colors for the walker, its backdrop and the button bar.
//!
//! A [`Color`] is one of the 256 ANSI terminal colors, handed to crossterm as
//! [`crossterm::style::Color::AnsiValue`].

use crossterm::style;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Color(pub u8);

// Component levels most terminals use for the 6×6×6 color cube.
// Must begin with 0 and end with 255.
const CUBE: [u8; 6] = [0, 95, 135, 175, 215, 255];

/// Index of the cube level closest to `target`.
fn nearest_level(target: u8) -> u8 {
    CUBE.iter()
        .enumerate()
        .min_by_key(|&(_, &level)| level.abs_diff(target))
        .map_or(0, |(i, _)| i as u8)
}

/// The colors the built-in art is painted with.
pub mod palette {
    use super::Color;

    /// Walker's body.
    pub const COAT: Color = Color::from_cube(5, 3, 0);
    /// Ground strip along the bottom of the backdrop.
    pub const GRASS: Color = Color::from_cube(1, 3, 1);
    /// Stars and hills of the backdrop.
    pub const SKY: Color = Color::from_cube(2, 2, 4);
    /// Highlight for the button of the current direction.
    pub const ACTIVE: Color = Color::new(11);
    /// Buttons that are not active.
    pub const IDLE: Color = Color::new(8);
}

impl Color {
    pub const fn new(color: u8) -> Self {
        Self(color)
    }

    /// A color from the 6×6×6 cube. Each component is clipped to 5.
    pub const fn from_cube(r: u8, g: u8, b: u8) -> Self {
        let r = if r > 5 { 5 } else { r };
        let g = if g > 5 { 5 } else { g };
        let b = if b > 5 { 5 } else { b };
        Self(16 + r * 36 + g * 6 + b)
    }

    /// Picks the cube color whose components are each closest to the RGB input.
    /// Greys and the 16 themeable colors are never chosen, so the result looks
    /// the same across terminal themes.
    pub fn from_rgb_approximate(r: u8, g: u8, b: u8) -> Self {
        Self::from_cube(nearest_level(r), nearest_level(g), nearest_level(b))
    }

    /// The RGB value of a cube color, or `None` for standard and greyscale colors,
    /// whose look depends on the terminal.
    pub fn to_rgb(self) -> Option<(u8, u8, u8)> {
        match self.0 {
            16..=231 => {
                let offset = self.0 - 16;
                Some((
                    CUBE[(offset / 36) as usize],
                    CUBE[(offset / 6 % 6) as usize],
                    CUBE[(offset % 6) as usize],
                ))
            }
            _ => None,
        }
    }

    pub fn to_crossterm_color(self) -> style::Color {
        style::Color::AnsiValue(self.0)
    }
}
