//! Internal module for keeping track of units.
//! Using canvas units where dots are expected is a no no.
//!
//! Units used in this crate:
//!
//! Canvas x/y position/length (game state, config): u32
//! Dot x/y position/length (screen, sprites): u32
//! Cell x/y position/length: u32, see [`crate::cell::Cell`] for the dot/cell ratio
//! Screen cell index: usize

use crate::cell::Cell;

/// Converts a canvas position to the dot containing it.
pub(crate) const fn to_dots(units: u32, scale: u32) -> u32 {
    units / scale
}

/// Converts a canvas length to dots, rounding up so nothing gets lost.
pub(crate) const fn span_dots(units: u32, scale: u32) -> u32 {
    units.div_ceil(scale)
}

/// Number of cells needed to hold `dots` dots along an axis `per_cell` dots wide.
pub(crate) const fn cells_for(dots: u32, per_cell: u32) -> u32 {
    dots.div_ceil(per_cell)
}

/// Converts a dot position to the index of its cell in a row-major buffer `width_cells` wide.
pub(crate) const fn cell_index(x: u32, y: u32, width_cells: u32) -> usize {
    ((y / Cell::PIXEL_HEIGHT) * width_cells + x / Cell::PIXEL_WIDTH) as usize
}
