//! Module for drawing dots to the terminal.
//! Contains the [`Screen`] type and its public interface.

use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Print, ResetColor, SetForegroundColor},
};

use crate::{
    cell::{Cell, BRAILLE_UTF8_BYTES},
    color::Color,
    sprite::Sprite,
    units::{cell_index, cells_for},
};

/// A grid of braille dots with one optional color per cell.
///
/// The point (0, 0) is the top left dot of the screen.
///
/// [`Screen::rasterize`] gives the plain characters, [`Screen::render`] writes them to a
/// terminal with colors.
pub struct Screen {
    cells: Vec<Cell>,
    colors: Vec<Option<Color>>,
    width: u32,
    height: u32,
}

/// Selects what happens to a dot when it is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Blit {
    /// Sets the dot to 0
    Unset,
    /// Sets the dot to 1
    Set,
    /// Flips the dot
    Toggle,
}

impl Screen {
    /// Create a new empty screen `width × height` dots large. The cell grid is rounded up
    /// to hold every dot.
    pub fn new(width: u32, height: u32) -> Self {
        let len = (cells_for(width, Cell::PIXEL_WIDTH) * cells_for(height, Cell::PIXEL_HEIGHT))
            as usize;
        Self {
            cells: vec![Cell::default(); len],
            colors: vec![None; len],
            width,
            height,
        }
    }

    /// Height of the screen in cells, i.e. terminal rows.
    pub fn cell_height(&self) -> u32 {
        cells_for(self.height, Cell::PIXEL_HEIGHT)
    }
    /// Width of the screen in cells, i.e. terminal columns.
    pub fn cell_width(&self) -> u32 {
        cells_for(self.width, Cell::PIXEL_WIDTH)
    }

    /// Turns every dot off and drops all colors.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
        self.colors.fill(None);
    }

    pub fn pixel_at(&self, x: u32, y: u32) -> bool {
        x < self.width
            && y < self.height
            && self.cells[cell_index(x, y, self.cell_width())].bits & Cell::dot(x, y) != 0
    }

    /// The color of the cell containing dot `(x, y)`.
    pub fn color_at(&self, x: u32, y: u32) -> Option<Color> {
        if x < self.width && y < self.height {
            self.colors[cell_index(x, y, self.cell_width())]
        } else {
            None
        }
    }

    /// Applies `blit` to the dot at the given coordinates.
    /// Returns `true` if the dot was on screen, and `false` if it was clipped.
    pub fn transform_pixel(&mut self, x: u32, y: u32, blit: Blit) -> bool {
        if x < self.width && y < self.height {
            let index = cell_index(x, y, self.cell_width());
            let cell = &mut self.cells[index];
            let dot = Cell::dot(x, y);
            cell.bits = match blit {
                Blit::Set => cell.bits | dot,
                Blit::Unset => cell.bits & !dot,
                Blit::Toggle => cell.bits ^ dot,
            };
            true
        } else {
            false
        }
    }

    /// Sets a dot on or off. **Ignores** out-of-bounds input.
    pub fn set(&mut self, x: u32, y: u32, value: bool) {
        self.transform_pixel(x, y, if value { Blit::Set } else { Blit::Unset });
    }

    /// Flips a dot. **Ignores** out-of-bounds input.
    pub fn toggle(&mut self, x: u32, y: u32) {
        self.transform_pixel(x, y, Blit::Toggle);
    }

    /// Draws the lit dots of `sprite` with its top left corner at `(x, y)`. Cells touched by
    /// the sprite take its color. Dots falling off screen are clipped.
    pub fn draw_sprite(&mut self, sprite: &Sprite, x: u32, y: u32, blit: Blit) {
        let width_cells = self.cell_width();
        for (dx, dy) in sprite.lit_dots() {
            let (px, py) = (x.saturating_add(dx), y.saturating_add(dy));
            if self.transform_pixel(px, py, blit) {
                if let Some(color) = sprite.color() {
                    self.colors[cell_index(px, py, width_cells)] = Some(color);
                }
            }
        }
    }

    /// Converts the screen to utf-8 braille lines, each ending in a newline.
    pub fn rasterize(&self) -> Vec<u8> {
        let width = self.cell_width() as usize;
        // additional + height given for newline chars
        let mut buf =
            Vec::with_capacity(self.cells.len() * BRAILLE_UTF8_BYTES + self.cell_height() as usize);
        for row in self.cells.chunks(width.max(1)) {
            for cell in row {
                buf.extend_from_slice(&cell.to_braille_utf8());
            }
            buf.push(b'\n');
        }
        buf
    }

    /// Queues the screen to `out` with its top row at terminal row `top`, switching
    /// foreground colors only where they change. Does not flush.
    pub fn render(&self, out: &mut impl Write, top: u16) -> io::Result<()> {
        let width = self.cell_width() as usize;
        for (y, (cells, colors)) in self
            .cells
            .chunks(width.max(1))
            .zip(self.colors.chunks(width.max(1)))
            .enumerate()
        {
            queue!(out, MoveTo(0, top + y as u16))?;
            let mut current = None;
            for (cell, &color) in cells.iter().zip(colors) {
                if color != current {
                    match color {
                        Some(c) => queue!(out, SetForegroundColor(c.to_crossterm_color()))?,
                        None => queue!(out, ResetColor)?,
                    }
                    current = color;
                }
                queue!(out, Print(cell.to_braille()))?;
            }
            queue!(out, ResetColor)?;
        }
        Ok(())
    }
}
