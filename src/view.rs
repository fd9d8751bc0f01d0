//! Terminal layout: a row of direction buttons, a status line, then the canvas.
use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Attribute, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{Clear, ClearType},
};

use crate::{
    color::palette,
    config::Config,
    direction::Direction,
    frames::FrameSet,
    screen::{Blit, Screen},
    state::Snapshot,
    units::{span_dots, to_dots},
};

/// Terminal row holding the buttons.
pub const BUTTON_ROW: u16 = 0;
const STATUS_ROW: u16 = 1;
/// First terminal row of the canvas.
pub const CANVAS_TOP: u16 = 2;

/// One clickable button per direction, laid out left to right on [`BUTTON_ROW`].
#[derive(Debug, Clone)]
pub struct ButtonBar {
    /// `(direction, first column, one past the last column)`
    spans: [(Direction, u16, u16); 4],
}

impl Default for ButtonBar {
    fn default() -> Self {
        Self::new()
    }
}

impl ButtonBar {
    pub fn new() -> Self {
        let mut column = 0;
        let spans = Direction::ALL.map(|direction| {
            let start = column;
            let end = start + Self::label(direction).chars().count() as u16;
            column = end + 1;
            (direction, start, end)
        });
        Self { spans }
    }

    fn label(direction: Direction) -> String {
        format!("[ {} ]", direction.name())
    }

    /// The direction whose button covers the terminal cell at `(column, row)`.
    pub fn hit(&self, column: u16, row: u16) -> Option<Direction> {
        if row != BUTTON_ROW {
            return None;
        }
        self.spans
            .iter()
            .find(|&&(_, start, end)| (start..end).contains(&column))
            .map(|&(direction, _, _)| direction)
    }

    /// Queues the buttons, highlighting the one for `active`.
    pub fn render(&self, out: &mut impl Write, active: Option<Direction>) -> io::Result<()> {
        queue!(out, MoveTo(0, BUTTON_ROW), Clear(ClearType::CurrentLine))?;
        for &(direction, start, _) in &self.spans {
            queue!(out, MoveTo(start, BUTTON_ROW))?;
            if Some(direction) == active {
                queue!(
                    out,
                    SetForegroundColor(palette::ACTIVE.to_crossterm_color()),
                    SetAttribute(Attribute::Bold)
                )?;
            } else {
                queue!(out, SetForegroundColor(palette::IDLE.to_crossterm_color()))?;
            }
            queue!(
                out,
                Print(Self::label(direction)),
                SetAttribute(Attribute::Reset),
                ResetColor
            )?;
        }
        Ok(())
    }
}

/// Draws snapshots of the game onto the terminal.
pub struct View {
    screen: Screen,
    buttons: ButtonBar,
    scale: u32,
}

impl View {
    pub fn new(config: &Config) -> Self {
        Self {
            screen: Screen::new(
                span_dots(config.canvas_width, config.scale),
                span_dots(config.canvas_height, config.scale),
            ),
            buttons: ButtonBar::new(),
            scale: config.scale,
        }
    }

    pub fn buttons(&self) -> &ButtonBar {
        &self.buttons
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Paints the canvas for `snapshot` into the off-screen buffer: backdrop layers, then the
    /// current frame of the walker. With no known direction the walker keeps facing right.
    pub fn compose(&mut self, snapshot: &Snapshot, frames: &FrameSet) {
        self.screen.clear();
        for layer in frames.backdrop() {
            self.screen.draw_sprite(layer, 0, 0, Blit::Set);
        }
        let facing = snapshot.direction.unwrap_or_default();
        let sprite = frames.frame(facing, snapshot.frame(facing));
        self.screen.draw_sprite(
            sprite,
            to_dots(snapshot.x, self.scale),
            to_dots(snapshot.y, self.scale),
            Blit::Set,
        );
    }

    /// Composes `snapshot` and writes the whole view to `out`.
    pub fn draw(
        &mut self,
        out: &mut impl Write,
        snapshot: &Snapshot,
        frames: &FrameSet,
    ) -> io::Result<()> {
        self.compose(snapshot, frames);
        self.buttons.render(out, snapshot.direction)?;
        queue!(
            out,
            MoveTo(0, STATUS_ROW),
            Clear(ClearType::CurrentLine),
            Print(status_line(snapshot, frames))
        )?;
        self.screen.render(out, CANVAS_TOP)?;
        out.flush()
    }
}

/// One line describing where the walker is and what it is doing.
pub fn status_line(snapshot: &Snapshot, frames: &FrameSet) -> String {
    match snapshot.direction {
        Some(direction) => format!(
            "x {:>3}  y {:>3}  walking {:<5}  frame {}/{}   arrows/wasd or click, q quits",
            snapshot.x,
            snapshot.y,
            direction.name(),
            snapshot.frame(direction) + 1,
            frames.frame_count(direction),
        ),
        None => format!(
            "x {:>3}  y {:>3}  stopped        arrows/wasd or click, q quits",
            snapshot.x, snapshot.y,
        ),
    }
}
