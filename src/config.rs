//! Tunable constants for a walking session.
//!
//! [`Config::default()`] reproduces the classic demo: an 800×600 canvas, an 80×120 sprite
//! starting at (5, 300), three frames per direction and a 200 ms tick.
use std::{path::PathBuf, time::Duration};

use crate::{
    direction::PerDirection,
    error::{Error, Result},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Canvas size in canvas units.
    pub canvas_width: u32,
    pub canvas_height: u32,
    /// Sprite size in canvas units.
    pub sprite_width: u32,
    pub sprite_height: u32,
    /// Starting top-left corner of the sprite. Clamped into the canvas on use.
    pub start_x: u32,
    pub start_y: u32,
    /// Distance moved per tick, in canvas units.
    pub step: u32,
    /// Number of animation frames for each direction.
    pub frame_counts: PerDirection<usize>,
    pub tick_interval: Duration,
    /// Canvas units per Braille dot.
    pub scale: u32,
    /// Directory holding `{direction}_{n}.png` frames and `background.jpg`.
    pub asset_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            canvas_width: 800,
            canvas_height: 600,
            sprite_width: 80,
            sprite_height: 120,
            start_x: 5,
            start_y: 300,
            step: 10,
            frame_counts: PerDirection::splat(3),
            tick_interval: Duration::from_millis(200),
            scale: 10,
            asset_dir: PathBuf::from("assets"),
        }
    }
}

impl Config {
    pub fn with_canvas(mut self, width: u32, height: u32) -> Self {
        self.canvas_width = width;
        self.canvas_height = height;
        self
    }

    pub fn with_sprite(mut self, width: u32, height: u32) -> Self {
        self.sprite_width = width;
        self.sprite_height = height;
        self
    }

    pub fn with_start(mut self, x: u32, y: u32) -> Self {
        self.start_x = x;
        self.start_y = y;
        self
    }

    pub fn with_step(mut self, step: u32) -> Self {
        self.step = step;
        self
    }

    pub fn with_frame_counts(mut self, frame_counts: PerDirection<usize>) -> Self {
        self.frame_counts = frame_counts;
        self
    }

    pub fn with_tick_interval(mut self, tick_interval: Duration) -> Self {
        self.tick_interval = tick_interval;
        self
    }

    pub fn with_scale(mut self, scale: u32) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_asset_dir(mut self, asset_dir: impl Into<PathBuf>) -> Self {
        self.asset_dir = asset_dir.into();
        self
    }

    /// Largest x the sprite's left edge may take.
    pub fn max_x(&self) -> u32 {
        self.canvas_width.saturating_sub(self.sprite_width)
    }

    /// Largest y the sprite's top edge may take.
    pub fn max_y(&self) -> u32 {
        self.canvas_height.saturating_sub(self.sprite_height)
    }

    /// Checks that the configuration describes a canvas the sprite can walk on.
    pub fn validate(&self) -> Result<()> {
        if self.sprite_width > self.canvas_width || self.sprite_height > self.canvas_height {
            return Err(Error::Config("sprite does not fit on the canvas"));
        }
        if self.frame_counts.iter().any(|(_, &n)| n == 0) {
            return Err(Error::Config("every direction needs at least one frame"));
        }
        if self.tick_interval.is_zero() {
            return Err(Error::Config("tick interval must be positive"));
        }
        if self.scale == 0 {
            return Err(Error::Config("scale must be at least one canvas unit per dot"));
        }
        Ok(())
    }
}
