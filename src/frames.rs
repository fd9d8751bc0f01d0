//! Animation frames for each direction, plus the backdrop they walk over.
//!
//! Frames live on disk as `{asset_dir}/{direction}_{n}.png` with `n` counting from 1, and the
//! backdrop as `{asset_dir}/background.jpg`. Without the `images` feature, or when a file
//! cannot be read, the built-in pixel art below is used instead.
use std::path::{Path, PathBuf};

use smallvec::{smallvec, SmallVec};

use crate::{
    color::palette,
    config::Config,
    direction::{Direction, PerDirection},
    sprite::Sprite,
    units::span_dots,
};

type Frames = SmallVec<[Sprite; 4]>;

// 8×12 walker, facing right. Left is the mirror image.
const WALK_RIGHT: [[&str; 12]; 3] = [
    [
        "...###..", "...####.", "...###..", "....#...", "..####..", ".#.###..", "...###.#",
        "...###..", "...#.#..", "..#...#.", ".#.....#", ".#......",
    ],
    [
        "...###..", "...####.", "...###..", "....#...", "..####..", "..####..", "..#.##..",
        "...###..", "...##...", "...##...", "...#.#..", "...#.#..",
    ],
    [
        "...###..", "...####.", "...###..", "....#...", "..####..", "...###.#", ".#.###..",
        "...###..", "...#.#..", "..#..#..", "..#...#.", ".##...#.",
    ],
];

const WALK_DOWN: [[&str; 12]; 3] = [
    [
        "..####..", ".#.##.#.", "..####..", "...##...", ".######.", "#.####.#", "#.####.#",
        "..####..", "..#..#..", "..#..#..", "..#...#.", ".##.....",
    ],
    [
        "..####..", ".#.##.#.", "..####..", "...##...", ".######.", "#.####.#", "#.####.#",
        "..####..", "..#..#..", "..#..#..", "..#..#..", ".##..##.",
    ],
    [
        "..####..", ".#.##.#.", "..####..", "...##...", ".######.", "#.####.#", "#.####.#",
        "..####..", "..#..#..", "..#..#..", ".#...#..", ".....##.",
    ],
];

const WALK_UP: [[&str; 12]; 3] = [
    [
        "..####..", ".######.", "..####..", "...##...", ".######.", "#.####.#", "#.####.#",
        "..####..", "..#..#..", "..#..#..", "..#...#.", ".##.....",
    ],
    [
        "..####..", ".######.", "..####..", "...##...", ".######.", "#.####.#", "#.####.#",
        "..####..", "..#..#..", "..#..#..", "..#..#..", ".##..##.",
    ],
    [
        "..####..", ".######.", "..####..", "...##...", ".######.", "#.####.#", "#.####.#",
        "..####..", "..#..#..", "..#..#..", ".#...#..", ".....##.",
    ],
];

/// Path of frame `index` (counting from 0) for `direction`.
pub fn frame_path(asset_dir: &Path, direction: Direction, index: usize) -> PathBuf {
    asset_dir.join(format!("{}_{}.png", direction.name(), index + 1))
}

pub fn background_path(asset_dir: &Path) -> PathBuf {
    asset_dir.join("background.jpg")
}

/// Every sprite needed to draw the scene.
#[derive(Debug, Clone)]
pub struct FrameSet {
    frames: PerDirection<Frames>,
    backdrop: SmallVec<[Sprite; 2]>,
}

impl FrameSet {
    /// The built-in art, rescaled to the configured sprite and canvas size. A direction with
    /// more frames than there are drawings cycles through the drawings again.
    pub fn builtin(config: &Config) -> Self {
        let (width, height) = sprite_dots(config);
        let frames = PerDirection::from_fn(|direction| {
            (0..config.frame_counts[direction])
                .map(|i| builtin_frame(direction, i).resized(width, height))
                .collect()
        });
        Self {
            frames,
            backdrop: builtin_backdrop(config),
        }
    }

    /// Reads frames and the backdrop from the configured asset directory. Files that cannot
    /// be read are replaced by the built-in art, with a warning.
    #[cfg(feature = "images")]
    pub fn load(config: &Config) -> Self {
        use crate::sprite::DotMask;

        let (width, height) = sprite_dots(config);
        let mut set = Self::builtin(config);
        for direction in Direction::ALL {
            for (i, frame) in set.frames[direction].iter_mut().enumerate() {
                let path = frame_path(&config.asset_dir, direction, i);
                match Sprite::from_image_path(&path, width, height, DotMask::Alpha) {
                    Ok(sprite) => *frame = sprite,
                    Err(e) => log::warn!("{}: {e}, using built-in frame", path.display()),
                }
            }
        }

        let path = background_path(&config.asset_dir);
        let (canvas_width, canvas_height) = canvas_dots(config);
        match Sprite::from_image_path(&path, canvas_width, canvas_height, DotMask::Brightness) {
            Ok(sprite) => set.backdrop = smallvec![sprite],
            Err(e) => log::warn!("{}: {e}, using built-in backdrop", path.display()),
        }
        set
    }

    /// [`FrameSet::load`] when image support is compiled in, [`FrameSet::builtin`] otherwise.
    pub fn for_config(config: &Config) -> Self {
        #[cfg(feature = "images")]
        {
            Self::load(config)
        }
        #[cfg(not(feature = "images"))]
        {
            log::debug!("built without image support, using built-in frames");
            Self::builtin(config)
        }
    }

    pub fn frame_count(&self, direction: Direction) -> usize {
        self.frames[direction].len()
    }

    /// Frame `index` for `direction`, wrapped into range.
    ///
    /// # Panics
    /// If `direction` has no frames, which a validated [`Config`] rules out.
    pub fn frame(&self, direction: Direction, index: usize) -> &Sprite {
        let frames = &self.frames[direction];
        &frames[index % frames.len()]
    }

    /// Layers of the backdrop, bottom first.
    pub fn backdrop(&self) -> &[Sprite] {
        &self.backdrop
    }
}

fn sprite_dots(config: &Config) -> (u32, u32) {
    (
        span_dots(config.sprite_width, config.scale),
        span_dots(config.sprite_height, config.scale),
    )
}

fn canvas_dots(config: &Config) -> (u32, u32) {
    (
        span_dots(config.canvas_width, config.scale),
        span_dots(config.canvas_height, config.scale),
    )
}

fn builtin_frame(direction: Direction, index: usize) -> Sprite {
    let art = match direction {
        Direction::Right | Direction::Left => &WALK_RIGHT,
        Direction::Up => &WALK_UP,
        Direction::Down => &WALK_DOWN,
    };
    let sprite = Sprite::from_ascii(&art[index % art.len()], Some(palette::COAT))
        .unwrap_or_else(|| Sprite::empty(8, 12));
    if direction == Direction::Left {
        sprite.mirrored()
    } else {
        sprite
    }
}

/// A starry sky over a strip of grass.
fn builtin_backdrop(config: &Config) -> SmallVec<[Sprite; 2]> {
    let (width, height) = canvas_dots(config);
    let mut sky = Sprite::empty(width, height).with_color(Some(palette::SKY));
    // sparse, fixed pattern so redraws don't flicker
    for i in 0..width * height / 97 {
        let x = (i * 37 + 11) % width.max(1);
        let y = (i * 53 + 7) % (height / 2).max(1);
        sky.set(x, y, true);
    }

    let mut grass = Sprite::empty(width, height).with_color(Some(palette::GRASS));
    let ground = height.saturating_sub(2);
    for x in 0..width {
        grass.set(x, height.saturating_sub(1), true);
        if x % 5 == 0 {
            grass.set(x, ground, true);
        }
    }
    smallvec![sky, grass]
}
