//! Module for reading sprites out of image files.

use std::collections::BTreeMap;

use image::{imageops::FilterType, Rgba};

use super::*;
use crate::error::Error;

/// Decides which pixels of an image become lit dots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DotMask {
    /// Pixels with alpha above 128. Suits sprites cut out on a transparent background.
    Alpha,
    /// Pixels brighter than mid grey. Suits opaque pictures such as backgrounds.
    Brightness,
}

impl DotMask {
    fn is_lit(self, Rgba([r, g, b, a]): Rgba<u8>) -> bool {
        match self {
            DotMask::Alpha => a > 128,
            DotMask::Brightness => (r as u16 + g as u16 + b as u16) / 3 > 128,
        }
    }
}

impl Sprite {
    /// Reads an image file and turns it into a sprite `width × height` dots large.
    ///
    /// The file can be in any image format supported by [`image::open()`], decided by the file extension given.
    /// The image is rescaled without preserving aspect ratio, using nearest neighbor sampling.
    ///
    /// `mask` picks the lit dots. The sprite's color is the most common approximate color
    /// among lit pixels.
    pub fn from_image_path<P: AsRef<std::path::Path>>(
        path: P,
        width: u32,
        height: u32,
        mask: DotMask,
    ) -> crate::Result<Self> {
        let img = image::open(path)?
            .resize_exact(width, height, FilterType::Nearest)
            .into_rgba8();

        let mut sprite = Sprite::empty(width, height);
        let mut colors = BTreeMap::new();
        for (x, y, &pixel) in img.enumerate_pixels() {
            let Rgba([r, g, b, _]) = pixel;
            if mask.is_lit(pixel) {
                sprite.set(x, y, true);
                *colors
                    .entry(Color::from_rgb_approximate(r, g, b))
                    .or_insert(0usize) += 1;
            }
        }
        let dominant = colors.into_iter().max_by_key(|&(_, n)| n).map(|(c, _)| c);
        Ok(sprite.with_color(dominant))
    }
}
