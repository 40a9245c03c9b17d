//! Background image handling.
//!
//! The scene only displays the background; decoding happens here so a decode
//! failure never reaches scene state.

use std::collections::HashMap;
use std::sync::Arc;

use image::RgbaImage;
use polycanvas_raster::Color;

use crate::constants::DEFAULT_COLOR;

/// Only every Nth pixel is looked at when estimating the dominant color.
const DOMINANT_SAMPLE_STRIDE: usize = 100;

/// Pixels below this alpha are ignored by [`dominant_color`].
const DOMINANT_MIN_ALPHA: u8 = 128;

/// A decoded RGBA background, cheap to clone.
#[derive(Debug, Clone)]
pub struct BackgroundImage(Arc<RgbaImage>);

impl BackgroundImage {
    pub fn new(image: RgbaImage) -> Self {
        Self(Arc::new(image))
    }

    /// Decode any format the `image` crate recognises.
    pub fn decode(bytes: &[u8]) -> Result<Self, image::ImageError> {
        let decoded = image::load_from_memory(bytes)?;
        log::debug!(
            "🖼️ Decoded background {}x{}",
            decoded.width(),
            decoded.height()
        );
        Ok(Self::new(decoded.to_rgba8()))
    }

    pub fn width(&self) -> u32 {
        self.0.width()
    }

    pub fn height(&self) -> u32 {
        self.0.height()
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.0
    }

    /// Shared handle for the display list.
    pub fn shared(&self) -> Arc<RgbaImage> {
        Arc::clone(&self.0)
    }
}

impl From<RgbaImage> for BackgroundImage {
    fn from(image: RgbaImage) -> Self {
        Self::new(image)
    }
}

/// Most frequent opaque color among sampled pixels.
///
/// Falls back to the default tool color when nothing qualifies. Ties go to
/// the color that reached the winning count first.
pub fn dominant_color(image: &RgbaImage) -> Color {
    let mut counts: HashMap<[u8; 3], usize> = HashMap::new();
    let mut best: Option<([u8; 3], usize)> = None;

    for pixel in image.pixels().step_by(DOMINANT_SAMPLE_STRIDE) {
        let [r, g, b, a] = pixel.0;
        if a < DOMINANT_MIN_ALPHA {
            continue;
        }
        let count = counts.entry([r, g, b]).or_insert(0);
        *count += 1;
        if best.is_none_or(|(_, n)| *count > n) {
            best = Some(([r, g, b], *count));
        }
    }

    best.map_or(DEFAULT_COLOR, |([r, g, b], _)| Color::rgb(r, g, b))
}
