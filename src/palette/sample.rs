use std::collections::HashMap;

use image::{imageops, RgbaImage};
use serde::Serialize;
use tracing::trace;

use super::PaletteConfig;
use crate::Color;

// Color sample
//------------------------------------------------------------------------------

/// One bucket of identical opaque pixels.
#[derive(Debug, PartialEq, Copy, Clone, Serialize)]
pub struct ColorSample {
    pub color: Color,
    pub count: u32,
    pub brightness: f32,
}

impl ColorSample {
    fn new(color: Color) -> Self {
        Self { color, count: 0, brightness: color.brightness() }
    }

    pub fn hex(&self) -> String {
        self.color.to_hex()
    }
}

// Histogram
//------------------------------------------------------------------------------

/// Buckets visible foreground pixels by exact RGB value, most frequent first.
/// Pixels below the alpha threshold or outside the brightness band are skipped.
/// Buckets with equal counts keep the order in which they were first seen.
pub fn histogram(img: &RgbaImage, cfg: &PaletteConfig) -> Vec<ColorSample> {
    let scaled;
    let img = match downscaled_size(img.dimensions(), cfg.sample_max_side) {
        Some((w, h)) => {
            scaled = imageops::thumbnail(img, w, h);
            &scaled
        }
        None => img,
    };

    let mut index: HashMap<Color, usize> = HashMap::new();
    let mut samples: Vec<ColorSample> = Vec::new();
    let mut skipped = 0usize;

    for px in img.pixels() {
        if px[3] < cfg.alpha_threshold {
            skipped += 1;
            continue;
        }

        let color = Color::from(*px);
        let brightness = color.brightness();
        if brightness > cfg.max_brightness || brightness < cfg.min_brightness {
            skipped += 1;
            continue;
        }

        let i = *index.entry(color).or_insert_with(|| {
            samples.push(ColorSample::new(color));
            samples.len() - 1
        });
        samples[i].count += 1;
    }

    samples.sort_by(|a, b| b.count.cmp(&a.count));

    trace!(buckets = samples.len(), skipped, "Built color histogram");
    samples
}

// None when no resize is needed
fn downscaled_size((w, h): (u32, u32), max_side: u32) -> Option<(u32, u32)> {
    let longest = w.max(h);
    if max_side == 0 || longest <= max_side {
        return None;
    }
    let scale = |d: u32| ((d as u64 * max_side as u64) / longest as u64).max(1) as u32;
    Some((scale(w), scale(h)))
}
