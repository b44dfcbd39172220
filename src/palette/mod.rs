//! Dominant color extraction for theming generated QR codes.
//!
//! A single pass over the pixel buffer builds a histogram of visible,
//! mid-brightness colors. The most frequent colors are then picked greedily so
//! that each one is visibly different from those already picked. The most
//! frequent becomes the primary color; the first sufficiently different one
//! becomes the secondary color. Light and dark variants are derived from the
//! primary by fixed channel offsets.

mod sample;
mod select;

pub use sample::{histogram, ColorSample};
pub use select::{pick_secondary, select_distinct, MAX_DISTINCT};

use image::RgbaImage;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::Color;

// Config
//------------------------------------------------------------------------------

/// Tunable thresholds. The defaults are empirical, not derived.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    /// Pixels with alpha below this are transparent.
    pub alpha_threshold: u8,
    /// Luma below this is treated as shadow noise.
    pub min_brightness: f32,
    /// Luma above this is treated as background.
    pub max_brightness: f32,
    /// Minimum RGB distance between any two selected colors.
    pub distinct_threshold: f32,
    /// Minimum RGB distance between primary and secondary.
    pub secondary_threshold: f32,
    /// Number of distinct colors kept, capped at [`MAX_DISTINCT`].
    pub max_colors: usize,
    pub light_offset: u8,
    pub dark_offset: u8,
    /// Longest side the image is thumbnailed to before scanning. 0 scans the
    /// full image.
    pub sample_max_side: u32,
    pub default_primary: Color,
    pub default_secondary: Color,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            alpha_threshold: 128,
            min_brightness: 15.0,
            max_brightness: 240.0,
            distinct_threshold: 50.0,
            secondary_threshold: 100.0,
            max_colors: 5,
            light_offset: 150,
            dark_offset: 100,
            sample_max_side: 0,
            default_primary: Color::new(255, 0, 0),
            default_secondary: Color::new(0, 0, 255),
        }
    }
}

// Palette
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PaletteOrigin {
    /// Primary and secondary both come from the image.
    Image,
    /// Primary comes from the image, secondary is the default.
    PrimaryOnly,
    /// Nothing survived filtering; both are defaults.
    Default,
}

#[derive(Debug, PartialEq, Eq, Copy, Clone, Serialize)]
pub struct PaletteResult {
    pub primary: Color,
    pub secondary: Color,
    pub light: Color,
    pub dark: Color,
    pub origin: PaletteOrigin,
}

impl PaletteResult {
    fn new(primary: Color, secondary: Color, origin: PaletteOrigin, cfg: &PaletteConfig) -> Self {
        Self {
            primary,
            secondary,
            light: primary.lighten(cfg.light_offset),
            dark: primary.darken(cfg.dark_offset),
            origin,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.origin == PaletteOrigin::Default
    }
}

impl Default for PaletteResult {
    fn default() -> Self {
        let cfg = PaletteConfig::default();
        Self::new(cfg.default_primary, cfg.default_secondary, PaletteOrigin::Default, &cfg)
    }
}

pub fn extract_palette(img: &RgbaImage) -> PaletteResult {
    extract_palette_with(img, &PaletteConfig::default())
}

pub fn extract_palette_with(img: &RgbaImage, cfg: &PaletteConfig) -> PaletteResult {
    let distinct = dominant_colors(img, cfg);

    let Some(primary) = distinct.first() else {
        debug!("No usable pixels, using default palette");
        return PaletteResult::new(cfg.default_primary, cfg.default_secondary, PaletteOrigin::Default, cfg);
    };

    let res = match pick_secondary(&distinct, cfg) {
        Some(s) => PaletteResult::new(primary.color, s.color, PaletteOrigin::Image, cfg),
        None => PaletteResult::new(primary.color, cfg.default_secondary, PaletteOrigin::PrimaryOnly, cfg),
    };
    debug!(primary = %res.primary, secondary = %res.secondary, origin = ?res.origin, "Extracted palette");
    res
}

/// Visually distinct colors of `img`, most frequent first.
pub fn dominant_colors(img: &RgbaImage, cfg: &PaletteConfig) -> Vec<ColorSample> {
    let hist = histogram(img, cfg);
    select_distinct(&hist, cfg)
}
