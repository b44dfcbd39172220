use image::{
    imageops::{self, FilterType},
    Rgb, RgbImage, RgbaImage,
};
use imageproc::{drawing::draw_filled_rect_mut, rect::Rect};
use tracing::{debug, warn};

use crate::{palette::PaletteResult, Color};

/// Luma gap below which the palette is not trusted for the code itself.
const MIN_CONTRAST: f32 = 100.0;

/// Largest logo side as a fraction of the symbol side.
pub(crate) const MAX_LOGO_RATIO: f32 = 0.3;

// Theme
//------------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
pub(crate) struct Theme {
    pub frame: Rgb<u8>,
    pub accent: Rgb<u8>,
    pub background: Rgb<u8>,
    pub foreground: Rgb<u8>,
}

impl Theme {
    pub fn plain() -> Self {
        let white = Color::WHITE.into();
        Self { frame: white, accent: white, background: white, foreground: Color::BLACK.into() }
    }

    pub fn from_palette(p: &PaletteResult) -> Self {
        let (background, foreground) = if p.light.brightness() - p.dark.brightness() >= MIN_CONTRAST {
            (p.light, p.dark)
        } else {
            warn!(light = %p.light, dark = %p.dark, "Low contrast palette, drawing modules in black on white");
            (Color::WHITE, Color::BLACK)
        };
        Self {
            frame: p.primary.into(),
            accent: p.secondary.into(),
            background: background.into(),
            foreground: foreground.into(),
        }
    }
}

// Logo
//------------------------------------------------------------------------------

/// Draws `logo` centered on a rendered code, scaled to fit `ratio` of the
/// canvas side (at most [`MAX_LOGO_RATIO`]) on a `pad` colored plate.
pub fn overlay_logo(canvas: &mut RgbImage, logo: &RgbaImage, ratio: f32, pad: Rgb<u8>) {
    let (cw, ch) = canvas.dimensions();
    let (lw, lh) = logo.dimensions();
    if lw == 0 || lh == 0 || ratio <= 0.0 {
        return;
    }

    let ratio = ratio.min(MAX_LOGO_RATIO);
    let max_side = (cw.min(ch) as f32 * ratio) as u32;
    if max_side == 0 {
        return;
    }

    let scale = max_side as f32 / lw.max(lh) as f32;
    let tw = ((lw as f32 * scale) as u32).max(1);
    let th = ((lh as f32 * scale) as u32).max(1);
    let logo = imageops::resize(logo, tw, th, FilterType::Triangle);

    let x0 = (cw - tw) / 2;
    let y0 = (ch - th) / 2;

    // Keeps modules from touching the logo
    let margin = (max_side / 10).max(1);
    let plate = Rect::at(x0.saturating_sub(margin) as i32, y0.saturating_sub(margin) as i32)
        .of_size(tw + margin * 2, th + margin * 2);
    draw_filled_rect_mut(canvas, plate, pad);

    for (x, y, px) in logo.enumerate_pixels() {
        let [r, g, b, a] = px.0;
        let dst = canvas.get_pixel_mut(x0 + x, y0 + y);
        dst.0 = [blend(r, dst[0], a), blend(g, dst[1], a), blend(b, dst[2], a)];
    }

    debug!(width = tw, height = th, "Overlaid logo");
}

fn blend(src: u8, dst: u8, alpha: u8) -> u8 {
    let a = alpha as u32;
    ((src as u32 * a + dst as u32 * (255 - a) + 127) / 255) as u8
}
