use image::{Rgb, RgbImage, RgbaImage};
use imageproc::{drawing::draw_filled_rect_mut, rect::Rect};

use super::{
    render::{overlay_logo, Theme, MAX_LOGO_RATIO},
    ECLevel,
};
use crate::{
    common::error::{QRError, QRResult},
    palette::PaletteResult,
};

// QR
//------------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct QR {
    ver: i16,
    ecl: ECLevel,
    w: usize,
    grid: Vec<bool>,
    quiet_zone: u32,
    border: u32,
    palette: Option<PaletteResult>,
}

impl QR {
    pub(super) fn new(
        ver: i16,
        ecl: ECLevel,
        w: usize,
        grid: Vec<bool>,
        quiet_zone: u32,
        border: u32,
        palette: Option<PaletteResult>,
    ) -> Self {
        debug_assert!(grid.len() == w * w, "Grid size {} doesn't match width {w}", grid.len());
        Self { ver, ecl, w, grid, quiet_zone, border, palette }
    }

    pub fn version(&self) -> i16 {
        self.ver
    }

    pub fn ec_level(&self) -> ECLevel {
        self.ecl
    }

    pub fn width(&self) -> usize {
        self.w
    }

    pub fn is_dark(&self, x: usize, y: usize) -> bool {
        debug_assert!(x < self.w && y < self.w, "Module ({x}, {y}) out of bounds");
        self.grid[y * self.w + x]
    }

    pub fn count_dark_modules(&self) -> usize {
        self.grid.iter().filter(|&&d| d).count()
    }

    pub fn metadata(&self) -> String {
        format!("{{ Version: {}, Ec level: {:?}, Width: {} }}", self.ver, self.ecl, self.w)
    }
}

// Render
//------------------------------------------------------------------------------

impl QR {
    /// Renders with the builder's palette when one was set, plain otherwise.
    pub fn to_image(&self, module_sz: u32) -> QRResult<RgbImage> {
        match self.palette {
            Some(p) => self.to_themed_image(module_sz, &p),
            None => self.render(module_sz, &Theme::plain(), 0),
        }
    }

    /// Dark modules in the palette's dark variant on its light variant, framed
    /// in primary with a secondary accent line.
    pub fn to_themed_image(&self, module_sz: u32, palette: &PaletteResult) -> QRResult<RgbImage> {
        self.render(module_sz, &Theme::from_palette(palette), self.border)
    }

    /// Renders like [`QR::to_image`] with `logo` centered over the symbol.
    /// `ratio` is relative to the symbol side, excluding margins, and is capped
    /// so the code stays readable at error correction level H.
    pub fn to_image_with_logo(&self, module_sz: u32, logo: &RgbaImage, ratio: f32) -> QRResult<RgbImage> {
        let theme = match self.palette {
            Some(p) => Theme::from_palette(&p),
            None => Theme::plain(),
        };
        let mut canvas = self.to_image(module_sz)?;

        let qr_sz = self.w as f32 * module_sz as f32;
        let canvas_ratio = ratio.min(MAX_LOGO_RATIO) * qr_sz / canvas.width() as f32;
        overlay_logo(&mut canvas, logo, canvas_ratio, theme.background);
        Ok(canvas)
    }

    fn render(&self, module_sz: u32, theme: &Theme, border: u32) -> QRResult<RgbImage> {
        if module_sz == 0 {
            return Err(QRError::InvalidScale);
        }

        let frame_sz = border * module_sz;
        let accent_sz = if border > 0 { (module_sz / 2).max(1) } else { 0 };
        let qz_sz = self.quiet_zone * module_sz;
        let margin = frame_sz + accent_sz + qz_sz;
        let qr_sz = self.w as u32 * module_sz;
        let total_sz = margin + qr_sz + margin;

        let mut canvas = RgbImage::from_pixel(total_sz, total_sz, theme.frame);
        fill_inset(&mut canvas, frame_sz, theme.accent);
        fill_inset(&mut canvas, frame_sz + accent_sz, theme.background);

        for (i, &dark) in self.grid.iter().enumerate() {
            if !dark {
                continue;
            }
            let x = margin + (i % self.w) as u32 * module_sz;
            let y = margin + (i / self.w) as u32 * module_sz;
            let rect = Rect::at(x as i32, y as i32).of_size(module_sz, module_sz);
            draw_filled_rect_mut(&mut canvas, rect, theme.foreground);
        }

        Ok(canvas)
    }

    /// Text rendering, light modules as blocks so it reads on dark terminals.
    pub fn to_str(&self, module_sz: usize) -> String {
        let qz_sz = self.quiet_zone as usize * module_sz;
        let qr_sz = self.w * module_sz;
        let total_sz = qz_sz + qr_sz + qz_sz;

        let mut canvas = String::with_capacity(total_sz * (total_sz * 3 + 1));
        for i in 0..total_sz {
            for j in 0..total_sz {
                if i < qz_sz || i >= qz_sz + qr_sz || j < qz_sz || j >= qz_sz + qr_sz {
                    canvas.push('█');
                    continue;
                }
                let r = (i - qz_sz) / module_sz;
                let c = (j - qz_sz) / module_sz;
                canvas.push(if self.is_dark(c, r) { ' ' } else { '█' });
            }
            canvas.push('\n');
        }

        canvas
    }
}

fn fill_inset(canvas: &mut RgbImage, inset: u32, color: Rgb<u8>) {
    let (w, h) = canvas.dimensions();
    if inset * 2 >= w || inset * 2 >= h {
        return;
    }
    let rect = Rect::at(inset as i32, inset as i32).of_size(w - inset * 2, h - inset * 2);
    draw_filled_rect_mut(canvas, rect, color);
}
