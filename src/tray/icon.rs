//! Tray glyph drawing
//!
//! The glyph is a 30x30 bitmap: white background with a red rectangle
//! spanning the whole canvas. It is drawn once and never modified.

use tiny_skia::{Color, Paint, PixmapMut, Rect, Transform};

/// Glyph edge length in pixels
pub const GLYPH_SIZE: u32 = 30;

/// Opaque RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    pub const RED: Rgb = Rgb(255, 0, 0);

    fn to_color(self) -> Color {
        Color::from_rgba8(self.0, self.1, self.2, 255)
    }

    fn to_rgba(self) -> [u8; 4] {
        [self.0, self.1, self.2, 255]
    }
}

/// Immutable bitmap used as the tray icon image
#[derive(Clone, PartialEq, Eq)]
pub struct Glyph {
    width: u32,
    height: u32,
    /// Row-major RGBA, always opaque
    rgba: Vec<u8>,
}

impl std::fmt::Debug for Glyph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Glyph")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

impl Glyph {
    /// Create a canvas filled with `background`
    fn new(width: u32, height: u32, background: Rgb) -> Self {
        let pixels = width as usize * height as usize;
        Self {
            width,
            height,
            rgba: background.to_rgba().repeat(pixels),
        }
    }

    /// Fill the rectangle between two inclusive corners. Corners past the
    /// canvas edge are clipped; an empty canvas is left untouched.
    fn fill_rectangle(&mut self, top_left: (u32, u32), bottom_right: (u32, u32), color: Rgb) {
        let (left, top) = top_left;
        let (right, bottom) = bottom_right;
        let Some(rect) = Rect::from_ltrb(
            left as f32,
            top as f32,
            (right + 1) as f32,
            (bottom + 1) as f32,
        ) else {
            return;
        };
        // Opaque pixels read the same premultiplied or not, so tiny-skia can
        // draw straight into the RGBA buffer.
        let Some(mut pixmap) = PixmapMut::from_bytes(&mut self.rgba, self.width, self.height)
        else {
            return;
        };

        let mut paint = Paint::default();
        paint.set_color(color.to_color());
        paint.anti_alias = false;
        pixmap.fill_rect(rect, &paint, Transform::identity(), None);
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// RGBA value at (x, y), or `None` when out of bounds
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = (y as usize * self.width as usize + x as usize) * 4;
        let mut px = [0; 4];
        px.copy_from_slice(&self.rgba[offset..offset + 4]);
        Some(px)
    }

    /// Row-major RGBA bytes, as expected by `tray_icon::Icon::from_rgba`
    pub fn to_rgba(&self) -> Vec<u8> {
        self.rgba.clone()
    }

    /// Row-major ARGB32 in network byte order, as StatusNotifierItem expects
    pub fn to_argb(&self) -> Vec<u8> {
        let mut data = self.rgba.clone();
        for px in data.chunks_exact_mut(4) {
            px.rotate_right(1);
        }
        data
    }
}

/// Draw the tray glyph.
pub fn build_glyph() -> Glyph {
    let mut glyph = Glyph::new(GLYPH_SIZE, GLYPH_SIZE, Rgb::WHITE);
    glyph.fill_rectangle((0, 0), (GLYPH_SIZE, GLYPH_SIZE), Rgb::RED);
    glyph
}
