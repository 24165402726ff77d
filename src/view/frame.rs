//! Frame abstraction for drawing primitives
//!
//! Provides a simple, safe API for pixel buffer operations instead of
//! direct buffer indexing scattered throughout rendering code.

use panesplit::model::Rect;

/// Blend a foreground color onto a background color using alpha compositing.
///
/// Both colors are in ARGB format (0xAARRGGBB). Returns an opaque color.
#[inline]
pub fn blend_colors(bg: u32, fg: u32, alpha: f32) -> u32 {
    let channel = |shift: u32| {
        let b = ((bg >> shift) & 0xFF) as f32;
        let f = ((fg >> shift) & 0xFF) as f32;
        ((b * (1.0 - alpha) + f * alpha) as u32) << shift
    };

    0xFF000000 | channel(16) | channel(8) | channel(0)
}

/// A frame buffer wrapper providing safe drawing primitives.
///
/// All coordinates are in pixels. Out-of-bounds operations are clipped.
pub struct Frame<'a> {
    buffer: &'a mut [u32],
    width: usize,
    height: usize,
}

impl<'a> Frame<'a> {
    /// Create a new frame from a mutable pixel buffer
    ///
    /// If the buffer is smaller than width*height, the height is reduced to
    /// what the buffer can hold.
    pub fn new(buffer: &'a mut [u32], width: usize, height: usize) -> Self {
        let height = if width > 0 && buffer.len() < width * height {
            buffer.len() / width
        } else {
            height
        };

        Self {
            buffer,
            width,
            height,
        }
    }

    /// Clear the entire buffer with a solid color
    #[inline]
    pub fn clear(&mut self, color: u32) {
        self.buffer.fill(color);
    }

    /// Fill a rectangle with a solid color (no alpha blending)
    pub fn fill_rect(&mut self, rect: Rect, color: u32) {
        let x0 = (rect.x.max(0.0) as usize).min(self.width);
        let y0 = (rect.y.max(0.0) as usize).min(self.height);
        let x1 = ((rect.x + rect.width).max(0.0) as usize).min(self.width);
        let y1 = ((rect.y + rect.height).max(0.0) as usize).min(self.height);
        if x0 >= x1 || y0 >= y1 {
            return;
        }

        for y in y0..y1 {
            let row_start = y * self.width;
            self.buffer[row_start + x0..row_start + x1].fill(color);
        }
    }

    /// Fill a rectangle with alpha blending (color is ARGB format)
    pub fn blend_rect(&mut self, rect: Rect, color: u32) {
        let alpha = ((color >> 24) & 0xFF) as f32 / 255.0;
        if alpha <= 0.0 {
            return;
        }
        if alpha >= 1.0 {
            return self.fill_rect(rect, color);
        }

        let x0 = (rect.x.max(0.0) as usize).min(self.width);
        let y0 = (rect.y.max(0.0) as usize).min(self.height);
        let x1 = ((rect.x + rect.width).max(0.0) as usize).min(self.width);
        let y1 = ((rect.y + rect.height).max(0.0) as usize).min(self.height);
        if x0 >= x1 || y0 >= y1 {
            return;
        }

        for y in y0..y1 {
            let row_start = y * self.width;
            for pixel in &mut self.buffer[row_start + x0..row_start + x1] {
                *pixel = blend_colors(*pixel, color, alpha);
            }
        }
    }

    /// Fill a rectangle and outline it with a 1px border
    pub fn draw_bordered_rect(&mut self, rect: Rect, fill_color: u32, border_color: u32) {
        self.fill_rect(rect, fill_color);

        let Rect {
            x,
            y,
            width,
            height,
        } = rect;
        self.fill_rect(Rect::new(x, y, width, 1.0), border_color);
        self.fill_rect(Rect::new(x, y + height - 1.0, width, 1.0), border_color);
        self.fill_rect(Rect::new(x, y, 1.0, height), border_color);
        self.fill_rect(Rect::new(x + width - 1.0, y, 1.0, height), border_color);
    }

    /// Get a single pixel (bounds-checked, returns 0 if out of bounds)
    #[cfg(test)]
    pub fn get_pixel(&self, x: usize, y: usize) -> u32 {
        if x < self.width && y < self.height {
            self.buffer[y * self.width + x]
        } else {
            0
        }
    }
}
