//! Compositor
//!
//! The single place pixels are written. Coordinates are in pixels relative
//!   to the document origin; the view offset is subtracted before clipping.

use crate::buffer::{Background, Framebuffer};
use crate::color::Rgba;
use crate::math::blend;

/// Blends colors into a framebuffer
#[derive(Debug)]
pub struct Compositor<'a> {
    fb: &'a mut Framebuffer,
    /// View offset in pixels
    view: (i64, i64),
}

impl<'a> Compositor<'a> {
    pub fn new(fb: &'a mut Framebuffer, view: (i64, i64)) -> Self {
        Self { fb, view }
    }
    /// Visible columns, in pixels before the view offset is removed
    pub fn x_limits(&self) -> (i64, i64) {
        (self.view.0, self.view.0 + self.fb.width as i64)
    }
    /// Visible rows, in pixels before the view offset is removed
    pub fn y_limits(&self) -> (i64, i64) {
        (self.view.1, self.view.1 + self.fb.height as i64)
    }
    pub fn clear(&mut self, background: Background) {
        self.fb.clear(background);
    }
    /// Blend a color into a single pixel
    ///
    /// Pixels outside the framebuffer are ignored
    pub fn draw(&mut self, x: i64, y: i64, c: &Rgba) {
        let x = x - self.view.0;
        let y = y - self.view.1;
        if x < 0 || y < 0 || x >= self.fb.width as i64 || y >= self.fb.height as i64 {
            return;
        }
        let px = &mut self.fb[(x as usize, y as usize)];
        px.r = blend(c.rgb.r, px.r, c.a);
        px.g = blend(c.rgb.g, px.g, c.a);
        px.b = blend(c.rgb.b, px.b, c.a);
    }
    /// Blend a color into rows `y1 ..= y2` of column `x`
    pub fn blend_vline(&mut self, x: i64, y1: i64, y2: i64, c: &Rgba) {
        if c.is_transparent() {
            return;
        }
        let (ymin, ymax) = self.y_limits();
        let (y1, y2) = if y2 > y1 { (y1, y2) } else { (y2, y1) };
        for y in y1.max(ymin) ..= y2.min(ymax - 1) {
            self.draw(x, y, c);
        }
    }
}
