//! Framebuffer

use crate::color::Rgb;

use std::ops::Index;
use std::ops::IndexMut;

/// Size of a checkerboard tile in pixels
const CHECKER_SIZE : usize = 8;

/// Initial contents of a framebuffer
#[derive(Debug,Copy,Clone,PartialEq)]
pub enum Background {
    White,
    Black,
    /// Alternating white and light gray tiles
    Checkerboard,
}

impl Default for Background {
    fn default() -> Background {
        Background::White
    }
}

impl Background {
    /// Background color at pixel (`x`,`y`)
    pub fn color_at(&self, x: usize, y: usize) -> Rgb {
        match self {
            Background::White => Rgb::white(),
            Background::Black => Rgb::black(),
            Background::Checkerboard => {
                if (x / CHECKER_SIZE + y / CHECKER_SIZE) % 2 == 0 {
                    Rgb::white()
                } else {
                    Rgb::gray(0.8)
                }
            }
        }
    }
}

/// RGB Framebuffer
///
/// Data is stored as row-major order (C-format)
#[derive(Debug,Default,Clone,PartialEq)]
pub struct Framebuffer {
    /// Pixel data
    pub data: Vec<Rgb>,
    /// Image Width in pixels
    pub width: usize,
    /// Image Height in pixels
    pub height: usize,
}

impl Framebuffer {
    /// Create a new white framebuffer
    pub fn new(width: usize, height: usize) -> Self {
        Framebuffer {
            width, height, data: vec![Rgb::white(); width * height]
        }
    }
    /// Number of pixels
    pub fn len(&self) -> usize {
        self.data.len()
    }
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
    /// Pixel at (`x`,`y`), `None` if outside
    pub fn get(&self, x: usize, y: usize) -> Option<&Rgb> {
        if x < self.width && y < self.height {
            self.data.get(y * self.width + x)
        } else {
            None
        }
    }
    /// Reset every pixel to the background
    pub fn clear(&mut self, background: Background) {
        let w = self.width;
        for (i, px) in self.data.iter_mut().enumerate() {
            *px = background.color_at(i % w, i / w);
        }
    }
    /// Pixel data as packed 8-bit RGB
    pub fn to_rgb8(&self) -> Vec<u8> {
        self.data.iter().flat_map(|c| c.to_u8().to_vec()).collect()
    }
}

impl Index<(usize,usize)> for Framebuffer {
    type Output = Rgb;
    fn index(&self, index: (usize, usize)) -> &Rgb {
        assert!(index.0 < self.width, "request {} >= {} width :: index", index.0, self.width);
        assert!(index.1 < self.height, "request {} >= {} height :: index", index.1, self.height);
        &self.data[index.1 * self.width + index.0]
    }
}
impl IndexMut<(usize,usize)> for Framebuffer {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Rgb {
        assert!(index.0 < self.width, "request {} >= {} width :: index_mut", index.0, self.width);
        assert!(index.1 < self.height, "request {} >= {} height :: index_mut", index.1, self.height);
        &mut self.data[index.1 * self.width + index.0]
    }
}
