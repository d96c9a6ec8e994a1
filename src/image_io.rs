//! Image files
//!
//! Framebuffers are written as 8-bit RGB images, the format follows the
//!   file extension (`.png` or `.ppm`).
//!
use crate::buffer::Framebuffer;
use crate::color::Rgb;

use std::path::Path;

/// Write a framebuffer to an image file
pub fn write_png<P: AsRef<Path>>(fb: &Framebuffer, filename: P) -> Result<(), std::io::Error> {
    image::save_buffer(filename, &fb.to_rgb8(), fb.width as u32, fb.height as u32, image::RGB(8))
}

/// Read an image file into a framebuffer
pub fn read_file<P: AsRef<Path>>(filename: P) -> Result<Framebuffer, image::ImageError> {
    let img = image::open(filename)?.to_rgb();
    let (w, h) = img.dimensions();
    let data = img.into_raw()
        .chunks(3)
        .map(|c| Rgb::from_u8(c[0], c[1], c[2]))
        .collect();
    Ok(Framebuffer { data, width: w as usize, height: h as usize })
}

/// Compare two image files pixel by pixel
pub fn img_diff<P: AsRef<Path>>(f1: P, f2: P) -> Result<bool, image::ImageError> {
    let a = read_file(f1)?;
    let b = read_file(f2)?;
    if a.width != b.width || a.height != b.height {
        log::debug!("image sizes differ: {}x{} {}x{}", a.width, a.height, b.width, b.height);
        return Ok(false);
    }
    let mut same = true;
    for (i, (p1, p2)) in a.data.iter().zip(b.data.iter()).enumerate() {
        if p1.to_u8() != p2.to_u8() {
            log::debug!("[{},{}]: {:?} {:?}", i % a.width, i / a.width, p1.to_u8(), p2.to_u8());
            same = false;
        }
    }
    Ok(same)
}
