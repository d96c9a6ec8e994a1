//! Coordinate Mapping
//!
//! Fits a document into a requested canvas size. One `ratio`, logical
//!   units per pixel, applies to both axes; the canvas shrinks along the
//!   axis with spare room so the document aspect ratio is kept.
//!
//!     use vscan::{Document, Viewport};
//!
//!     let doc = Document::new(100.0, 50.0);
//!     let vp = Viewport::fit(200, 200, &doc).unwrap();
//!     assert_eq!((vp.width, vp.height), (200, 100));
//!     assert_eq!(vp.ratio, 0.5);
//!     assert_eq!(vp.view, (0, 0));
//!

use crate::error::RenderError;
use crate::scene::Document;
use crate::transform::Transform;

/// Mapping from logical units to canvas pixels
#[derive(Debug,Copy,Clone,PartialEq)]
pub struct Viewport {
    /// Canvas width in pixels
    pub width: usize,
    /// Canvas height in pixels
    pub height: usize,
    /// Logical units per pixel
    pub ratio: f64,
    /// Pixel position of the canvas' top left corner
    pub view: (i64, i64),
}

fn positive(v: Option<f64>) -> Option<f64> {
    v.filter(|v| v.is_finite() && *v > 0.0)
}

impl Viewport {
    /// Fit a document into at most `width` x `height` pixels
    pub fn fit(width: usize, height: usize, doc: &Document) -> Result<Viewport, RenderError> {
        if width == 0 || height == 0 {
            return Err(RenderError::MalformedDocument(
                format!("requested canvas {}x{} is empty", width, height)));
        }
        let (mut doc_w, mut doc_h) = (positive(doc.width), positive(doc.height));
        if let Some(vb) = doc.view_box {
            if doc_h.is_none() {
                doc_w = Some(vb.width);
                doc_h = Some(vb.height);
            } else if doc_w.is_none() {
                doc_w = Some(vb.width);
            }
        }
        let (doc_w, doc_h) = match (positive(doc_w), positive(doc_h)) {
            (Some(w), Some(h)) => (w, h),
            _ => return Err(RenderError::MalformedDocument(
                "document has no usable width and height".to_string())),
        };

        // Logical rectangle shown on the canvas
        let (lx, ly, lw, lh) = match doc.view_box {
            None => (0.0, 0.0, doc_w, doc_h),
            Some(vb) => {
                if positive(Some(vb.width)).is_none() || positive(Some(vb.height)).is_none() {
                    return Err(RenderError::MalformedDocument(
                        format!("view box {}x{} is empty", vb.width, vb.height)));
                }
                let aspect = doc_w / doc_h;
                let (w, h) = if vb.width / vb.height < aspect {
                    (vb.height * aspect, vb.height)
                } else {
                    (vb.width, vb.width / aspect)
                };
                // Centered on the view box: origin minus half the added extent.
                // Halving the origin as well would shift any view box not at (0,0)
                ((2.0 * vb.x + vb.width - w) / 2.0,
                 (2.0 * vb.y + vb.height - h) / 2.0,
                 w, h)
            }
        };

        let (pw, ph) = (width as f64, height as f64);
        let (ratio, width, height) = if pw / lw < ph / lh {
            let h = (pw * lh / lw).ceil() as usize;
            (lw / pw, width, h.max(1).min(height))
        } else {
            let w = (ph * lw / lh).ceil() as usize;
            (lh / ph, w.max(1).min(width), height)
        };
        let view = ((lx / ratio).round() as i64, (ly / ratio).round() as i64);
        log::debug!("viewport: {}x{} px, ratio {}, view {:?}", width, height, ratio, view);
        Ok(Viewport { width, height, ratio, view })
    }
    /// Logical to pixel transform
    pub fn transform(&self) -> Transform {
        Transform::new_scale(1.0 / self.ratio, 1.0 / self.ratio)
    }
    /// Logical length in pixels
    pub fn to_pixels(&self, len: f64) -> f64 {
        len / self.ratio
    }
    /// Flattening tolerance in logical units for a tolerance in pixels
    pub fn tolerance(&self, flatness: f64) -> f64 {
        self.ratio * flatness
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tall_document() {
        let vp = Viewport::fit(300, 300, &Document::new(50.0, 100.0)).unwrap();
        assert_eq!((vp.width, vp.height), (150, 300));
        assert!((vp.ratio - 1.0 / 3.0).abs() < 1e-12);
    }
    #[test]
    fn view_box_widened_and_centered() {
        let doc = Document::new(100.0, 100.0).view_box(0.0, 0.0, 50.0, 100.0);
        let vp = Viewport::fit(100, 100, &doc).unwrap();
        assert_eq!((vp.width, vp.height), (100, 100));
        assert_eq!(vp.ratio, 1.0);
        assert_eq!(vp.view, (-25, 0));
    }
    #[test]
    fn view_box_scales() {
        let doc = Document::new(200.0, 200.0).view_box(10.0, 20.0, 100.0, 100.0);
        let vp = Viewport::fit(200, 200, &doc).unwrap();
        assert_eq!(vp.ratio, 0.5);
        assert_eq!(vp.view, (20, 40));
        assert_eq!(vp.tolerance(0.25), 0.125);
        assert_eq!(vp.transform().transform(10.0, 20.0), (20.0, 40.0));
    }
    #[test]
    fn size_from_view_box() {
        let mut doc = Document::with_view_box(0.0, 0.0, 40.0, 20.0);
        doc.width = Some(80.0);
        let vp = Viewport::fit(100, 100, &doc).unwrap();
        assert_eq!((vp.width, vp.height), (100, 50));
        assert_eq!(vp.ratio, 0.4);
    }
    #[test]
    fn malformed() {
        assert!(Viewport::fit(100, 100, &Document::default()).is_err());
        assert!(Viewport::fit(0, 100, &Document::new(10.0, 10.0)).is_err());
        let mut doc = Document::new(10.0, 10.0);
        doc.height = Some(0.0);
        assert!(Viewport::fit(10, 10, &doc).is_err());
        let doc = Document::new(10.0, 10.0).view_box(0.0, 0.0, 0.0, 10.0);
        assert!(Viewport::fit(10, 10, &doc).is_err());
    }
}
