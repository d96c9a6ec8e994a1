//! Scanline vector graphics renderer
//!
//! Renders an in-memory scene of groups and shapes into an RGB framebuffer.
//!   Fills and strokes are aliased: a pixel is either painted or not.
//!
//! # Example
//!
//!     use vscan::{Document, Shape, Rgb};
//!
//!     let doc = Document::new(100.0, 100.0)
//!         .push(Shape::circle(50.0, 50.0, 30.0).fill("blue"))
//!         .push(Shape::line(10.0, 90.0, 90.0, 90.0).stroke("black").stroke_width(2.0));
//!
//!     let fb = vscan::render(&doc, 100, 100).unwrap();
//!     assert_eq!((fb.width, fb.height), (100, 100));
//!     assert_eq!(fb[(50,50)], Rgb::new(0.0, 0.0, 1.0));
//!     assert_eq!(fb[(50,89)], Rgb::black());
//!
//! # How does this work
//!
//!```text
//!   render(doc, w, h)
//!     Viewport::fit()          -- ratio, canvas size, view offset
//!     RenderContext::draw_node()
//!       outline()              -- shape -> segments -> Path (logical units)
//!         shape_segments()
//!         PathBuilder          -- curves and arcs flattened here
//!       fill_path()
//!         ConvTransform        -- logical -> pixels
//!         ScanlineFiller       -- column sweep, nonzero / evenodd
//!           Compositor         -- view offset, clipping, alpha blend
//!       stroke_path()
//!         Stroke               -- outline of the stroke, filled nonzero
//!         ScanlineFiller
//!```

pub mod math;
pub mod error;
pub mod color;
pub mod parser;
pub mod paths;
pub mod transform;
pub mod curves;
pub mod builder;
pub mod stroke;
pub mod buffer;
pub mod compositor;
pub mod fill;
pub mod scene;
pub mod mapper;
pub mod render;
pub mod image_io;

pub use math::*;
pub use error::*;
pub use color::*;
pub use parser::*;
pub use paths::*;
pub use transform::*;
pub use curves::*;
pub use builder::*;
pub use stroke::*;
pub use buffer::*;
pub use compositor::*;
pub use fill::*;
pub use scene::*;
pub use mapper::*;
pub use render::*;

/// Source of path vertices
pub trait VertexSource {
    /// Vertices of all sub-paths
    fn xconvert(&self) -> Vec<Vertex<f64>>;
}

impl<'a, T: VertexSource> VertexSource for &'a T {
    fn xconvert(&self) -> Vec<Vertex<f64>> {
        T::xconvert(*self)
    }
}
