//! Scene Rendering
//!
//! Walks the scene tree in document order. Each shape is filled and then
//!   stroked, so later shapes and strokes paint over earlier ones.
//!
//!     use vscan::{render, Document, Shape, Rgb};
//!
//!     let doc = Document::new(40.0, 40.0)
//!         .push(Shape::rect(10.0, 10.0, 20.0, 20.0).fill("#ff0000"));
//!     let fb = render(&doc, 40, 40).unwrap();
//!     assert_eq!(fb[(10,10)], Rgb::new(1.0, 0.0, 0.0));
//!     assert_eq!(fb[(30,30)], Rgb::white());
//!

use crate::buffer::{Background, Framebuffer};
use crate::builder::outline;
use crate::color::{resolve_paint, Rgba};
use crate::compositor::Compositor;
use crate::error::RenderError;
use crate::fill::{FillRule, ScanlineFiller};
use crate::mapper::Viewport;
use crate::math::clamp01;
use crate::paths::Path;
use crate::scene::{Document, Node, Shape};
use crate::stroke::Stroke;
use crate::transform::ConvTransform;

/// Settings shared by every shape of a render
#[derive(Debug,Copy,Clone,PartialEq)]
pub struct RenderOptions {
    /// Initial contents of the canvas
    pub background: Background,
    /// Largest distance, in pixels, a flattened curve may stray from the curve
    pub flatness: f64,
    /// Stroke miter limit
    pub miter_limit: f64,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            background: Background::White,
            flatness: 0.25,
            miter_limit: 4.0,
        }
    }
}

/// Renders documents into framebuffers
#[derive(Debug,Default,Clone)]
pub struct Renderer {
    options: RenderOptions,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn with_options(options: RenderOptions) -> Self {
        Self { options }
    }
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }
    /// Set the background
    pub fn background(&mut self, background: Background) {
        self.options.background = background;
    }
    /// Set the curve flatness in pixels, limited to (0,1]
    pub fn flatness(&mut self, flatness: f64) {
        self.options.flatness = if flatness > 0.0 { flatness.min(1.0) } else { 0.25 };
    }
    /// Set the stroke miter limit
    pub fn miter_limit(&mut self, miter_limit: f64) {
        self.options.miter_limit = miter_limit.max(1.0);
    }
    /// Render a document into at most `width` x `height` pixels
    ///
    /// The returned framebuffer may be smaller than requested along one
    ///   axis, to keep the document's aspect ratio
    pub fn render(&self, doc: &Document, width: usize, height: usize) -> Result<Framebuffer, RenderError> {
        let viewport = Viewport::fit(width, height, doc)?;
        let mut fb = Framebuffer::new(viewport.width, viewport.height);
        {
            let mut ctx = RenderContext {
                viewport,
                compositor: Compositor::new(&mut fb, viewport.view),
                options: &self.options,
            };
            ctx.compositor.clear(self.options.background);
            for node in &doc.children {
                ctx.draw_node(node)?;
            }
        }
        Ok(fb)
    }
}

/// Render a document with the default options
pub fn render(doc: &Document, width: usize, height: usize) -> Result<Framebuffer, RenderError> {
    Renderer::new().render(doc, width, height)
}

/// State of a single render call
#[derive(Debug)]
pub struct RenderContext<'a> {
    pub viewport: Viewport,
    pub compositor: Compositor<'a>,
    pub options: &'a RenderOptions,
}

impl<'a> RenderContext<'a> {
    /// Draw a node and, for groups, all of its children in order
    pub fn draw_node(&mut self, node: &Node) -> Result<(), RenderError> {
        match node {
            Node::Group(g) => {
                for child in &g.children {
                    self.draw_node(child)?;
                }
            },
            Node::Shape(s) => self.draw_shape(s)?,
        }
        Ok(())
    }
    /// Fill and then stroke a shape
    pub fn draw_shape(&mut self, shape: &Shape) -> Result<(), RenderError> {
        let name = shape.kind.name();
        let tolerance = self.viewport.tolerance(self.options.flatness);
        let (path, err) = outline(&shape.kind, tolerance)?;
        if let Some(err) = err {
            log::warn!("<{}>: {}", name, err);
        }
        if path.is_empty() {
            return Ok(());
        }
        let style = &shape.style;
        let opacity = clamp01(style.opacity.unwrap_or(1.0));

        let fill = resolve_paint(style.fill.as_deref(), Some("black"),
                                 clamp01(style.fill_opacity.unwrap_or(1.0)) * opacity);
        let stroke = resolve_paint(style.stroke.as_deref(), None,
                                   clamp01(style.stroke_opacity.unwrap_or(1.0)) * opacity);
        let width = style.stroke_width.unwrap_or(1.0);
        log::debug!("<{}>: {} vertices, fill {:?}, stroke {:?} width {}",
                    name, path.vertices.len(), fill, stroke, width);

        if !fill.is_transparent() {
            self.fill_path(&path, style.fill_rule.unwrap_or_default(), &fill);
        }
        if !stroke.is_transparent() && width > 0.0 {
            self.stroke_path(&path, width, &stroke);
        }
        Ok(())
    }
    /// Fill a path given in logical units
    pub fn fill_path(&mut self, path: &Path, rule: FillRule, color: &Rgba) {
        let mut ras = ScanlineFiller::new(rule);
        ras.add_path(&ConvTransform::new(path.clone(), self.viewport.transform()));
        ras.fill(&mut self.compositor, color);
    }
    /// Stroke a path given in logical units, `width` in logical units
    pub fn stroke_path(&mut self, path: &Path, width: f64, color: &Rgba) {
        let mut stroke = Stroke::new(ConvTransform::new(path.clone(), self.viewport.transform()));
        stroke.width(self.viewport.to_pixels(width));
        stroke.miter_limit(self.options.miter_limit);
        let mut ras = ScanlineFiller::new(FillRule::NonZero);
        ras.add_path(&stroke);
        ras.fill(&mut self.compositor, color);
    }
}
