//! Scene Tree
//!
//! An in-memory document: size, optional view box, and an ordered tree of
//!   groups and shapes. Attributes the document may omit are `Option`s; how
//!   a missing attribute is treated is decided when the shape is drawn.
//!
//!     use vscan::{Document, Group, Shape, FillRule};
//!
//!     let doc = Document::new(100.0, 100.0)
//!         .push(Shape::rect(10.0, 10.0, 20.0, 20.0).fill("red"))
//!         .push(Group::new()
//!               .push(Shape::circle(50.0, 50.0, 10.0).fill("none").stroke("black"))
//!               .push(Shape::path("M0 0 L10 0 L0 10z").fill_rule(FillRule::EvenOdd)));
//!     assert_eq!(doc.children.len(), 2);
//!

use crate::fill::FillRule;

/// Logical rectangle mapped onto the canvas
#[derive(Debug,Copy,Clone,PartialEq)]
pub struct ViewBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ViewBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }
}

/// Root of a scene
#[derive(Debug,Clone,Default,PartialEq)]
pub struct Document {
    /// Native width in logical units
    pub width: Option<f64>,
    /// Native height in logical units
    pub height: Option<f64>,
    pub view_box: Option<ViewBox>,
    pub children: Vec<Node>,
}

impl Document {
    /// Document with a native size
    pub fn new(width: f64, height: f64) -> Self {
        Self { width: Some(width), height: Some(height), .. Default::default() }
    }
    /// Document sized only by its view box
    pub fn with_view_box(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { view_box: Some(ViewBox::new(x, y, width, height)), .. Default::default() }
    }
    /// Set the view box
    pub fn view_box(mut self, x: f64, y: f64, width: f64, height: f64) -> Self {
        self.view_box = Some(ViewBox::new(x, y, width, height));
        self
    }
    /// Append a child, painted after all earlier children
    pub fn push<N: Into<Node>>(mut self, node: N) -> Self {
        self.children.push(node.into());
        self
    }
}

/// Element of the scene tree
#[derive(Debug,Clone,PartialEq)]
pub enum Node {
    Group(Group),
    Shape(Shape),
}

impl From<Group> for Node {
    fn from(g: Group) -> Node {
        Node::Group(g)
    }
}
impl From<Shape> for Node {
    fn from(s: Shape) -> Node {
        Node::Shape(s)
    }
}

/// Ordered list of children
///
/// Groups carry no style of their own
#[derive(Debug,Clone,Default,PartialEq)]
pub struct Group {
    pub children: Vec<Node>,
}

impl Group {
    pub fn new() -> Self {
        Self { children: vec![] }
    }
    pub fn push<N: Into<Node>>(mut self, node: N) -> Self {
        self.children.push(node.into());
        self
    }
}

/// Geometry of a shape, in logical units
#[derive(Debug,Clone,PartialEq)]
pub enum ShapeKind {
    Line { x1: Option<f64>, y1: Option<f64>, x2: Option<f64>, y2: Option<f64> },
    Rect { x: Option<f64>, y: Option<f64>, width: Option<f64>, height: Option<f64>,
           rx: Option<f64>, ry: Option<f64> },
    Circle { cx: Option<f64>, cy: Option<f64>, r: Option<f64> },
    Ellipse { cx: Option<f64>, cy: Option<f64>, rx: Option<f64>, ry: Option<f64> },
    /// Closed list of `x,y` pairs
    Polygon { points: String },
    /// Open list of `x,y` pairs
    Polyline { points: String },
    /// Path data
    Path { d: String },
}

impl ShapeKind {
    /// Element name, used in messages
    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Line { .. } => "line",
            ShapeKind::Rect { .. } => "rect",
            ShapeKind::Circle { .. } => "circle",
            ShapeKind::Ellipse { .. } => "ellipse",
            ShapeKind::Polygon { .. } => "polygon",
            ShapeKind::Polyline { .. } => "polyline",
            ShapeKind::Path { .. } => "path",
        }
    }
}

/// Presentation attributes of a shape
///
/// Missing values take their defaults at draw time: fill black, stroke
///   none, stroke width 1, opacities 1, fill rule nonzero
#[derive(Debug,Clone,Default,PartialEq)]
pub struct Style {
    pub fill: Option<String>,
    pub stroke: Option<String>,
    pub stroke_width: Option<f64>,
    pub fill_opacity: Option<f64>,
    pub stroke_opacity: Option<f64>,
    /// Multiplies both fill and stroke opacity
    pub opacity: Option<f64>,
    pub fill_rule: Option<FillRule>,
}

/// Drawable shape
#[derive(Debug,Clone,PartialEq)]
pub struct Shape {
    pub kind: ShapeKind,
    pub style: Style,
}

impl Shape {
    pub fn new(kind: ShapeKind) -> Self {
        Self { kind, style: Style::default() }
    }
    pub fn line(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::new(ShapeKind::Line { x1: Some(x1), y1: Some(y1), x2: Some(x2), y2: Some(y2) })
    }
    pub fn rect(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(ShapeKind::Rect { x: Some(x), y: Some(y),
                                    width: Some(width), height: Some(height),
                                    rx: None, ry: None })
    }
    pub fn circle(cx: f64, cy: f64, r: f64) -> Self {
        Self::new(ShapeKind::Circle { cx: Some(cx), cy: Some(cy), r: Some(r) })
    }
    pub fn ellipse(cx: f64, cy: f64, rx: f64, ry: f64) -> Self {
        Self::new(ShapeKind::Ellipse { cx: Some(cx), cy: Some(cy), rx: Some(rx), ry: Some(ry) })
    }
    pub fn polygon(points: &str) -> Self {
        Self::new(ShapeKind::Polygon { points: points.to_string() })
    }
    pub fn polyline(points: &str) -> Self {
        Self::new(ShapeKind::Polyline { points: points.to_string() })
    }
    pub fn path(d: &str) -> Self {
        Self::new(ShapeKind::Path { d: d.to_string() })
    }
    /// Set the corner radii of a rectangle; ignored by other shapes
    pub fn corner_radii(mut self, rx: Option<f64>, ry: Option<f64>) -> Self {
        if let ShapeKind::Rect { rx: ref mut x, ry: ref mut y, .. } = self.kind {
            *x = rx;
            *y = ry;
        }
        self
    }
    pub fn fill(mut self, paint: &str) -> Self {
        self.style.fill = Some(paint.to_string());
        self
    }
    pub fn stroke(mut self, paint: &str) -> Self {
        self.style.stroke = Some(paint.to_string());
        self
    }
    pub fn stroke_width(mut self, width: f64) -> Self {
        self.style.stroke_width = Some(width);
        self
    }
    pub fn fill_opacity(mut self, opacity: f64) -> Self {
        self.style.fill_opacity = Some(opacity);
        self
    }
    pub fn stroke_opacity(mut self, opacity: f64) -> Self {
        self.style.stroke_opacity = Some(opacity);
        self
    }
    pub fn opacity(mut self, opacity: f64) -> Self {
        self.style.opacity = Some(opacity);
        self
    }
    pub fn fill_rule(mut self, rule: FillRule) -> Self {
        self.style.fill_rule = Some(rule);
        self
    }
}
