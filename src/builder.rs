//! Path Building
//!
//! Every shape is normalized to a list of path segments, which are then
//!   executed into a [Path] of straight lines. Curves and arcs are flattened
//!   as they are executed.
//!
//!     use vscan::{Shape, outline};
//!
//!     let (path, err) = outline(&Shape::rect(10.0, 10.0, 20.0, 20.0).kind, 0.25).unwrap();
//!     assert!(err.is_none());
//!     assert_eq!(path.contours()[0].points.len(), 5);
//!
//! [Path]: ../paths/struct.Path.html

use crate::curves::{flatten_arc, flatten_cubic, flatten_quad};
use crate::error::{AttributeError, RenderError};
use crate::math::Point;
use crate::parser::{parse_path, parse_points, ParsedPath, PathSegment};
use crate::paths::Path;
use crate::scene::ShapeKind;

fn required(v: Option<f64>, element: &'static str, attribute: &'static str) -> Result<f64, RenderError> {
    v.ok_or(RenderError::MissingAttribute { element, attribute })
}

fn line_abs(x: f64, y: f64) -> PathSegment {
    PathSegment::LineTo { abs: true, x, y }
}

fn move_abs(x: f64, y: f64) -> PathSegment {
    PathSegment::MoveTo { abs: true, x, y }
}

fn arc_abs(rx: f64, ry: f64, x: f64, y: f64) -> PathSegment {
    PathSegment::EllipticalArc { abs: true, rx, ry, x_axis_rotation: 0.0,
                                 large_arc: false, sweep: true, x, y }
}

const CLOSE : PathSegment = PathSegment::ClosePath { abs: true };

/// Segments of a rectangle, with rounded corners when both radii are positive
fn rect_segments(x: f64, y: f64, w: f64, h: f64, rx: Option<f64>, ry: Option<f64>) -> Vec<PathSegment> {
    if !(w > 0.0 && h > 0.0) {
        return vec![];
    }
    let rx = rx.filter(|v| *v >= 0.0);
    let ry = ry.filter(|v| *v >= 0.0);
    let (rx, ry) = match (rx, ry) {
        (Some(rx), Some(ry)) => (rx, ry),
        (Some(r), None) | (None, Some(r)) => (r, r),
        (None, None) => (0.0, 0.0),
    };
    let rx = rx.min(w / 2.0);
    let ry = ry.min(h / 2.0);
    if rx <= 0.0 || ry <= 0.0 {
        return vec![
            move_abs(x, y),
            PathSegment::HorizontalLineTo { abs: true, x: x + w },
            PathSegment::VerticalLineTo { abs: true, y: y + h },
            PathSegment::HorizontalLineTo { abs: true, x },
            CLOSE,
        ];
    }
    vec![
        move_abs(x + rx, y),
        PathSegment::HorizontalLineTo { abs: true, x: x + w - rx },
        arc_abs(rx, ry, x + w, y + ry),
        PathSegment::VerticalLineTo { abs: true, y: y + h - ry },
        arc_abs(rx, ry, x + w - rx, y + h),
        PathSegment::HorizontalLineTo { abs: true, x: x + rx },
        arc_abs(rx, ry, x, y + h - ry),
        PathSegment::VerticalLineTo { abs: true, y: y + ry },
        arc_abs(rx, ry, x + rx, y),
        CLOSE,
    ]
}

fn ellipse_segments(cx: f64, cy: f64, rx: f64, ry: f64) -> Vec<PathSegment> {
    if !(rx > 0.0 && ry > 0.0) {
        return vec![];
    }
    vec![
        move_abs(cx + rx, cy),
        arc_abs(rx, ry, cx - rx, cy),
        arc_abs(rx, ry, cx + rx, cy),
        CLOSE,
    ]
}

fn point_segments(points: &str, close: bool) -> ParsedPath {
    let pts = match parse_points(points) {
        Ok(p) => p,
        Err(e) => return ParsedPath { segments: vec![], error: Some(e) },
    };
    let mut segments = vec![];
    if let Some((first, rest)) = pts.split_first() {
        segments.push(move_abs(first.x, first.y));
        segments.extend(rest.iter().map(|p| line_abs(p.x, p.y)));
        if close {
            segments.push(CLOSE);
        }
    }
    ParsedPath { segments, error: None }
}

/// Normalize a shape into path segments
///
/// A missing required attribute fails the whole render. Unusable point
///   lists and path data are reported in `ParsedPath::error`, along with
///   whatever segments could still be read
pub fn shape_segments(kind: &ShapeKind) -> Result<ParsedPath, RenderError> {
    let name = kind.name();
    let segments = match *kind {
        ShapeKind::Line { x1, y1, x2, y2 } => {
            vec![
                move_abs(required(x1, name, "x1")?, required(y1, name, "y1")?),
                line_abs(required(x2, name, "x2")?, required(y2, name, "y2")?),
            ]
        },
        ShapeKind::Rect { x, y, width, height, rx, ry } => {
            let w = required(width, name, "width")?;
            let h = required(height, name, "height")?;
            rect_segments(x.unwrap_or(0.0), y.unwrap_or(0.0), w, h, rx, ry)
        },
        ShapeKind::Circle { cx, cy, r } => {
            let r = required(r, name, "r")?;
            ellipse_segments(cx.unwrap_or(0.0), cy.unwrap_or(0.0), r, r)
        },
        ShapeKind::Ellipse { cx, cy, rx, ry } => {
            let rx = required(rx, name, "rx")?;
            let ry = required(ry, name, "ry")?;
            ellipse_segments(cx.unwrap_or(0.0), cy.unwrap_or(0.0), rx, ry)
        },
        ShapeKind::Polygon { ref points } => return Ok(point_segments(points, true)),
        ShapeKind::Polyline { ref points } => return Ok(point_segments(points, false)),
        ShapeKind::Path { ref d } => return Ok(parse_path(d)),
    };
    Ok(ParsedPath { segments, error: None })
}

/// Last control point, kept for the smooth curve commands
#[derive(Debug,Copy,Clone,PartialEq)]
enum Reflect {
    None,
    Cubic(Point),
    Quad(Point),
}

/// Executes path segments into straight line sub-paths
///
/// Coordinates stay in the units of the segments; `tolerance` is the largest
///   distance a flattened curve may stray from the true curve
#[derive(Debug)]
pub struct PathBuilder {
    path: Path,
    cursor: Point,
    start: Point,
    /// A drawing command must first begin a sub-path at the cursor
    needs_move: bool,
    reflect: Reflect,
    tolerance: f64,
    scratch: Vec<Point>,
}

impl PathBuilder {
    pub fn new(tolerance: f64) -> Self {
        Self {
            path: Path::new(),
            cursor: Point::default(),
            start: Point::default(),
            needs_move: true,
            reflect: Reflect::None,
            tolerance,
            scratch: vec![],
        }
    }
    /// Current point
    pub fn cursor(&self) -> Point {
        self.cursor
    }
    /// Finished path
    pub fn finish(self) -> Path {
        self.path
    }
    fn resolve(&self, abs: bool, x: f64, y: f64) -> Point {
        let p = Point::new(x, y);
        if abs { p } else { self.cursor + p }
    }
    fn begin(&mut self) {
        if self.needs_move {
            self.path.move_to(self.cursor.x, self.cursor.y);
            self.start = self.cursor;
            self.needs_move = false;
        }
    }
    fn line(&mut self, to: Point) {
        self.begin();
        if let Some(last) = self.path.last_point() {
            if last.approx_eq(&to, 1e-12) {
                self.cursor = to;
                return;
            }
        }
        self.path.line_to(to.x, to.y);
        self.cursor = to;
    }
    fn lines_from_scratch(&mut self) {
        let pts = std::mem::take(&mut self.scratch);
        for p in &pts {
            self.line(*p);
        }
        self.scratch = pts;
        self.scratch.clear();
    }
    fn cubic(&mut self, c1: Point, c2: Point, to: Point) {
        self.begin();
        flatten_cubic(self.cursor, c1, c2, to, self.tolerance, &mut self.scratch);
        self.lines_from_scratch();
        self.reflect = Reflect::Cubic(c2);
    }
    fn quad(&mut self, c: Point, to: Point) {
        self.begin();
        flatten_quad(self.cursor, c, to, self.tolerance, &mut self.scratch);
        self.lines_from_scratch();
        self.reflect = Reflect::Quad(c);
    }
    /// Execute a single segment
    pub fn execute(&mut self, seg: &PathSegment) {
        let reflect = self.reflect;
        self.reflect = Reflect::None;
        match *seg {
            PathSegment::MoveTo { abs, x, y } => {
                let to = self.resolve(abs, x, y);
                self.path.move_to(to.x, to.y);
                self.cursor = to;
                self.start = to;
                self.needs_move = false;
            },
            PathSegment::LineTo { abs, x, y } => {
                let to = self.resolve(abs, x, y);
                self.line(to);
            },
            PathSegment::HorizontalLineTo { abs, x } => {
                let x = if abs { x } else { self.cursor.x + x };
                self.line(Point::new(x, self.cursor.y));
            },
            PathSegment::VerticalLineTo { abs, y } => {
                let y = if abs { y } else { self.cursor.y + y };
                self.line(Point::new(self.cursor.x, y));
            },
            PathSegment::CurveTo { abs, x1, y1, x2, y2, x, y } => {
                let c1 = self.resolve(abs, x1, y1);
                let c2 = self.resolve(abs, x2, y2);
                let to = self.resolve(abs, x, y);
                self.cubic(c1, c2, to);
            },
            PathSegment::SmoothCurveTo { abs, x2, y2, x, y } => {
                let c1 = match reflect {
                    Reflect::Cubic(c) => c.reflect(&self.cursor),
                    _ => self.cursor,
                };
                let c2 = self.resolve(abs, x2, y2);
                let to = self.resolve(abs, x, y);
                self.cubic(c1, c2, to);
            },
            PathSegment::Quadratic { abs, x1, y1, x, y } => {
                let c = self.resolve(abs, x1, y1);
                let to = self.resolve(abs, x, y);
                self.quad(c, to);
            },
            PathSegment::SmoothQuadratic { abs, x, y } => {
                let c = match reflect {
                    Reflect::Quad(c) => c.reflect(&self.cursor),
                    _ => self.cursor,
                };
                let to = self.resolve(abs, x, y);
                self.quad(c, to);
            },
            PathSegment::EllipticalArc { abs, rx, ry, x_axis_rotation, large_arc, sweep, x, y } => {
                let to = self.resolve(abs, x, y);
                self.begin();
                flatten_arc(self.cursor, to, rx, ry, x_axis_rotation, large_arc, sweep,
                            self.tolerance, &mut self.scratch);
                self.lines_from_scratch();
                self.cursor = to;
            },
            PathSegment::ClosePath { .. } => {
                self.path.close_polygon();
                self.cursor = self.start;
                self.needs_move = true;
            },
        }
    }
}

/// Execute segments into a path
pub fn build_path(segments: &[PathSegment], tolerance: f64) -> Path {
    let mut b = PathBuilder::new(tolerance);
    for seg in segments {
        b.execute(seg);
    }
    b.finish()
}

/// Outline of a shape as straight line sub-paths
///
/// The path holds the drawable part of the shape; a recoverable attribute
///   problem is returned alongside it
pub fn outline(kind: &ShapeKind, tolerance: f64) -> Result<(Path, Option<AttributeError>), RenderError> {
    let parsed = shape_segments(kind)?;
    Ok((build_path(&parsed.segments, tolerance), parsed.error))
}
