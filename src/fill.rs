//! Scanline Filling
//!
//! Outlines are filled column by column without anti-aliasing. For each
//!   integer column `x`, every edge with `x0 <= x < x1` crosses the column
//!   once; the crossings are sorted by y and paired into vertical spans
//!   according to the fill rule.
//!
//! Edges are kept in an active list ordered by their first column, so each
//!   column only looks at the edges that actually span it.
//!
//!     use vscan::{Background, Compositor, Contour, FillRule, Framebuffer, Point, Rgba, Rgb};
//!     use vscan::ScanlineFiller;
//!
//!     let mut fb = Framebuffer::new(8, 8);
//!     fb.clear(Background::White);
//!     let mut ras = ScanlineFiller::new(FillRule::NonZero);
//!     ras.add_contour(&Contour::new(vec![Point::new(2.,2.), Point::new(6.,2.),
//!                                        Point::new(6.,6.), Point::new(2.,6.)]));
//!     ras.fill(&mut Compositor::new(&mut fb, (0,0)), &Rgba::black());
//!     assert_eq!(fb[(2,2)], Rgb::black());
//!     assert_eq!(fb[(5,5)], Rgb::black());
//!     assert_eq!(fb[(6,6)], Rgb::white());
//!

use crate::color::Rgba;
use crate::compositor::Compositor;
use crate::paths::{contours, Contour};

use crate::VertexSource;

/// Which regions of an outline are inside
#[derive(Debug,PartialEq,Copy,Clone)]
pub enum FillRule {
    /// Inside where the winding number is not zero
    NonZero,
    /// Inside where an odd number of edges is crossed
    EvenOdd,
}
impl Default for FillRule {
    fn default() -> FillRule {
        FillRule::NonZero
    }
}

/// Pixel coordinates are clamped to this magnitude before becoming integers
const PIXEL_LIMIT : f64 = 1e9;

/// Smallest integer not below `v`, clamped to `PIXEL_LIMIT`
fn ceil_px(v: f64) -> i64 {
    v.ceil().max(-PIXEL_LIMIT).min(PIXEL_LIMIT) as i64
}

/// Non-vertical edge, stored left to right
#[derive(Debug,Copy,Clone,PartialEq)]
struct Edge {
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
    /// +1 if the contour runs left to right along this edge, -1 otherwise
    winding: i32,
    /// First and last integer columns crossed
    first: i64,
    last: i64,
}

impl Edge {
    fn new(ax: f64, ay: f64, bx: f64, by: f64) -> Option<Edge> {
        if ax == bx || ![ax, ay, bx, by].iter().all(|v| v.is_finite()) {
            return None;
        }
        let (x0, y0, x1, y1, winding) = if ax < bx {
            (ax, ay, bx, by, 1)
        } else {
            (bx, by, ax, ay, -1)
        };
        let first = ceil_px(x0);
        let last = ceil_px(x1) - 1;
        if last < first {
            return None;
        }
        Some(Edge { x0, y0, x1, y1, winding, first, last })
    }
    /// Crossing of the edge with column `x`, clamped to the edge
    fn y_at(&self, x: f64) -> f64 {
        let y = self.y0 + (x - self.x0) * (self.y1 - self.y0) / (self.x1 - self.x0);
        let (lo, hi) = if self.y0 < self.y1 { (self.y0, self.y1) } else { (self.y1, self.y0) };
        y.max(lo).min(hi)
    }
}

/// Aliased scanline filler
#[derive(Debug,Default)]
pub struct ScanlineFiller {
    rule: FillRule,
    edges: Vec<Edge>,
}

impl ScanlineFiller {
    pub fn new(rule: FillRule) -> Self {
        Self { rule, edges: vec![] }
    }
    /// Set the fill rule
    pub fn filling_rule(&mut self, rule: FillRule) {
        self.rule = rule;
    }
    /// Remove all edges
    pub fn reset(&mut self) {
        self.edges.clear();
    }
    /// Number of edges that cross at least one column
    pub fn edges(&self) -> usize {
        self.edges.len()
    }
    /// Add the edges of a closed contour
    pub fn add_contour(&mut self, contour: &Contour) {
        for w in contour.points.windows(2) {
            if let Some(e) = Edge::new(w[0].x, w[0].y, w[1].x, w[1].y) {
                self.edges.push(e);
            }
        }
    }
    /// Add every sub-path of a vertex source, each closed
    pub fn add_path<VS: VertexSource>(&mut self, path: &VS) {
        for c in contours(&path.xconvert()) {
            self.add_contour(&c);
        }
    }
    /// Fill the added outlines with a single color
    pub fn fill(&self, ren: &mut Compositor, color: &Rgba) {
        if color.is_transparent() || self.edges.is_empty() {
            return;
        }
        let mut edges = self.edges.clone();
        edges.sort_by_key(|e| e.first);

        let (xmin, xmax) = ren.x_limits();
        let last = edges.iter().map(|e| e.last).max().unwrap_or(xmin);
        let start = edges[0].first.max(xmin);
        let end = last.min(xmax - 1);
        log::debug!("fill: {} edges, columns {}..={}, {:?}", edges.len(), start, end, self.rule);

        let mut next = 0;
        let mut active : Vec<Edge> = vec![];
        let mut crossings : Vec<(f64, i32)> = vec![];
        for x in start ..= end {
            while next < edges.len() && edges[next].first <= x {
                active.push(edges[next]);
                next += 1;
            }
            active.retain(|e| e.last >= x);

            crossings.clear();
            crossings.extend(active.iter().map(|e| (e.y_at(x as f64), e.winding)));
            crossings.sort_by(|a,b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));

            match self.rule {
                FillRule::NonZero => {
                    let mut sum = 0;
                    let mut top = 0.0;
                    for &(y, w) in &crossings {
                        if sum == 0 {
                            top = y;
                        }
                        sum += w;
                        if sum == 0 {
                            span(ren, x, top, y, color);
                        }
                    }
                },
                FillRule::EvenOdd => {
                    for pair in crossings.chunks_exact(2) {
                        span(ren, x, pair[0].0, pair[1].0, color);
                    }
                },
            }
        }
    }
}

/// Paint rows `ceil(ya) ..= ceil(yb)-1` of column `x`
fn span(ren: &mut Compositor, x: i64, ya: f64, yb: f64, color: &Rgba) {
    let y1 = ceil_px(ya);
    let y2 = ceil_px(yb) - 1;
    if y2 >= y1 {
        ren.blend_vline(x, y1, y2, color);
    }
}
