//! Path Stroking
//!
//! A stroke is turned into closed outlines which are then filled with the
//!   nonzero rule. Each sub-path is walked forward and then backward, offset
//!   by half the stroke width on either side.
//!
//! - Open ends get butt caps
//! - Convex corners get a miter join, or a bevel when the miter would exceed
//!   the miter limit
//! - Concave corners join at the intersection of the offset lines
//!
//! A closed sub-path produces two loops, one on each side of the line.
//!
//! # Example
//!
//!     use vscan::{Path, Stroke, VertexSource};
//!
//!     let mut path = Path::new();
//!     path.move_to( 10.0, 20.0);
//!     path.line_to( 50.0, 20.0);
//!
//!     let mut stroke = Stroke::new( path );
//!     stroke.width(4.0);
//!
//!     let v = stroke.xconvert();
//!     let ys : Vec<f64> = v.iter().map(|v| v.y).collect();
//!     assert_eq!(ys, vec![22.0, 18.0, 18.0, 22.0, 22.0]);
//!

use crate::math::{intersection, Point};
use crate::paths::{split, is_path_closed, Path, PathCommand, Vertex};

use crate::VertexSource;

/// Segments shorter than this are dropped before stroking
const MIN_SEGMENT : f64 = 1e-6;

/// Stroke for Paths and Vertex Sources
#[derive(Debug)]
pub struct Stroke<T: VertexSource> {
    /// Source of vertices
    source: T,
    /// Half the line width, 0.5
    width: f64,
    /// Maximum ratio of miter length to line width at convex corners, 4.0
    miter_limit: f64,
    /// Smallest miter limit used on concave corners, 1.01
    inner_miter_limit: f64,
}

impl<T> VertexSource for Stroke<T> where T: VertexSource {
    fn xconvert(&self) -> Vec<Vertex<f64>> {
        self.stroke().vertices
    }
}

/// Previous and next index on a closed ring of `n` points
macro_rules! prev {
    ($i:expr, $n:expr) => ( ($i + $n - 1) % $n )
}
macro_rules! next {
    ($i:expr, $n:expr) => ( ($i + 1) % $n )
}

/// Which side of `a -> b` the point `p` lies on
///
/// Positive on the right of the direction of travel in a y-down frame
fn turn(a: &Point, b: &Point, p: &Point) -> f64 {
    (p.x - b.x) * (b.y - a.y) - (p.y - b.y) * (b.x - a.x)
}

impl<T> Stroke<T> where T: VertexSource {
    /// Create a new Stroke from a Vertex Source
    pub fn new(source: T) -> Self {
        Self {
            source,
            width: 0.5,
            miter_limit: 4.0,
            inner_miter_limit: 1.01,
        }
    }
    /// Set the stroke width
    pub fn width(&mut self, width: f64) {
        self.width = width.abs() / 2.0;
    }
    /// Set the miter limit, the largest allowed ratio of miter length to
    ///   stroke width
    ///
    /// A limit of 4 bevels corners sharper than `2 * asin(1/4)`, about 28.96°
    pub fn miter_limit(&mut self, miter_limit: f64) {
        self.miter_limit = miter_limit;
    }
    /// Set inner miter limit
    pub fn inner_miter_limit(&mut self, inner_miter_limit: f64) {
        self.inner_miter_limit = inner_miter_limit;
    }
    /// Offset of the segment `a -> b`, perpendicular and half a width long
    fn normal(&self, a: &Point, b: &Point) -> Point {
        let d = *b - *a;
        Point::new(d.y, -d.x) * (self.width / d.len())
    }
    /// Butt cap at `p0` for the segment running towards `p1`
    fn calc_cap(&self, p0: &Point, p1: &Point) -> [Point; 2] {
        let n = self.normal(p0, p1);
        [*p0 - n, *p0 + n]
    }
    /// Miter join at `p1`, falling back to a bevel past `mlimit`
    fn calc_miter(&self, p0: &Point, p1: &Point, p2: &Point,
                  n1: Point, n2: Point, mlimit: f64) -> Vec<Point> {
        let lim = self.width * mlimit;
        if let Some(pi) = intersection(&(*p0 + n1), &(*p1 + n1),
                                       &(*p1 + n2), &(*p2 + n2)) {
            if p1.dist(&pi) <= lim {
                return vec![pi];
            }
        } else {
            // Parallel offsets; a straight continuation needs a single point
            let pz = *p1 + n1;
            if (turn(p0, p1, &pz) < 0.0) == (turn(p1, p2, &pz) < 0.0) {
                return vec![pz];
            }
        }
        vec![*p1 + n1, *p1 + n2]
    }
    /// Join of the segments `p0 -> p1` and `p1 -> p2`
    fn calc_join(&self, p0: &Point, p1: &Point, p2: &Point) -> Vec<Point> {
        let len1 = p0.dist(p1);
        let len2 = p1.dist(p2);
        if len1 < MIN_SEGMENT || len2 < MIN_SEGMENT {
            return vec![];
        }
        let n1 = self.normal(p0, p1);
        let n2 = self.normal(p1, p2);

        if turn(p0, p1, p2) > 0.0 {
            // Inner join
            let limit = (len1.min(len2) / self.width).max(self.inner_miter_limit);
            self.calc_miter(p0, p1, p2, n1, n2, limit)
        } else {
            // Outer join
            self.calc_miter(p0, p1, p2, n1, n2, self.miter_limit)
        }
    }
    /// Stroke the Vertex Source
    ///
    /// Returns closed outlines in the coordinates of the source
    pub fn stroke(&self) -> Path {
        let mut out = Path::new();
        if self.width <= 0.0 {
            return out;
        }
        let v0 = self.source.xconvert();
        for (m1, m2) in split(&v0) {
            let (pts, closed) = clean_path(&v0[m1..=m2]);
            let n = pts.len();
            if n < 2 {
                continue;
            }
            let mut fwd = vec![];
            let mut bwd = vec![];
            if closed {
                for i in 0 .. n {
                    fwd.extend(self.calc_join(&pts[prev!(i,n)], &pts[i], &pts[next!(i,n)]));
                }
                for i in (0 .. n).rev() {
                    bwd.extend(self.calc_join(&pts[next!(i,n)], &pts[i], &pts[prev!(i,n)]));
                }
                add_polygon(&mut out, &fwd);
                add_polygon(&mut out, &bwd);
            } else {
                fwd.extend(&self.calc_cap(&pts[0], &pts[1]));
                for i in 1 .. n-1 {
                    fwd.extend(self.calc_join(&pts[i-1], &pts[i], &pts[i+1]));
                }
                fwd.extend(&self.calc_cap(&pts[n-1], &pts[n-2]));
                for i in (1 .. n-1).rev() {
                    fwd.extend(self.calc_join(&pts[i+1], &pts[i], &pts[i-1]));
                }
                add_polygon(&mut out, &fwd);
            }
        }
        out
    }
}

fn add_polygon(path: &mut Path, pts: &[Point]) {
    if let Some((first, rest)) = pts.split_first() {
        path.move_to(first.x, first.y);
        for p in rest {
            path.line_to(p.x, p.y);
        }
        path.close_polygon();
    }
}

/// Remove repeated points from a sub-path
///
/// Points closer than `MIN_SEGMENT` to their predecessor are dropped. The
///   sub-path is closed if it has a `Close` vertex or ends where it started;
///   a closed sub-path does not repeat its first point at the end.
fn clean_path(v: &[Vertex<f64>]) -> (Vec<Point>, bool) {
    let mut out : Vec<Point> = vec![];
    for vert in v.iter().filter(|v| v.cmd != PathCommand::Close) {
        let p = vert.point();
        match out.last() {
            Some(last) if last.dist(&p) < MIN_SEGMENT => {},
            _ => out.push(p),
        }
    }
    let returns = out.len() > 2 && out[0].dist(&out[out.len()-1]) < MIN_SEGMENT;
    let closed = is_path_closed(v) || returns;
    if closed {
        while out.len() > 1 && out[0].dist(&out[out.len()-1]) < MIN_SEGMENT {
            out.pop();
        }
    }
    (out, closed)
}
