//! Path Storage and Contours
//!
//! A [Path] is a flat list of vertices, each tagged with a [PathCommand].
//!   Sub-paths begin at a `MoveTo`; a sub-path ending with a `Close` vertex
//!   is closed.
//!
//!     use vscan::Path;
//!
//!     let mut path = Path::new();
//!     path.move_to(10.0, 10.0);
//!     path.line_to(50.0, 90.0);
//!     path.line_to(90.0, 10.0);
//!     path.close_polygon();
//!
//!     let contours = path.contours();
//!     assert_eq!(contours.len(), 1);
//!     assert_eq!(contours[0].points.len(), 4);
//!     assert_eq!(contours[0].points[0], contours[0].points[3]);
//!
//! [Path]: struct.Path.html
//! [PathCommand]: enum.PathCommand.html

use crate::math::Point;
use crate::VertexSource;

/// Drawing command attached to a vertex
#[derive(Debug,Copy,Clone,PartialEq)]
pub enum PathCommand {
    MoveTo,
    LineTo,
    Close,
}
impl Default for PathCommand {
    fn default() -> PathCommand {
        PathCommand::MoveTo
    }
}

/// Point with a drawing command
#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct Vertex<T> {
    pub x: T,
    pub y: T,
    pub cmd: PathCommand
}

impl<T> Vertex<T> {
    pub fn new(x: T, y: T, cmd: PathCommand) -> Self {
        Self { x, y, cmd }
    }
    pub fn move_to(x: T, y: T) -> Self {
        Self { x, y, cmd: PathCommand::MoveTo }
    }
    pub fn line_to(x: T, y: T) -> Self {
        Self { x, y, cmd: PathCommand::LineTo }
    }
    pub fn close_polygon(x: T, y: T) -> Self {
        Self { x, y, cmd: PathCommand::Close }
    }
}

impl Vertex<f64> {
    /// Position of the vertex
    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Split vertices into sub-paths
///
/// Returned are inclusive index ranges `(first, last)`, one per sub-path.
///   A sub-path starts at a `MoveTo` and runs until the next one.
pub fn split(v: &[Vertex<f64>]) -> Vec<(usize, usize)> {
    let mut pairs = vec![];
    let mut start : Option<usize> = None;
    for (i, vert) in v.iter().enumerate() {
        match (vert.cmd, start) {
            (PathCommand::MoveTo, Some(s)) => {
                pairs.push((s, i-1));
                start = Some(i);
            },
            (_, None) => start = Some(i),
            _ => {},
        }
    }
    if let Some(s) = start {
        pairs.push((s, v.len()-1));
    }
    pairs
}

/// Sub-path is closed if it has a `Close` vertex
pub fn is_path_closed(verts: &[Vertex<f64>]) -> bool {
    verts.iter().any(|v| v.cmd == PathCommand::Close)
}

/// Closed polygon
///
/// The last point always equals the first
#[derive(Debug,Clone,Default,PartialEq)]
pub struct Contour {
    pub points: Vec<Point>,
}

impl Contour {
    /// Create a contour, closing it if needed
    pub fn new(mut points: Vec<Point>) -> Self {
        if let (Some(&first), Some(&last)) = (points.first(), points.last()) {
            if first != last {
                points.push(first);
            }
        }
        Self { points }
    }
    /// Signed area, positive for clockwise contours in a y-down frame
    pub fn area(&self) -> f64 {
        self.points.windows(2)
            .map(|w| w[0].cross(&w[1]))
            .sum::<f64>() / 2.0
    }
    /// Number of edges
    pub fn edges(&self) -> usize {
        self.points.len().saturating_sub(1)
    }
}

/// Vertex storage for sub-paths
#[derive(Debug,Default,Clone,PartialEq)]
pub struct Path {
    pub vertices: Vec<Vertex<f64>>,
}

impl VertexSource for Path {
    fn xconvert(&self) -> Vec<Vertex<f64>> {
        self.vertices.clone()
    }
}

impl Path {
    pub fn new() -> Self {
        Self { vertices: vec![] }
    }
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
    pub fn move_to(&mut self, x: f64, y: f64) {
        self.vertices.push( Vertex::move_to(x,y) );
    }
    pub fn line_to(&mut self, x: f64, y: f64) {
        self.vertices.push( Vertex::line_to(x,y) );
    }
    /// Close the current sub-path
    ///
    /// Has no effect on an empty path or a sub-path already closed
    pub fn close_polygon(&mut self) {
        if let Some(last) = self.vertices.last().copied() {
            if last.cmd != PathCommand::Close {
                self.vertices.push( Vertex::close_polygon(last.x, last.y) );
            }
        }
    }
    /// Last point drawn
    pub fn last_point(&self) -> Option<Point> {
        self.vertices.last().map(|v| v.point())
    }
    /// Closed contours, one per sub-path
    ///
    /// Sub-paths are closed regardless of a `Close` vertex; filling
    ///   always treats the outline as closed
    pub fn contours(&self) -> Vec<Contour> {
        contours(&self.vertices)
    }
}

/// Closed contours from a list of vertices
pub fn contours(v: &[Vertex<f64>]) -> Vec<Contour> {
    split(v).into_iter()
        .map(|(s,e)| {
            let pts = v[s..=e].iter()
                .filter(|v| v.cmd != PathCommand::Close)
                .map(|v| v.point())
                .collect();
            Contour::new(pts)
        })
        .filter(|c| !c.points.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_sub_paths() {
        let mut p = Path::new();
        p.move_to(0.,0.);
        p.line_to(1.,0.);
        p.close_polygon();
        p.move_to(5.,5.);
        p.line_to(6.,5.);
        assert_eq!(split(&p.vertices), vec![(0,2), (3,4)]);
        assert!(is_path_closed(&p.vertices[0..=2]));
        assert!(!is_path_closed(&p.vertices[3..=4]));
        let c = p.contours();
        assert_eq!(c.len(), 2);
        assert_eq!(c[1].points, vec![Point::new(5.,5.), Point::new(6.,5.), Point::new(5.,5.)]);
    }
    #[test]
    fn close_is_idempotent() {
        let mut p = Path::new();
        p.close_polygon();
        assert!(p.is_empty());
        p.move_to(0.,0.);
        p.line_to(1.,1.);
        p.close_polygon();
        p.close_polygon();
        assert_eq!(p.vertices.len(), 3);
    }
    #[test]
    fn contour_area_sign() {
        // Clockwise on screen (y down)
        let c = Contour::new(vec![Point::new(0.,0.), Point::new(10.,0.),
                                  Point::new(10.,10.), Point::new(0.,10.)]);
        assert_eq!(c.edges(), 4);
        assert_eq!(c.area(), 100.0);
    }
}
