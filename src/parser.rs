//! Number lists and path data
//!
//! Point lists and path data are tokenized with `svgtypes`. Separators are
//!   optional wherever the next token can be told apart from the current
//!   one: a sign starts a new number, and so does a second decimal point.
//!
//!     use vscan::parser::numbers;
//!
//!     assert_eq!(numbers("1.5.3-2,4e1").unwrap(), vec![1.5, 0.3, -2.0, 40.0]);
//!

use svgtypes::{NumberListParser, PathParser};

pub use svgtypes::PathSegment;

use crate::error::AttributeError;
use crate::math::Point;

/// Parse a compact list of numbers
///
/// Infinite values, such as `1e400`, are rejected
pub fn numbers(s: &str) -> Result<Vec<f64>, AttributeError> {
    let mut out = vec![];
    for v in NumberListParser::from(s) {
        let v = v.map_err(|e| AttributeError::Number(e.to_string()))?;
        if !v.is_finite() {
            return Err(AttributeError::Number(v.to_string()));
        }
        out.push(v);
    }
    Ok(out)
}

/// Parse a list of `x,y` pairs, as used by polygons and polylines
///
///     use vscan::parser::parse_points;
///
///     let p = parse_points("0,0 10,0 10-10").unwrap();
///     assert_eq!(p.len(), 3);
///     assert_eq!(p[2].y, -10.0);
///     assert!(parse_points("0,0 10").is_err());
///
pub fn parse_points(s: &str) -> Result<Vec<Point>, AttributeError> {
    let values = numbers(s)?;
    if values.len() % 2 != 0 {
        return Err(AttributeError::OddPointList(values.len()));
    }
    Ok(values.chunks(2).map(|c| Point::new(c[0], c[1])).collect())
}

/// Result of parsing path data
///
/// Parsing stops at the first error; the segments read before the error are
///   kept so the valid prefix of the path can still be drawn
#[derive(Debug,Clone,Default,PartialEq)]
pub struct ParsedPath {
    pub segments: Vec<PathSegment>,
    pub error: Option<AttributeError>,
}

/// All coordinates of a segment are finite
fn is_finite(seg: &PathSegment) -> bool {
    let v = match *seg {
        PathSegment::MoveTo { x, y, .. } |
        PathSegment::LineTo { x, y, .. } |
        PathSegment::SmoothQuadratic { x, y, .. } => [x, y, 0.0, 0.0, 0.0, 0.0, 0.0],
        PathSegment::HorizontalLineTo { x, .. } => [x, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
        PathSegment::VerticalLineTo { y, .. } => [y, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
        PathSegment::CurveTo { x1, y1, x2, y2, x, y, .. } => [x1, y1, x2, y2, x, y, 0.0],
        PathSegment::SmoothCurveTo { x2, y2, x, y, .. } => [x2, y2, x, y, 0.0, 0.0, 0.0],
        PathSegment::Quadratic { x1, y1, x, y, .. } => [x1, y1, x, y, 0.0, 0.0, 0.0],
        PathSegment::EllipticalArc { rx, ry, x_axis_rotation, x, y, .. } =>
            [rx, ry, x_axis_rotation, x, y, 0.0, 0.0],
        PathSegment::ClosePath { .. } => return true,
    };
    v.iter().all(|v| v.is_finite())
}

/// Parse path data, the `d` attribute of a path
///
///     use vscan::parser::{parse_path, PathSegment};
///
///     let p = parse_path("M10 10 20 20z");
///     assert!(p.error.is_none());
///     assert_eq!(p.segments, vec![
///         PathSegment::MoveTo { abs: true, x: 10.0, y: 10.0 },
///         PathSegment::LineTo { abs: true, x: 20.0, y: 20.0 },
///         PathSegment::ClosePath { abs: false },
///     ]);
///
pub fn parse_path(d: &str) -> ParsedPath {
    let mut segments = vec![];
    for seg in PathParser::from(d) {
        match seg {
            Ok(seg) if is_finite(&seg) => segments.push(seg),
            Ok(_) => {
                let err = AttributeError::PathData("coordinate out of range".to_string());
                return ParsedPath { segments, error: Some(err) };
            },
            Err(e) => {
                let err = AttributeError::PathData(e.to_string());
                return ParsedPath { segments, error: Some(err) };
            },
        }
    }
    ParsedPath { segments, error: None }
}
