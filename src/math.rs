//! Points and blending math

use std::ops::{Add, Sub, Mul, Neg};

/// Point or vector in 2D
#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
    /// Length of the vector
    pub fn len(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }
    /// Distance between two points
    pub fn dist(&self, other: &Point) -> f64 {
        (*self - *other).len()
    }
    /// Midpoint between two points
    pub fn mid(&self, other: &Point) -> Point {
        Point::new((self.x + other.x) * 0.5, (self.y + other.y) * 0.5)
    }
    /// Z component of the cross product
    pub fn cross(&self, other: &Point) -> f64 {
        self.x * other.y - self.y * other.x
    }
    pub fn dot(&self, other: &Point) -> f64 {
        self.x * other.x + self.y * other.y
    }
    /// Rotate around the origin, angle in radians
    pub fn rotate(&self, angle: f64) -> Point {
        let (s, c) = angle.sin_cos();
        Point::new(self.x * c - self.y * s, self.x * s + self.y * c)
    }
    /// Reflection of `self` about `center`
    pub fn reflect(&self, center: &Point) -> Point {
        Point::new(2.0 * center.x - self.x, 2.0 * center.y - self.y)
    }
    /// Points closer than `eps` are the same point
    pub fn approx_eq(&self, other: &Point, eps: f64) -> bool {
        self.dist(other) <= eps
    }
}

impl Add for Point {
    type Output = Point;
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}
impl Sub for Point {
    type Output = Point;
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}
impl Mul<f64> for Point {
    type Output = Point;
    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}
impl Neg for Point {
    type Output = Point;
    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

/// Distance from `p` to the infinite line through `a` and `b`
///
/// Falls back to the distance to `a` when `a` and `b` coincide
pub fn line_distance(p: &Point, a: &Point, b: &Point) -> f64 {
    let d = *b - *a;
    let len = d.len();
    if len < 1e-12 {
        return p.dist(a);
    }
    (*p - *a).cross(&d).abs() / len
}

/// Calculate Intersection of two lines
///
/// Parallel Line are return as `None` otherwise the Intersection is returned
///
/// Lines are specified as pairs of points `a -> b` and `c -> d`.
/// The intersection is defined at
///```text
///     p = a + t (b-a)
///```
///   where
///```text
///          (ay-cy)(dx-cx) - (ax-cx)(dy-cy)
///     t = ----------------------------------
///          (bx-ax)(dy-cy) - (by-ay)(dx-cx)
///```
pub fn intersection(a: &Point, b: &Point, c: &Point, d: &Point) -> Option<Point> {
    let intersection_epsilon = 1.0e-30;
    let num = (a.y-c.y) * (d.x-c.x) - (a.x-c.x) * (d.y-c.y);
    let den = (b.x-a.x) * (d.y-c.y) - (b.y-a.y) * (d.x-c.x);
    // Lines are Parallel or Co-Linear
    if den.abs() < intersection_epsilon {
        return None;
    }
    let r = num / den;
    Some(Point::new(a.x + r * (b.x-a.x), a.y + r * (b.y-a.y)))
}

/// Straight alpha blend of a single component
///
/// out = alpha * fg + (1 - alpha) * bg, clamped to [0,1]
pub fn blend(fg: f64, bg: f64, alpha: f64) -> f64 {
    let v = alpha * fg + (1.0 - alpha) * bg;
    if v < 0.0 {
        0.0
    } else if v > 1.0 {
        1.0
    } else {
        v
    }
}

/// Clamp a value into [0,1]
pub fn clamp01(v: f64) -> f64 {
    v.max(0.0).min(1.0)
}
