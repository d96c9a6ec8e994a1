//! Curve Flattening
//!
//! Bézier curves and elliptical arcs are reduced to line segments before
//!   filling or stroking. Subdivision stops once the curve stays within a
//!   tolerance of its chord, or when `MAX_SUBDIVISION_DEPTH` is reached.
//!
//! Every flattening function appends points *after* the start point, the
//!   last appended point is exactly the end point.

use std::f64::consts::PI;

use crate::math::{line_distance, Point};

/// Deepest level of recursive halving
pub const MAX_SUBDIVISION_DEPTH : usize = 16;

/// Largest angular span, in radians, of a single arc segment
const MAX_ARC_STEP : f64 = 1.0;

/// Flatten a cubic Bézier curve from `p0` to `p3`
///
/// A curve whose control points lie on the chord yields only `p3`
///
///     use vscan::Point;
///     use vscan::curves::flatten_cubic;
///
///     let mut out = vec![];
///     flatten_cubic(Point::new(0.,0.), Point::new(1.,1.),
///                   Point::new(2.,2.), Point::new(3.,3.), 0.25, &mut out);
///     assert_eq!(out, vec![Point::new(3.,3.)]);
///
pub fn flatten_cubic(p0: Point, p1: Point, p2: Point, p3: Point, tol: f64, out: &mut Vec<Point>) {
    cubic(p0, p1, p2, p3, tol, 0, out);
}

fn cubic(p0: Point, p1: Point, p2: Point, p3: Point, tol: f64, depth: usize, out: &mut Vec<Point>) {
    let flat = line_distance(&p1, &p0, &p3) < tol && line_distance(&p2, &p0, &p3) < tol;
    if flat || depth >= MAX_SUBDIVISION_DEPTH {
        out.push(p3);
        return;
    }
    // de Casteljau at t = 1/2
    let p01  = p0.mid(&p1);
    let p12  = p1.mid(&p2);
    let p23  = p2.mid(&p3);
    let p012 = p01.mid(&p12);
    let p123 = p12.mid(&p23);
    let pm   = p012.mid(&p123);
    cubic(p0, p01, p012, pm, tol, depth + 1, out);
    cubic(pm, p123, p23, p3, tol, depth + 1, out);
}

/// Flatten a quadratic Bézier curve from `p0` to `p2`
pub fn flatten_quad(p0: Point, p1: Point, p2: Point, tol: f64, out: &mut Vec<Point>) {
    quad(p0, p1, p2, tol, 0, out);
}

fn quad(p0: Point, p1: Point, p2: Point, tol: f64, depth: usize, out: &mut Vec<Point>) {
    if line_distance(&p1, &p0, &p2) < tol || depth >= MAX_SUBDIVISION_DEPTH {
        out.push(p2);
        return;
    }
    let p01 = p0.mid(&p1);
    let p12 = p1.mid(&p2);
    let pm  = p01.mid(&p12);
    quad(p0, p01, pm, tol, depth + 1, out);
    quad(pm, p12, p2, tol, depth + 1, out);
}

/// Signed angle from `u` to `v`
fn angle_between(u: Point, v: Point) -> f64 {
    u.cross(&v).atan2(u.dot(&v))
}

/// Elliptical arc in center parameterization
#[derive(Debug,Copy,Clone,PartialEq)]
pub struct ArcParams {
    pub center: Point,
    /// Radii after out-of-range correction
    pub rx: f64,
    pub ry: f64,
    /// Rotation of the x-axis, radians
    pub phi: f64,
    /// Start angle, radians
    pub theta: f64,
    /// Swept angle, radians; positive runs towards +y
    pub delta: f64,
    /// Exact end point
    pub to: Point,
}

impl ArcParams {
    /// Convert an endpoint arc into its center parameterization
    ///
    /// Returns `None` when the endpoints coincide or either radius is zero.
    ///   Radii too small to span the endpoints are scaled up uniformly.
    ///
    ///     use vscan::Point;
    ///     use vscan::curves::ArcParams;
    ///
    ///     let a = ArcParams::from_endpoints(Point::new(10.,0.), Point::new(0.,10.),
    ///                                       10., 10., 0., false, true).unwrap();
    ///     assert!(a.center.approx_eq(&Point::new(0.,0.), 1e-9));
    ///
    pub fn from_endpoints(from: Point, to: Point, rx: f64, ry: f64, rotation: f64,
                          large_arc: bool, sweep: bool) -> Option<ArcParams> {
        if from.approx_eq(&to, 1e-12) {
            return None;
        }
        let (mut rx, mut ry) = (rx.abs(), ry.abs());
        if rx < 1e-12 || ry < 1e-12 {
            return None;
        }
        let phi = rotation.to_radians();
        // Half chord in the ellipse frame
        let p = ((from - to) * 0.5).rotate(-phi);

        let lambda = (p.x * p.x) / (rx * rx) + (p.y * p.y) / (ry * ry);
        if lambda > 1.0 {
            rx *= lambda.sqrt();
            ry *= lambda.sqrt();
        }
        let rx2 = rx * rx;
        let ry2 = ry * ry;
        let num = rx2 * ry2 - rx2 * p.y * p.y - ry2 * p.x * p.x;
        let den = rx2 * p.y * p.y + ry2 * p.x * p.x;
        let mut coef = (num / den).max(0.0).sqrt();
        if large_arc == sweep {
            coef = -coef;
        }
        let c = Point::new(coef * rx * p.y / ry, -coef * ry * p.x / rx);
        let center = c.rotate(phi) + from.mid(&to);

        let u = Point::new((p.x - c.x) / rx, (p.y - c.y) / ry);
        let v = Point::new((-p.x - c.x) / rx, (-p.y - c.y) / ry);
        let theta = angle_between(Point::new(1.0, 0.0), u);
        let mut delta = angle_between(u, v) % (2.0 * PI);
        if !sweep && delta > 0.0 {
            delta -= 2.0 * PI;
        } else if sweep && delta < 0.0 {
            delta += 2.0 * PI;
        }
        Some(ArcParams { center, rx, ry, phi, theta, delta, to })
    }
    /// Point on the ellipse at parametric angle `angle`
    pub fn point_at(&self, angle: f64) -> Point {
        let (s, c) = angle.sin_cos();
        Point::new(self.rx * c, self.ry * s).rotate(self.phi) + self.center
    }
    /// Flatten the arc by angular bisection
    pub fn flatten(&self, tol: f64, out: &mut Vec<Point>) {
        let at = |angle: f64| self.point_at(angle);
        let start = out.len();
        arc(&at, self.theta, self.theta + self.delta, tol, 0, out);
        if out.len() > start {
            let n = out.len();
            out[n-1] = self.to;
        }
    }
}

fn arc<F: Fn(f64) -> Point>(at: &F, a0: f64, a1: f64, tol: f64, depth: usize, out: &mut Vec<Point>) {
    let am = (a0 + a1) * 0.5;
    let (p0, pm, p1) = (at(a0), at(am), at(a1));
    let flat = line_distance(&pm, &p0, &p1) < tol && (a1 - a0).abs() <= MAX_ARC_STEP;
    if flat || depth >= MAX_SUBDIVISION_DEPTH {
        out.push(p1);
        return;
    }
    arc(at, a0, am, tol, depth + 1, out);
    arc(at, am, a1, tol, depth + 1, out);
}

/// Flatten an endpoint elliptical arc from `from` to `to`
///
/// Coincident endpoints add nothing; a zero radius joins `to` with a
///   straight segment
pub fn flatten_arc(from: Point, to: Point, rx: f64, ry: f64, rotation: f64,
                   large_arc: bool, sweep: bool, tol: f64, out: &mut Vec<Point>) {
    match ArcParams::from_endpoints(from, to, rx, ry, rotation, large_arc, sweep) {
        Some(a) => a.flatten(tol, out),
        None if !from.approx_eq(&to, 1e-12) => out.push(to),
        None => {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn straight_cubic_is_endpoint_only() {
        let mut out = vec![];
        flatten_cubic(Point::new(0.,0.), Point::new(10.,0.),
                      Point::new(20.,0.), Point::new(30.,0.), 0.01, &mut out);
        assert_eq!(out, vec![Point::new(30.,0.)]);
    }
    #[test]
    fn curved_cubic_stays_within_tolerance() {
        let (p0, p1, p2, p3) = (Point::new(0.,0.), Point::new(0.,100.),
                                Point::new(100.,100.), Point::new(100.,0.));
        let mut out = vec![];
        flatten_cubic(p0, p1, p2, p3, 0.25, &mut out);
        assert!(out.len() > 8);
        assert_eq!(*out.last().unwrap(), p3);
        // Apex of the symmetric curve at t = 0.5 is (50, 75)
        let top = out.iter().map(|p| p.y).fold(0.0, f64::max);
        assert!((top - 75.0).abs() < 0.25);
    }
    #[test]
    fn looped_cubic_terminates() {
        let p = Point::new(5.,5.);
        let mut out = vec![];
        flatten_cubic(p, Point::new(1e9, -1e9), Point::new(-1e9, 1e9), p, 1e-9, &mut out);
        assert!(out.len() <= 1 << MAX_SUBDIVISION_DEPTH);
        assert_eq!(*out.last().unwrap(), p);
    }
    #[test]
    fn quad_flattening() {
        let mut out = vec![];
        flatten_quad(Point::new(0.,0.), Point::new(50.,100.), Point::new(100.,0.), 0.25, &mut out);
        assert!(out.len() > 4);
        assert_eq!(*out.last().unwrap(), Point::new(100.,0.));
    }
    #[test]
    fn arc_center_selection() {
        let from = Point::new(10.,0.);
        let to = Point::new(0.,10.);
        let a = ArcParams::from_endpoints(from, to, 10., 10., 0., false, true).unwrap();
        assert!(a.center.approx_eq(&Point::new(0.,0.), 1e-9));
        assert!((a.delta - PI / 2.0).abs() < 1e-9);
        assert!(a.point_at(a.theta).approx_eq(&from, 1e-9));
        assert!(a.point_at(a.theta + a.delta).approx_eq(&to, 1e-9));
        let b = ArcParams::from_endpoints(from, to, 10., 10., 0., false, false).unwrap();
        assert!(b.center.approx_eq(&Point::new(10.,10.), 1e-9));
        assert!(b.delta < 0.0);
        let c = ArcParams::from_endpoints(from, to, 10., 10., 0., true, true).unwrap();
        assert!(c.center.approx_eq(&Point::new(10.,10.), 1e-9));
        assert!((c.delta - 3.0 * PI / 2.0).abs() < 1e-9);
    }
    #[test]
    fn rotated_arc() {
        // Ellipse rx=20, ry=10 rotated 30 degrees around (50,40)
        let phi = 30f64.to_radians();
        let center = Point::new(50., 40.);
        let on = |t: f64| Point::new(20. * t.cos(), 10. * t.sin()).rotate(phi) + center;
        let (from, to) = (on(0.3), on(2.0));
        let a = ArcParams::from_endpoints(from, to, 20., 10., 30., false, true).unwrap();
        assert!(a.center.approx_eq(&center, 1e-9));
        assert!((a.phi - phi).abs() < 1e-12);
        assert!((a.delta - 1.7).abs() < 1e-9);

        let mut out = vec![];
        a.flatten(0.01, &mut out);
        assert!(out.len() > 2);
        assert_eq!(*out.last().unwrap(), to);
        for p in &out {
            // Back into the ellipse frame
            let q = (*p - center).rotate(-phi);
            let r = (q.x / 20.).powi(2) + (q.y / 10.).powi(2);
            assert!((r - 1.0).abs() < 1e-9, "{:?} off the ellipse", p);
        }
    }
    #[test]
    fn arc_points_on_circle() {
        let mut out = vec![];
        flatten_arc(Point::new(10.,0.), Point::new(0.,10.), 10., 10., 0., false, true, 0.01, &mut out);
        assert!(out.len() > 2);
        for p in &out {
            assert!((p.len() - 10.0).abs() < 1e-9);
        }
        assert_eq!(*out.last().unwrap(), Point::new(0.,10.));
    }
    #[test]
    fn arc_radius_correction() {
        // Radius 1 cannot span 20 units; scaled to a half circle of radius 10
        let a = ArcParams::from_endpoints(Point::new(0.,0.), Point::new(20.,0.),
                                          1., 1., 0., false, true).unwrap();
        assert!((a.rx - 10.0).abs() < 1e-9);
        assert!(a.center.approx_eq(&Point::new(10.,0.), 1e-9));
    }
    #[test]
    fn degenerate_arcs() {
        let mut out = vec![];
        flatten_arc(Point::new(1.,1.), Point::new(1.,1.), 5., 5., 0., false, true, 0.1, &mut out);
        assert!(out.is_empty());
        flatten_arc(Point::new(1.,1.), Point::new(4.,5.), 0., 5., 0., false, true, 0.1, &mut out);
        assert_eq!(out, vec![Point::new(4.,5.)]);
    }
}
