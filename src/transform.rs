//! Affine Transforms
//!
//! Maps outlines from logical document units into pixels.

use crate::paths::Vertex;
use crate::paths::Path;

use crate::VertexSource;

/// Affine transform
///
///```text
///   x' = x * sx  + y * shx + tx
///   y' = x * shy + y * sy  + ty
///```
#[derive(Debug,Copy,Clone,PartialEq)]
pub struct Transform {
    pub sx: f64,
    pub sy: f64,
    pub shx: f64,
    pub shy: f64,
    pub tx: f64,
    pub ty: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}

impl Transform {
    /// Identity transform
    pub fn new() -> Self {
        Self { sx: 1.0,  sy: 1.0,
               shx: 0.0, shy: 0.0,
               tx: 0.0,  ty: 0.0,
        }
    }
    /// Scaling about the origin
    pub fn new_scale(sx: f64, sy: f64) -> Transform {
        Self { sx, sy, ..Self::new() }
    }
    /// Apply to a coordinate pair
    pub fn transform(&self, x: f64, y: f64) -> (f64, f64) {
        (x * self.sx  + y * self.shx + self.tx,
         x * self.shy + y * self.sy  + self.ty)
    }
}

/// Path with a transform applied on conversion
#[derive(Debug,Default)]
pub struct ConvTransform {
    /// Source path
    pub source: Path,
    /// Transform to apply
    pub trans: Transform,
}

impl VertexSource for ConvTransform {
    fn xconvert(&self) -> Vec<Vertex<f64>> {
        self.source.vertices.iter()
            .map(|v| {
                let (x,y) = self.trans.transform(v.x, v.y);
                Vertex::new(x, y, v.cmd)
            })
            .collect()
    }
}

impl ConvTransform {
    pub fn new(source: Path, trans: Transform) -> Self {
        Self { source, trans }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_and_scale() {
        assert_eq!(Transform::default().transform(3.0, -4.0), (3.0, -4.0));
        assert_eq!(Transform::new_scale(2.0, 0.5).transform(3.0, -4.0), (6.0, -2.0));
    }
    #[test]
    fn scale_path() {
        let mut p = Path::new();
        p.move_to(2.0, 4.0);
        p.line_to(6.0, 8.0);
        p.close_polygon();
        let v = ConvTransform::new(p, Transform::new_scale(0.5, 0.5)).xconvert();
        assert_eq!(v[0], Vertex::move_to(1.0, 2.0));
        assert_eq!(v[1], Vertex::line_to(3.0, 4.0));
        assert_eq!(v[2].cmd, crate::paths::PathCommand::Close);
    }
}
