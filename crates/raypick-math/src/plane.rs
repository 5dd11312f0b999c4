//! Planes in homogeneous form.

use crate::{Point3, Vec3, Vec4};

/// The plane `a·x + b·y + c·z + d = 0`.
///
/// The normal `(a, b, c)` is kept exactly as given; it is not normalized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// Coefficients `(a, b, c)`.
    pub normal: Vec3,
    /// Constant term.
    pub d: f64,
}

impl Plane {
    /// Plane from its four coefficients.
    pub fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self {
            normal: Vec3::new(a, b, c),
            d,
        }
    }

    /// Plane through `point` with the given normal.
    pub fn from_point_normal(point: &Point3, normal: Vec3) -> Self {
        Self {
            normal,
            d: -point.coords.dot(&normal),
        }
    }

    /// Coefficients as a homogeneous vector `(a, b, c, d)`.
    pub fn coefficients(&self) -> Vec4 {
        Vec4::new(self.normal.x, self.normal.y, self.normal.z, self.d)
    }

    /// Evaluate the plane equation at `p`.
    ///
    /// Zero on the plane; the sign tells which side `p` is on, scaled by the
    /// normal's length.
    pub fn evaluate(&self, p: &Point3) -> f64 {
        self.coefficients().dot(&p.to_homogeneous())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_normal() {
        let point = Point3::new(0.0, 0.0, 2.0);
        let plane = Plane::from_point_normal(&point, Vec3::new(0.0, 0.0, 3.0));
        assert_eq!(plane, Plane::new(0.0, 0.0, 3.0, -6.0));
        assert_eq!(plane.evaluate(&Point3::new(7.0, -1.0, 2.0)), 0.0);
        assert!(plane.evaluate(&Point3::new(0.0, 0.0, 3.0)) > 0.0);
    }
}
