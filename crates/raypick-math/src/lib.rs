#![warn(missing_docs)]

//! Math types for the raypick ray casting engine.
//!
//! Thin wrappers around nalgebra providing the types shared by the scene
//! and ray casting crates: points, vectors, 4x4 transforms, planes,
//! axis-aligned boxes and tolerance constants.

mod bbox;
mod plane;

pub use bbox::Box3;
pub use plane::Plane;

use nalgebra::{Matrix4, Vector3, Vector4};

/// A point in 3D space.
pub type Point3 = nalgebra::Point3<f64>;

/// A vector in 3D space.
pub type Vec3 = Vector3<f64>;

/// A homogeneous 4-component vector.
pub type Vec4 = Vector4<f64>;

/// A 4x4 affine transformation matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// The underlying 4x4 matrix.
    pub matrix: Matrix4<f64>,
}

impl Transform {
    /// Identity transform.
    pub fn identity() -> Self {
        Self {
            matrix: Matrix4::identity(),
        }
    }

    /// Translation by `(dx, dy, dz)`.
    pub fn translation(dx: f64, dy: f64, dz: f64) -> Self {
        let mut m = Matrix4::identity();
        m[(0, 3)] = dx;
        m[(1, 3)] = dy;
        m[(2, 3)] = dz;
        Self { matrix: m }
    }

    /// Non-uniform scale by `(sx, sy, sz)`.
    pub fn scale(sx: f64, sy: f64, sz: f64) -> Self {
        let mut m = Matrix4::identity();
        m[(0, 0)] = sx;
        m[(1, 1)] = sy;
        m[(2, 2)] = sz;
        Self { matrix: m }
    }

    /// Rotation about the X axis by `angle` radians.
    pub fn rotation_x(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        let mut m = Matrix4::identity();
        m[(1, 1)] = c;
        m[(1, 2)] = -s;
        m[(2, 1)] = s;
        m[(2, 2)] = c;
        Self { matrix: m }
    }

    /// Rotation about the Y axis by `angle` radians.
    pub fn rotation_y(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        let mut m = Matrix4::identity();
        m[(0, 0)] = c;
        m[(0, 2)] = s;
        m[(2, 0)] = -s;
        m[(2, 2)] = c;
        Self { matrix: m }
    }

    /// Rotation about the Z axis by `angle` radians.
    pub fn rotation_z(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        let mut m = Matrix4::identity();
        m[(0, 0)] = c;
        m[(0, 1)] = -s;
        m[(1, 0)] = s;
        m[(1, 1)] = c;
        Self { matrix: m }
    }

    /// Translate, rotate (Euler XYZ, radians) and scale, applied in the
    /// order scale, rotate, translate.
    pub fn from_trs(translation: Vec3, rotation: Vec3, scale: Vec3) -> Self {
        let t = Self::translation(translation.x, translation.y, translation.z);
        let r = Self::rotation_z(rotation.z)
            .then(&Self::rotation_y(rotation.y))
            .then(&Self::rotation_x(rotation.x));
        let s = Self::scale(scale.x, scale.y, scale.z);
        t.then(&r).then(&s)
    }

    /// Compose: `self` then `other` (self * other).
    ///
    /// The resulting transform applies `other` first, then `self`.
    pub fn then(&self, other: &Transform) -> Self {
        Self {
            matrix: self.matrix * other.matrix,
        }
    }

    /// Transform a point (w = 1).
    pub fn apply_point(&self, p: &Point3) -> Point3 {
        let v = self.matrix * Vec4::new(p.x, p.y, p.z, 1.0);
        Point3::new(v.x, v.y, v.z)
    }

    /// Transform a direction vector (w = 0, ignores translation).
    pub fn apply_vec(&self, v: &Vec3) -> Vec3 {
        let r = self.matrix * Vec4::new(v.x, v.y, v.z, 0.0);
        Vec3::new(r.x, r.y, r.z)
    }

    /// Inverse of this transform, if it exists.
    pub fn inverse(&self) -> Option<Self> {
        self.matrix.try_inverse().map(|matrix| Self { matrix })
    }

    /// Transpose of the underlying matrix.
    pub fn transpose(&self) -> Self {
        Self {
            matrix: self.matrix.transpose(),
        }
    }

    /// Transpose of the inverse, used to carry normals from local to world
    /// space under non-uniform scale.
    pub fn inverse_transpose(&self) -> Option<Self> {
        self.inverse().map(|inv| inv.transpose())
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

/// Tolerance constants for geometric comparisons.
#[derive(Debug, Clone, Copy)]
pub struct Tolerance {
    /// Slack applied to box bounds in slab tests.
    pub slab: f64,
}

impl Tolerance {
    /// Default tolerances (1e-4 slab).
    pub const DEFAULT: Self = Self { slab: 1e-4 };
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_identity_transform() {
        let t = Transform::identity();
        let p = Point3::new(1.0, 2.0, 3.0);
        let result = t.apply_point(&p);
        assert!((result - p).norm() < 1e-12);
    }

    #[test]
    fn test_translation_ignored_for_vectors() {
        let t = Transform::translation(10.0, 20.0, 30.0);
        let p = t.apply_point(&Point3::new(1.0, 2.0, 3.0));
        assert_abs_diff_eq!(p, Point3::new(11.0, 22.0, 33.0), epsilon = 1e-12);
        let v = t.apply_vec(&Vec3::new(1.0, 2.0, 3.0));
        assert_abs_diff_eq!(v, Vec3::new(1.0, 2.0, 3.0), epsilon = 1e-12);
    }

    #[test]
    fn test_rotation_z_90() {
        let t = Transform::rotation_z(PI / 2.0);
        let result = t.apply_point(&Point3::new(1.0, 0.0, 0.0));
        assert!(result.x.abs() < 1e-12);
        assert!((result.y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_compose_applies_right_first() {
        let t1 = Transform::translation(1.0, 0.0, 0.0);
        let t2 = Transform::scale(2.0, 2.0, 2.0);
        // (t2 * t1) p = t2(t1(p)): translate, then scale
        let result = t2.then(&t1).apply_point(&Point3::origin());
        assert!((result.x - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_from_trs() {
        let t = Transform::from_trs(
            Vec3::new(0.0, 0.0, 5.0),
            Vec3::new(0.0, 0.0, PI / 2.0),
            Vec3::new(2.0, 2.0, 2.0),
        );
        let p = t.apply_point(&Point3::new(1.0, 0.0, 0.0));
        assert_abs_diff_eq!(p, Point3::new(0.0, 2.0, 5.0), epsilon = 1e-12);
    }

    #[test]
    fn test_inverse_round_trip() {
        let t = Transform::translation(1.0, 2.0, 3.0).then(&Transform::rotation_x(0.3));
        let inv = t.inverse().unwrap();
        let p = Point3::new(5.0, 6.0, 7.0);
        let result = t.then(&inv).apply_point(&p);
        assert!((result - p).norm() < 1e-12);
    }

    #[test]
    fn test_singular_has_no_inverse() {
        let t = Transform::scale(1.0, 0.0, 1.0);
        assert!(t.inverse().is_none());
        assert!(t.inverse_transpose().is_none());
    }

    #[test]
    fn test_inverse_transpose_keeps_normals_perpendicular() {
        // Non-uniform scale skews naive normal transforms.
        let t = Transform::scale(4.0, 1.0, 1.0);
        let it = t.inverse_transpose().unwrap();
        // Surface x + y = 1 has normal (1, 1, 0) and tangent (1, -1, 0).
        let tangent = t.apply_vec(&Vec3::new(1.0, -1.0, 0.0));
        let normal = it.apply_vec(&Vec3::new(1.0, 1.0, 0.0));
        assert!(tangent.dot(&normal).abs() < 1e-12);
    }
}
