//! Ray-triangle intersection via the triangle's plane and barycentric weights.

use raypick_math::{Plane, Point3, Vec3};

use super::intersect_plane;
use crate::{Hit, Ray};

/// Edge vectors and dot products of a non-degenerate triangle, reused for
/// every weight solve.
struct TriangleFrame {
    p0: Point3,
    q1: Vec3,
    q2: Vec3,
    q2_sq: f64,
    q1_dot_q2: f64,
    q_f: f64,
    w1_denom: f64,
}

impl TriangleFrame {
    /// `None` for zero-area triangles (coincident or collinear corners).
    fn new(p0: &Point3, p1: &Point3, p2: &Point3) -> Option<Self> {
        let q1 = p2 - p0;
        let q2 = p1 - p0;
        let q1_sq = q1.dot(&q1);
        let q2_sq = q2.dot(&q2);
        if !(q2_sq > 0.0) {
            return None;
        }
        let q1_dot_q2 = q1.dot(&q2);
        let q_f = -q1_dot_q2 / q2_sq;
        // Equals |q1 × q2|² / |q2|², i.e. q1_sq · sin²θ.
        let w1_denom = q_f * q1_dot_q2 + q1_sq;
        if !(w1_denom > f64::EPSILON * q1_sq) {
            return None;
        }
        Some(Self {
            p0: *p0,
            q1,
            q2,
            q2_sq,
            q1_dot_q2,
            q_f,
            w1_denom,
        })
    }

    /// Counter-clockwise face normal `(p1 - p0) × (p2 - p0)`, normalized.
    fn normal(&self) -> Vec3 {
        self.q2.cross(&self.q1).normalize()
    }

    /// Weights of `p0`, `p1`, `p2` for a point in the triangle's plane.
    fn weights(&self, point: &Point3) -> [f64; 3] {
        let r = point - self.p0;
        let r_dot_q1 = r.dot(&self.q1);
        let r_dot_q2 = r.dot(&self.q2);
        // w1 weighs p2 (along q1), w2 weighs p1 (along q2).
        let w1 = (self.q_f * r_dot_q2 + r_dot_q1) / self.w1_denom;
        let w2 = (r_dot_q2 - w1 * self.q1_dot_q2) / self.q2_sq;
        let w0 = 1.0 - w1 - w2;
        [w0, w2, w1]
    }
}

/// Barycentric weights of `point` with respect to `p0`, `p1`, `p2`, in that
/// order. The weights sum to one. `None` for zero-area triangles.
pub fn barycentric(p0: &Point3, p1: &Point3, p2: &Point3, point: &Point3) -> Option<[f64; 3]> {
    TriangleFrame::new(p0, p1, p2).map(|frame| frame.weights(point))
}

/// Intersect a ray with the front face of a triangle.
///
/// The front face winds counter-clockwise: its normal is
/// `normalize((p1 - p0) × (p2 - p0))` unless `normal` supplies one. Rays
/// with `dot(normal, direction) >= 0` do not approach the front face and
/// miss. Otherwise the ray's line meets the triangle's plane and the hit is
/// accepted when all three barycentric weights lie in `[0, 1]`.
///
/// Zero-area triangles never hit.
pub fn intersect_triangle(
    ray: &Ray,
    p0: &Point3,
    p1: &Point3,
    p2: &Point3,
    normal: Option<&Vec3>,
) -> Option<Hit> {
    let frame = TriangleFrame::new(p0, p1, p2)?;
    let normal = normal.copied().unwrap_or_else(|| frame.normal());

    if normal.dot(&ray.direction) >= 0.0 {
        return None;
    }

    let plane = Plane::from_point_normal(p0, normal);
    let plane_hit = intersect_plane(ray, &plane)?;

    let inside = frame
        .weights(&plane_hit.origin)
        .iter()
        .all(|w| (0.0..=1.0).contains(w));
    if !inside {
        return None;
    }

    Some(Hit::new(plane_hit.origin, normal, plane_hit.distance))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn unit_triangle() -> [Point3; 3] {
        [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ]
    }

    #[test]
    fn test_hit_inside() {
        let [p0, p1, p2] = unit_triangle();
        let ray = Ray::new(Point3::new(0.2, 0.2, 1.0), Vec3::new(0.0, 0.0, -1.0));
        let hit = intersect_triangle(&ray, &p0, &p1, &p2, None).unwrap();
        assert_abs_diff_eq!(hit.origin, Point3::new(0.2, 0.2, 0.0), epsilon = 1e-12);
        assert_abs_diff_eq!(hit.normal, Vec3::new(0.0, 0.0, 1.0), epsilon = 1e-12);
        assert!((hit.distance - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_weights_sum_to_one() {
        let p0 = Point3::new(-1.0, 0.5, 2.0);
        let p1 = Point3::new(3.0, -1.0, 2.5);
        let p2 = Point3::new(0.5, 4.0, 1.0);
        let targets = [(0.2, 0.3, 0.5), (0.6, 0.2, 0.2), (1.0 / 3.0, 1.0 / 3.0, 1.0 / 3.0)];
        for (a, b, c) in targets {
            let point = Point3::from(p0.coords * a + p1.coords * b + p2.coords * c);
            let normal = (p1 - p0).cross(&(p2 - p0));
            let ray = Ray::new(point + normal * 2.0, -normal);

            let hit = intersect_triangle(&ray, &p0, &p1, &p2, None).unwrap();
            assert_abs_diff_eq!(hit.origin, point, epsilon = 1e-9);

            let w = barycentric(&p0, &p1, &p2, &hit.origin).unwrap();
            assert!((w[0] + w[1] + w[2] - 1.0).abs() < 1e-12);
            assert!(w.iter().all(|w| (0.0..=1.0).contains(w)));
            assert_abs_diff_eq!(w[0], a, epsilon = 1e-9);
            assert_abs_diff_eq!(w[1], b, epsilon = 1e-9);
            assert_abs_diff_eq!(w[2], c, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_miss_outside() {
        let [p0, p1, p2] = unit_triangle();
        for (x, y) in [(0.8, 0.8), (-0.1, 0.5), (0.5, -0.1), (2.0, 0.0)] {
            let ray = Ray::new(Point3::new(x, y, 1.0), Vec3::new(0.0, 0.0, -1.0));
            assert!(intersect_triangle(&ray, &p0, &p1, &p2, None).is_none(), "({x}, {y})");
        }
    }

    #[test]
    fn test_edges_and_corners_are_inclusive() {
        let [p0, p1, p2] = unit_triangle();
        for (x, y) in [(0.0, 0.0), (1.0, 0.0), (0.5, 0.0), (0.0, 0.25)] {
            let ray = Ray::new(Point3::new(x, y, 1.0), Vec3::new(0.0, 0.0, -1.0));
            assert!(intersect_triangle(&ray, &p0, &p1, &p2, None).is_some(), "({x}, {y})");
        }
    }

    #[test]
    fn test_back_face_rejected() {
        let [p0, p1, p2] = unit_triangle();
        let ray = Ray::new(Point3::new(0.2, 0.2, -1.0), Vec3::new(0.0, 0.0, 1.0));
        assert!(intersect_triangle(&ray, &p0, &p1, &p2, None).is_none());
        // Swapping winding flips the front face.
        assert!(intersect_triangle(&ray, &p0, &p2, &p1, None).is_some());
    }

    #[test]
    fn test_parallel_ray_rejected() {
        let [p0, p1, p2] = unit_triangle();
        let ray = Ray::new(Point3::new(-1.0, 0.2, 0.0), Vec3::new(1.0, 0.0, 0.0));
        assert!(intersect_triangle(&ray, &p0, &p1, &p2, None).is_none());
    }

    #[test]
    fn test_supplied_normal_is_used() {
        let [p0, p1, p2] = unit_triangle();
        let ray = Ray::new(Point3::new(0.2, 0.2, 1.0), Vec3::new(0.0, 0.0, -1.0));
        let normal = Vec3::new(0.0, 0.0, 5.0);
        let hit = intersect_triangle(&ray, &p0, &p1, &p2, Some(&normal)).unwrap();
        assert_eq!(hit.normal, normal);
        assert_abs_diff_eq!(hit.origin, Point3::new(0.2, 0.2, 0.0), epsilon = 1e-12);

        let away = Vec3::new(0.0, 0.0, -1.0);
        assert!(intersect_triangle(&ray, &p0, &p1, &p2, Some(&away)).is_none());
    }

    #[test]
    fn test_degenerate_triangles_miss() {
        let ray = Ray::new(Point3::new(0.0, 0.0, 1.0), Vec3::new(0.0, 0.0, -1.0));
        let a = Point3::origin();
        let b = Point3::new(1.0, 0.0, 0.0);
        let c = Point3::new(2.0, 0.0, 0.0);
        assert!(intersect_triangle(&ray, &a, &a, &b, None).is_none());
        assert!(intersect_triangle(&ray, &a, &b, &c, None).is_none());
        assert!(intersect_triangle(&ray, &a, &a, &a, None).is_none());
        let up = Vec3::z();
        assert!(intersect_triangle(&ray, &a, &b, &c, Some(&up)).is_none());
        assert!(barycentric(&a, &b, &c, &a).is_none());
    }

    #[test]
    fn test_zero_direction_misses() {
        let [p0, p1, p2] = unit_triangle();
        let ray = Ray::new(Point3::new(0.2, 0.2, 1.0), Vec3::zeros());
        assert!(intersect_triangle(&ray, &p0, &p1, &p2, None).is_none());
    }
}
