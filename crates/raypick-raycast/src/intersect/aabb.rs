//! Ray entry point on an axis-aligned box (slab test).

use raypick_math::{Box3, Vec3};

use crate::{Hit, Ray};

/// Find where `ray` enters `bbox` from outside.
///
/// Axes are tried in x, y, z order. On each axis the direction picks the
/// face the ray can enter through: the minimum face when the component is
/// positive, the maximum face when negative; a zero component skips the
/// axis. The face must lie ahead of the origin. The first candidate point
/// that falls inside the box, grown by `epsilon` on every side, is the entry
/// point. Its normal is the face's outward unit axis.
///
/// A ray starting inside the box (or past every candidate face) misses.
pub fn intersect_box(ray: &Ray, bbox: &Box3, epsilon: f64) -> Option<Hit> {
    for axis in 0..3 {
        let dir = ray.direction[axis];
        let (extreme, outward) = if dir > 0.0 {
            (bbox.min[axis], -1.0)
        } else if dir < 0.0 {
            (bbox.max[axis], 1.0)
        } else {
            continue;
        };

        let t = (extreme - ray.origin[axis]) / dir;
        if !(t > 0.0) {
            continue;
        }

        let mut point = ray.at(t);
        point[axis] = extreme;
        if bbox.contains_point(&point, epsilon) {
            let mut normal = Vec3::zeros();
            normal[axis] = outward;
            return Some(Hit::new(point, normal, (point - ray.origin).norm()));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use raypick_math::Point3;

    const EPS: f64 = 1e-4;

    fn unit_cube() -> Box3 {
        Box3::new(Point3::new(-1.0, -1.0, -1.0), Point3::new(1.0, 1.0, 1.0))
    }

    #[test]
    fn test_enter_top_face() {
        let ray = Ray::new(Point3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0));
        let hit = intersect_box(&ray, &unit_cube(), EPS).unwrap();
        assert_abs_diff_eq!(hit.origin, Point3::new(0.0, 0.0, 1.0), epsilon = 1e-12);
        assert_eq!(hit.normal, Vec3::new(0.0, 0.0, 1.0));
        assert!((hit.distance - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_enter_min_faces() {
        let cases = [
            (Point3::new(-5.0, 0.5, 0.5), Vec3::x(), Point3::new(-1.0, 0.5, 0.5), -Vec3::x()),
            (Point3::new(0.5, -5.0, 0.5), Vec3::y(), Point3::new(0.5, -1.0, 0.5), -Vec3::y()),
            (Point3::new(0.5, 0.5, -5.0), Vec3::z(), Point3::new(0.5, 0.5, -1.0), -Vec3::z()),
        ];
        for (origin, dir, entry, normal) in cases {
            let hit = intersect_box(&Ray::new(origin, dir), &unit_cube(), EPS).unwrap();
            assert_abs_diff_eq!(hit.origin, entry, epsilon = 1e-4);
            assert_eq!(hit.normal, normal);
        }
    }

    #[test]
    fn test_diagonal_entry() {
        // Enters through x = -1 at (-1, 0, 0.5) after 3 units along x.
        let ray = Ray::new(Point3::new(-4.0, -1.5, 0.5), Vec3::new(2.0, 1.0, 0.0));
        let hit = intersect_box(&ray, &unit_cube(), EPS).unwrap();
        assert_abs_diff_eq!(hit.origin, Point3::new(-1.0, 0.0, 0.5), epsilon = 1e-4);
        assert_eq!(hit.normal, Vec3::new(-1.0, 0.0, 0.0));

        // Enters through y = -1 instead.
        let ray = Ray::new(Point3::new(0.0, -3.0, 0.0), Vec3::new(0.25, 1.0, 0.0));
        let hit = intersect_box(&ray, &unit_cube(), EPS).unwrap();
        assert_abs_diff_eq!(hit.origin, Point3::new(0.5, -1.0, 0.0), epsilon = 1e-4);
        assert_eq!(hit.normal, Vec3::new(0.0, -1.0, 0.0));
    }

    #[test]
    fn test_unnormalized_direction() {
        let ray = Ray::new(Point3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -10.0));
        let hit = intersect_box(&ray, &unit_cube(), EPS).unwrap();
        assert_abs_diff_eq!(hit.origin, Point3::new(0.0, 0.0, 1.0), epsilon = 1e-12);
        assert!((hit.distance - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_miss_beside() {
        let ray = Ray::new(Point3::new(3.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0));
        assert!(intersect_box(&ray, &unit_cube(), EPS).is_none());
    }

    #[test]
    fn test_epsilon_absorbs_grazing_edge() {
        let ray = Ray::new(Point3::new(1.00005, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0));
        assert!(intersect_box(&ray, &unit_cube(), EPS).is_some());
        assert!(intersect_box(&ray, &unit_cube(), 0.0).is_none());
    }

    #[test]
    fn test_pointing_away_misses() {
        let ray = Ray::new(Point3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, 1.0));
        assert!(intersect_box(&ray, &unit_cube(), EPS).is_none());
    }

    #[test]
    fn test_origin_inside_misses() {
        let ray = Ray::new(Point3::origin(), Vec3::new(0.3, -0.2, 1.0));
        assert!(intersect_box(&ray, &unit_cube(), EPS).is_none());
    }

    #[test]
    fn test_zero_direction_misses() {
        let ray = Ray::new(Point3::new(0.0, 0.0, 5.0), Vec3::zeros());
        assert!(intersect_box(&ray, &unit_cube(), EPS).is_none());
    }
}
