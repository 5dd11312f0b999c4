//! Ray-plane intersection (closed-form).

use raypick_math::Plane;

use crate::{Hit, Ray};

/// Intersect the line carrying `ray` with a plane.
///
/// Returns `None` only when the direction is parallel to the plane (this
/// includes a zero direction). There is no `t >= 0` check. The hit normal
/// is the plane's `(a, b, c)` exactly as stored.
pub fn intersect_plane(ray: &Ray, plane: &Plane) -> Option<Hit> {
    let coefficients = plane.coefficients();
    let denom = coefficients.dot(&ray.direction.to_homogeneous());
    if denom == 0.0 {
        return None;
    }

    let t = -coefficients.dot(&ray.origin.to_homogeneous()) / denom;
    let point = ray.at(t);
    Some(Hit::new(point, plane.normal, (point - ray.origin).norm()))
}
