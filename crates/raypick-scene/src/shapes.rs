//! Builders for common meshes.
//!
//! Front faces wind counter-clockwise when viewed from outside, so the
//! face normal `(p1 - p0) × (p2 - p0)` points away from the solid.

use raypick_math::Point3;

use crate::Mesh;

/// Corner order: bit 0 selects +x, bit 1 +y, bit 2 +z.
const CUBE_INDICES: [u32; 36] = [
    4, 5, 7, 4, 7, 6, // +Z
    0, 2, 3, 0, 3, 1, // -Z
    1, 3, 7, 1, 7, 5, // +X
    0, 4, 6, 0, 6, 2, // -X
    2, 6, 7, 2, 7, 3, // +Y
    0, 1, 5, 0, 5, 4, // -Y
];

/// Axis-aligned cube centered at the origin, spanning `[-h, h]` on each axis.
pub fn cube(half_extent: f64) -> Mesh {
    cuboid(half_extent, half_extent, half_extent)
}

/// Axis-aligned box centered at the origin with the given half extents.
pub fn cuboid(hx: f64, hy: f64, hz: f64) -> Mesh {
    let positions = (0..8)
        .map(|i| {
            Point3::new(
                if i & 1 != 0 { hx } else { -hx },
                if i & 2 != 0 { hy } else { -hy },
                if i & 4 != 0 { hz } else { -hz },
            )
        })
        .collect();
    Mesh::from_parts(positions, Some(CUBE_INDICES.to_vec()))
}

/// Rectangle in the XY plane centered at the origin, facing +Z.
pub fn quad(width: f64, height: f64) -> Mesh {
    let (w, h) = (width / 2.0, height / 2.0);
    let positions = vec![
        Point3::new(-w, -h, 0.0),
        Point3::new(w, -h, 0.0),
        Point3::new(w, h, 0.0),
        Point3::new(-w, h, 0.0),
    ];
    Mesh::from_parts(positions, Some(vec![0, 1, 2, 0, 2, 3]))
}

/// A single flat triangle.
pub fn triangle(p0: Point3, p1: Point3, p2: Point3) -> Mesh {
    Mesh::from_parts(vec![p0, p1, p2], None)
}
