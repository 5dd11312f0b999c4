//! Axis-aligned bounding boxes.
//!
//! Used as the broad phase of scene queries: only meshes whose box the
//! ray enters get per-triangle tests.

use crate::Point3;

/// Axis-aligned bounding box in 3D.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Box3 {
    /// Minimum corner.
    pub min: Point3,
    /// Maximum corner.
    pub max: Point3,
}

impl Box3 {
    /// Create a box from min and max corners.
    pub fn new(min: Point3, max: Point3) -> Self {
        Self { min, max }
    }

    /// Create an empty (inverted) box suitable for expansion.
    pub fn empty() -> Self {
        Self {
            min: Point3::new(f64::INFINITY, f64::INFINITY, f64::INFINITY),
            max: Point3::new(f64::NEG_INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    /// Smallest box containing every point. Empty if `points` is empty.
    pub fn from_points<'p>(points: impl IntoIterator<Item = &'p Point3>) -> Self {
        let mut bbox = Self::empty();
        for p in points {
            bbox.include_point(p);
        }
        bbox
    }

    /// True if no point has been included yet.
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    /// Expand this box to include a point.
    pub fn include_point(&mut self, p: &Point3) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.min.z = self.min.z.min(p.z);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
        self.max.z = self.max.z.max(p.z);
    }

    /// Test whether `p` lies inside the box grown by `tol` on every side.
    pub fn contains_point(&self, p: &Point3, tol: f64) -> bool {
        p.x >= self.min.x - tol
            && p.x <= self.max.x + tol
            && p.y >= self.min.y - tol
            && p.y <= self.max.y + tol
            && p.z >= self.min.z - tol
            && p.z <= self.max.z + tol
    }
}

impl Default for Box3 {
    fn default() -> Self {
        Self::empty()
    }
}
