//! Ray and hit records.

use std::fmt;

use raypick_math::{Box3, Plane, Point3, Tolerance, Transform, Vec3};

use crate::error::MeshError;
use crate::intersect;
use crate::MeshGeometry;

/// Stable id assigned by [`RayCaster::add_object`](crate::RayCaster::add_object).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub usize);

impl ObjectId {
    /// Position in the registry.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A ray in 3D space defined by origin and direction.
///
/// The direction is stored as given; it does not need to be unit length.
/// A zero direction makes the ray degenerate and every test misses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Origin point of the ray.
    pub origin: Point3,
    /// Direction of the ray.
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray from origin and direction.
    pub fn new(origin: Point3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Evaluate the ray at parameter `t`: `origin + t * direction`.
    #[inline]
    pub fn at(&self, t: f64) -> Point3 {
        self.origin + self.direction * t
    }

    /// True if the direction is the zero vector.
    pub fn is_degenerate(&self) -> bool {
        self.direction == Vec3::zeros()
    }

    /// Map the ray through `transform`: the origin as a point, the direction
    /// as a vector.
    pub fn transformed(&self, transform: &Transform) -> Ray {
        Ray {
            origin: transform.apply_point(&self.origin),
            direction: transform.apply_vec(&self.direction),
        }
    }

    /// Intersect the infinite line carrying this ray with a plane.
    ///
    /// See [`intersect::intersect_plane`].
    pub fn intersect_plane(&self, plane: &Plane) -> Option<Hit> {
        intersect::intersect_plane(self, plane)
    }

    /// Intersect a front-facing triangle.
    ///
    /// See [`intersect::intersect_triangle`].
    pub fn intersect_triangle(
        &self,
        p0: &Point3,
        p1: &Point3,
        p2: &Point3,
        normal: Option<&Vec3>,
    ) -> Option<Hit> {
        intersect::intersect_triangle(self, p0, p1, p2, normal)
    }

    /// Find where the ray enters an axis-aligned box, with the default
    /// slab tolerance.
    ///
    /// See [`intersect::intersect_box`].
    pub fn intersect_box(&self, bbox: &Box3) -> Option<Hit> {
        intersect::intersect_box(self, bbox, Tolerance::DEFAULT.slab)
    }

    /// Test every triangle of a mesh.
    ///
    /// Hits are tagged with their triangle index only; keep track of which
    /// mesh was tested, or go through a [`RayCaster`](crate::RayCaster) to
    /// get hits tagged with an object id.
    ///
    /// See [`intersect::intersect_mesh`].
    pub fn intersect_mesh<M: MeshGeometry + ?Sized>(
        &self,
        mesh: &M,
    ) -> std::result::Result<Vec<Hit>, MeshError> {
        intersect::intersect_mesh(self, mesh)
    }
}

/// Result of a ray intersection.
///
/// Positions and normals are in the frame of the ray that produced them:
/// local space from the primitives, world space from
/// [`RayCaster::cast_ray`](crate::RayCaster::cast_ray).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// Intersection point.
    pub origin: Point3,
    /// Surface normal. Not necessarily unit length.
    pub normal: Vec3,
    /// Distance from the ray origin to `origin`.
    pub distance: f64,
    /// Registry id of the object hit, set by the ray caster.
    pub object_id: Option<ObjectId>,
    /// Index of the triangle hit within its mesh, set by mesh tests.
    pub triangle: Option<usize>,
}

impl Hit {
    /// Create an untagged hit.
    pub fn new(origin: Point3, normal: Vec3, distance: f64) -> Self {
        Self {
            origin,
            normal,
            distance,
            object_id: None,
            triangle: None,
        }
    }
}
