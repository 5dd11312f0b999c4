//! What the ray caster reads from the scene.
//!
//! The caster never owns scene objects or meshes. It borrows anything that
//! implements these traits; `raypick-scene` types implement them here.

use raypick_math::{Box3, Point3, Transform};
use raypick_scene::{Mesh, NodeRef};

/// A placed object: an activity flag and a world transform.
pub trait SceneObject {
    /// Inactive objects are skipped without any intersection work.
    fn is_active(&self) -> bool;

    /// Current local-to-world transform. Implementations refresh any stale
    /// cached value before returning it.
    fn world_transform(&self) -> Transform;
}

impl<T: SceneObject + ?Sized> SceneObject for &T {
    fn is_active(&self) -> bool {
        (**self).is_active()
    }

    fn world_transform(&self) -> Transform {
        (**self).world_transform()
    }
}

impl SceneObject for NodeRef<'_> {
    fn is_active(&self) -> bool {
        NodeRef::is_active(self)
    }

    fn world_transform(&self) -> Transform {
        NodeRef::world_transform(self)
    }
}

/// Triangle geometry in an object's local space.
pub trait MeshGeometry {
    /// Vertex positions.
    fn vertex_positions(&self) -> &[Point3];

    /// Index buffer, three indices per triangle. `None` for flat meshes,
    /// which store three positions per triangle.
    fn index_buffer(&self) -> Option<&[u32]>;

    /// Whether triangles are read through [`index_buffer`](Self::index_buffer).
    fn is_indexed(&self) -> bool {
        self.index_buffer().is_some()
    }

    /// Bounding box of the vertex positions, used as the broad phase.
    fn bounding_box(&self) -> Box3;
}

impl MeshGeometry for Mesh {
    fn vertex_positions(&self) -> &[Point3] {
        self.positions()
    }

    fn index_buffer(&self) -> Option<&[u32]> {
        self.indices()
    }

    fn is_indexed(&self) -> bool {
        Mesh::is_indexed(self)
    }

    fn bounding_box(&self) -> Box3 {
        Mesh::bounding_box(self)
    }
}
