//! Object registry and scene-wide ray queries.

use std::fmt;

use crate::error::{RaycastError, Result};
use crate::intersect::{intersect_box, intersect_mesh};
use crate::{Hit, MeshGeometry, ObjectId, Ray, RaycastSettings, SceneObject};

/// Debug logging macro - only prints when debug-raycast feature is enabled
#[allow(unused_macros)]
#[cfg(feature = "debug-raycast")]
macro_rules! debug_ray {
    ($($arg:tt)*) => {
        eprintln!($($arg)*)
    };
}

/// No-op version when debug-raycast feature is disabled
#[allow(unused_macros)]
#[cfg(not(feature = "debug-raycast"))]
macro_rules! debug_ray {
    ($($arg:tt)*) => {};
}

/// One registered `(object, mesh)` pair.
struct Registration<'a> {
    object: Box<dyn SceneObject + 'a>,
    mesh: &'a dyn MeshGeometry,
}

/// Registry of borrowed `(object, mesh)` pairs and the entry point for
/// scene-wide ray queries.
///
/// Ids are assigned in registration order and never reused. The caster
/// borrows everything it is given for `'a`, so registered objects and meshes
/// cannot change while it is alive; world transform caches inside the
/// objects may still refresh on read.
pub struct RayCaster<'a> {
    entries: Vec<Registration<'a>>,
    settings: RaycastSettings,
}

impl<'a> RayCaster<'a> {
    /// Empty caster with default settings.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            settings: RaycastSettings::default(),
        }
    }

    /// Empty caster with validated settings.
    pub fn with_settings(settings: RaycastSettings) -> Result<Self> {
        settings.validate()?;
        Ok(Self {
            entries: Vec::new(),
            settings,
        })
    }

    /// Current settings.
    pub fn settings(&self) -> &RaycastSettings {
        &self.settings
    }

    /// Register an object and the mesh it carries. Returns the new id.
    pub fn add_object(
        &mut self,
        object: impl SceneObject + 'a,
        mesh: &'a dyn MeshGeometry,
    ) -> ObjectId {
        let id = ObjectId(self.entries.len());
        self.entries.push(Registration {
            object: Box::new(object),
            mesh,
        });
        id
    }

    /// Number of registered objects.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Mesh registered under `id`.
    pub fn mesh(&self, id: ObjectId) -> Option<&'a dyn MeshGeometry> {
        self.entries.get(id.index()).map(|entry| entry.mesh)
    }

    /// Object registered under `id`.
    pub fn object(&self, id: ObjectId) -> Option<&dyn SceneObject> {
        self.entries.get(id.index()).map(|entry| entry.object.as_ref())
    }

    /// Cast a world-space ray against every active object.
    ///
    /// Returns all hits in world space, sorted by ascending distance from
    /// the ray origin. An empty list means nothing was hit. Fails only when
    /// a registered mesh has malformed triangle data.
    ///
    /// An object's triangles are tested only when the ray, in the object's
    /// local space, enters its bounding box or starts inside it. A ray that
    /// starts outside the box and points away from it never reaches the
    /// triangles. A ray that starts inside does, and because triangle tests
    /// treat the ray as a line, front faces behind the origin come back
    /// with it. Set [`RaycastSettings::forward_only`] to drop those.
    pub fn cast_ray(&self, ray: &Ray) -> Result<Vec<Hit>> {
        let mut hits = Vec::new();
        for (index, entry) in self.entries.iter().enumerate() {
            self.cast_object(ObjectId(index), entry, ray, &mut hits)?;
        }
        hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        debug_ray!("cast_ray: {} hits", hits.len());
        Ok(hits)
    }

    /// Nearest hit, if any.
    pub fn cast_ray_closest(&self, ray: &Ray) -> Result<Option<Hit>> {
        Ok(self.cast_ray(ray)?.into_iter().next())
    }

    /// Broad and narrow phase for one object, appending world-space hits.
    fn cast_object(
        &self,
        id: ObjectId,
        entry: &Registration<'a>,
        ray: &Ray,
        hits: &mut Vec<Hit>,
    ) -> Result<()> {
        if !entry.object.is_active() {
            debug_ray!("object {id}: inactive");
            return Ok(());
        }

        let world = entry.object.world_transform();
        // A singular transform flattens the object to zero volume.
        let Some(inverse) = world.inverse() else {
            debug_ray!("object {id}: singular world transform");
            return Ok(());
        };
        let inverse_transpose = inverse.transpose();
        let local_ray = ray.transformed(&inverse);

        let bbox = entry.mesh.bounding_box();
        let epsilon = self.settings.box_epsilon;
        if !bbox.contains_point(&local_ray.origin, epsilon)
            && intersect_box(&local_ray, &bbox, epsilon).is_none()
        {
            debug_ray!("object {id}: bounding box miss");
            return Ok(());
        }

        let local_hits = intersect_mesh(&local_ray, entry.mesh)
            .map_err(|source| RaycastError::Mesh { object: id, source })?;
        debug_ray!("object {id}: {} triangle hits", local_hits.len());

        for mut hit in local_hits {
            hit.origin = world.apply_point(&hit.origin);
            hit.normal = inverse_transpose.apply_vec(&hit.normal);
            hit.distance = (hit.origin - ray.origin).norm();
            hit.object_id = Some(id);
            if self.settings.accepts(ray, &hit) {
                hits.push(hit);
            }
        }
        Ok(())
    }
}

impl Default for RayCaster<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RayCaster<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RayCaster")
            .field("objects", &self.entries.len())
            .field("settings", &self.settings)
            .finish()
    }
}
