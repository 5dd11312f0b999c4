#![warn(missing_docs)]

//! Ray casting against transformed triangle meshes.
//!
//! Answers "what does this ray hit, where, and in what order?" for a set of
//! meshes placed in a scene by per-object world transforms.
//!
//! # Architecture
//!
//! - [`Ray`] - origin and direction, with plane, triangle, box and mesh tests
//! - [`Hit`] - position, normal, distance and the id of the object hit
//! - [`intersect`] - the intersection primitives
//! - [`RayCaster`] - registry of `(object, mesh)` pairs and the scene query:
//!   each active object gets its ray moved into local space, a bounding box
//!   broad phase, a per-triangle narrow phase, and its hits moved back to
//!   world space before all hits are sorted by distance
//! - [`SceneObject`] / [`MeshGeometry`] - what the caster reads from the
//!   scene, implemented for the `raypick-scene` types
//!
//! # Example
//!
//! ```
//! use raypick_math::{Point3, Transform, Vec3};
//! use raypick_raycast::{Ray, RayCaster};
//! use raypick_scene::{shapes, Scene};
//!
//! let mut scene = Scene::new();
//! let id = scene.add_node("cube", Transform::translation(0.0, 0.0, -5.0));
//! let mesh = shapes::cube(1.0);
//!
//! let mut caster = RayCaster::new();
//! caster.add_object(scene.get(id).unwrap(), &mesh);
//!
//! let ray = Ray::new(Point3::origin(), Vec3::new(0.0, 0.0, -1.0));
//! let hits = caster.cast_ray(&ray).unwrap();
//! assert!((hits[0].distance - 4.0).abs() < 1e-9);
//! ```

mod caster;
mod collab;
pub mod error;
pub mod intersect;
mod ray;
mod settings;

pub use caster::RayCaster;
pub use collab::{MeshGeometry, SceneObject};
pub use error::{MeshError, RaycastError, Result};
pub use ray::{Hit, ObjectId, Ray};
pub use settings::RaycastSettings;
