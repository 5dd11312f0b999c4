//! Ray intersection primitives.
//!
//! Each test works in the frame of the ray it is given and returns hits
//! without object ids. The plane and triangle tests treat the ray as an
//! infinite line: points behind the origin are reported too, and callers
//! wanting forward-only hits filter on the sign of the ray parameter.

mod aabb;
mod mesh;
mod plane;
mod triangle;

pub use aabb::intersect_box;
pub use mesh::intersect_mesh;
pub use plane::intersect_plane;
pub use triangle::{barycentric, intersect_triangle};
