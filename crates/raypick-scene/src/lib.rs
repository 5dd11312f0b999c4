#![warn(missing_docs)]

//! Scene collaborators for raypick queries.
//!
//! Supplies what the ray caster reads but does not own:
//!
//! - [`Mesh`] - vertex positions, an optional index buffer and a bounding box
//! - [`shapes`] - builders for common meshes
//! - [`Scene`] - an arena of nodes with local transforms, parent links,
//!   activity flags and cached world matrices

pub mod error;
mod graph;
mod mesh;
pub mod shapes;

pub use error::{Result, SceneError};
pub use graph::{Node, NodeId, NodeRef, Scene};
pub use mesh::Mesh;
