//! Error types for scene and mesh construction.

use thiserror::Error;

use crate::NodeId;

/// Errors raised while building meshes or editing the scene graph.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    /// No node with this id exists in the scene.
    #[error("unknown scene node {0:?}")]
    UnknownNode(NodeId),

    /// Reparenting would make a node its own ancestor.
    #[error("cannot parent {child:?} under {parent:?}: would create a cycle")]
    CyclicParent {
        /// Node being reparented.
        child: NodeId,
        /// Requested parent.
        parent: NodeId,
    },

    /// A triangle index points past the end of the vertex array.
    #[error("index {index} out of range for {vertex_count} vertices")]
    IndexOutOfRange {
        /// Offending index value.
        index: u32,
        /// Number of vertex positions in the mesh.
        vertex_count: usize,
    },

    /// Triangle data whose length is not a multiple of three.
    #[error("triangle list of length {len} is not a multiple of 3")]
    IncompleteTriangle {
        /// Number of positions (flat meshes) or indices (indexed meshes).
        len: usize,
    },
}

/// Result type for scene operations.
pub type Result<T> = std::result::Result<T, SceneError>;
