//! Error types for ray casting.

use thiserror::Error;

use crate::ObjectId;

/// Malformed triangle data found while reading a mesh.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MeshError {
    /// Element count is not a multiple of three.
    #[error("triangle list of length {len} is not a multiple of 3")]
    IncompleteTriangle {
        /// Number of positions (flat meshes) or indices (indexed meshes).
        len: usize,
    },

    /// An index points past the end of the vertex array.
    #[error("index {index} out of range for {vertex_count} vertices")]
    IndexOutOfRange {
        /// Offending index value.
        index: u32,
        /// Number of vertex positions.
        vertex_count: usize,
    },
}

/// Errors that abort a ray cast.
///
/// Missing the scene is not an error: it is an empty hit list.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RaycastError {
    /// A registered mesh has malformed triangle data.
    #[error("object {object}: {source}")]
    Mesh {
        /// Registry id of the object whose mesh is malformed.
        object: ObjectId,
        /// What is wrong with the mesh.
        #[source]
        source: MeshError,
    },

    /// Settings failed validation.
    #[error("invalid settings: {0}")]
    InvalidSettings(String),
}

/// Result type for ray casting operations.
pub type Result<T> = std::result::Result<T, RaycastError>;
