//! Triangle meshes.

use raypick_math::{Box3, Point3};

use crate::error::{Result, SceneError};

/// A triangle mesh: vertex positions, an optional index buffer and the
/// bounding box of the positions.
///
/// Flat meshes store three positions per triangle. Indexed meshes store
/// three indices per triangle. Both forms are validated on construction so
/// every triangle can be read without bounds surprises.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    positions: Vec<Point3>,
    indices: Option<Vec<u32>>,
    bounding_box: Box3,
}

impl Mesh {
    /// Build a flat (non-indexed) mesh.
    pub fn flat(positions: Vec<Point3>) -> Result<Self> {
        if positions.len() % 3 != 0 {
            return Err(SceneError::IncompleteTriangle {
                len: positions.len(),
            });
        }
        let bounding_box = Box3::from_points(&positions);
        Ok(Self {
            positions,
            indices: None,
            bounding_box,
        })
    }

    /// Build an indexed mesh.
    pub fn indexed(positions: Vec<Point3>, indices: Vec<u32>) -> Result<Self> {
        check_indices(&indices, positions.len())?;
        let bounding_box = Box3::from_points(&positions);
        Ok(Self {
            positions,
            indices: Some(indices),
            bounding_box,
        })
    }

    /// Assemble a mesh from data already known to be well formed.
    pub(crate) fn from_parts(positions: Vec<Point3>, indices: Option<Vec<u32>>) -> Self {
        let bounding_box = Box3::from_points(&positions);
        Self {
            positions,
            indices,
            bounding_box,
        }
    }

    /// Replace the index buffer, turning a flat mesh into an indexed one.
    pub fn set_indices(&mut self, indices: Vec<u32>) -> Result<()> {
        check_indices(&indices, self.positions.len())?;
        self.indices = Some(indices);
        Ok(())
    }

    /// Vertex positions.
    pub fn positions(&self) -> &[Point3] {
        &self.positions
    }

    /// Index buffer, if the mesh is indexed.
    pub fn indices(&self) -> Option<&[u32]> {
        self.indices.as_deref()
    }

    /// Whether triangles are read through an index buffer.
    pub fn is_indexed(&self) -> bool {
        self.indices.is_some()
    }

    /// Number of triangles.
    pub fn triangle_count(&self) -> usize {
        match &self.indices {
            Some(indices) => indices.len() / 3,
            None => self.positions.len() / 3,
        }
    }

    /// Corners of triangle `i`, if it exists.
    pub fn triangle(&self, i: usize) -> Option<[Point3; 3]> {
        if i >= self.triangle_count() {
            return None;
        }
        let base = i * 3;
        let corner = |k: usize| match &self.indices {
            Some(indices) => self.positions[indices[base + k] as usize],
            None => self.positions[base + k],
        };
        Some([corner(0), corner(1), corner(2)])
    }

    /// Iterate over all triangles in storage order.
    pub fn triangles(&self) -> impl Iterator<Item = [Point3; 3]> + '_ {
        (0..self.triangle_count()).filter_map(move |i| self.triangle(i))
    }

    /// Bounding box of the vertex positions.
    pub fn bounding_box(&self) -> Box3 {
        self.bounding_box
    }

    /// Expand an indexed mesh into an equivalent flat one.
    pub fn to_flat(&self) -> Mesh {
        let positions: Vec<Point3> = self.triangles().flatten().collect();
        Mesh {
            bounding_box: Box3::from_points(&positions),
            positions,
            indices: None,
        }
    }
}

fn check_indices(indices: &[u32], vertex_count: usize) -> Result<()> {
    if indices.len() % 3 != 0 {
        return Err(SceneError::IncompleteTriangle { len: indices.len() });
    }
    if let Some(&index) = indices.iter().find(|&&i| i as usize >= vertex_count) {
        return Err(SceneError::IndexOutOfRange {
            index,
            vertex_count,
        });
    }
    Ok(())
}
