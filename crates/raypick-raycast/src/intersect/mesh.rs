//! Ray-mesh intersection: every triangle, in storage order.

use crate::error::MeshError;
use crate::{Hit, MeshGeometry, Ray};

use super::intersect_triangle;

/// Test `ray` against every triangle of `mesh`.
///
/// Indexed meshes read corners through the index buffer, flat meshes read
/// consecutive positions. Hits come back in triangle order, each tagged
/// with its triangle index; ordering by distance is left to the caller.
///
/// The triangle data is checked before any test runs, so a malformed mesh
/// yields an error rather than a partial hit list.
///
/// The hits do not say which mesh they came from: `object_id` stays `None`.
/// Callers testing several meshes keep that association themselves, or
/// register the meshes with a [`RayCaster`](crate::RayCaster), whose hits
/// carry an [`ObjectId`](crate::ObjectId) that
/// [`RayCaster::mesh`](crate::RayCaster::mesh) resolves back to the mesh.
pub fn intersect_mesh<M: MeshGeometry + ?Sized>(
    ray: &Ray,
    mesh: &M,
) -> Result<Vec<Hit>, MeshError> {
    let positions = mesh.vertex_positions();
    let indices = if mesh.is_indexed() {
        mesh.index_buffer()
    } else {
        None
    };

    let count = indices.map_or(positions.len(), <[u32]>::len);
    if count % 3 != 0 {
        return Err(MeshError::IncompleteTriangle { len: count });
    }
    if let Some(&index) = indices
        .into_iter()
        .flatten()
        .find(|&&i| i as usize >= positions.len())
    {
        return Err(MeshError::IndexOutOfRange {
            index,
            vertex_count: positions.len(),
        });
    }

    let corner = move |i: usize| match indices {
        Some(indices) => positions[indices[i] as usize],
        None => positions[i],
    };

    let mut hits = Vec::new();
    for i in (0..count).step_by(3) {
        let (a, b, c) = (corner(i), corner(i + 1), corner(i + 2));
        if let Some(mut hit) = intersect_triangle(ray, &a, &b, &c, None) {
            hit.triangle = Some(i / 3);
            hits.push(hit);
        }
    }
    Ok(hits)
}
