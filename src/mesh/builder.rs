//! Mesh construction from face-vertex lists.
//!
//! Mesh file loaders and test fixtures hand over positions plus triangles of
//! vertex indices; this module turns that into a fully connected [`TriMesh`]
//! by driving the incremental twin-pairing construction triangle by triangle.

use nalgebra::Point3;

use super::halfedge::TriMesh;
use super::index::VertexId;
use crate::error::{MeshError, Result};

/// Build a half-edge mesh from vertices and triangle faces.
///
/// # Arguments
/// * `vertices` - List of vertex positions
/// * `faces` - List of triangles, each as `[v0, v1, v2]` indices in
///   counter-clockwise order
///
/// # Returns
/// A connected mesh, or the first error encountered. Because partial
/// connectivity is unsafe for downstream algorithms, any invalid or
/// non-manifold triangle fails the whole build.
///
/// # Example
/// ```
/// use selvage::mesh::build_from_triangles;
/// use nalgebra::Point3;
///
/// let vertices = vec![
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(0.0, 1.0, 0.0),
/// ];
/// let mesh = build_from_triangles(&vertices, &[[0, 1, 2]]).unwrap();
/// assert_eq!(mesh.n_half_edges(), 3);
/// assert_eq!(mesh.n_full_edges(), 0);
/// ```
pub fn build_from_triangles(
    vertices: &[Point3<f64>],
    faces: &[[usize; 3]],
) -> Result<TriMesh> {
    if faces.is_empty() {
        return Err(MeshError::EmptyMesh);
    }

    let mut mesh = TriMesh::with_capacity(vertices.len(), faces.len());
    for &pos in vertices {
        mesh.add_vertex(pos);
    }

    for face in faces {
        // Keep out-of-range indices from wrapping through VertexId::new.
        if let Some(&vi) = face.iter().find(|&&vi| vi >= vertices.len()) {
            return Err(MeshError::InvalidVertexIndex {
                triangle: mesh.num_triangles(),
                vertex: vi,
            });
        }
        mesh.add_triangle(
            VertexId::new(face[0]),
            VertexId::new(face[1]),
            VertexId::new(face[2]),
        )?;
    }

    Ok(mesh)
}

/// Convert a half-edge mesh back to a face-vertex representation.
///
/// Returns a (vertices, faces) tuple.
pub fn to_face_vertex(mesh: &TriMesh) -> (Vec<Point3<f64>>, Vec<[usize; 3]>) {
    let vertices: Vec<Point3<f64>> = mesh.vertex_ids().map(|v| *mesh.position(v)).collect();

    let faces: Vec<[usize; 3]> = mesh
        .triangle_ids()
        .map(|t| {
            let [v0, v1, v2] = mesh.triangle(t).vertices;
            [v0.index(), v1.index(), v2.index()]
        })
        .collect();

    (vertices, faces)
}
