//! Error types for selvage.
//!
//! Every failure in this crate surfaces as a [`MeshError`]. Construction-time
//! errors abort the build of the offending triangle (partial connectivity is
//! never handed to callers); query-time errors are reported per call.

use thiserror::Error;

use crate::mesh::{HalfEdgeId, VertexId};

/// Result type alias using [`MeshError`].
pub type Result<T> = std::result::Result<T, MeshError>;

/// Errors that can occur while building or querying mesh connectivity.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MeshError {
    /// The mesh has no triangles.
    #[error("mesh has no triangles")]
    EmptyMesh,

    /// A triangle references a vertex index outside the mesh.
    #[error("triangle {triangle} references invalid vertex index {vertex}")]
    InvalidVertexIndex {
        /// The triangle index in the input face list.
        triangle: usize,
        /// The out-of-range vertex index.
        vertex: usize,
    },

    /// A triangle repeats a vertex and has no interior.
    #[error("triangle {triangle} is degenerate (repeated vertex)")]
    DegenerateTriangle {
        /// The triangle index in the input face list.
        triangle: usize,
    },

    /// A third half-edge was constructed over an undirected edge that is
    /// already fully paired. The existing twin link is left untouched.
    #[error("edge ({v0:?}, {v1:?}) already has both half-edges; mesh is non-manifold")]
    NonManifoldEdge {
        /// Origin vertex of the offending half-edge.
        v0: VertexId,
        /// Destination vertex of the offending half-edge.
        v1: VertexId,
    },

    /// A half-edge's destination vertex is not a vertex of its own triangle.
    ///
    /// This cannot arise from well-formed construction; seeing it means the
    /// connectivity arrays have been corrupted.
    #[error("half-edge {halfedge:?} ends at a vertex outside its own triangle")]
    StructuralInconsistency {
        /// The half-edge whose triangle does not contain its destination.
        halfedge: HalfEdgeId,
    },

    /// An angle query hit a zero-length edge or collinear triangle.
    #[error("angle at half-edge {halfedge:?} is undefined (degenerate geometry)")]
    DegenerateAngle {
        /// The half-edge the query was keyed to.
        halfedge: HalfEdgeId,
    },
}
