//! # Selvage
//!
//! Half-edge connectivity for triangulated surface meshes.
//!
//! Selvage derives, for every directed edge of every triangle, a half-edge
//! record that knows its endpoints, its owning triangle, the triangle's
//! third vertex, and — once the reverse directed edge has been built — its
//! twin in the neighboring triangle. This connectivity is the substrate
//! geometry-processing algorithms (discrete Laplacians, curvature
//! estimation, smoothing, parameterization) are assembled on.
//!
//! ## Features
//!
//! - **Incremental twin pairing**: triangles can be added in any order;
//!   shared edges pair up the moment both directions exist
//! - **Boundary as absence**: a half-edge without a twin is a boundary edge,
//!   no auxiliary boundary elements required
//! - **Non-manifold detection**: a third half-edge over a paired edge is
//!   rejected instead of silently overwriting connectivity
//! - **Angle queries**: the three interior angles of a triangle, keyed to
//!   any of its half-edges
//!
//! ## Quick Start
//!
//! ```
//! use selvage::prelude::*;
//! use nalgebra::Point3;
//!
//! let vertices = vec![
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(0.5, 1.0, 0.0),
//!     Point3::new(0.5, -1.0, 0.0),
//! ];
//! let faces = vec![[0, 1, 2], [1, 0, 3]];
//!
//! let mesh = build_from_triangles(&vertices, &faces)?;
//! assert_eq!(mesh.n_half_edges(), 6);
//! assert_eq!(mesh.n_full_edges(), 1);
//!
//! // Walk counter-clockwise around a triangle.
//! let he = mesh.triangle(TriangleId::new(0)).halfedges[0];
//! let next = mesh.ccw_around_triangle(he)?;
//! assert_eq!(mesh.origin(next), mesh.dest(he));
//!
//! // Interior angles keyed to a half-edge sum to pi.
//! let sum = mesh.alpha_angle(he)? + mesh.beta_angle(he)? + mesh.gamma_angle(he)?;
//! assert!((sum - std::f64::consts::PI).abs() < 1e-9);
//! # Ok::<(), selvage::MeshError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod mesh;

pub use error::{MeshError, Result};

/// Prelude module for convenient imports.
///
/// ```
/// use selvage::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{MeshError, Result};
    pub use crate::mesh::{
        build_from_triangles, to_face_vertex, HalfEdge, HalfEdgeId, TriMesh, Triangle,
        TriangleId, Vertex, VertexId,
    };
}

// Re-export nalgebra types for convenience
pub use nalgebra;
