//! Core mesh data structures.
//!
//! This module provides the half-edge connectivity representation for
//! triangle meshes and the utilities for constructing it.
//!
//! # Overview
//!
//! The primary type is [`TriMesh`], which stores one [`HalfEdge`] per
//! directed edge of every triangle. Twin half-edges are paired up
//! incrementally while triangles are added, so at any point during
//! construction the mesh can tell a fully shared edge from a (still)
//! boundary one.
//!
//! # Index Types
//!
//! Mesh elements are identified by type-safe index wrappers:
//! - [`VertexId`] - Identifies a vertex
//! - [`TriangleId`] - Identifies a triangle
//! - [`HalfEdgeId`] - Identifies a half-edge
//!
//! # Construction
//!
//! Meshes are typically built from face-vertex lists:
//!
//! ```
//! use selvage::mesh::build_from_triangles;
//! use nalgebra::Point3;
//!
//! let vertices = vec![
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(0.5, 1.0, 0.0),
//! ];
//! let mesh = build_from_triangles(&vertices, &[[0, 1, 2]]).unwrap();
//! assert!(mesh.is_valid());
//! ```

mod builder;
pub mod geom;
mod halfedge;
mod index;

pub use builder::{build_from_triangles, to_face_vertex};
pub use halfedge::{HalfEdge, TriMesh, Triangle, Vertex};
pub use index::{HalfEdgeId, TriangleId, VertexId};
