//! Half-edge connectivity for triangle meshes.
//!
//! Each triangle contributes three **half-edges**, one per directed edge in
//! counter-clockwise order. A half-edge knows its endpoints, the third
//! ("opposite") vertex of its triangle, the owning triangle, and — once the
//! reverse directed edge has been built — its **twin** in the neighboring
//! triangle. Twins are discovered incrementally during construction: every
//! vertex keeps a registry of its outgoing half-edges keyed by destination,
//! and a new half-edge v0→v1 pairs up with a previously built v1→v0 the
//! moment it is created.
//!
//! # Boundary Handling
//!
//! No separate boundary elements are stored. A half-edge whose twin is the
//! invalid sentinel is a boundary edge at the time of query (or its neighbor
//! simply has not been added yet; triangles may arrive in any order).

use std::collections::HashMap;

use nalgebra::{Point3, Vector3};

use super::geom;
use super::index::{HalfEdgeId, TriangleId, VertexId};
use crate::error::{MeshError, Result};

/// Slot layout table: origin slot k → (destination slot, opposite slot).
///
/// Slots follow the fixed cyclic order 0 → 1 → 2 → 0, so the half-edge
/// originating at slot k ends at slot k+1 (mod 3) and faces the remaining
/// vertex.
const SLOT_LAYOUT: [(usize, usize); 3] = [(1, 2), (2, 0), (0, 1)];

/// A vertex in the half-edge mesh.
#[derive(Debug, Clone)]
pub struct Vertex {
    /// The 3D position of this vertex.
    pub position: Point3<f64>,

    /// Outgoing half-edges keyed by destination vertex.
    ///
    /// This is the twin-lookup registry: a new half-edge v0→v1 asks v1 for
    /// its outgoing half-edge to v0. Only the first-built direction of each
    /// edge is registered; pairing consumes the lookup without adding the
    /// reverse entry.
    outgoing: HashMap<VertexId, HalfEdgeId>,
}

impl Vertex {
    /// Create a new vertex at the given position.
    pub fn new(position: Point3<f64>) -> Self {
        Self {
            position,
            outgoing: HashMap::new(),
        }
    }

    /// Create a new vertex from coordinates.
    pub fn from_coords(x: f64, y: f64, z: f64) -> Self {
        Self::new(Point3::new(x, y, z))
    }

    /// Find this vertex's outgoing half-edge toward `dest`, if one exists.
    #[inline]
    pub fn half_edge_to(&self, dest: VertexId) -> Option<HalfEdgeId> {
        self.outgoing.get(&dest).copied()
    }

    /// Iterate over the destinations this vertex has outgoing half-edges to.
    pub fn neighbors(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.outgoing.keys().copied()
    }
}

/// A triangle in the half-edge mesh.
///
/// Holds three vertex references in fixed cyclic order and the three
/// half-edges originating at each slot. Half-edge slots start out invalid
/// and are filled as the triangle's half-edges are constructed.
#[derive(Debug, Clone)]
pub struct Triangle {
    /// The triangle's vertices at slots 0, 1, 2.
    pub vertices: [VertexId; 3],

    /// `halfedges[k]` is the half-edge from slot k to slot k+1 (mod 3).
    pub halfedges: [HalfEdgeId; 3],
}

impl Triangle {
    fn new(vertices: [VertexId; 3]) -> Self {
        Self {
            vertices,
            halfedges: [HalfEdgeId::invalid(); 3],
        }
    }

    /// Find the slot (0, 1, or 2) at which `v` sits, if it is a vertex of
    /// this triangle.
    #[inline]
    pub fn slot_of(&self, v: VertexId) -> Option<usize> {
        self.vertices.iter().position(|&u| u == v)
    }
}

/// One directed edge of one triangle.
#[derive(Debug, Clone, Copy)]
pub struct HalfEdge {
    /// Origin vertex.
    pub v0: VertexId,
    /// Destination vertex.
    pub v1: VertexId,
    /// The third vertex of the owning triangle, opposite this edge.
    pub v2: VertexId,
    /// The owning triangle.
    pub triangle: TriangleId,
    /// Slot of `v0` within the owning triangle.
    pub v0_slot: u8,
    /// Slot of `v1` within the owning triangle.
    pub v1_slot: u8,
    /// Slot of `v2` within the owning triangle.
    pub v2_slot: u8,
    /// The oppositely directed half-edge of the same undirected edge, or the
    /// invalid sentinel while unpaired.
    pub twin: HalfEdgeId,
}

impl HalfEdge {
    /// Check whether both directions of this undirected edge have been built
    /// and paired.
    #[inline]
    pub fn part_of_full_edge(&self) -> bool {
        self.twin.is_valid()
    }
}

/// A triangle mesh with full half-edge connectivity.
///
/// The mesh owns all vertices, triangles, and half-edges in arenas; every
/// cross-reference between elements is an index into those arenas, so no
/// ownership cycles exist.
#[derive(Debug, Clone, Default)]
pub struct TriMesh {
    vertices: Vec<Vertex>,
    triangles: Vec<Triangle>,
    halfedges: Vec<HalfEdge>,

    /// One representative half-edge per undirected edge, recorded when the
    /// first direction of that edge is built.
    edges: Vec<HalfEdgeId>,

    /// Number of undirected edges with both directions present.
    n_full_edges: usize,
}

impl TriMesh {
    /// Create a new empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mesh with pre-allocated capacity.
    pub fn with_capacity(num_vertices: usize, num_triangles: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(num_vertices),
            triangles: Vec::with_capacity(num_triangles),
            halfedges: Vec::with_capacity(num_triangles * 3),
            edges: Vec::with_capacity(num_triangles * 2),
            n_full_edges: 0,
        }
    }

    // ==================== Accessors ====================

    /// Get the number of vertices.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of triangles.
    #[inline]
    pub fn num_triangles(&self) -> usize {
        self.triangles.len()
    }

    /// Total number of half-edges constructed so far.
    #[inline]
    pub fn n_half_edges(&self) -> usize {
        self.halfedges.len()
    }

    /// Number of undirected edges with both directed half-edges paired.
    #[inline]
    pub fn n_full_edges(&self) -> usize {
        self.n_full_edges
    }

    /// Number of distinct undirected edges encountered so far.
    #[inline]
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Get a vertex by ID.
    #[inline]
    pub fn vertex(&self, id: VertexId) -> &Vertex {
        &self.vertices[id.index()]
    }

    /// Get a triangle by ID.
    #[inline]
    pub fn triangle(&self, id: TriangleId) -> &Triangle {
        &self.triangles[id.index()]
    }

    /// Get a half-edge by ID.
    #[inline]
    pub fn halfedge(&self, id: HalfEdgeId) -> &HalfEdge {
        &self.halfedges[id.index()]
    }

    /// Get the position of a vertex.
    #[inline]
    pub fn position(&self, v: VertexId) -> &Point3<f64> {
        &self.vertex(v).position
    }

    /// Get the origin vertex of a half-edge.
    #[inline]
    pub fn origin(&self, he: HalfEdgeId) -> VertexId {
        self.halfedge(he).v0
    }

    /// Get the destination vertex of a half-edge.
    #[inline]
    pub fn dest(&self, he: HalfEdgeId) -> VertexId {
        self.halfedge(he).v1
    }

    /// Get the vertex of the owning triangle opposite a half-edge.
    #[inline]
    pub fn opposite(&self, he: HalfEdgeId) -> VertexId {
        self.halfedge(he).v2
    }

    /// Get the triangle a half-edge belongs to.
    #[inline]
    pub fn triangle_of(&self, he: HalfEdgeId) -> TriangleId {
        self.halfedge(he).triangle
    }

    /// Get the twin of a half-edge, if both directions have been built.
    #[inline]
    pub fn twin(&self, he: HalfEdgeId) -> Option<HalfEdgeId> {
        let twin = self.halfedge(he).twin;
        twin.is_valid().then_some(twin)
    }

    /// Check whether a half-edge's undirected edge is fully paired.
    #[inline]
    pub fn part_of_full_edge(&self, he: HalfEdgeId) -> bool {
        self.halfedge(he).part_of_full_edge()
    }

    /// Check whether a half-edge is a boundary edge (no twin at query time).
    #[inline]
    pub fn is_boundary_halfedge(&self, he: HalfEdgeId) -> bool {
        !self.part_of_full_edge(he)
    }

    /// Number of half-edges currently without a twin.
    pub fn boundary_halfedge_count(&self) -> usize {
        self.halfedges.iter().filter(|he| !he.part_of_full_edge()).count()
    }

    // ==================== Iteration ====================

    /// Iterate over all vertex IDs.
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        (0..self.vertices.len()).map(VertexId::new)
    }

    /// Iterate over all triangle IDs.
    pub fn triangle_ids(&self) -> impl Iterator<Item = TriangleId> + '_ {
        (0..self.triangles.len()).map(TriangleId::new)
    }

    /// Iterate over all half-edge IDs.
    pub fn halfedge_ids(&self) -> impl Iterator<Item = HalfEdgeId> + '_ {
        (0..self.halfedges.len()).map(HalfEdgeId::new)
    }

    /// Iterate over all half-edges with their IDs.
    pub fn halfedges(&self) -> impl Iterator<Item = (HalfEdgeId, &HalfEdge)> + '_ {
        self.halfedges
            .iter()
            .enumerate()
            .map(|(i, he)| (HalfEdgeId::new(i), he))
    }

    /// Iterate over one representative half-edge per undirected edge.
    pub fn edge_ids(&self) -> impl Iterator<Item = HalfEdgeId> + '_ {
        self.edges.iter().copied()
    }

    // ==================== Construction ====================

    /// Add a new vertex and return its ID.
    pub fn add_vertex(&mut self, position: Point3<f64>) -> VertexId {
        let id = VertexId::new(self.vertices.len());
        self.vertices.push(Vertex::new(position));
        id
    }

    /// Add a triangle over three existing vertices (counter-clockwise) and
    /// construct its three half-edges, pairing each with its twin if the
    /// reverse direction already exists.
    ///
    /// Fails with [`MeshError::NonManifoldEdge`] if any of the three directed
    /// edges would be the third half-edge over an already-paired undirected
    /// edge, or would duplicate an existing directed edge. On failure the
    /// mesh is left exactly as it was before the call.
    pub fn add_triangle(&mut self, a: VertexId, b: VertexId, c: VertexId) -> Result<TriangleId> {
        let ti = self.triangles.len();
        for v in [a, b, c] {
            if v.index() >= self.vertices.len() {
                return Err(MeshError::InvalidVertexIndex {
                    triangle: ti,
                    vertex: v.index(),
                });
            }
        }
        if a == b || b == c || a == c {
            return Err(MeshError::DegenerateTriangle { triangle: ti });
        }

        // Admit all three directed edges before mutating anything, so a
        // non-manifold input cannot disturb existing twin links or counters.
        let corners = [a, b, c];
        for slot in 0..3 {
            let v0 = corners[slot];
            let v1 = corners[SLOT_LAYOUT[slot].0];
            if self.vertex(v0).half_edge_to(v1).is_some() {
                // Duplicate directed edge: two triangles wind the same way
                // over this edge.
                return Err(MeshError::NonManifoldEdge { v0, v1 });
            }
            if let Some(reverse) = self.vertex(v1).half_edge_to(v0) {
                if self.halfedge(reverse).part_of_full_edge() {
                    return Err(MeshError::NonManifoldEdge { v0, v1 });
                }
            }
        }

        let tid = TriangleId::new(ti);
        self.triangles.push(Triangle::new(corners));
        for slot in 0..3 {
            let he = self.build_half_edge(tid, slot);
            self.triangles[ti].halfedges[slot] = he;
        }
        Ok(tid)
    }

    /// Construct the half-edge originating at `slot` of triangle `tid` and
    /// run the twin-pairing protocol.
    fn build_half_edge(&mut self, tid: TriangleId, slot: usize) -> HalfEdgeId {
        let (v1_slot, v2_slot) = SLOT_LAYOUT[slot];
        let corners = self.triangles[tid.index()].vertices;
        let (v0, v1, v2) = (corners[slot], corners[v1_slot], corners[v2_slot]);

        let id = HalfEdgeId::new(self.halfedges.len());
        let reverse = self.vertex(v1).half_edge_to(v0);
        self.halfedges.push(HalfEdge {
            v0,
            v1,
            v2,
            triangle: tid,
            v0_slot: slot as u8,
            v1_slot: v1_slot as u8,
            v2_slot: v2_slot as u8,
            twin: reverse.unwrap_or_else(HalfEdgeId::invalid),
        });

        match reverse {
            Some(twin) => {
                // The reverse direction exists and is unpaired (checked by
                // add_triangle): link both ways and close the full edge.
                self.halfedges[twin.index()].twin = id;
                self.n_full_edges += 1;
            }
            None => {
                // First direction over this undirected edge: register so the
                // reverse construction can find us, and record the edge.
                self.vertices[v0.index()].outgoing.insert(v1, id);
                self.edges.push(id);
            }
        }
        id
    }

    // ==================== Navigation ====================

    /// Rotate counter-clockwise within the owning triangle: return the
    /// half-edge of the same triangle originating at this half-edge's
    /// destination.
    ///
    /// Three applications return to the starting half-edge. Fails with
    /// [`MeshError::StructuralInconsistency`] if the destination is not a
    /// vertex of the owning triangle, which indicates corrupted
    /// connectivity and must never be papered over.
    pub fn ccw_around_triangle(&self, he: HalfEdgeId) -> Result<HalfEdgeId> {
        let e = self.halfedge(he);
        let tri = self.triangle(e.triangle);
        match tri.slot_of(e.v1) {
            Some(slot) => Ok(tri.halfedges[slot]),
            None => Err(MeshError::StructuralInconsistency { halfedge: he }),
        }
    }

    // ==================== Geometry ====================

    /// Compute the edge vector (from origin to destination).
    #[inline]
    pub fn edge_vector(&self, he: HalfEdgeId) -> Vector3<f64> {
        let e = self.halfedge(he);
        self.position(e.v1) - self.position(e.v0)
    }

    /// Compute the length of a half-edge.
    #[inline]
    pub fn length(&self, he: HalfEdgeId) -> f64 {
        self.edge_vector(he).norm()
    }

    /// Interior angle at this half-edge's origin, subtended by its
    /// destination and the triangle's third vertex.
    pub fn alpha_angle(&self, he: HalfEdgeId) -> Result<f64> {
        let w = self.dest(self.ccw_around_triangle(he)?);
        let e = self.halfedge(he);
        self.angle_or_err(he, e.v0, w, e.v1)
    }

    /// Interior angle at this half-edge's destination.
    pub fn beta_angle(&self, he: HalfEdgeId) -> Result<f64> {
        let w = self.dest(self.ccw_around_triangle(he)?);
        let e = self.halfedge(he);
        self.angle_or_err(he, e.v1, e.v0, w)
    }

    /// Interior angle at the triangle's third vertex.
    pub fn gamma_angle(&self, he: HalfEdgeId) -> Result<f64> {
        let w = self.dest(self.ccw_around_triangle(he)?);
        let e = self.halfedge(he);
        self.angle_or_err(he, w, e.v1, e.v0)
    }

    fn angle_or_err(&self, he: HalfEdgeId, apex: VertexId, p: VertexId, q: VertexId) -> Result<f64> {
        geom::angle_at(self.position(apex), self.position(p), self.position(q))
            .ok_or(MeshError::DegenerateAngle { halfedge: he })
    }

    // ==================== Validation ====================

    /// Check if the mesh connectivity is consistent.
    ///
    /// Verifies twin involution with mirrored endpoints, the triangle slot
    /// invariant (each half-edge stored at slot k runs from vertex k to
    /// vertex k+1 and faces the remaining vertex), and the edge-count
    /// identity `2 * n_full_edges + boundary = n_half_edges`.
    pub fn is_valid(&self) -> bool {
        for (heid, he) in self.halfedges() {
            if he.twin.is_valid() {
                let twin = self.halfedge(he.twin);
                if twin.twin != heid || twin.v0 != he.v1 || twin.v1 != he.v0 {
                    return false;
                }
            }
        }

        for tri in &self.triangles {
            for slot in 0..3 {
                let he = tri.halfedges[slot];
                if !he.is_valid() {
                    return false;
                }
                let (v1_slot, v2_slot) = SLOT_LAYOUT[slot];
                let e = self.halfedge(he);
                if e.v0 != tri.vertices[slot]
                    || e.v1 != tri.vertices[v1_slot]
                    || e.v2 != tri.vertices[v2_slot]
                {
                    return false;
                }
            }
        }

        2 * self.n_full_edges + self.boundary_halfedge_count() == self.n_half_edges()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::build_from_triangles;

    fn right_triangle() -> TriMesh {
        let mut mesh = TriMesh::new();
        let a = mesh.add_vertex(Point3::new(0.0, 0.0, 0.0));
        let b = mesh.add_vertex(Point3::new(1.0, 0.0, 0.0));
        let c = mesh.add_vertex(Point3::new(0.0, 1.0, 0.0));
        mesh.add_triangle(a, b, c).unwrap();
        mesh
    }

    #[test]
    fn test_empty_mesh() {
        let mesh = TriMesh::new();
        assert_eq!(mesh.num_vertices(), 0);
        assert_eq!(mesh.n_half_edges(), 0);
        assert_eq!(mesh.n_full_edges(), 0);
        assert!(mesh.is_valid());
    }

    #[test]
    fn test_single_triangle_counts() {
        let mesh = right_triangle();
        assert_eq!(mesh.num_triangles(), 1);
        assert_eq!(mesh.n_half_edges(), 3);
        assert_eq!(mesh.n_full_edges(), 0);
        assert_eq!(mesh.num_edges(), 3);
        assert_eq!(mesh.boundary_halfedge_count(), 3);
        assert!(mesh.is_valid());

        // All three half-edges are boundary: no twin has been built.
        for he in mesh.halfedge_ids() {
            assert!(!mesh.part_of_full_edge(he));
            assert!(mesh.twin(he).is_none());
            assert!(mesh.is_boundary_halfedge(he));
        }
    }

    #[test]
    fn test_slot_derivation() {
        let mesh = right_triangle();
        let tri = mesh.triangle(TriangleId::new(0));
        for slot in 0..3 {
            let e = mesh.halfedge(tri.halfedges[slot]);
            assert_eq!(e.v0, tri.vertices[slot]);
            assert_eq!(e.v1, tri.vertices[(slot + 1) % 3]);
            assert_eq!(e.v2, tri.vertices[(slot + 2) % 3]);
            assert_eq!(e.v0_slot as usize, slot);
            assert_eq!(e.v1_slot as usize, (slot + 1) % 3);
            assert_eq!(e.v2_slot as usize, (slot + 2) % 3);
        }
    }

    #[test]
    fn test_ccw_cycle_returns_to_start() {
        let mesh = right_triangle();
        for he in mesh.halfedge_ids() {
            let once = mesh.ccw_around_triangle(he).unwrap();
            let twice = mesh.ccw_around_triangle(once).unwrap();
            let thrice = mesh.ccw_around_triangle(twice).unwrap();
            assert_eq!(thrice, he);
            assert_ne!(once, he);
            assert_ne!(twice, once);
        }
    }

    #[test]
    fn test_ccw_origin_is_previous_dest() {
        let mesh = right_triangle();
        for he in mesh.halfedge_ids() {
            let next = mesh.ccw_around_triangle(he).unwrap();
            assert_eq!(mesh.origin(next), mesh.dest(he));
            assert_eq!(mesh.triangle_of(next), mesh.triangle_of(he));
        }
    }

    #[test]
    fn test_two_triangles_pair_shared_edge() {
        let vertices = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.5, 1.0, 0.0),
            Point3::new(0.5, -1.0, 0.0),
        ];
        // Triangles share the undirected edge (0, 1), traversed in opposite
        // directions by consistently wound neighbors.
        let faces = vec![[0, 1, 2], [1, 0, 3]];
        let mesh = build_from_triangles(&vertices, &faces).unwrap();

        assert_eq!(mesh.n_half_edges(), 6);
        assert_eq!(mesh.n_full_edges(), 1);
        assert_eq!(mesh.num_edges(), 5);
        assert_eq!(mesh.boundary_halfedge_count(), 4);
        assert!(mesh.is_valid());

        let v0 = VertexId::new(0);
        let v1 = VertexId::new(1);
        let forward = mesh.vertex(v0).half_edge_to(v1).unwrap();
        assert!(mesh.part_of_full_edge(forward));

        let back = mesh.twin(forward).unwrap();
        assert!(mesh.part_of_full_edge(back));
        assert_eq!(mesh.twin(back), Some(forward));
        assert_eq!(mesh.origin(back), v1);
        assert_eq!(mesh.dest(back), v0);
        assert_eq!(mesh.length(forward), mesh.length(back));
    }

    #[test]
    fn test_twin_involution() {
        let vertices = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.5, 1.0, 0.0),
            Point3::new(0.5, 0.5, 1.0),
        ];
        let faces = vec![[0, 2, 1], [0, 1, 3], [1, 2, 3], [2, 0, 3]];
        let mesh = build_from_triangles(&vertices, &faces).unwrap();

        for he in mesh.halfedge_ids() {
            let twin = mesh.twin(he).expect("closed mesh has no boundary");
            assert_eq!(mesh.twin(twin), Some(he));
            assert_eq!(mesh.origin(twin), mesh.dest(he));
            assert_eq!(mesh.dest(twin), mesh.origin(he));
        }
    }

    #[test]
    fn test_third_halfedge_over_paired_edge_is_rejected() {
        let mut mesh = TriMesh::new();
        let a = mesh.add_vertex(Point3::new(0.0, 0.0, 0.0));
        let b = mesh.add_vertex(Point3::new(1.0, 0.0, 0.0));
        let c = mesh.add_vertex(Point3::new(0.5, 1.0, 0.0));
        let d = mesh.add_vertex(Point3::new(0.5, -1.0, 0.0));
        let e = mesh.add_vertex(Point3::new(0.5, 0.5, 1.0));
        mesh.add_triangle(a, b, c).unwrap();
        mesh.add_triangle(b, a, d).unwrap();

        // A third triangle over the already-paired edge (a, b).
        let err = mesh.add_triangle(b, a, e).unwrap_err();
        assert_eq!(err, MeshError::NonManifoldEdge { v0: b, v1: a });

        // The rejected triangle left nothing behind and the existing twin
        // link is intact.
        assert_eq!(mesh.num_triangles(), 2);
        assert_eq!(mesh.n_half_edges(), 6);
        assert_eq!(mesh.n_full_edges(), 1);
        let forward = mesh.vertex(a).half_edge_to(b).unwrap();
        let back = mesh.twin(forward).unwrap();
        assert_eq!(mesh.twin(back), Some(forward));
        assert!(mesh.is_valid());
    }

    #[test]
    fn test_duplicate_directed_edge_is_rejected() {
        let mut mesh = TriMesh::new();
        let a = mesh.add_vertex(Point3::new(0.0, 0.0, 0.0));
        let b = mesh.add_vertex(Point3::new(1.0, 0.0, 0.0));
        let c = mesh.add_vertex(Point3::new(0.5, 1.0, 0.0));
        let d = mesh.add_vertex(Point3::new(0.5, -1.0, 0.0));
        mesh.add_triangle(a, b, c).unwrap();

        // Same winding over (a, b): the directed edge a→b already exists.
        let err = mesh.add_triangle(a, b, d).unwrap_err();
        assert_eq!(err, MeshError::NonManifoldEdge { v0: a, v1: b });
        assert_eq!(mesh.num_triangles(), 1);
        assert_eq!(mesh.n_half_edges(), 3);
    }

    #[test]
    fn test_add_triangle_rejects_bad_input() {
        let mut mesh = TriMesh::new();
        let a = mesh.add_vertex(Point3::new(0.0, 0.0, 0.0));
        let b = mesh.add_vertex(Point3::new(1.0, 0.0, 0.0));

        let missing = VertexId::new(9);
        assert!(matches!(
            mesh.add_triangle(a, b, missing),
            Err(MeshError::InvalidVertexIndex { vertex: 9, .. })
        ));
        assert!(matches!(
            mesh.add_triangle(a, b, a),
            Err(MeshError::DegenerateTriangle { .. })
        ));
    }

    #[test]
    fn test_edge_vector_and_length() {
        let mesh = right_triangle();
        let tri = mesh.triangle(TriangleId::new(0));
        let e0 = tri.halfedges[0];
        assert_eq!(mesh.edge_vector(e0), Vector3::new(1.0, 0.0, 0.0));
        assert_eq!(mesh.length(e0), 1.0);

        // Hypotenuse runs from (1,0,0) to (0,1,0).
        let e1 = tri.halfedges[1];
        assert!((mesh.length(e1) - 2.0_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_counting_identity_with_boundary() {
        let vertices = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
            Point3::new(0.5, 1.0, 0.0),
            Point3::new(1.5, 1.0, 0.0),
        ];
        // A small fan: three triangles, two interior edges.
        let faces = vec![[0, 1, 3], [1, 4, 3], [1, 2, 4]];
        let mesh = build_from_triangles(&vertices, &faces).unwrap();

        assert_eq!(mesh.n_half_edges(), 9);
        assert_eq!(mesh.n_full_edges(), 2);
        assert_eq!(
            2 * mesh.n_full_edges() + mesh.boundary_halfedge_count(),
            mesh.n_half_edges()
        );
        assert!(mesh.is_valid());
    }

    #[test]
    fn test_vertex_registry_lookup() {
        let mesh = right_triangle();
        let a = VertexId::new(0);
        let b = VertexId::new(1);
        let ab = mesh.vertex(a).half_edge_to(b).unwrap();
        assert_eq!(mesh.origin(ab), a);
        assert_eq!(mesh.dest(ab), b);
        // No triangle traverses b→a.
        assert!(mesh.vertex(b).half_edge_to(a).is_none());
    }
}
