//! Angle computations over mesh geometry.
//!
//! The half-edge angle queries delegate to [`angle_at`], the
//! angle-between-three-points primitive. Degenerate configurations (a
//! zero-length ray or a collinear triangle) are reported as `None` rather
//! than letting NaN leak into downstream numerics.

use rayon::prelude::*;

use nalgebra::Point3;

use super::halfedge::TriMesh;
use crate::error::Result;

/// The angle at `apex` formed by the rays toward `p` and `q`, in radians.
///
/// Returns `None` when the three points are collinear or either ray has
/// zero length, in which case the angle is undefined.
pub fn angle_at(apex: &Point3<f64>, p: &Point3<f64>, q: &Point3<f64>) -> Option<f64> {
    let u = p - apex;
    let v = q - apex;
    if u.cross(&v).norm_squared() == 0.0 {
        return None;
    }
    // Rounding can push the cosine marginally outside [-1, 1].
    let cos = (u.dot(&v) / (u.norm() * v.norm())).clamp(-1.0, 1.0);
    let angle = cos.acos();
    angle.is_finite().then_some(angle)
}

/// Compute the three interior angles of every triangle in the mesh.
///
/// For triangle t the result holds `[alpha, beta, gamma]` of its slot-0
/// half-edge: the angles at vertex slots 0, 1, and 2 respectively. The mesh
/// is only read, so triangles are processed in parallel; any degenerate
/// triangle aborts the sweep with its error.
pub fn interior_angles(mesh: &TriMesh) -> Result<Vec<[f64; 3]>> {
    mesh.triangle_ids()
        .collect::<Vec<_>>()
        .into_par_iter()
        .map(|t| {
            let he = mesh.triangle(t).halfedges[0];
            Ok([
                mesh.alpha_angle(he)?,
                mesh.beta_angle(he)?,
                mesh.gamma_angle(he)?,
            ])
        })
        .collect()
}
