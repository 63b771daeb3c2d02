//! Box primitive SDF
//!
//! Canonical exact box distance: exterior length plus interior correction.
//!
//! # Optimizations
//! - **Branchless Logic**: max/min combine interior and exterior distance.
//! - **Forced Inlining**: Zero call overhead.

use glam::DVec3;

/// Signed distance to an axis-aligned box centered at origin
///
/// # Arguments
/// * `point` - Point to evaluate (shape-local frame)
/// * `extents` - Half-size along each axis
///
/// # Returns
/// Signed distance (negative inside, positive outside)
#[inline(always)]
pub fn sdf_box3d(point: DVec3, extents: DVec3) -> f64 {
    let q = point.abs() - extents;
    q.max(DVec3::ZERO).length() + q.x.max(q.y.max(q.z)).min(0.0)
}
