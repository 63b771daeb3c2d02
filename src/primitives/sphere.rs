//! Sphere primitive SDF
//!
//! # Optimizations
//! - **Forced Inlining**: Zero call overhead.

use glam::DVec3;

/// Signed distance to a sphere centered at origin
///
/// # Arguments
/// * `point` - Point to evaluate (shape-local frame)
/// * `radius` - Sphere radius
///
/// # Returns
/// Signed distance (negative inside, positive outside)
#[inline(always)]
pub fn sdf_sphere(point: DVec3, radius: f64) -> f64 {
    point.length() - radius
}
