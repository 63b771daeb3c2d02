//! Torus primitive SDF
//!
//! Torus lies in the local XZ plane, axis along Y.

use glam::{DVec2, DVec3};

/// Signed distance to a torus centered at origin
///
/// # Arguments
/// * `point` - Point to evaluate (shape-local frame)
/// * `r1` - Major radius (center to tube center)
/// * `r2` - Minor radius (tube radius)
#[inline(always)]
pub fn sdf_torus(point: DVec3, r1: f64, r2: f64) -> f64 {
    let q = DVec2::new(DVec2::new(point.x, point.z).length() - r1, point.y);
    q.length() - r2
}
