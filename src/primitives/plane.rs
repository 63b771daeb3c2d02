//! Plane primitive SDF
//!
//! Infinite plane through `displacement * normal`. The distance is unsigned:
//! both half-spaces are "outside".

use glam::DVec3;

/// Distance to an infinite plane
///
/// # Arguments
/// * `point` - Point to evaluate (shape-local frame)
/// * `normal` - Plane normal (must be unit length)
/// * `displacement` - Offset of the plane from the origin along `normal`
#[inline(always)]
pub fn sdf_plane(point: DVec3, normal: DVec3, displacement: f64) -> f64 {
    (point.dot(normal) - displacement).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plane_horizontal() {
        let n = DVec3::Y;
        assert_eq!(sdf_plane(DVec3::new(0.0, 1.0, 0.0), n, 0.0), 1.0);
        assert_eq!(sdf_plane(DVec3::new(5.0, 0.0, -3.0), n, 0.0), 0.0);
        // below the plane is still a positive distance
        assert_eq!(sdf_plane(DVec3::new(0.0, -2.0, 0.0), n, 0.0), 2.0);
    }

    #[test]
    fn test_plane_displacement() {
        let n = DVec3::Y;
        assert_eq!(sdf_plane(DVec3::new(0.0, -4.0, 0.0), n, -4.0), 0.0);
        assert_eq!(sdf_plane(DVec3::ZERO, n, -4.0), 4.0);
    }

    #[test]
    fn test_plane_diagonal() {
        let n = DVec3::new(1.0, 1.0, 0.0).normalize();
        let d = sdf_plane(DVec3::new(1.0, 1.0, 0.0), n, 0.0);
        assert!((d - 2.0_f64.sqrt()).abs() < 1e-12);
    }
}
