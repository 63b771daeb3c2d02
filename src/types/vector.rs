//! Vector helpers on top of `glam::DVec3`
//!
//! Rotation matrices are stored row-major as 9 scalars because that is the
//! layout the batch wrappers keep in their parallel arrays.

use glam::{DMat3, DVec3};

/// Row-major identity matrix
pub const IDENTITY_ROTATION: [f64; 9] = [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0];

/// Axis with the largest magnitude component of a vector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DominantAxis {
    /// |x| dominates
    X,
    /// |y| dominates
    Y,
    /// |z| dominates
    Z,
}

impl DominantAxis {
    /// The two unit axes orthogonal to the dominant one
    ///
    /// Shadow jitter samples are spread along these.
    #[inline]
    pub fn orthogonal_axes(self) -> (DVec3, DVec3) {
        match self {
            DominantAxis::X => (DVec3::Y, DVec3::Z),
            DominantAxis::Y => (DVec3::X, DVec3::Z),
            DominantAxis::Z => (DVec3::X, DVec3::Y),
        }
    }
}

/// Extra operations on 3D vectors
pub trait VectorExt {
    /// Apply a row-major 3x3 matrix: `r_i = sum_j m[3i + j] * v_j`
    fn rotate(self, matrix: &[f64; 9]) -> Self;

    /// Which single axis has the largest magnitude
    ///
    /// Ties are resolved by checking `x` first, then `y`; otherwise `z`.
    fn shadow_axes(self) -> DominantAxis;
}

impl VectorExt for DVec3 {
    #[inline(always)]
    fn rotate(self, m: &[f64; 9]) -> Self {
        DVec3::new(
            m[0] * self.x + m[1] * self.y + m[2] * self.z,
            m[3] * self.x + m[4] * self.y + m[5] * self.z,
            m[6] * self.x + m[7] * self.y + m[8] * self.z,
        )
    }

    #[inline]
    fn shadow_axes(self) -> DominantAxis {
        let a = self.abs();
        if a.x >= a.y && a.x >= a.z {
            DominantAxis::X
        } else if a.y >= a.z {
            DominantAxis::Y
        } else {
            DominantAxis::Z
        }
    }
}

/// Forward rotation matrix for Euler angles given in degrees
///
/// Applied as X first, then Y, then Z (`R = Rz * Ry * Rx`).
pub(crate) fn euler_degrees_to_matrix(rotation: DVec3) -> DMat3 {
    let r = rotation * (std::f64::consts::PI / 180.0);
    DMat3::from_rotation_z(r.z) * DMat3::from_rotation_y(r.y) * DMat3::from_rotation_x(r.x)
}

/// Flatten a glam (column-major) matrix into row-major order
#[inline]
pub(crate) fn to_row_major(m: DMat3) -> [f64; 9] {
    m.transpose().to_cols_array()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotate_identity() {
        let v = DVec3::new(1.5, -2.0, 3.25);
        assert_eq!(v.rotate(&IDENTITY_ROTATION), v);
    }

    #[test]
    fn test_rotate_row_major() {
        let m = [0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0];
        let v = DVec3::new(1.0, 2.0, 3.0);
        assert_eq!(v.rotate(&m), DVec3::new(2.0, 3.0, 1.0));
    }

    #[test]
    fn test_row_major_matches_glam() {
        let m = euler_degrees_to_matrix(DVec3::new(10.0, -35.0, 80.0));
        let v = DVec3::new(0.3, -1.2, 2.0);
        let expected = m * v;
        let got = v.rotate(&to_row_major(m));
        assert!((expected - got).length() < 1e-12);
    }

    #[test]
    fn test_inverse_rotation_round_trip() {
        let forward = euler_degrees_to_matrix(DVec3::new(45.0, 30.0, -60.0));
        let inverse = to_row_major(forward.transpose());
        let v = DVec3::new(1.0, 2.0, 3.0);
        let back = (forward * v).rotate(&inverse);
        assert!((back - v).length() < 1e-12);
    }

    #[test]
    fn test_shadow_axes() {
        assert_eq!(DVec3::new(3.0, 1.0, -2.0).shadow_axes(), DominantAxis::X);
        assert_eq!(DVec3::new(0.1, -5.0, 2.0).shadow_axes(), DominantAxis::Y);
        assert_eq!(DVec3::new(0.1, 0.2, -0.3).shadow_axes(), DominantAxis::Z);
        // ties go to x, then y
        assert_eq!(DVec3::new(1.0, 1.0, 1.0).shadow_axes(), DominantAxis::X);
        assert_eq!(DVec3::new(0.0, 2.0, -2.0).shadow_axes(), DominantAxis::Y);
    }

    #[test]
    fn test_normalize_idempotent() {
        for v in [
            DVec3::new(3.0, 4.0, 0.0),
            DVec3::new(-0.001, 0.02, 7.0),
            DVec3::new(1e3, -2e3, 5e2),
        ] {
            let n = v.normalize();
            let nn = n.normalize();
            assert!((n - nn).length() < 1e-15, "{:?} vs {:?}", n, nn);
        }
    }
}
