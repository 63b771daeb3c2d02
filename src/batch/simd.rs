//! SIMD vector type for 4-wide evaluation
//!
//! One query point is splatted across the lanes and compared against four
//! shapes at once; each lane holds a different shape's local coordinates.

use glam::DVec3;
use wide::f64x4;

/// Four 3D vectors packed for SIMD processing
///
/// Structure-of-Arrays layout:
/// - x: [x0, x1, x2, x3]
/// - y: [y0, y1, y2, y3]
/// - z: [z0, z1, z2, z3]
#[derive(Clone, Copy, Debug)]
pub struct Vec3x4 {
    /// X components (4-wide)
    pub x: f64x4,
    /// Y components (4-wide)
    pub y: f64x4,
    /// Z components (4-wide)
    pub z: f64x4,
}

impl Vec3x4 {
    /// Create from per-component registers
    #[inline(always)]
    pub fn new(x: f64x4, y: f64x4, z: f64x4) -> Self {
        Vec3x4 { x, y, z }
    }

    /// Create with all lanes set to the same vector
    #[inline(always)]
    pub fn splat(v: DVec3) -> Self {
        Vec3x4 {
            x: f64x4::splat(v.x),
            y: f64x4::splat(v.y),
            z: f64x4::splat(v.z),
        }
    }

    /// Dot product with another Vec3x4
    #[inline(always)]
    pub fn dot(self, other: Self) -> f64x4 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Length of all 4 vectors
    #[inline(always)]
    pub fn length(self) -> f64x4 {
        self.dot(self).sqrt()
    }

    /// Component-wise absolute value
    #[inline(always)]
    pub fn abs(self) -> Self {
        Vec3x4 {
            x: self.x.abs(),
            y: self.y.abs(),
            z: self.z.abs(),
        }
    }

    /// Component-wise maximum with zero
    #[inline(always)]
    pub fn max_zero(self) -> Self {
        Vec3x4 {
            x: self.x.max(f64x4::ZERO),
            y: self.y.max(f64x4::ZERO),
            z: self.z.max(f64x4::ZERO),
        }
    }

    /// Maximum component of each vector
    #[inline(always)]
    pub fn max_component(self) -> f64x4 {
        self.x.max(self.y.max(self.z))
    }

    /// Apply per-lane row-major 3x3 matrices
    #[inline(always)]
    pub fn rotate(self, m: &[f64x4; 9]) -> Self {
        Vec3x4 {
            x: m[0] * self.x + m[1] * self.y + m[2] * self.z,
            y: m[3] * self.x + m[4] * self.y + m[5] * self.z,
            z: m[6] * self.x + m[7] * self.y + m[8] * self.z,
        }
    }

    /// Extract lane `i` as a scalar vector
    #[inline]
    pub fn lane(self, i: usize) -> DVec3 {
        DVec3::new(
            self.x.to_array()[i],
            self.y.to_array()[i],
            self.z.to_array()[i],
        )
    }
}

impl std::ops::Sub for Vec3x4 {
    type Output = Self;
    #[inline(always)]
    fn sub(self, other: Self) -> Self {
        Vec3x4 {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}
