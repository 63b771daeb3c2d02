//! Core value types for sphere-sdf
//!
//! Double-precision vectors come from `glam` (`DVec3` / `DVec2`); this module
//! adds the few operations the renderer needs on top of them, plus the RGB
//! [`Color`] type and the [`Ray`] value passed between marcher and shader.

mod color;
mod vector;

pub use color::Color;
pub use vector::{DominantAxis, VectorExt, IDENTITY_ROTATION};
pub(crate) use vector::{euler_degrees_to_matrix, to_row_major};

use glam::DVec3;

/// Ray with origin and unit direction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Ray origin point
    pub origin: DVec3,
    /// Ray direction (normalized)
    pub direction: DVec3,
}

impl Ray {
    /// Create a new ray
    ///
    /// `direction` must be non-zero; it is normalized here.
    pub fn new(origin: DVec3, direction: DVec3) -> Self {
        Ray {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Get point along ray at distance t
    #[inline(always)]
    pub fn at(&self, t: f64) -> DVec3 {
        self.origin + self.direction * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ray_normalizes_direction() {
        let ray = Ray::new(DVec3::ZERO, DVec3::new(0.0, 0.0, 4.0));
        assert_eq!(ray.direction, DVec3::Z);
        assert_eq!(ray.at(2.5), DVec3::new(0.0, 0.0, 2.5));
    }
}
