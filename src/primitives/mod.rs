//! Primitive SDF shapes
//!
//! Scalar closed-form distance functions, evaluated in the shape's local
//! (translated and inverse-rotated) frame. The batch kernels in
//! [`crate::batch`] reproduce exactly these formulas four lanes at a time.
//!
//! # Optimizations
//! - **Enum Dispatch**: [`ShapeType`] is a `#[repr(u8)]` tag, no string matching
//!   after scene loading.

mod box3d;
mod cone;
mod octahedron;
mod plane;
mod sphere;
mod torus;

pub use box3d::sdf_box3d;
pub use cone::{sdf_cone, ConeForm};
pub use octahedron::{sdf_octahedron, INV_SQRT_3};
pub use plane::sdf_plane;
pub use sphere::sdf_sphere;
pub use torus::sdf_torus;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Primitive type identifier for fast dispatch
///
/// Declaration order is the order in which the nearest-distance resolver
/// walks the batch wrappers, which decides ties for the owning shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum ShapeType {
    /// Axis-aligned box with extents
    Box = 0,
    /// Capped cone
    Cone = 1,
    /// Regular octahedron
    Octahedron = 2,
    /// Infinite plane
    Plane = 3,
    /// Sphere
    Sphere = 4,
    /// Torus
    Torus = 5,
}

impl ShapeType {
    /// All types in resolver order
    pub const ALL: [ShapeType; 6] = [
        ShapeType::Box,
        ShapeType::Cone,
        ShapeType::Octahedron,
        ShapeType::Plane,
        ShapeType::Sphere,
        ShapeType::Torus,
    ];

    /// Parse the `kind` string of a scene description
    ///
    /// Returns `None` for kinds the renderer does not support.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "plane" => Some(ShapeType::Plane),
            "box" => Some(ShapeType::Box),
            "cone" => Some(ShapeType::Cone),
            "octahedron" => Some(ShapeType::Octahedron),
            "sphere" => Some(ShapeType::Sphere),
            "torus" => Some(ShapeType::Torus),
            _ => None,
        }
    }

    /// Name used in scene descriptions
    pub fn name(self) -> &'static str {
        match self {
            ShapeType::Plane => "plane",
            ShapeType::Box => "box",
            ShapeType::Cone => "cone",
            ShapeType::Octahedron => "octahedron",
            ShapeType::Sphere => "sphere",
            ShapeType::Torus => "torus",
        }
    }
}

impl fmt::Display for ShapeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_type_names_round_trip() {
        for t in ShapeType::ALL {
            assert_eq!(ShapeType::from_name(t.name()), Some(t));
        }
        assert_eq!(ShapeType::from_name("capsule"), None);
    }

    #[test]
    fn test_resolver_order() {
        let mut sorted = ShapeType::ALL;
        sorted.sort();
        assert_eq!(sorted, ShapeType::ALL);
        assert_eq!(ShapeType::ALL[0], ShapeType::Box);
        assert_eq!(ShapeType::ALL[5], ShapeType::Torus);
    }
}
