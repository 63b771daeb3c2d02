//! Shape catalog
//!
//! A [`Shape`] is a [`Pose`] (where it sits in the world), a [`Material`]
//! (how it is shaded) and a [`ShapeKind`] (which closed-form SDF it uses).
//!
//! All parameters are validated once, at construction. Shapes are immutable
//! afterwards: the scene copies their numbers into the SIMD batches, and the
//! two copies must never drift apart.

mod kind;

pub use kind::{Box3d, Cone, Octahedron, Plane, ShapeKind, Sphere, Torus};

use crate::primitives::ShapeType;
use crate::types::{euler_degrees_to_matrix, to_row_major, Color, VectorExt, IDENTITY_ROTATION};
use glam::DVec3;
use std::fmt;
use thiserror::Error;

/// Errors raised by the validated shape constructors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShapeError {
    /// A parameter is NaN or infinite
    #[error("{field} must be finite")]
    NonFinite {
        /// Parameter name
        field: &'static str,
    },

    /// A size parameter that must be strictly positive is not
    #[error("{field} must be positive, got {value}")]
    NotPositive {
        /// Parameter name
        field: &'static str,
        /// Rejected value
        value: f64,
    },

    /// A size parameter that must be non-negative is negative
    #[error("{field} must not be negative, got {value}")]
    Negative {
        /// Parameter name
        field: &'static str,
        /// Rejected value
        value: f64,
    },

    /// Plane normal cannot be normalized
    #[error("plane normal must be non-zero")]
    ZeroNormal,

    /// Reflection coefficient outside [0, 1]
    #[error("reflection must be in [0, 1], got {0}")]
    ReflectionOutOfRange(f64),
}

pub(crate) fn check_finite(field: &'static str, value: f64) -> Result<f64, ShapeError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ShapeError::NonFinite { field })
    }
}

pub(crate) fn check_finite_vec(field: &'static str, v: DVec3) -> Result<DVec3, ShapeError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(ShapeError::NonFinite { field })
    }
}

pub(crate) fn check_positive(field: &'static str, value: f64) -> Result<f64, ShapeError> {
    check_finite(field, value)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(ShapeError::NotPositive { field, value })
    }
}

pub(crate) fn check_non_negative(field: &'static str, value: f64) -> Result<f64, ShapeError> {
    check_finite(field, value)?;
    if value >= 0.0 {
        Ok(value)
    } else {
        Err(ShapeError::Negative { field, value })
    }
}

/// Stable handle of a shape inside a [`crate::scene::Scene`]
///
/// Ids are handed out in insertion order and index the scene's flat shape list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShapeId(pub(crate) u32);

impl ShapeId {
    /// Handle for position `index` of a flat shape list
    #[inline]
    pub fn from_index(index: usize) -> Self {
        ShapeId(index as u32)
    }

    /// Position in the scene's flat shape list
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Position and orientation of a shape
///
/// The inverse rotation is derived once from the Euler angles so that
/// [`Pose::translate_rotate`] maps world points into the shape's local,
/// axis-aligned frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    position: DVec3,
    rotation: DVec3,
    inverse_rotation: [f64; 9],
    is_rotated: bool,
}

impl Pose {
    /// Create a pose from a position and Euler angles in degrees
    pub fn new(position: DVec3, rotation: DVec3) -> Result<Self, ShapeError> {
        let position = check_finite_vec("position", position)?;
        let rotation = check_finite_vec("rotation", rotation)?;

        let is_rotated = rotation != DVec3::ZERO;
        let inverse_rotation = if is_rotated {
            let forward = euler_degrees_to_matrix(rotation);
            // rotation matrices are orthonormal: inverse == transpose
            to_row_major(forward.transpose())
        } else {
            IDENTITY_ROTATION
        };

        Ok(Pose {
            position,
            rotation,
            inverse_rotation,
            is_rotated,
        })
    }

    /// Unrotated pose at `position`
    pub fn at(position: DVec3) -> Result<Self, ShapeError> {
        Self::new(position, DVec3::ZERO)
    }

    /// World-space position
    #[inline]
    pub fn position(&self) -> DVec3 {
        self.position
    }

    /// Euler angles in degrees
    #[inline]
    pub fn rotation(&self) -> DVec3 {
        self.rotation
    }

    /// Row-major inverse rotation matrix
    #[inline]
    pub fn inverse_rotation(&self) -> &[f64; 9] {
        &self.inverse_rotation
    }

    /// True if any rotation component is non-zero
    #[inline]
    pub fn is_rotated(&self) -> bool {
        self.is_rotated
    }

    /// Map a world-space point into the shape's local frame
    #[inline(always)]
    pub fn translate_rotate(&self, point: DVec3) -> DVec3 {
        let local = point - self.position;
        if self.is_rotated {
            local.rotate(&self.inverse_rotation)
        } else {
            local
        }
    }
}

/// Surface shading parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Base color
    pub color: Color,
    /// Mirror reflection coefficient in [0, 1]
    pub reflection: f64,
    /// Specular exponent; 0 disables the highlight
    pub shininess: f64,
}

impl Material {
    /// Create a validated material
    pub fn new(color: Color, reflection: f64, shininess: f64) -> Result<Self, ShapeError> {
        check_finite("color", color.r + color.g + color.b)?;
        check_finite("reflection", reflection)?;
        if !(0.0..=1.0).contains(&reflection) {
            return Err(ShapeError::ReflectionOutOfRange(reflection));
        }
        check_non_negative("shininess", shininess)?;
        Ok(Material {
            color,
            reflection,
            shininess,
        })
    }

    /// Matte material of a single color
    pub fn matte(color: Color) -> Self {
        Material {
            color,
            reflection: 0.0,
            shininess: 0.0,
        }
    }
}

impl Default for Material {
    fn default() -> Self {
        Material::matte(Color::WHITE)
    }
}

/// A placed, shaded implicit surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shape {
    /// Position and orientation
    pub pose: Pose,
    /// Shading parameters
    pub material: Material,
    /// Kind-specific SDF parameters
    pub kind: ShapeKind,
}

impl Shape {
    /// Assemble a shape from already validated parts
    pub fn new(pose: Pose, material: Material, kind: impl Into<ShapeKind>) -> Self {
        Shape {
            pose,
            material,
            kind: kind.into(),
        }
    }

    /// Which SDF this shape evaluates
    #[inline]
    pub fn shape_type(&self) -> ShapeType {
        self.kind.shape_type()
    }

    /// Signed distance from a world-space point
    #[inline]
    pub fn distance(&self, point: DVec3) -> f64 {
        self.kind.distance(self.pose.translate_rotate(point))
    }
}
