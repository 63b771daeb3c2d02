//! Kind-specific shape parameters
//!
//! One validated parameter struct per SDF, wrapped in the [`ShapeKind`] sum
//! type. Distances here take points already in the shape's local frame.

use super::{check_finite_vec, check_non_negative, check_positive, ShapeError};
use crate::primitives::{
    sdf_box3d, sdf_cone, sdf_octahedron, sdf_plane, sdf_sphere, sdf_torus, ConeForm, ShapeType,
};
use glam::DVec3;

/// Infinite plane with unit normal
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    normal: DVec3,
    displacement: f64,
}

impl Plane {
    /// Create a plane; `normal` is normalized here and must be non-zero
    pub fn new(normal: DVec3, displacement: f64) -> Result<Self, ShapeError> {
        let normal = check_finite_vec("normal", normal)?;
        let displacement = super::check_finite("displacement", displacement)?;
        let normal = normal.try_normalize().ok_or(ShapeError::ZeroNormal)?;
        Ok(Plane {
            normal,
            displacement,
        })
    }

    /// Unit normal
    pub fn normal(&self) -> DVec3 {
        self.normal
    }

    /// Offset along the normal
    pub fn displacement(&self) -> f64 {
        self.displacement
    }
}

/// Axis-aligned box given by half extents
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Box3d {
    extents: DVec3,
}

impl Box3d {
    /// Create a box; every extent must be positive
    pub fn new(extents: DVec3) -> Result<Self, ShapeError> {
        check_positive("extents.x", extents.x)?;
        check_positive("extents.y", extents.y)?;
        check_positive("extents.z", extents.z)?;
        Ok(Box3d { extents })
    }

    /// Half extents
    pub fn extents(&self) -> DVec3 {
        self.extents
    }
}

/// Sphere
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    radius: f64,
}

impl Sphere {
    /// Create a sphere with positive radius
    pub fn new(radius: f64) -> Result<Self, ShapeError> {
        Ok(Sphere {
            radius: check_positive("radius", radius)?,
        })
    }

    /// Radius
    pub fn radius(&self) -> f64 {
        self.radius
    }
}

/// Torus around the local Y axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Torus {
    r1: f64,
    r2: f64,
}

impl Torus {
    /// Create a torus with major radius `r1` and tube radius `r2`
    pub fn new(r1: f64, r2: f64) -> Result<Self, ShapeError> {
        Ok(Torus {
            r1: check_non_negative("r1", r1)?,
            r2: check_positive("r2", r2)?,
        })
    }

    /// Major radius
    pub fn r1(&self) -> f64 {
        self.r1
    }

    /// Tube radius
    pub fn r2(&self) -> f64 {
        self.r2
    }
}

/// Regular octahedron
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Octahedron {
    s: f64,
}

impl Octahedron {
    /// Create an octahedron with vertex distance `s`
    pub fn new(s: f64) -> Result<Self, ShapeError> {
        Ok(Octahedron {
            s: check_positive("s", s)?,
        })
    }

    /// Distance from center to each vertex
    pub fn s(&self) -> f64 {
        self.s
    }
}

/// Capped cone with cached formula constants
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cone {
    form: ConeForm,
}

impl Cone {
    /// Create a cone from bottom radius, top radius and half height
    pub fn new(r1: f64, r2: f64, h: f64) -> Result<Self, ShapeError> {
        check_non_negative("r1", r1)?;
        check_non_negative("r2", r2)?;
        check_positive("h", h)?;
        Ok(Cone {
            form: ConeForm::new(r1, r2, h),
        })
    }

    /// Form and derived constants
    pub fn form(&self) -> &ConeForm {
        &self.form
    }
}

/// Kind-specific parameters of a shape
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapeKind {
    /// Infinite plane
    Plane(Plane),
    /// Box
    Box(Box3d),
    /// Sphere
    Sphere(Sphere),
    /// Torus
    Torus(Torus),
    /// Octahedron
    Octahedron(Octahedron),
    /// Capped cone
    Cone(Cone),
}

impl ShapeKind {
    /// Type tag
    #[inline]
    pub fn shape_type(&self) -> ShapeType {
        match self {
            ShapeKind::Plane(_) => ShapeType::Plane,
            ShapeKind::Box(_) => ShapeType::Box,
            ShapeKind::Sphere(_) => ShapeType::Sphere,
            ShapeKind::Torus(_) => ShapeType::Torus,
            ShapeKind::Octahedron(_) => ShapeType::Octahedron,
            ShapeKind::Cone(_) => ShapeType::Cone,
        }
    }

    /// Signed distance from a point in the local frame
    #[inline]
    pub fn distance(&self, local: DVec3) -> f64 {
        match self {
            ShapeKind::Plane(p) => sdf_plane(local, p.normal, p.displacement),
            ShapeKind::Box(b) => sdf_box3d(local, b.extents),
            ShapeKind::Sphere(s) => sdf_sphere(local, s.radius),
            ShapeKind::Torus(t) => sdf_torus(local, t.r1, t.r2),
            ShapeKind::Octahedron(o) => sdf_octahedron(local, o.s),
            ShapeKind::Cone(c) => sdf_cone(local, &c.form),
        }
    }
}

macro_rules! impl_from_kind {
    ($($ty:ident => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for ShapeKind {
                fn from(v: $ty) -> Self {
                    ShapeKind::$variant(v)
                }
            }
        )*
    };
}

impl_from_kind!(
    Plane => Plane,
    Box3d => Box,
    Sphere => Sphere,
    Torus => Torus,
    Octahedron => Octahedron,
    Cone => Cone,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plane_normal_is_normalized() {
        let p = Plane::new(DVec3::new(0.0, 3.0, 0.0), 1.0).unwrap();
        assert_eq!(p.normal(), DVec3::Y);
        assert_eq!(Plane::new(DVec3::ZERO, 1.0), Err(ShapeError::ZeroNormal));
    }

    #[test]
    fn test_degenerate_sizes_rejected() {
        assert!(matches!(
            Sphere::new(0.0),
            Err(ShapeError::NotPositive { field: "radius", .. })
        ));
        assert!(Box3d::new(DVec3::new(1.0, -1.0, 1.0)).is_err());
        assert!(Torus::new(1.0, 0.0).is_err());
        assert!(Octahedron::new(f64::INFINITY).is_err());
        assert!(Cone::new(1.0, 0.5, 0.0).is_err());
        assert!(Cone::new(0.0, 0.0, 1.0).is_ok());
    }

    #[test]
    fn test_sign_correctness() {
        let kinds: [ShapeKind; 5] = [
            Box3d::new(DVec3::new(1.0, 2.0, 0.5)).unwrap().into(),
            Sphere::new(1.5).unwrap().into(),
            Torus::new(1.0, 0.5).unwrap().into(),
            Octahedron::new(1.0).unwrap().into(),
            Cone::new(1.0, 0.5, 1.0).unwrap().into(),
        ];
        for kind in kinds {
            let far = DVec3::new(1000.0, 0.0, 0.0);
            let d = kind.distance(far);
            assert!(d > 990.0 && d < 1000.0, "{:?}: {}", kind.shape_type(), d);
        }
        // centers are strictly interior for the solid kinds
        for kind in [kinds[0], kinds[1], kinds[3], kinds[4]] {
            assert!(kind.distance(DVec3::ZERO) < 0.0, "{:?}", kind.shape_type());
        }
        // the torus tube center is interior
        assert!(kinds[2].distance(DVec3::new(1.0, 0.0, 0.0)) < 0.0);
    }
}
