//! Capped cone SDF
//!
//! Cone along the local Y axis between y = -h (radius r1) and y = +h
//! (radius r2). The constants `k1`, `k2` and `1 / dot(k2, k2)` only depend on
//! the form, so they are computed once in [`ConeForm::new`].

use glam::{DVec2, DVec3};

/// Cone form `(r1, r2, h)` with derived constants
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConeForm {
    /// Radius at y = -h
    pub r1: f64,
    /// Radius at y = +h
    pub r2: f64,
    /// Half height
    pub h: f64,
    /// `(r2, h)`
    pub k1: DVec2,
    /// `(r2 - r1, 2h)`
    pub k2: DVec2,
    /// `1 / dot(k2, k2)`
    pub inv_k2_dot: f64,
}

impl ConeForm {
    /// Derive the cached constants for a form
    pub fn new(r1: f64, r2: f64, h: f64) -> Self {
        let k1 = DVec2::new(r2, h);
        let k2 = DVec2::new(r2 - r1, 2.0 * h);
        ConeForm {
            r1,
            r2,
            h,
            k1,
            k2,
            inv_k2_dot: 1.0 / k2.dot(k2),
        }
    }
}

/// Exact signed distance to a capped cone
#[inline(always)]
pub fn sdf_cone(point: DVec3, form: &ConeForm) -> f64 {
    let q = DVec2::new(DVec2::new(point.x, point.z).length(), point.y);

    let cap_r = if q.y < 0.0 { form.r1 } else { form.r2 };
    let ca = DVec2::new(q.x - q.x.min(cap_r), q.y.abs() - form.h);

    let t = ((form.k1 - q).dot(form.k2) * form.inv_k2_dot).clamp(0.0, 1.0);
    let cb = q - form.k1 + form.k2 * t;

    let s = if cb.x < 0.0 && ca.y < 0.0 { -1.0 } else { 1.0 };
    s * ca.dot(ca).min(cb.dot(cb)).sqrt()
}
