//! Capped cone batch
//!
//! Stores `r1`, `r2`, `h` and the cached `k2` / `1 / dot(k2, k2)` per slot;
//! `k1 = (r2, h)` is read back from the `r2` and `h` lanes.

use super::lanes::{Lanes, PoseLanes};
use super::{BatchFull, ShapeBatch};
use crate::primitives::ShapeType;
use crate::shapes::{Cone, Pose, ShapeId};
use glam::DVec3;
use wide::{f64x4, CmpLt};

/// Struct-of-arrays storage for cones
///
/// Padding slots hold the form (1, 1, 1) so the cached reciprocal stays
/// finite.
#[derive(Debug, Clone)]
pub struct ConeBatch {
    pose: PoseLanes,
    r1: Lanes,
    r2: Lanes,
    h: Lanes,
    k2x: Lanes,
    k2y: Lanes,
    inv_k2_dot: Lanes,
}

impl ConeBatch {
    /// Empty batch
    pub fn new() -> Self {
        ConeBatch {
            pose: PoseLanes::new(),
            r1: Lanes::splat(1.0),
            r2: Lanes::splat(1.0),
            h: Lanes::splat(1.0),
            k2x: Lanes::splat(0.0),
            k2y: Lanes::splat(2.0),
            inv_k2_dot: Lanes::splat(0.25),
        }
    }

    /// Append a cone
    pub fn push(&mut self, id: ShapeId, pose: &Pose, cone: &Cone) -> Result<(), BatchFull> {
        let slot = self.pose.push(Self::KIND, id, pose)?;
        let f = cone.form();
        self.r1.set(slot, f.r1);
        self.r2.set(slot, f.r2);
        self.h.set(slot, f.h);
        self.k2x.set(slot, f.k2.x);
        self.k2y.set(slot, f.k2.y);
        self.inv_k2_dot.set(slot, f.inv_k2_dot);
        Ok(())
    }
}

impl Default for ConeBatch {
    fn default() -> Self {
        Self::new()
    }
}

impl ShapeBatch for ConeBatch {
    const KIND: ShapeType = ShapeType::Cone;

    #[inline]
    fn poses(&self) -> &PoseLanes {
        &self.pose
    }

    #[inline(always)]
    fn distance_x4(&self, offset: usize, point: DVec3) -> f64x4 {
        let p = self.pose.local_x4(offset, point);
        let r1 = self.r1.load(offset);
        let r2 = self.r2.load(offset);
        let h = self.h.load(offset);
        let k2x = self.k2x.load(offset);
        let k2y = self.k2y.load(offset);

        let qx = (p.x * p.x + p.z * p.z).sqrt();
        let qy = p.y;

        let cap_r = qy.cmp_lt(f64x4::ZERO).blend(r1, r2);
        let ca_x = qx - qx.min(cap_r);
        let ca_y = qy.abs() - h;

        // k1 = (r2, h)
        let t = ((r2 - qx) * k2x + (h - qy) * k2y) * self.inv_k2_dot.load(offset);
        let t = t.max(f64x4::ZERO).min(f64x4::ONE);
        let cb_x = qx - r2 + k2x * t;
        let cb_y = qy - h + k2y * t;

        let inside = cb_x.cmp_lt(f64x4::ZERO) & ca_y.cmp_lt(f64x4::ZERO);
        let sign = inside.blend(f64x4::splat(-1.0), f64x4::ONE);

        let ca2 = ca_x * ca_x + ca_y * ca_y;
        let cb2 = cb_x * cb_x + cb_y * cb_y;
        sign * ca2.min(cb2).sqrt()
    }
}
