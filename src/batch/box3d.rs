//! Box batch
//!
//! `length(max(q, 0)) + min(max_component(q), 0)` with `q = |local| - extents`.

use super::lanes::{Lanes, PoseLanes};
use super::simd::Vec3x4;
use super::{BatchFull, ShapeBatch};
use crate::primitives::ShapeType;
use crate::shapes::{Box3d, Pose, ShapeId};
use glam::DVec3;
use wide::f64x4;

/// Struct-of-arrays storage for boxes
#[derive(Debug, Clone)]
pub struct BoxBatch {
    pose: PoseLanes,
    ex: Lanes,
    ey: Lanes,
    ez: Lanes,
}

impl BoxBatch {
    /// Empty batch
    pub fn new() -> Self {
        BoxBatch {
            pose: PoseLanes::new(),
            ex: Lanes::splat(0.0),
            ey: Lanes::splat(0.0),
            ez: Lanes::splat(0.0),
        }
    }

    /// Append a box
    pub fn push(&mut self, id: ShapeId, pose: &Pose, b: &Box3d) -> Result<(), BatchFull> {
        let slot = self.pose.push(Self::KIND, id, pose)?;
        let e = b.extents();
        self.ex.set(slot, e.x);
        self.ey.set(slot, e.y);
        self.ez.set(slot, e.z);
        Ok(())
    }
}

impl Default for BoxBatch {
    fn default() -> Self {
        Self::new()
    }
}

impl ShapeBatch for BoxBatch {
    const KIND: ShapeType = ShapeType::Box;

    #[inline]
    fn poses(&self) -> &PoseLanes {
        &self.pose
    }

    #[inline(always)]
    fn distance_x4(&self, offset: usize, point: DVec3) -> f64x4 {
        let p = self.pose.local_x4(offset, point);
        let extents = Vec3x4::new(
            self.ex.load(offset),
            self.ey.load(offset),
            self.ez.load(offset),
        );
        let q = p.abs() - extents;
        q.max_zero().length() + q.max_component().min(f64x4::ZERO)
    }
}
