//! Torus batch

use super::lanes::{Lanes, PoseLanes};
use super::{BatchFull, ShapeBatch};
use crate::primitives::ShapeType;
use crate::shapes::{Pose, ShapeId, Torus};
use glam::DVec3;
use wide::f64x4;

/// Struct-of-arrays storage for tori
#[derive(Debug, Clone)]
pub struct TorusBatch {
    pose: PoseLanes,
    r1: Lanes,
    r2: Lanes,
}

impl TorusBatch {
    /// Empty batch
    pub fn new() -> Self {
        TorusBatch {
            pose: PoseLanes::new(),
            r1: Lanes::splat(0.0),
            r2: Lanes::splat(0.0),
        }
    }

    /// Append a torus
    pub fn push(&mut self, id: ShapeId, pose: &Pose, torus: &Torus) -> Result<(), BatchFull> {
        let slot = self.pose.push(Self::KIND, id, pose)?;
        self.r1.set(slot, torus.r1());
        self.r2.set(slot, torus.r2());
        Ok(())
    }
}

impl Default for TorusBatch {
    fn default() -> Self {
        Self::new()
    }
}

impl ShapeBatch for TorusBatch {
    const KIND: ShapeType = ShapeType::Torus;

    #[inline]
    fn poses(&self) -> &PoseLanes {
        &self.pose
    }

    #[inline(always)]
    fn distance_x4(&self, offset: usize, point: DVec3) -> f64x4 {
        let p = self.pose.local_x4(offset, point);
        let qx = (p.x * p.x + p.z * p.z).sqrt() - self.r1.load(offset);
        (qx * qx + p.y * p.y).sqrt() - self.r2.load(offset)
    }
}
