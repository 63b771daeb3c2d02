//! Sphere batch: `length(local) - radius`

use super::lanes::{Lanes, PoseLanes};
use super::{BatchFull, ShapeBatch};
use crate::primitives::ShapeType;
use crate::shapes::{Pose, ShapeId, Sphere};
use glam::DVec3;
use wide::f64x4;

/// Struct-of-arrays storage for spheres
#[derive(Debug, Clone)]
pub struct SphereBatch {
    pose: PoseLanes,
    radius: Lanes,
}

impl SphereBatch {
    /// Empty batch
    pub fn new() -> Self {
        SphereBatch {
            pose: PoseLanes::new(),
            radius: Lanes::splat(0.0),
        }
    }

    /// Append a sphere
    pub fn push(&mut self, id: ShapeId, pose: &Pose, sphere: &Sphere) -> Result<(), BatchFull> {
        let slot = self.pose.push(Self::KIND, id, pose)?;
        self.radius.set(slot, sphere.radius());
        Ok(())
    }
}

impl Default for SphereBatch {
    fn default() -> Self {
        Self::new()
    }
}

impl ShapeBatch for SphereBatch {
    const KIND: ShapeType = ShapeType::Sphere;

    #[inline]
    fn poses(&self) -> &PoseLanes {
        &self.pose
    }

    #[inline(always)]
    fn distance_x4(&self, offset: usize, point: DVec3) -> f64x4 {
        let p = self.pose.local_x4(offset, point);
        p.length() - self.radius.load(offset)
    }
}
