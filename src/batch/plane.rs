//! Plane batch: `|local . normal - displacement|`

use super::lanes::{Lanes, PoseLanes};
use super::{BatchFull, ShapeBatch};
use crate::primitives::ShapeType;
use crate::shapes::{Plane, Pose, ShapeId};
use glam::DVec3;
use wide::f64x4;

/// Struct-of-arrays storage for planes
///
/// Padding slots carry the unit normal (1, 0, 0) so their distance stays
/// at the sentinel magnitude.
#[derive(Debug, Clone)]
pub struct PlaneBatch {
    pose: PoseLanes,
    nx: Lanes,
    ny: Lanes,
    nz: Lanes,
    displacement: Lanes,
}

impl PlaneBatch {
    /// Empty batch
    pub fn new() -> Self {
        PlaneBatch {
            pose: PoseLanes::new(),
            nx: Lanes::splat(1.0),
            ny: Lanes::splat(0.0),
            nz: Lanes::splat(0.0),
            displacement: Lanes::splat(0.0),
        }
    }

    /// Append a plane
    pub fn push(&mut self, id: ShapeId, pose: &Pose, plane: &Plane) -> Result<(), BatchFull> {
        let slot = self.pose.push(Self::KIND, id, pose)?;
        let n = plane.normal();
        self.nx.set(slot, n.x);
        self.ny.set(slot, n.y);
        self.nz.set(slot, n.z);
        self.displacement.set(slot, plane.displacement());
        Ok(())
    }
}

impl Default for PlaneBatch {
    fn default() -> Self {
        Self::new()
    }
}

impl ShapeBatch for PlaneBatch {
    const KIND: ShapeType = ShapeType::Plane;

    #[inline]
    fn poses(&self) -> &PoseLanes {
        &self.pose
    }

    #[inline(always)]
    fn distance_x4(&self, offset: usize, point: DVec3) -> f64x4 {
        let p = self.pose.local_x4(offset, point);
        let d = p.x * self.nx.load(offset)
            + p.y * self.ny.load(offset)
            + p.z * self.nz.load(offset);
        (d - self.displacement.load(offset)).abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plane_padding_is_far() {
        let mut batch = PlaneBatch::new();
        let plane = Plane::new(DVec3::Y, -4.0).unwrap();
        batch.push(ShapeId(0), &Pose::at(DVec3::ZERO).unwrap(), &plane).unwrap();
        let d = batch.distance_x4(0, DVec3::ZERO).to_array();
        assert_eq!(d[0], 4.0);
        assert!(d[1..].iter().all(|&v| v > 1e29));
    }
}
