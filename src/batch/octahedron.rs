//! Octahedron batch
//!
//! The scalar formula branches on which fold fires first (x, then y, then
//! z). Here every branch is computed for all lanes and the results are
//! blended in reverse priority, so the x fold overrides the y fold, which
//! overrides the z fold, which overrides the face distance.
//!
//! # Optimizations
//! - **Branchless Folds**: `cmp_lt` masks + `blend` instead of per-lane ifs.

use super::lanes::{Lanes, PoseLanes};
use super::{BatchFull, ShapeBatch};
use crate::primitives::{ShapeType, INV_SQRT_3};
use crate::shapes::{Octahedron, Pose, ShapeId};
use glam::DVec3;
use wide::{f64x4, CmpLt};

/// Struct-of-arrays storage for octahedra
#[derive(Debug, Clone)]
pub struct OctahedronBatch {
    pose: PoseLanes,
    s: Lanes,
}

impl OctahedronBatch {
    /// Empty batch
    pub fn new() -> Self {
        OctahedronBatch {
            pose: PoseLanes::new(),
            s: Lanes::splat(0.0),
        }
    }

    /// Append an octahedron
    pub fn push(&mut self, id: ShapeId, pose: &Pose, o: &Octahedron) -> Result<(), BatchFull> {
        let slot = self.pose.push(Self::KIND, id, pose)?;
        self.s.set(slot, o.s());
        Ok(())
    }
}

impl Default for OctahedronBatch {
    fn default() -> Self {
        Self::new()
    }
}

/// Distance for one fold permutation `(qx, qy, qz)`
#[inline(always)]
fn fold_distance(qx: f64x4, qy: f64x4, qz: f64x4, s: f64x4) -> f64x4 {
    let half = f64x4::splat(0.5);
    let k = (half * (qz - qy + s)).max(f64x4::ZERO).min(s);
    let y = qy - s + k;
    let z = qz - k;
    (qx * qx + y * y + z * z).sqrt()
}

impl ShapeBatch for OctahedronBatch {
    const KIND: ShapeType = ShapeType::Octahedron;

    #[inline]
    fn poses(&self) -> &PoseLanes {
        &self.pose
    }

    #[inline(always)]
    fn distance_x4(&self, offset: usize, point: DVec3) -> f64x4 {
        let p = self.pose.local_x4(offset, point).abs();
        let s = self.s.load(offset);
        let m = p.x + p.y + p.z - s;
        let three = f64x4::splat(3.0);

        let fold_x = (three * p.x).cmp_lt(m);
        let fold_y = (three * p.y).cmp_lt(m);
        let fold_z = (three * p.z).cmp_lt(m);

        let mut d = m * f64x4::splat(INV_SQRT_3);
        d = fold_z.blend(fold_distance(p.z, p.x, p.y, s), d);
        d = fold_y.blend(fold_distance(p.y, p.z, p.x, s), d);
        fold_x.blend(fold_distance(p.x, p.y, p.z, s), d)
    }
}
