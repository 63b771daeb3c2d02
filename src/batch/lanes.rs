//! Aligned parallel arrays backing the batches
//!
//! Every batch keeps its shapes' numbers in [`Lanes`]: one fixed-size,
//! 32-byte aligned array per scalar parameter, so a chunk of four shapes
//! loads straight into an `f64x4`. Slot `i` refers to the same shape in
//! every array of a batch.
//!
//! Slots at or beyond the live count hold sentinel values: a far-away
//! position and an identity rotation, so padding lanes evaluate to distances
//! around 1e30 and never win a nearest-distance comparison.

use super::simd::Vec3x4;
use super::BatchFull;
use crate::primitives::ShapeType;
use crate::shapes::{Pose, ShapeId};
use crate::types::IDENTITY_ROTATION;
use glam::DVec3;
use wide::f64x4;

/// Maximum number of shapes of one kind (multiple of [`LANES`])
pub const BATCH_CAPACITY: usize = 64;

/// SIMD lane count
pub const LANES: usize = 4;

/// Position of padding slots
pub const PADDING_POSITION: f64 = 1e30;

/// One scalar parameter for every slot of a batch
#[derive(Debug, Clone)]
#[repr(C, align(32))]
pub struct Lanes([f64; BATCH_CAPACITY]);

impl Lanes {
    /// All slots set to `value`
    pub fn splat(value: f64) -> Self {
        Lanes([value; BATCH_CAPACITY])
    }

    #[inline]
    pub(crate) fn set(&mut self, slot: usize, value: f64) {
        self.0[slot] = value;
    }

    /// Load the chunk starting at `offset` (must be a multiple of [`LANES`])
    #[inline(always)]
    pub fn load(&self, offset: usize) -> f64x4 {
        let s = &self.0[offset..offset + LANES];
        f64x4::new([s[0], s[1], s[2], s[3]])
    }
}

/// Positions and inverse rotations of a batch, plus the slot-to-shape map
#[derive(Debug, Clone)]
pub struct PoseLanes {
    px: Lanes,
    py: Lanes,
    pz: Lanes,
    inverse_rotation: [Lanes; 9],
    ids: Vec<ShapeId>,
    any_rotated: bool,
}

impl PoseLanes {
    /// Empty pose storage, every slot padded
    pub fn new() -> Self {
        PoseLanes {
            px: Lanes::splat(PADDING_POSITION),
            py: Lanes::splat(PADDING_POSITION),
            pz: Lanes::splat(PADDING_POSITION),
            inverse_rotation: IDENTITY_ROTATION.map(Lanes::splat),
            ids: Vec::with_capacity(BATCH_CAPACITY),
            any_rotated: false,
        }
    }

    /// Number of live slots
    #[inline]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// True if no shape was pushed
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Shape handle of each live slot
    #[inline]
    pub fn ids(&self) -> &[ShapeId] {
        &self.ids
    }

    /// True if at least one live slot has a rotation
    #[inline]
    pub fn any_rotated(&self) -> bool {
        self.any_rotated
    }

    /// Claim the next slot, returning its index
    pub(crate) fn push(
        &mut self,
        kind: ShapeType,
        id: ShapeId,
        pose: &Pose,
    ) -> Result<usize, BatchFull> {
        let slot = self.ids.len();
        if slot >= BATCH_CAPACITY {
            return Err(BatchFull {
                kind,
                capacity: BATCH_CAPACITY,
            });
        }

        let p = pose.position();
        self.px.set(slot, p.x);
        self.py.set(slot, p.y);
        self.pz.set(slot, p.z);
        for (lanes, &v) in self.inverse_rotation.iter_mut().zip(pose.inverse_rotation()) {
            lanes.set(slot, v);
        }
        self.any_rotated |= pose.is_rotated();
        self.ids.push(id);
        Ok(slot)
    }

    /// Map one world point into the local frames of four slots
    ///
    /// The rotation multiply is skipped when no slot of the batch is rotated.
    #[inline(always)]
    pub fn local_x4(&self, offset: usize, point: DVec3) -> Vec3x4 {
        let position = Vec3x4::new(
            self.px.load(offset),
            self.py.load(offset),
            self.pz.load(offset),
        );
        let local = Vec3x4::splat(point) - position;
        if self.any_rotated {
            let m: [f64x4; 9] = std::array::from_fn(|i| self.inverse_rotation[i].load(offset));
            local.rotate(&m)
        } else {
            local
        }
    }
}

impl Default for PoseLanes {
    fn default() -> Self {
        Self::new()
    }
}
