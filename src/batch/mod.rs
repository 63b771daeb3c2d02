//! Batched SIMD distance layer
//!
//! Shapes of the same kind are copied into a struct-of-arrays batch so that
//! one query point can be tested against four shapes per instruction.
//!
//! # Layout
//!
//! ```text
//! BoxBatch:   px: [x0 x1 x2 x3 | x4 ...]   ex: [e0 e1 e2 e3 | e4 ...]
//!             py: [y0 y1 y2 y3 | y4 ...]   ...
//!              ↓ f64x4 load per chunk of 4 slots
//! ```
//!
//! Each kernel follows the same translate → rotate → formula sequence as its
//! scalar counterpart in [`crate::primitives`]; the parity is covered by the
//! integration tests.
//!
//! # Optimizations
//! - **Aligned Loads**: [`Lanes`] are 32-byte aligned, one `f64x4` per chunk.
//! - **Rotation Skip**: the 3x3 multiply is omitted for batches without
//!   rotated shapes.
//! - **Sentinel Padding**: incomplete chunks are padded with far-away slots,
//!   so the resolver never needs a per-lane live check.

mod box3d;
mod cone;
mod lanes;
mod octahedron;
mod plane;
mod simd;
mod sphere;
mod torus;

pub use box3d::BoxBatch;
pub use cone::ConeBatch;
pub use lanes::{Lanes, PoseLanes, BATCH_CAPACITY, LANES, PADDING_POSITION};
pub use octahedron::OctahedronBatch;
pub use plane::PlaneBatch;
pub use simd::Vec3x4;
pub use sphere::SphereBatch;
pub use torus::TorusBatch;

use crate::primitives::ShapeType;
use crate::shapes::{Shape, ShapeId, ShapeKind};
use glam::DVec3;
use thiserror::Error;
use wide::f64x4;

/// A batch has no free slot left
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{kind} batch is full ({capacity} shapes)")]
pub struct BatchFull {
    /// Kind of the full batch
    pub kind: ShapeType,
    /// Fixed capacity of every batch
    pub capacity: usize,
}

/// Struct-of-arrays storage of one shape kind with a 4-wide distance kernel
pub trait ShapeBatch {
    /// Shape kind stored in this batch
    const KIND: ShapeType;

    /// Positions, rotations and slot ids
    fn poses(&self) -> &PoseLanes;

    /// Distances from `point` to the four slots starting at `offset`
    ///
    /// `offset` must be a multiple of [`LANES`] below [`BATCH_CAPACITY`].
    /// Padding slots yield distances around [`PADDING_POSITION`].
    fn distance_x4(&self, offset: usize, point: DVec3) -> f64x4;

    /// Number of live shapes
    #[inline]
    fn len(&self) -> usize {
        self.poses().len()
    }

    /// True if the batch holds no shape
    #[inline]
    fn is_empty(&self) -> bool {
        self.poses().is_empty()
    }

    /// Live count rounded up to whole chunks
    #[inline]
    fn padded_len(&self) -> usize {
        self.len().div_ceil(LANES) * LANES
    }

    /// Append the distances of every chunk, padding lanes included
    #[inline]
    fn distances_into(&self, point: DVec3, buffer: &mut DistanceBuffer) {
        for offset in (0..self.len()).step_by(LANES) {
            buffer.push_x4(self.distance_x4(offset, point));
        }
    }
}

/// Per-worker scratch space for the resolver
///
/// Holds one distance per batch slot of the last query. Rendering threads
/// each own one; it is never shared.
#[derive(Debug, Clone)]
pub struct DistanceBuffer {
    distances: Vec<f64>,
}

impl DistanceBuffer {
    /// Buffer sized for fully populated batches
    pub fn new() -> Self {
        DistanceBuffer {
            distances: Vec::with_capacity(ShapeType::ALL.len() * BATCH_CAPACITY),
        }
    }

    /// Distances of the last query, in resolver order
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.distances
    }

    #[inline]
    pub(crate) fn clear(&mut self) {
        self.distances.clear();
    }

    #[inline(always)]
    pub(crate) fn push_x4(&mut self, d: f64x4) {
        self.distances.extend_from_slice(&d.to_array());
    }
}

impl Default for DistanceBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// One batch per shape kind
///
/// Batches are filled during scene construction and read-only afterwards.
/// [`Batches::distances_into`] walks them in the order Box, Cone, Octahedron,
/// Plane, Sphere, Torus; `slot_owners` maps each produced distance back to
/// its shape (padding slots map to `None`).
#[derive(Debug, Clone, Default)]
pub struct Batches {
    boxes: BoxBatch,
    cones: ConeBatch,
    octahedra: OctahedronBatch,
    planes: PlaneBatch,
    spheres: SphereBatch,
    tori: TorusBatch,
    slot_owners: Vec<Option<ShapeId>>,
}

impl Batches {
    /// Empty batches
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy a shape's numbers into its kind's batch
    pub fn push(&mut self, id: ShapeId, shape: &Shape) -> Result<(), BatchFull> {
        let pose = &shape.pose;
        match &shape.kind {
            ShapeKind::Box(b) => self.boxes.push(id, pose, b)?,
            ShapeKind::Cone(c) => self.cones.push(id, pose, c)?,
            ShapeKind::Octahedron(o) => self.octahedra.push(id, pose, o)?,
            ShapeKind::Plane(p) => self.planes.push(id, pose, p)?,
            ShapeKind::Sphere(s) => self.spheres.push(id, pose, s)?,
            ShapeKind::Torus(t) => self.tori.push(id, pose, t)?,
        }
        self.rebuild_slot_owners();
        Ok(())
    }

    fn rebuild_slot_owners(&mut self) {
        let mut owners = Vec::with_capacity(self.padded_len());
        for poses in self.poses() {
            let ids = poses.ids();
            owners.extend(ids.iter().copied().map(Some));
            let padded = ids.len().div_ceil(LANES) * LANES;
            owners.resize(owners.len() + padded - ids.len(), None);
        }
        self.slot_owners = owners;
    }

    fn poses(&self) -> [&PoseLanes; 6] {
        [
            self.boxes.poses(),
            self.cones.poses(),
            self.octahedra.poses(),
            self.planes.poses(),
            self.spheres.poses(),
            self.tori.poses(),
        ]
    }

    /// Total number of live shapes
    pub fn len(&self) -> usize {
        self.poses().iter().map(|p| p.len()).sum()
    }

    /// True if no batch holds a shape
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of distances produced per query
    pub fn padded_len(&self) -> usize {
        self.boxes.padded_len()
            + self.cones.padded_len()
            + self.octahedra.padded_len()
            + self.planes.padded_len()
            + self.spheres.padded_len()
            + self.tori.padded_len()
    }

    /// Number of live shapes of one kind
    pub fn count(&self, kind: ShapeType) -> usize {
        match kind {
            ShapeType::Box => self.boxes.len(),
            ShapeType::Cone => self.cones.len(),
            ShapeType::Octahedron => self.octahedra.len(),
            ShapeType::Plane => self.planes.len(),
            ShapeType::Sphere => self.spheres.len(),
            ShapeType::Torus => self.tori.len(),
        }
    }

    /// Fill `buffer` with the distance from `point` to every slot
    pub fn distances_into(&self, point: DVec3, buffer: &mut DistanceBuffer) {
        buffer.clear();
        self.boxes.distances_into(point, buffer);
        self.cones.distances_into(point, buffer);
        self.octahedra.distances_into(point, buffer);
        self.planes.distances_into(point, buffer);
        self.spheres.distances_into(point, buffer);
        self.tori.distances_into(point, buffer);
    }

    /// Shape owning slot `slot` of the distance buffer
    #[inline]
    pub fn slot_owner(&self, slot: usize) -> Option<ShapeId> {
        self.slot_owners.get(slot).copied().flatten()
    }

    /// Box batch
    pub fn boxes(&self) -> &BoxBatch {
        &self.boxes
    }

    /// Cone batch
    pub fn cones(&self) -> &ConeBatch {
        &self.cones
    }

    /// Octahedron batch
    pub fn octahedra(&self) -> &OctahedronBatch {
        &self.octahedra
    }

    /// Plane batch
    pub fn planes(&self) -> &PlaneBatch {
        &self.planes
    }

    /// Sphere batch
    pub fn spheres(&self) -> &SphereBatch {
        &self.spheres
    }

    /// Torus batch
    pub fn tori(&self) -> &TorusBatch {
        &self.tori
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{Material, Octahedron, Pose, Sphere};

    fn sphere_at(x: f64) -> Shape {
        Shape::new(
            Pose::at(DVec3::new(x, 0.0, 0.0)).unwrap(),
            Material::default(),
            Sphere::new(1.0).unwrap(),
        )
    }

    #[test]
    fn test_slot_owners_follow_resolver_order() {
        let mut batches = Batches::new();
        batches.push(ShapeId(0), &sphere_at(0.0)).unwrap();
        let octa = Shape::new(
            Pose::at(DVec3::ZERO).unwrap(),
            Material::default(),
            Octahedron::new(1.0).unwrap(),
        );
        batches.push(ShapeId(1), &octa).unwrap();

        // octahedra come before spheres
        assert_eq!(batches.padded_len(), 8);
        assert_eq!(batches.slot_owner(0), Some(ShapeId(1)));
        assert_eq!(batches.slot_owner(1), None);
        assert_eq!(batches.slot_owner(4), Some(ShapeId(0)));
        assert_eq!(batches.slot_owner(8), None);
    }

    #[test]
    fn test_distances_into_fills_padded_chunks() {
        let mut batches = Batches::new();
        for i in 0..5 {
            batches.push(ShapeId(i), &sphere_at(i as f64 * 3.0)).unwrap();
        }
        let mut buffer = DistanceBuffer::new();
        batches.distances_into(DVec3::ZERO, &mut buffer);
        let d = buffer.as_slice();
        assert_eq!(d.len(), 8);
        assert_eq!(d[0], -1.0);
        assert_eq!(d[4], 11.0);
        assert!(d[5..].iter().all(|&v| v > 1e29));
        assert_eq!(batches.count(ShapeType::Sphere), 5);
        assert_eq!(batches.len(), 5);
    }

    #[test]
    fn test_batch_full() {
        let mut batches = Batches::new();
        for i in 0..BATCH_CAPACITY as u32 {
            batches.push(ShapeId(i), &sphere_at(0.0)).unwrap();
        }
        assert_eq!(
            batches.push(ShapeId(1000), &sphere_at(0.0)),
            Err(BatchFull {
                kind: ShapeType::Sphere,
                capacity: BATCH_CAPACITY
            })
        );
    }
}
