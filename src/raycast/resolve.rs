//! Nearest-distance resolver
//!
//! Evaluates every batch slot against one query point and keeps the two
//! smallest distances. The owner of the smallest is the first slot reaching
//! it in resolver order (Box, Cone, Octahedron, Plane, Sphere, Torus), so
//! ties go to the earlier kind and, within a kind, the earlier shape.

use crate::batch::DistanceBuffer;
use crate::scene::Scene;
use crate::shapes::ShapeId;
use glam::DVec3;

/// Result of a full resolve
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearestShapes {
    /// Smallest distance (`f64::INFINITY` for an empty scene)
    pub min: f64,
    /// Second smallest distance (`f64::INFINITY` if fewer than two slots)
    pub second_min: f64,
    /// Shape at `min`, `None` for an empty scene
    pub owner: Option<ShapeId>,
}

impl NearestShapes {
    /// Nothing in range
    pub const NONE: NearestShapes = NearestShapes {
        min: f64::INFINITY,
        second_min: f64::INFINITY,
        owner: None,
    };
}

/// Find the nearest and second nearest shape distance from `point`
///
/// `buffer` is scratch space; it is overwritten with one distance per slot.
pub fn nearest_shapes(scene: &Scene, point: DVec3, buffer: &mut DistanceBuffer) -> NearestShapes {
    let batches = scene.batches();
    batches.distances_into(point, buffer);

    let mut min = f64::INFINITY;
    let mut second_min = f64::INFINITY;
    let mut min_slot = None;
    for (slot, &d) in buffer.as_slice().iter().enumerate() {
        if d < min {
            second_min = min;
            min = d;
            min_slot = Some(slot);
        } else if d < second_min {
            second_min = d;
        }
    }

    NearestShapes {
        min,
        second_min,
        owner: min_slot.and_then(|slot| batches.slot_owner(slot)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{Camera, PointLight};
    use crate::shapes::{Box3d, Material, Pose, Shape, Sphere};
    use crate::types::Color;

    fn empty_scene() -> Scene {
        Scene::new(
            Camera::new(30.0, DVec3::ZERO, DVec3::ZERO).unwrap(),
            PointLight::new(DVec3::Y * 10.0, Color::WHITE),
        )
    }

    #[test]
    fn test_empty_scene() {
        let mut buffer = DistanceBuffer::new();
        let n = nearest_shapes(&empty_scene(), DVec3::ZERO, &mut buffer);
        assert_eq!(n, NearestShapes::NONE);
    }

    #[test]
    fn test_single_shape_second_is_padding() {
        let mut scene = empty_scene();
        let id = scene
            .add_shape(Shape::new(
                Pose::at(DVec3::ZERO).unwrap(),
                Material::default(),
                Sphere::new(1.0).unwrap(),
            ))
            .unwrap();
        let mut buffer = DistanceBuffer::new();
        let n = nearest_shapes(&scene, DVec3::new(3.0, 0.0, 0.0), &mut buffer);
        assert_eq!(n.min, 2.0);
        assert!(n.second_min > 1e29);
        assert_eq!(n.owner, Some(id));
    }

    #[test]
    fn test_tie_goes_to_earlier_kind() {
        // a unit sphere and a box touching the query point at the same distance
        let mut scene = empty_scene();
        let sphere = scene
            .add_shape(Shape::new(
                Pose::at(DVec3::ZERO).unwrap(),
                Material::default(),
                Sphere::new(1.0).unwrap(),
            ))
            .unwrap();
        let cube = scene
            .add_shape(Shape::new(
                Pose::at(DVec3::new(4.0, 0.0, 0.0)).unwrap(),
                Material::default(),
                Box3d::new(DVec3::ONE).unwrap(),
            ))
            .unwrap();
        assert_ne!(sphere, cube);
        let mut buffer = DistanceBuffer::new();
        let n = nearest_shapes(&scene, DVec3::new(2.0, 0.0, 0.0), &mut buffer);
        assert_eq!(n.min, 1.0);
        assert_eq!(n.second_min, 1.0);
        assert_eq!(n.owner, Some(cube));
    }
}
