//! Integration tests: scalar / SIMD distance parity
//!
//! Every batch slot must reproduce its shape's scalar SDF, for axis-aligned
//! and rotated shapes, full and partially filled chunks.

mod common;

use common::*;
use glam::DVec3;
use sphere_sdf::prelude::*;

fn scene_of(shapes: &[Shape]) -> Scene {
    let mut scene = empty_scene(DVec3::ZERO, DVec3::Y * 10.0, 255.0);
    for s in shapes {
        scene.add_shape(*s).unwrap();
    }
    scene
}

#[test]
fn parity_axis_aligned() {
    let scene = scene_of(&one_of_each_kind(DVec3::ZERO, DVec3::ZERO));
    assert_batches_match_scalar(&scene, &test_points());
    assert_batches_match_scalar(&scene, &test_grid_points(6));
}

#[test]
fn parity_rotated() {
    let scene = scene_of(&one_of_each_kind(
        DVec3::new(0.5, -0.25, 1.0),
        DVec3::new(30.0, -45.0, 12.5),
    ));
    assert_batches_match_scalar(&scene, &test_points());
    assert_batches_match_scalar(&scene, &test_grid_points(6));
}

#[test]
fn parity_full_chunks_mixed_rotation() {
    // four shapes per kind: lane 0 unrotated, others rotated, varied poses
    let mut shapes = Vec::new();
    for lane in 0..4 {
        let rotation = if lane == 0 {
            DVec3::ZERO
        } else {
            DVec3::new(10.0 * lane as f64, 0.0, 1.5 * 2f64.powi(lane))
        };
        let position = DVec3::new(lane as f64 - 1.5, 0.5 * lane as f64, 0.25);
        shapes.extend(one_of_each_kind(position, rotation));
    }
    let scene = scene_of(&shapes);
    assert_eq!(scene.batches().padded_len(), 24);
    assert_batches_match_scalar(&scene, &test_points());
    assert_batches_match_scalar(&scene, &test_grid_points(5));
}

#[test]
fn parity_partial_chunks_padding() {
    // 1, 2, 3, 5, 6 and 7 shapes per kind leave padding in every batch
    let mut shapes = Vec::new();
    for (k, n) in [1usize, 2, 3, 5, 6, 7].into_iter().enumerate() {
        for i in 0..n {
            let all = one_of_each_kind(
                DVec3::new(i as f64, -(k as f64), 3.0 * i as f64),
                DVec3::new(0.0, 7.0 * i as f64, 0.0),
            );
            shapes.push(all[k]);
        }
    }
    let scene = scene_of(&shapes);
    assert_batches_match_scalar(&scene, &test_points());
}

#[test]
fn parity_generated_scene() {
    let counts = ShapeCounts::from_array([2, 9, 9, 9, 9, 9]);
    let scene = Scene::from_description(&generate(&counts)).unwrap();
    assert_batches_match_scalar(&scene, &test_points());
    assert_batches_match_scalar(&scene, &test_grid_points(4));
}

#[test]
fn sign_correctness_far_and_center() {
    for shape in one_of_each_kind(DVec3::ZERO, DVec3::ZERO) {
        if shape.shape_type() == ShapeType::Plane {
            continue;
        }
        let far = shape.distance(DVec3::new(0.0, 0.0, 1000.0));
        assert!(far > 990.0 && far < 1000.0, "{}: {}", shape.shape_type(), far);
        if shape.shape_type() != ShapeType::Torus {
            assert!(shape.distance(DVec3::ZERO) < 0.0, "{}", shape.shape_type());
        }
    }
}

#[test]
fn sphere_exactness() {
    let shape = sphere_at(DVec3::ZERO, 1.25, Color::WHITE);
    for p in test_grid_points(5) {
        assert_eq!(shape.distance(p), p.length() - 1.25);
    }
}
