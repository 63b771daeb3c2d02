//! Common test helpers for sphere-sdf integration tests

#![allow(dead_code)]

use glam::DVec3;
use sphere_sdf::prelude::*;

// ============================================================================
// Standard scenes and shapes
// ============================================================================

/// Empty scene with the given camera and light
pub fn empty_scene(camera: DVec3, light: DVec3, emission: f64) -> Scene {
    Scene::new(
        Camera::new(30.0, camera, DVec3::ZERO).unwrap(),
        PointLight::new(light, Color::new(emission, emission, emission)),
    )
}

/// Matte unit-radius sphere
pub fn sphere_at(center: DVec3, radius: f64, color: Color) -> Shape {
    Shape::new(
        Pose::at(center).unwrap(),
        Material::matte(color),
        Sphere::new(radius).unwrap(),
    )
}

/// One shape of every kind, all at `position` with `rotation`
pub fn one_of_each_kind(position: DVec3, rotation: DVec3) -> Vec<Shape> {
    let pose = Pose::new(position, rotation).unwrap();
    let m = Material::default();
    vec![
        Shape::new(pose, m, Plane::new(DVec3::new(0.3, 1.0, -0.2), -1.5).unwrap()),
        Shape::new(pose, m, Box3d::new(DVec3::new(0.25, 0.5, 1.0)).unwrap()),
        Shape::new(pose, m, Sphere::new(1.5).unwrap()),
        Shape::new(pose, m, Torus::new(1.0, 0.5).unwrap()),
        Shape::new(pose, m, Octahedron::new(1.0).unwrap()),
        Shape::new(pose, m, Cone::new(1.0, 0.5, 1.0).unwrap()),
    ]
}

// ============================================================================
// Standard test points
// ============================================================================

/// Canonical query points: center, surfaces, fold regions, far away
pub fn test_points() -> Vec<DVec3> {
    vec![
        DVec3::ZERO,
        DVec3::new(1.0, 0.0, 0.0),
        DVec3::new(0.0, 1.0, 0.0),
        DVec3::new(0.0, 0.0, 1.0),
        DVec3::new(0.0, 0.0, 5.0),
        DVec3::new(0.577, 0.577, 0.577),
        DVec3::new(2.0, -1.0, 0.5),
        DVec3::new(0.3, 0.3, 0.3),
        DVec3::new(-0.1, -1.2, 0.05),
        DVec3::new(-40.0, 12.5, 1000.0),
    ]
}

/// Grid of points in [-3, 3]^3
pub fn test_grid_points(resolution: usize) -> Vec<DVec3> {
    let mut points = Vec::with_capacity(resolution * resolution * resolution);
    let step = 6.0 / resolution as f64;
    for i in 0..resolution {
        for j in 0..resolution {
            for k in 0..resolution {
                points.push(DVec3::new(
                    -3.0 + (i as f64 + 0.5) * step,
                    -3.0 + (j as f64 + 0.5) * step,
                    -3.0 + (k as f64 + 0.5) * step,
                ));
            }
        }
    }
    points
}

// ============================================================================
// Assertion helpers
// ============================================================================

/// Assert two values are close within tolerance
pub fn assert_close(a: f64, b: f64, tol: f64, msg: &str) {
    assert!(
        (a - b).abs() < tol,
        "{}: {} vs {} (diff={}, tol={})",
        msg,
        a,
        b,
        (a - b).abs(),
        tol
    );
}

/// Assert two colors are close channel by channel
pub fn assert_color_close(a: Color, b: Color, tol: f64, msg: &str) {
    assert_close(a.r, b.r, tol, &format!("{} (r)", msg));
    assert_close(a.g, b.g, tol, &format!("{} (g)", msg));
    assert_close(a.b, b.b, tol, &format!("{} (b)", msg));
}

/// Assert every SIMD slot of `scene` matches the scalar SDF of its shape
///
/// Padding slots must stay far out of reach.
pub fn assert_batches_match_scalar(scene: &Scene, points: &[DVec3]) {
    let mut buffer = DistanceBuffer::new();
    for &p in points {
        scene.batches().distances_into(p, &mut buffer);
        assert_eq!(buffer.as_slice().len(), scene.batches().padded_len());
        for (slot, &d) in buffer.as_slice().iter().enumerate() {
            match scene.batches().slot_owner(slot) {
                Some(id) => {
                    let shape = scene.shape(id);
                    let expected = shape.distance(p);
                    let tol = 1e-9 * expected.abs().max(1.0);
                    assert!(
                        (d - expected).abs() <= tol,
                        "{} {} at {:?}: simd={} scalar={}",
                        shape.shape_type(),
                        id,
                        p,
                        d,
                        expected
                    );
                }
                None => assert!(d > 1e20, "padding slot {} at {:?} = {}", slot, p, d),
            }
        }
    }
}
